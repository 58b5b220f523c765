#[cfg(test)]
mod common;


#[cfg(test)]
mod collapsible_tests;



#[cfg(test)]
mod glyph_tests;

#[cfg(test)]
mod button_tests;
