use serde::{Deserialize, Serialize};

/// Glyphs available to panel triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Glyph {
    ChevronDown,
    ChevronRight,
    /// Arrow pointing into a bracket.
    ArrowInput,
    /// Arrow pointing out of a bracket.
    ArrowOutput,
}

/// All glyphs in display order.
pub const ALL_GLYPHS: &[Glyph] = &[
    Glyph::ChevronDown,
    Glyph::ChevronRight,
    Glyph::ArrowInput,
    Glyph::ArrowOutput,
];

impl Glyph {
    /// Key used in config files and `data-glyph` attributes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Glyph::ChevronDown => "chevron-down",
            Glyph::ChevronRight => "chevron-right",
            Glyph::ArrowInput => "arrow-input",
            Glyph::ArrowOutput => "arrow-output",
        }
    }
}

/// Which glyph a trigger shows.
///
/// `Chevron` is a single glyph whose orientation is left to the stylesheet.
/// `Swap` picks one of two glyphs from the current collapse flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TriggerIcon {
    #[default]
    Chevron,
    Glyph(Glyph),
    Swap {
        when_open: Glyph,
        when_collapsed: Glyph,
    },
}

impl TriggerIcon {
    /// Glyph to render for the given collapse flag.
    pub fn select(&self, collapsed: bool) -> Glyph {
        match *self {
            TriggerIcon::Chevron => Glyph::ChevronDown,
            TriggerIcon::Glyph(glyph) => glyph,
            TriggerIcon::Swap {
                when_open,
                when_collapsed,
            } => {
                if collapsed {
                    when_collapsed
                } else {
                    when_open
                }
            }
        }
    }

    /// Whether the stylesheet is expected to rotate the glyph.
    pub fn rotates(&self) -> bool {
        matches!(self, TriggerIcon::Chevron)
    }
}
