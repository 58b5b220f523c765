use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdChevronDown, LdChevronRight, LdLogIn, LdLogOut};
use dioxus_free_icons::Icon;
use shared_types::{Glyph, TriggerIcon};

use crate::handle::collapsed_attr;

/// A single glyph from the panel icon set.
#[component]
pub fn GlyphIcon(
    glyph: Glyph,
    #[props(default = 20)] size: u32,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "glyph", None, false),
        Attribute::new("data-glyph", glyph.as_str(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    let svg = match glyph {
        Glyph::ChevronDown => rsx! { Icon::<LdChevronDown> { icon: LdChevronDown, width: size, height: size } },
        Glyph::ChevronRight => rsx! { Icon::<LdChevronRight> { icon: LdChevronRight, width: size, height: size } },
        Glyph::ArrowInput => rsx! { Icon::<LdLogIn> { icon: LdLogIn, width: size, height: size } },
        Glyph::ArrowOutput => rsx! { Icon::<LdLogOut> { icon: LdLogOut, width: size, height: size } },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {svg}
        }
    }
}

/// The glyph shown on a panel trigger for the given collapse flag.
///
/// Chevrons carry `data-rotate` so the stylesheet can turn them; swapped
/// glyphs are picked here and never rotate.
#[component]
pub fn TriggerGlyph(
    #[props(default)] icon: TriggerIcon,
    collapsed: bool,
    #[props(default = 20)] size: u32,
) -> Element {
    let glyph = icon.select(collapsed);

    rsx! {
        span {
            class: "trigger-glyph",
            "data-rotate": if icon.rotates() { "true" } else { "false" },
            "data-collapsed": collapsed_attr(collapsed),
            GlyphIcon { glyph, size }
        }
    }
}
