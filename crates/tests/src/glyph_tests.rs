use dioxus::prelude::*;
use shared_types::{Glyph, TriggerIcon, ALL_GLYPHS};
use shared_ui::{GlyphIcon, TriggerGlyph};

use pretty_assertions::assert_eq;

use crate::common;

#[test]
fn test_every_glyph_renders_an_svg() {
    fn app() -> Element {
        rsx! {
            for glyph in ALL_GLYPHS.iter().copied() {
                GlyphIcon { key: "{glyph.as_str()}", glyph }
            }
        }
    }

    let html = common::render(app);
    for glyph in ALL_GLYPHS {
        assert!(
            html.contains(&format!("data-glyph=\"{}\"", glyph.as_str())),
            "missing {glyph:?}"
        );
    }
    assert_eq!(html.matches("<svg").count(), ALL_GLYPHS.len());
}

#[test]
fn test_swap_icon_follows_collapse_flag() {
    fn app() -> Element {
        let icon = TriggerIcon::Swap {
            when_open: Glyph::ArrowInput,
            when_collapsed: Glyph::ArrowOutput,
        };
        rsx! {
            div { id: "open", TriggerGlyph { icon, collapsed: false } }
            div { id: "closed", TriggerGlyph { icon, collapsed: true } }
        }
    }

    let html = common::render(app);
    let open = common::position_of(&html, "id=\"open\"");
    let closed = common::position_of(&html, "id=\"closed\"");
    let input = common::position_of(&html, "data-glyph=\"arrow-input\"");
    let output = common::position_of(&html, "data-glyph=\"arrow-output\"");
    assert!(open < input && input < closed);
    assert!(closed < output);
}

#[test]
fn test_glyph_accepts_extra_classes() {
    fn app() -> Element {
        rsx! {
            GlyphIcon { glyph: Glyph::ChevronRight, size: 32, class: "big" }
        }
    }

    let html = common::render(app);
    assert!(html.contains("big"));
    assert!(html.contains("glyph"));
    assert!(html.contains("32"));
}
