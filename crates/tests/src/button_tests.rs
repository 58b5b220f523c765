use dioxus::prelude::*;
use shared_ui::{Button, HoverContext};

use crate::common;

#[test]
fn test_button_renders_label() {
    fn app() -> Element {
        rsx! {
            Button { label: "Press me" }
        }
    }

    let html = common::render(app);
    assert!(html.contains("Press me"));
    assert!(html.contains("button-label"));
}

#[test]
fn test_button_merges_classes() {
    fn app() -> Element {
        rsx! {
            Button { label: "Go", class: "primary", onclick: move |_| {} }
        }
    }

    let html = common::render(app);
    assert!(html.contains("button"));
    assert!(html.contains("primary"));
}

#[test]
fn test_hover_context_wraps_child() {
    fn app() -> Element {
        rsx! {
            HoverContext {
                span { id: "inner", "hover me" }
            }
        }
    }

    let html = common::render(app);
    let wrapper = common::position_of(&html, "hover-context");
    let inner = common::position_of(&html, "id=\"inner\"");
    assert!(wrapper < inner);
}
