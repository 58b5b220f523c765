use dioxus::prelude::*;
use shared_ui::{Collapsible, CollapsibleContent, CollapsibleHeader, CollapsibleTrigger};

use pretty_assertions::assert_eq;

use crate::common;

#[test]
fn test_compound_slots_share_root_state() {
    fn app() -> Element {
        rsx! {
            Collapsible { default_collapsed: true,
                CollapsibleHeader {
                    h6 { "Title" }
                    CollapsibleTrigger { "v" }
                }
                CollapsibleContent { "Body" }
            }
        }
    }

    let html = common::render(app);
    // root, header, trigger, content
    assert_eq!(common::count_collapsed(&html, true), 4);
    assert_eq!(common::count_collapsed(&html, false), 0);
}

#[test]
fn test_compound_root_defaults_open() {
    fn app() -> Element {
        rsx! {
            Collapsible {
                CollapsibleHeader { CollapsibleTrigger { "v" } }
                CollapsibleContent { "Body" }
            }
        }
    }

    let html = common::render(app);
    assert_eq!(common::count_collapsed(&html, false), 4);
}

#[test]
fn test_compound_controlled_reaches_every_slot() {
    fn app() -> Element {
        rsx! {
            Collapsible { default_collapsed: true, collapsed: Some(false),
                CollapsibleHeader { CollapsibleTrigger { "v" } }
                CollapsibleContent { "Body" }
            }
        }
    }

    let html = common::render(app);
    assert_eq!(common::count_collapsed(&html, true), 0);
    assert_eq!(common::count_collapsed(&html, false), 4);
}

#[test]
fn test_compound_slots_keep_default_classes_with_overrides() {
    fn app() -> Element {
        rsx! {
            Collapsible { class: "faq",
                CollapsibleHeader { class: "faq-header", "Question" }
                CollapsibleContent { class: "faq-body", id: "answer", "Body" }
            }
        }
    }

    let html = common::render(app);
    for class in [
        "collapsible",
        "faq",
        "collapsible-header",
        "faq-header",
        "collapsible-content",
        "faq-body",
    ] {
        assert!(html.contains(class), "missing class {class} in {html}");
    }
    assert!(html.contains("id=\"answer\""));
}

#[test]
fn test_slots_outside_root_render_expanded() {
    fn app() -> Element {
        rsx! {
            CollapsibleTrigger { "orphan trigger" }
            CollapsibleContent { "orphan content" }
        }
    }

    let html = common::render(app);
    assert!(html.contains("orphan content"));
    assert_eq!(common::count_collapsed(&html, false), 2);
}

#[test]
fn test_sibling_panels_do_not_share_state() {
    fn app() -> Element {
        rsx! {
            Collapsible { default_collapsed: true,
                CollapsibleContent { "first" }
            }
            Collapsible { default_collapsed: false,
                CollapsibleContent { "second" }
            }
        }
    }

    let html = common::render(app);
    assert_eq!(common::count_collapsed(&html, true), 2);
    assert_eq!(common::count_collapsed(&html, false), 2);
}
