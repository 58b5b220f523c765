use dioxus::prelude::*;
use shared_types::{GalleryConfig, Glyph, ToggleDirection, TriggerIcon};
use shared_ui::{
    Accordion, Button, Collapsible, CollapsibleContent, CollapsibleHeader, CollapsibleTrigger,
    HoverContext, MiniCollapsible, MiniCollapsibleContent, MiniCollapsibleHeader,
    MiniCollapsibleTrigger, TriggerGlyph,
};

const LOREM: &str = "Lorem ipsum dolor sit amet, summo dicant mnesarchum eum an, eu mea alii \
    facilisis. Sed brute vocent suscipit ad, in cum dicant moderatius. Audiam copiosae \
    liberavisse id eos, natum elitr iisque eu has.";

/// Vertical gap between demos.
#[component]
fn Spacer() -> Element {
    rsx! {
        span { style: "height: 15rem; display: block;" }
    }
}

/// The demo page: one of each panel variant.
#[component]
pub fn Home() -> Element {
    let config = use_context::<GalleryConfig>();
    let panels = config.panels;

    rsx! {
        Accordion {
            title: "This is a Title",
            default_collapsed: panels.default_collapsed,
            trigger_icon: panels.trigger_icon,
            trigger_on_left: panels.trigger_on_left,
            on_toggle: move |direction: ToggleDirection| {
                tracing::info!(%direction, "bare accordion toggled");
            },
            "{LOREM}"
        }

        Spacer {}

        ChevronPanel { default_collapsed: panels.default_collapsed }

        Spacer {}

        SwapIconPanel {}

        Spacer {}

        TitleRightPanel {}

        Spacer {}

        MiniPanel {}

        Spacer {}

        ControlledPanel {}
    }
}

#[component]
fn ChevronPanel(default_collapsed: bool) -> Element {
    rsx! {
        Collapsible { default_collapsed,
            CollapsibleHeader {
                h6 { "This is a Title" }
                TriggerSlotGlyph { icon: TriggerIcon::Chevron }
            }
            CollapsibleContent { "{LOREM}" }
        }
    }
}

#[component]
fn SwapIconPanel() -> Element {
    let icon = TriggerIcon::Swap {
        when_open: Glyph::ArrowInput,
        when_collapsed: Glyph::ArrowOutput,
    };

    rsx! {
        Collapsible {
            CollapsibleHeader {
                div {
                    h6 { "This is a Title" }
                    p { style: "opacity: .5;", "And customized Icon" }
                }
                TriggerSlotGlyph { icon }
            }
            CollapsibleContent { "{LOREM}" }
        }
    }
}

#[component]
fn TitleRightPanel() -> Element {
    rsx! {
        Collapsible {
            CollapsibleHeader {
                CollapsibleTrigger { style: "flex: 1 1;",
                    CurrentGlyph { icon: TriggerIcon::Chevron }
                    h6 { "Title on the Right" }
                }
            }
            CollapsibleContent { "{LOREM}" }
        }
    }
}

/// Trigger slot holding a glyph that follows the panel's collapse flag.
#[component]
fn TriggerSlotGlyph(icon: TriggerIcon) -> Element {
    rsx! {
        CollapsibleTrigger {
            CurrentGlyph { icon }
        }
    }
}

/// Glyph for the enclosing panel's current collapse flag.
#[component]
fn CurrentGlyph(icon: TriggerIcon) -> Element {
    let collapsed = shared_ui::use_collapsible_context()
        .map(|panel| panel.is_collapsed())
        .unwrap_or(false);

    rsx! {
        TriggerGlyph { icon, collapsed }
    }
}

#[component]
fn MiniPanel() -> Element {
    rsx! {
        MiniCollapsible {
            MiniCollapsibleHeader { class: "mini-header",
                h6 { "Mini compound, starts collapsed" }
                MiniCollapsibleTrigger { class: "mini-trigger",
                    CurrentGlyph { icon: TriggerIcon::Glyph(Glyph::ChevronRight) }
                }
            }
            MiniCollapsibleContent { class: "mini-content", "{LOREM}" }
        }
    }
}

/// A Controlled panel: its own trigger is inert, the buttons own the flag.
#[component]
fn ControlledPanel() -> Element {
    let mut collapsed = use_signal(|| true);

    rsx! {
        div { style: "display: flex; gap: 0.5rem;",
            Button {
                label: "Collapse",
                onclick: move |_| collapsed.set(true),
            }
            Button {
                label: "Expand",
                onclick: move |_| collapsed.set(false),
            }
            HoverContext {
                span { "Owner says collapsed = {collapsed}" }
            }
        }
        Accordion {
            title: "Controlled by the buttons above",
            collapsed: Some(collapsed()),
            "{LOREM}"
        }
    }
}
