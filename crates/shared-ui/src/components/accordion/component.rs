use dioxus::prelude::*;
use shared_types::{ToggleDirection, TriggerIcon};

use crate::components::icon::TriggerGlyph;
use crate::handle::{collapsed_attr, use_collapsible, ToggleObservers};

/// A self-contained collapsible panel: a clickable title row over content.
///
/// With only `title` and children it behaves as the bare accordion. The
/// remaining props cover the richer single-component variant:
/// - `collapsed`: supplies the flag externally (Controlled); clicks are then ignored.
/// - `trigger_icon`: replaces the default chevron.
/// - `trigger_on_left`: puts the glyph before the title.
/// - `title_style` / `content_style`: inline style overrides for the two slots.
#[component]
pub fn Accordion(
    #[props(default, into)] title: String,
    #[props(default)] default_collapsed: bool,
    #[props(default)] collapsed: ReadSignal<Option<bool>>,
    #[props(default)] trigger_icon: TriggerIcon,
    #[props(default)] trigger_on_left: bool,
    #[props(default, into)] title_style: String,
    #[props(default, into)] content_style: String,
    #[props(default)] on_toggle: Option<EventHandler<ToggleDirection>>,
    #[props(default)] on_collapsed: Option<EventHandler<()>>,
    #[props(default)] on_uncollapsed: Option<EventHandler<()>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let handle = use_collapsible(
        default_collapsed,
        collapsed,
        ToggleObservers {
            on_toggle,
            on_collapsed,
            on_uncollapsed,
        },
    );
    let is_collapsed = handle.is_collapsed();

    let base = vec![
        Attribute::new("class", "accordion", None, false),
        Attribute::new("data-collapsed", collapsed_attr(is_collapsed), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            div {
                class: "accordion-header",
                style: title_style,
                "data-collapsed": collapsed_attr(is_collapsed),
                onclick: move |_| {
                    handle.toggle();
                },
                if trigger_on_left {
                    TriggerGlyph { icon: trigger_icon, collapsed: is_collapsed }
                }
                h6 { class: "accordion-title", "{title}" }
                if !trigger_on_left {
                    TriggerGlyph { icon: trigger_icon, collapsed: is_collapsed }
                }
            }
            div {
                class: "accordion-content",
                style: content_style,
                "data-collapsed": collapsed_attr(is_collapsed),
                div { class: "accordion-content-wrapper", {children} }
            }
        }
    }
}
