use dioxus::prelude::*;
use shared_types::ToggleDirection;

use crate::handle::{
    collapsed_attr, slot_collapsed, use_collapsible_context, use_collapsible_provider,
    ToggleObservers,
};

// ─── Root ──────────────────────────────────────────────────────────────

/// Root of a compound collapsible panel.
///
/// Owns the collapse state and shares it with the `CollapsibleHeader`,
/// `CollapsibleTrigger` and `CollapsibleContent` slots below it. Supplying
/// `collapsed` makes the panel Controlled.
#[component]
pub fn Collapsible(
    #[props(default)] default_collapsed: bool,
    #[props(default)] collapsed: ReadSignal<Option<bool>>,
    #[props(default)] on_toggle: Option<EventHandler<ToggleDirection>>,
    #[props(default)] on_collapsed: Option<EventHandler<()>>,
    #[props(default)] on_uncollapsed: Option<EventHandler<()>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let handle = use_collapsible_provider(
        default_collapsed,
        collapsed,
        ToggleObservers {
            on_toggle,
            on_collapsed,
            on_uncollapsed,
        },
    );

    let base = vec![
        Attribute::new("class", "collapsible", None, false),
        Attribute::new(
            "data-collapsed",
            collapsed_attr(handle.is_collapsed()),
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

// ─── Slots ─────────────────────────────────────────────────────────────

/// Header row of a compound panel.
#[component]
pub fn CollapsibleHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let collapsed = slot_collapsed(use_collapsible_context());

    let base = vec![
        Attribute::new("class", "collapsible-header", None, false),
        Attribute::new("data-collapsed", collapsed_attr(collapsed), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Click target that toggles the enclosing panel.
#[component]
pub fn CollapsibleTrigger(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let handle = use_collapsible_context();
    let collapsed = slot_collapsed(handle);

    let base = vec![
        Attribute::new("class", "collapsible-trigger", None, false),
        Attribute::new("data-collapsed", collapsed_attr(collapsed), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            onclick: move |_| {
                if let Some(handle) = handle {
                    handle.toggle();
                }
            },
            ..merged,
            {children}
        }
    }
}

/// Content region, hidden by the stylesheet while collapsed.
#[component]
pub fn CollapsibleContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let collapsed = slot_collapsed(use_collapsible_context());

    let base = vec![
        Attribute::new("class", "collapsible-content", None, false),
        Attribute::new("data-collapsed", collapsed_attr(collapsed), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}
