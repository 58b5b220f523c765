use dioxus::prelude::*;

use crate::handle::{
    collapsed_attr, slot_collapsed, use_collapsible_context, use_collapsible_provider,
    ToggleObservers,
};

/// Minimal compound root: provides collapse state without rendering a
/// wrapper element. Starts collapsed unless told otherwise.
#[component]
pub fn MiniCollapsible(
    #[props(default = true)] default_collapsed: bool,
    children: Element,
) -> Element {
    let uncontrolled = use_hook(ReadSignal::<Option<bool>>::default);
    use_collapsible_provider(default_collapsed, uncontrolled, ToggleObservers::default());

    rsx! {
        {children}
    }
}

/// Header slot: stamps the collapse flag, nothing else.
#[component]
pub fn MiniCollapsibleHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let collapsed = slot_collapsed(use_collapsible_context());

    rsx! {
        div {
            "data-collapsed": collapsed_attr(collapsed),
            ..attributes,
            {children}
        }
    }
}

#[component]
pub fn MiniCollapsibleTrigger(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let handle = use_collapsible_context();
    let collapsed = slot_collapsed(handle);

    rsx! {
        div {
            "data-collapsed": collapsed_attr(collapsed),
            onclick: move |_| {
                if let Some(handle) = handle {
                    handle.toggle();
                }
            },
            ..attributes,
            {children}
        }
    }
}

#[component]
pub fn MiniCollapsibleContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let collapsed = slot_collapsed(use_collapsible_context());

    rsx! {
        div {
            "data-collapsed": collapsed_attr(collapsed),
            ..attributes,
            {children}
        }
    }
}
