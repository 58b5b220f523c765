use dioxus::prelude::*;

/// Render a root component to HTML after its first build.
pub fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Render a root component that takes props.
pub fn render_with<P: Clone + 'static>(app: fn(P) -> Element, props: P) -> String {
    let mut dom = VirtualDom::new_with_props(app, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Number of `data-collapsed="<value>"` attributes in `html`.
pub fn count_collapsed(html: &str, value: bool) -> usize {
    html.matches(&format!("data-collapsed=\"{value}\"")).count()
}

/// Byte offset of `needle` in `html`, panicking with the HTML if absent.
pub fn position_of(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("`{needle}` not found in:\n{html}"))
}

/// Re-render every dirty scope and return the updated HTML.
pub fn rerender(dom: &mut VirtualDom) -> String {
    dom.render_immediate(&mut dioxus::dioxus_core::NoOpMutations);
    dioxus_ssr::render(dom)
}
