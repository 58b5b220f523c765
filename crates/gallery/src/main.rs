use dioxus::prelude::*;

mod config;
mod page;

use page::Home;

fn main() {
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("[gallery] logger already initialised: {e}");
    }
    config::load_config();

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(config::config);

    rsx! {
        Home {}
    }
}
