pub mod components;
pub mod handle;

pub use components::*;
pub use handle::{
    use_collapsible, use_collapsible_context, use_collapsible_provider, CollapsibleHandle,
    ToggleObservers,
};
