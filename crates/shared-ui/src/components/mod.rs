pub mod accordion;
pub mod button;
pub mod collapsible;
pub mod collapsible_mini;
pub mod icon;

// Re-exports for convenience
pub use accordion::*;
pub use button::*;
pub use collapsible::*;
pub use collapsible_mini::*;
pub use icon::*;
