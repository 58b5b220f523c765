pub mod collapsible;
pub mod config;
pub mod error;
pub mod glyph;

pub use collapsible::*;
pub use config::*;
pub use error::*;
pub use glyph::*;
