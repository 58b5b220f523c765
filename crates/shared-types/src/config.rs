use serde::{Deserialize, Serialize};

use crate::glyph::TriggerIcon;

/// Defaults applied to the panels the gallery assembles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct PanelDefaults {
    #[serde(default)]
    pub default_collapsed: bool,
    #[serde(default)]
    pub trigger_on_left: bool,
    #[serde(default)]
    pub trigger_icon: TriggerIcon,
}

/// Top-level config file structure matching `gallery.toml`.
///
/// Every field defaults so that a missing or partial file still yields a
/// usable gallery.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GalleryConfig {
    #[serde(default)]
    pub panels: PanelDefaults,
}
