use serde::{Deserialize, Serialize};
use std::fmt;

/// Who owns the collapse flag of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CollapseMode {
    /// The panel holds and mutates the flag itself.
    #[default]
    Uncontrolled,
    /// An external owner supplies the flag; toggling is a no-op.
    Controlled,
}

/// Direction of a toggle, derived from the value *before* the flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToggleDirection {
    /// Was open, becoming collapsed.
    Collapsing,
    /// Was collapsed, becoming open.
    Expanding,
}

impl ToggleDirection {
    /// Direction a toggle takes when starting from `was_collapsed`.
    pub fn from_pre_toggle(was_collapsed: bool) -> Self {
        if was_collapsed {
            ToggleDirection::Expanding
        } else {
            ToggleDirection::Collapsing
        }
    }

    pub fn is_collapsing(&self) -> bool {
        matches!(self, ToggleDirection::Collapsing)
    }

    /// Collapse flag after the toggle has been applied.
    pub fn resulting_value(&self) -> bool {
        self.is_collapsing()
    }
}

impl fmt::Display for ToggleDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToggleDirection::Collapsing => write!(f, "collapsing"),
            ToggleDirection::Expanding => write!(f, "expanding"),
        }
    }
}

/// Collapse state of a single panel instance.
///
/// Holds the internally owned flag plus the most recent externally supplied
/// value. While an external value is present the panel is Controlled and
/// `toggle` is rejected. When the owner releases control the internal flag
/// resyncs to the last external value, so the panel stays where it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CollapsibleState {
    collapsed: bool,
    default_collapsed: bool,
    external: Option<bool>,
}

impl CollapsibleState {
    /// Seed a new state. `controlled` switches the panel to Controlled mode
    /// and wins over `default_collapsed`.
    pub fn new(default_collapsed: bool, controlled: Option<bool>) -> Self {
        Self {
            collapsed: controlled.unwrap_or(default_collapsed),
            default_collapsed,
            external: controlled,
        }
    }

    /// Uncontrolled state seeded from `default_collapsed`.
    pub fn uncontrolled(default_collapsed: bool) -> Self {
        Self::new(default_collapsed, None)
    }

    /// Controlled state pinned to `value`.
    pub fn controlled(value: bool) -> Self {
        Self::new(false, Some(value))
    }

    pub fn mode(&self) -> CollapseMode {
        if self.external.is_some() {
            CollapseMode::Controlled
        } else {
            CollapseMode::Uncontrolled
        }
    }

    pub fn default_collapsed(&self) -> bool {
        self.default_collapsed
    }

    /// Last value supplied by the external owner, if any.
    pub fn external(&self) -> Option<bool> {
        self.external
    }

    /// Current collapse flag.
    pub fn current_value(&self) -> bool {
        self.external.unwrap_or(self.collapsed)
    }

    /// Direction the next `toggle` would take, or `None` while Controlled.
    pub fn next_direction(&self) -> Option<ToggleDirection> {
        match self.mode() {
            CollapseMode::Controlled => None,
            CollapseMode::Uncontrolled => Some(ToggleDirection::from_pre_toggle(self.collapsed)),
        }
    }

    /// Flip the flag. Returns the direction taken, or `None` if the panel is
    /// Controlled and the toggle was ignored.
    pub fn toggle(&mut self) -> Option<ToggleDirection> {
        self.toggle_with(|_| {})
    }

    /// Flip the flag, calling `observe` with the direction first.
    ///
    /// The observer runs before the mutation, so it still sees the
    /// pre-toggle value through any handle it holds. It is not called when
    /// the toggle is rejected.
    pub fn toggle_with<F>(&mut self, observe: F) -> Option<ToggleDirection>
    where
        F: FnOnce(ToggleDirection),
    {
        let direction = self.next_direction()?;
        observe(direction);
        self.collapsed = direction.resulting_value();
        Some(direction)
    }

    /// Record the value the external owner currently supplies.
    ///
    /// `Some(v)` enters or stays in Controlled mode. `None` releases control;
    /// the internal flag then takes the last external value.
    pub fn observe_external(&mut self, external: Option<bool>) {
        if let (Some(last), None) = (self.external, external) {
            self.collapsed = last;
        }
        self.external = external;
    }
}
