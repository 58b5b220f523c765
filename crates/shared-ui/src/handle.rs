use dioxus::prelude::*;
use shared_types::{CollapseMode, CollapsibleState, ToggleDirection};

/// Callbacks notified when a panel toggles.
///
/// All of them run synchronously inside the click handler, before the new
/// value is written.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct ToggleObservers {
    pub on_toggle: Option<EventHandler<ToggleDirection>>,
    pub on_collapsed: Option<EventHandler<()>>,
    pub on_uncollapsed: Option<EventHandler<()>>,
}

impl ToggleObservers {
    pub fn notify(&self, direction: ToggleDirection) {
        if let Some(handler) = &self.on_toggle {
            handler.call(direction);
        }
        let handler = match direction {
            ToggleDirection::Collapsing => &self.on_collapsed,
            ToggleDirection::Expanding => &self.on_uncollapsed,
        };
        if let Some(handler) = handler {
            handler.call(());
        }
    }
}

/// Handle to the collapse state of one panel instance.
///
/// Copied freely between the root and its slots; all copies point at the
/// same state record.
#[derive(Clone, Copy, PartialEq)]
pub struct CollapsibleHandle {
    state: Signal<CollapsibleState>,
    controlled: ReadSignal<Option<bool>>,
    observers: ToggleObservers,
}

impl CollapsibleHandle {
    /// Current collapse flag. Subscribes the calling scope.
    pub fn is_collapsed(&self) -> bool {
        match *self.controlled.read() {
            Some(value) => value,
            None => self.state.read().current_value(),
        }
    }

    pub fn mode(&self) -> CollapseMode {
        if self.controlled.peek().is_some() {
            CollapseMode::Controlled
        } else {
            CollapseMode::Uncontrolled
        }
    }

    /// Flip the flag, notifying observers first.
    ///
    /// Ignored while the panel is Controlled.
    pub fn toggle(&self) -> Option<ToggleDirection> {
        if self.controlled.peek().is_some() {
            tracing::trace!("toggle ignored on controlled panel");
            return None;
        }

        let mut state = self.state;
        if state.peek().external().is_some() {
            let external = *self.controlled.peek();
            state.write().observe_external(external);
        }
        let direction = state.peek().next_direction()?;
        self.observers.notify(direction);
        state.write().toggle();
        tracing::debug!(%direction, "panel toggled");
        Some(direction)
    }
}

/// Create the collapse state for a panel instance.
///
/// `controlled` carries the externally supplied value; `None` leaves the
/// panel Uncontrolled and seeded from `default_collapsed`.
pub fn use_collapsible(
    default_collapsed: bool,
    controlled: ReadSignal<Option<bool>>,
    observers: ToggleObservers,
) -> CollapsibleHandle {
    let mut state =
        use_signal(|| CollapsibleState::new(default_collapsed, *controlled.peek()));

    use_effect(move || {
        let external = *controlled.read();
        if state.peek().external() != external {
            state.write().observe_external(external);
        }
    });

    CollapsibleHandle {
        state,
        controlled,
        observers,
    }
}

/// Create a panel's collapse state and provide it to descendant slots.
pub fn use_collapsible_provider(
    default_collapsed: bool,
    controlled: ReadSignal<Option<bool>>,
    observers: ToggleObservers,
) -> CollapsibleHandle {
    let handle = use_collapsible(default_collapsed, controlled, observers);
    use_context_provider(|| handle)
}

/// Handle of the nearest enclosing panel root, if any.
pub fn use_collapsible_context() -> Option<CollapsibleHandle> {
    try_use_context::<CollapsibleHandle>()
}

/// Collapse flag seen by a slot. Slots outside any root render expanded.
pub(crate) fn slot_collapsed(handle: Option<CollapsibleHandle>) -> bool {
    handle.map(|h| h.is_collapsed()).unwrap_or(false)
}

/// `data-collapsed` attribute value.
pub(crate) fn collapsed_attr(collapsed: bool) -> &'static str {
    if collapsed {
        "true"
    } else {
        "false"
    }
}
