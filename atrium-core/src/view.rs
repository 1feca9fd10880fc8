//! View state machine
//!
//! The display shows one of a closed set of views, selected by the touch
//! pads. The transition table is an exhaustive match on (current view,
//! selected tab), so there is no ad hoc integer comparison anywhere and
//! the compiler checks every case.

/// Selectable display views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum View {
    /// Temperature and humidity
    Environment,
    /// Accelerometer and gyroscope
    Motion,
    /// Barometric pressure
    Pressure,
    /// Free-form status message
    Status,
}

impl View {
    /// Transition table keyed by (current view, selected tab)
    ///
    /// Tab 3 is reserved and a self-transition, as is any tab outside
    /// the five pads.
    pub fn transition(self, tab: u8) -> View {
        match (self, tab) {
            (_, 0) => View::Environment,
            (_, 1) => View::Motion,
            (_, 2) => View::Pressure,
            (_, 4) => View::Status,
            (current, _) => current,
        }
    }
}

/// Render bookkeeping for the display presenter
///
/// Invariant: a redraw happens iff the cache is dirty or the selected
/// view differs from the last rendered one.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ViewState {
    selected: View,
    last_rendered: Option<View>,
    dirty: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Start on the environment view with nothing rendered yet
    pub fn new() -> Self {
        Self {
            selected: View::Environment,
            last_rendered: None,
            dirty: false,
        }
    }

    /// Currently selected view
    pub fn selected(&self) -> View {
        self.selected
    }

    /// View drawn by the last completed redraw, if any
    pub fn last_rendered(&self) -> Option<View> {
        self.last_rendered
    }

    /// Apply a tab selection through the transition table
    pub fn select(&mut self, tab: u8) {
        self.selected = self.selected.transition(tab);
    }

    /// Signal that cached data changed since the last redraw
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Whether cached data changed since the last redraw
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Whether the presenter must redraw this iteration
    pub fn needs_redraw(&self) -> bool {
        self.dirty || self.last_rendered != Some(self.selected)
    }

    /// Record a completed redraw of the selected view
    pub fn mark_rendered(&mut self) {
        self.dirty = false;
        self.last_rendered = Some(self.selected);
    }
}
