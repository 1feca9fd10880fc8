//! Display presenter
//!
//! Small state machine deciding, each iteration, between three
//! outcomes: full redraw (view changed - layout must be repainted before
//! the fields so no stale glyphs from the previous view survive),
//! fields-only redraw (same view, dirty cache), or nothing.

use atrium_core::cache::SensorCache;
use atrium_core::view::ViewState;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use heapless::String;

use crate::screens::{self, BACKGROUND};

/// Maximum status message length
pub const MESSAGE_LEN: usize = 48;

/// What a presenter pass decided to repaint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Redraw {
    /// View changed: clear, layout, then fields
    Full,
    /// Same view, dirty cache: fields only
    Fields,
}

/// Pure redraw policy
///
/// `Full` when the selected view differs from the last rendered one
/// (including the very first pass), `Fields` when only the cache is
/// dirty, `None` otherwise.
pub fn plan(state: &ViewState) -> Option<Redraw> {
    if state.last_rendered() != Some(state.selected()) {
        Some(Redraw::Full)
    } else if state.is_dirty() {
        Some(Redraw::Fields)
    } else {
        None
    }
}

/// Renders the selected view from the cache, redrawing only when needed
#[derive(Debug, Clone, Default)]
pub struct Presenter {
    message: String<MESSAGE_LEN>,
}

impl Presenter {
    /// Create a presenter with an empty status message
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the status message (truncated to [`MESSAGE_LEN`])
    ///
    /// Shown on the status view; callers mark the view state dirty to
    /// get it on screen.
    pub fn set_message(&mut self, message: &str) {
        self.message.clear();
        for c in message.chars() {
            if self.message.push(c).is_err() {
                break;
            }
        }
    }

    /// Current status message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Run one presenter pass
    ///
    /// Executes the redraw [`plan`] and, if anything was painted, clears
    /// the dirty flag and records the rendered view. Returns what was
    /// repainted.
    pub fn update<D>(
        &self,
        state: &mut ViewState,
        cache: &SensorCache,
        target: &mut D,
    ) -> Result<Option<Redraw>, D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let decision = plan(state);
        let view = state.selected();

        match decision {
            Some(Redraw::Full) => {
                target.clear(BACKGROUND)?;
                screens::draw_layout(view, target)?;
                screens::draw_fields(view, cache, &self.message, target)?;
            }
            Some(Redraw::Fields) => {
                screens::draw_fields(view, cache, &self.message, target)?;
            }
            None => {}
        }

        if decision.is_some() {
            state.mark_rendered();
        }
        Ok(decision)
    }
}
