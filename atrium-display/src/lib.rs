//! Tabbed status view rendering for the Atrium hub
//!
//! Renders the selected view from the sensor cache onto any
//! `DrawTarget<Color = Rgb565>`. The presenter keeps redraw cost down by
//! separating each view's static layout (icons, labels) from its numeric
//! fields: switching views redraws everything, a dirty cache on the same
//! view redraws only the fields.

#![no_std]
#![deny(unsafe_code)]

pub mod icons;
pub mod presenter;
pub mod screens;

pub use presenter::{plan, Presenter, Redraw, MESSAGE_LEN};
pub use screens::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
