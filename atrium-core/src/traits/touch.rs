//! Touch pad trait

/// Number of capacitive touch pads on the carrier
pub const TOUCH_PAD_COUNT: usize = 5;

/// Trait for the capacitive touch pads
///
/// Returns the raw touched/untouched state of every pad for this
/// iteration. Edge detection happens in [`crate::input::InputSelector`],
/// not here.
pub trait TouchPads {
    /// Sample all pads once
    fn poll(&mut self) -> [bool; TOUCH_PAD_COUNT];
}
