//! Hardware abstraction traits
//!
//! Everything the hub needs from the board is expressed as a trait here:
//! the sensor chips, the capacitive touch pads, and the datagram link.
//! Board crates implement these; the core never touches hardware.

pub mod link;
pub mod sensor;
pub mod touch;

pub use link::Datagram;
pub use sensor::SensorBus;
pub use touch::{TouchPads, TOUCH_PAD_COUNT};
