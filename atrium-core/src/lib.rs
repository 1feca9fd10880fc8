//! Board-agnostic core logic for the Atrium sensor hub
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (sensor bus, touch pads, datagram link)
//! - Sensor cache with per-channel enable flags
//! - Refresh scheduler with wraparound-safe timing
//! - Touch input edge detection and view selection
//! - View state machine driving the display presenter
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod cache;
pub mod config;
pub mod input;
pub mod sample;
pub mod scheduler;
pub mod traits;
pub mod view;
