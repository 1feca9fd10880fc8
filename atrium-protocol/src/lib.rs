//! Measurement protocol for the Atrium hub
//!
//! Answers CoAP GET requests over a best-effort datagram link with the
//! cached sensor readings, encoded as a SenML-style JSON array:
//!
//! ```text
//! [{"bn":"atrium","bt":12000,"bver":10.0},
//!  {"n":"temperature","v":21.5,"u":"Cel"}]
//! ```
//!
//! The first record is the base descriptor (name, timestamp of the last
//! sample round, format version); the following records carry one value
//! each. The responder is purely a read path over the sensor cache and
//! sends nothing at all for malformed or unmapped requests.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod resource;
pub mod responder;
pub mod senml;

pub use resource::{lookup, ResourceBinding, ResourceSource, RESOURCES};
pub use responder::{respond, MAX_DATAGRAM_LEN};
pub use senml::{Envelope, EnvelopeError, SenmlRecord, BASE_VERSION, MAX_BODY_LEN, MAX_RECORDS};
