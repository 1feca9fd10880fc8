//! Measurement envelope encoding
//!
//! One envelope per response: a base record (name, timestamp, format
//! version) followed by one or more value records. Records are flat with
//! every field optional, so base and value records share one type and
//! serialize to compact JSON objects with only the fields they carry.

use heapless::Vec;
use serde::{Deserialize, Serialize};

/// SenML media-type version reported in the base record
pub const BASE_VERSION: f32 = 10.0;

/// Maximum records per envelope (base + three vector components)
pub const MAX_RECORDS: usize = 4;

/// Maximum serialized body length in bytes
pub const MAX_BODY_LEN: usize = 256;

/// Errors that can occur while building or encoding an envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EnvelopeError {
    /// More records than [`MAX_RECORDS`]
    TooManyRecords,
    /// Serialized body exceeds [`MAX_BODY_LEN`]
    BodyTooLarge,
}

/// One record of a measurement envelope
///
/// Fields absent from a record are omitted from the JSON entirely.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SenmlRecord<'a> {
    /// Base name (base record only)
    #[serde(rename = "bn", skip_serializing_if = "Option::is_none", borrow, default)]
    pub base_name: Option<&'a str>,
    /// Base timestamp in monotonic milliseconds (base record only)
    #[serde(rename = "bt", skip_serializing_if = "Option::is_none", default)]
    pub base_time_ms: Option<u32>,
    /// Format version (base record only)
    #[serde(rename = "bver", skip_serializing_if = "Option::is_none", default)]
    pub base_version: Option<f32>,
    /// Record name (value records only)
    #[serde(rename = "n", skip_serializing_if = "Option::is_none", borrow, default)]
    pub name: Option<&'a str>,
    /// Numeric value (value records only)
    #[serde(rename = "v", skip_serializing_if = "Option::is_none", default)]
    pub value: Option<f32>,
    /// Unit label (scalar value records only)
    #[serde(rename = "u", skip_serializing_if = "Option::is_none", borrow, default)]
    pub unit: Option<&'a str>,
}

impl<'a> SenmlRecord<'a> {
    /// Base descriptor record
    pub fn base(base_name: &'a str, timestamp_ms: u32) -> Self {
        Self {
            base_name: Some(base_name),
            base_time_ms: Some(timestamp_ms),
            base_version: Some(BASE_VERSION),
            ..Self::default()
        }
    }

    /// Value record; pass `unit: None` for vector components
    pub fn value(name: &'a str, value: f32, unit: Option<&'a str>) -> Self {
        Self {
            name: Some(name),
            value: Some(value),
            unit,
            ..Self::default()
        }
    }
}

/// Builder for one response envelope
#[derive(Debug, Clone, Default)]
pub struct Envelope<'a> {
    records: Vec<SenmlRecord<'a>, MAX_RECORDS>,
}

impl<'a> Envelope<'a> {
    /// Start an envelope with its base record
    pub fn new(base_name: &'a str, timestamp_ms: u32) -> Self {
        let mut records = Vec::new();
        // Cannot fail: MAX_RECORDS >= 1
        let _ = records.push(SenmlRecord::base(base_name, timestamp_ms));
        Self { records }
    }

    /// Append one value record
    pub fn push(&mut self, record: SenmlRecord<'a>) -> Result<(), EnvelopeError> {
        self.records
            .push(record)
            .map_err(|_| EnvelopeError::TooManyRecords)
    }

    /// Records in wire order (base first)
    pub fn records(&self) -> &[SenmlRecord<'a>] {
        &self.records
    }

    /// Serialize to the JSON body
    pub fn to_json(&self) -> Result<Vec<u8, MAX_BODY_LEN>, EnvelopeError> {
        serde_json_core::to_vec(&self.records).map_err(|_| EnvelopeError::BodyTooLarge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_record_fields() {
        let base = SenmlRecord::base("atrium", 12_000);
        assert_eq!(base.base_name, Some("atrium"));
        assert_eq!(base.base_time_ms, Some(12_000));
        assert_eq!(base.base_version, Some(BASE_VERSION));
        assert_eq!(base.name, None);
        assert_eq!(base.value, None);
        assert_eq!(base.unit, None);
    }

    #[test]
    fn test_scalar_envelope_json() {
        let mut envelope = Envelope::new("atrium", 0);
        envelope
            .push(SenmlRecord::value("temperature", 21.5, Some("Cel")))
            .unwrap();

        let body = envelope.to_json().unwrap();
        let json = core::str::from_utf8(&body).unwrap();
        assert_eq!(
            json,
            r#"[{"bn":"atrium","bt":0,"bver":10.0},{"n":"temperature","v":21.5,"u":"Cel"}]"#
        );
    }

    #[test]
    fn test_vector_records_omit_unit() {
        let mut envelope = Envelope::new("atrium", 5);
        for (name, value) in [("x", 0.5f32), ("y", -0.25), ("z", 1.0)] {
            envelope.push(SenmlRecord::value(name, value, None)).unwrap();
        }

        let body = envelope.to_json().unwrap();
        let json = core::str::from_utf8(&body).unwrap();
        assert!(!json.contains("\"u\""));
        assert!(json.contains(r#"{"n":"x","v":0.5}"#));
    }

    #[test]
    fn test_envelope_roundtrips_through_json() {
        let mut envelope = Envelope::new("hub-7", 42);
        envelope
            .push(SenmlRecord::value("pressure", 101_325.0, Some("Pa")))
            .unwrap();
        let body = envelope.to_json().unwrap();

        let (records, _): (Vec<SenmlRecord, MAX_RECORDS>, usize) =
            serde_json_core::from_slice(&body).unwrap();
        assert_eq!(records.as_slice(), envelope.records());
    }

    #[test]
    fn test_record_capacity_is_enforced() {
        let mut envelope = Envelope::new("atrium", 0);
        for name in ["x", "y", "z"] {
            envelope.push(SenmlRecord::value(name, 0.0, None)).unwrap();
        }
        assert_eq!(
            envelope.push(SenmlRecord::value("w", 0.0, None)),
            Err(EnvelopeError::TooManyRecords)
        );
    }
}
