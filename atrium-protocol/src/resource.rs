//! Resource table
//!
//! Maps protocol resource names to cache accessors and unit labels. The
//! table is static data iterated by one generic handler; adding a
//! resource is a table entry, not new handler code.

use atrium_core::cache::SensorCache;
use atrium_core::sample::AxesSample;

use crate::senml::{Envelope, EnvelopeError, SenmlRecord};

/// Which cache field(s) a resource reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResourceSource {
    Temperature,
    Humidity,
    Pressure,
    Accelerometer,
    Gyroscope,
}

/// One row of the resource table
#[derive(Debug, Clone, Copy)]
pub struct ResourceBinding {
    /// Resource name on the wire
    pub path: &'static str,
    /// Unit label, `None` for unit-less vector resources
    pub unit: Option<&'static str>,
    /// Cache accessor
    pub source: ResourceSource,
}

/// All resources served by the hub, bound once at startup
pub static RESOURCES: [ResourceBinding; 5] = [
    ResourceBinding {
        path: "temperature",
        unit: Some("Cel"),
        source: ResourceSource::Temperature,
    },
    ResourceBinding {
        path: "humidity",
        unit: Some("%RH"),
        source: ResourceSource::Humidity,
    },
    ResourceBinding {
        path: "pressure",
        unit: Some("Pa"),
        source: ResourceSource::Pressure,
    },
    ResourceBinding {
        path: "accelerometer",
        unit: None,
        source: ResourceSource::Accelerometer,
    },
    ResourceBinding {
        path: "gyroscope",
        unit: None,
        source: ResourceSource::Gyroscope,
    },
];

/// Look up a binding by resource name
pub fn lookup(path: &str) -> Option<&'static ResourceBinding> {
    RESOURCES.iter().find(|binding| binding.path == path)
}

impl ResourceBinding {
    /// Append this resource's value records, read from the cache
    ///
    /// Scalars produce one named record with the bound unit; vectors
    /// produce three unit-less `x`/`y`/`z` records.
    pub fn read(&self, cache: &SensorCache, envelope: &mut Envelope<'_>) -> Result<(), EnvelopeError> {
        match self.source {
            ResourceSource::Temperature => envelope.push(SenmlRecord::value(
                self.path,
                cache.environment().temperature,
                self.unit,
            )),
            ResourceSource::Humidity => envelope.push(SenmlRecord::value(
                self.path,
                cache.environment().humidity,
                self.unit,
            )),
            ResourceSource::Pressure => envelope.push(SenmlRecord::value(
                self.path,
                cache.pressure().pressure,
                self.unit,
            )),
            ResourceSource::Accelerometer => push_axes(envelope, cache.accelerometer()),
            ResourceSource::Gyroscope => push_axes(envelope, cache.gyroscope()),
        }
    }
}

fn push_axes(envelope: &mut Envelope<'_>, axes: AxesSample) -> Result<(), EnvelopeError> {
    envelope.push(SenmlRecord::value("x", axes.x, None))?;
    envelope.push(SenmlRecord::value("y", axes.y, None))?;
    envelope.push(SenmlRecord::value("z", axes.z, None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use atrium_core::sample::ChannelId;
    use atrium_core::traits::SensorBus;

    struct OneShotBus;

    impl SensorBus for OneShotBus {
        fn read_temperature(&mut self) -> Option<f32> {
            Some(23.25)
        }
        fn read_humidity(&mut self) -> Option<f32> {
            Some(51.0)
        }
        fn read_pressure(&mut self) -> Option<f32> {
            Some(99_800.0)
        }
        fn read_accelerometer(&mut self) -> Option<AxesSample> {
            Some(AxesSample { x: 0.0, y: 0.5, z: 1.0 })
        }
        fn read_gyroscope(&mut self) -> Option<AxesSample> {
            None
        }
        fn read_color(&mut self) -> Option<atrium_core::sample::RgbSample> {
            None
        }
        fn read_gesture(&mut self) -> Option<i32> {
            None
        }
    }

    fn populated_cache() -> SensorCache {
        let mut cache = SensorCache::new();
        for channel in ChannelId::ALL {
            cache.set_enabled(channel, true);
        }
        cache.sample_all(&mut OneShotBus);
        cache
    }

    #[test]
    fn test_lookup_finds_every_table_row() {
        for binding in &RESOURCES {
            let found = lookup(binding.path).expect("bound resource must resolve");
            assert_eq!(found.path, binding.path);
        }
    }

    #[test]
    fn test_lookup_rejects_unknown_names() {
        assert!(lookup("gesture").is_none());
        assert!(lookup("Temperature").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_scalar_read_produces_one_named_record() {
        let cache = populated_cache();
        let mut envelope = Envelope::new("atrium", cache.last_update_ms());
        lookup("temperature").unwrap().read(&cache, &mut envelope).unwrap();

        let records = envelope.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].name, Some("temperature"));
        assert_eq!(records[1].value, Some(23.25));
        assert_eq!(records[1].unit, Some("Cel"));
    }

    #[test]
    fn test_vector_read_produces_three_unitless_records() {
        let cache = populated_cache();
        let mut envelope = Envelope::new("atrium", cache.last_update_ms());
        lookup("accelerometer").unwrap().read(&cache, &mut envelope).unwrap();

        let records = envelope.records();
        assert_eq!(records.len(), 4);
        let names: [_; 3] = [records[1].name, records[2].name, records[3].name];
        assert_eq!(names, [Some("x"), Some("y"), Some("z")]);
        assert!(records[1..].iter().all(|r| r.unit.is_none()));
        assert_eq!(records[3].value, Some(1.0));
    }
}
