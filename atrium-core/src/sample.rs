//! Sensor channel identifiers and sampled value types
//!
//! One channel per independently enable/disable-able sensor source. The
//! value types mirror what the carrier board's chips report: floats for
//! the environmental and inertial sensors, integers for the light sensor.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifies one sensor channel in the cache
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ChannelId {
    /// Temperature + relative humidity pair
    Environment,
    /// Barometric pressure
    Pressure,
    /// Angular rate, three axes
    Gyroscope,
    /// Acceleration, three axes
    Accelerometer,
    /// Ambient color
    Rgb,
    /// Last detected gesture
    Gesture,
}

impl ChannelId {
    /// All channels, in cache order
    pub const ALL: [ChannelId; 6] = [
        ChannelId::Environment,
        ChannelId::Pressure,
        ChannelId::Gyroscope,
        ChannelId::Accelerometer,
        ChannelId::Rgb,
        ChannelId::Gesture,
    ];
}

/// Temperature and relative humidity reading
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnvironmentSample {
    /// Temperature in degrees Celsius
    pub temperature: f32,
    /// Relative humidity in percent
    pub humidity: f32,
}

/// Barometric pressure reading
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PressureSample {
    /// Pressure in pascal
    pub pressure: f32,
}

/// Three-axis inertial reading (acceleration or angular rate)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AxesSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Ambient color reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RgbSample {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

/// Last detected gesture code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GestureSample {
    pub code: i32,
}

/// A stored channel value, as returned by [`crate::cache::SensorCache::read`]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ChannelValue {
    Environment(EnvironmentSample),
    Pressure(PressureSample),
    Gyroscope(AxesSample),
    Accelerometer(AxesSample),
    Rgb(RgbSample),
    Gesture(GestureSample),
}

impl ChannelValue {
    /// The channel this value belongs to
    pub fn channel(&self) -> ChannelId {
        match self {
            ChannelValue::Environment(_) => ChannelId::Environment,
            ChannelValue::Pressure(_) => ChannelId::Pressure,
            ChannelValue::Gyroscope(_) => ChannelId::Gyroscope,
            ChannelValue::Accelerometer(_) => ChannelId::Accelerometer,
            ChannelValue::Rgb(_) => ChannelId::Rgb,
            ChannelValue::Gesture(_) => ChannelId::Gesture,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_reports_own_channel() {
        let value = ChannelValue::Pressure(PressureSample { pressure: 101_325.0 });
        assert_eq!(value.channel(), ChannelId::Pressure);

        let value = ChannelValue::Gesture(GestureSample { code: 2 });
        assert_eq!(value.channel(), ChannelId::Gesture);
    }

    #[test]
    fn test_all_covers_every_channel() {
        for (i, a) in ChannelId::ALL.iter().enumerate() {
            for b in &ChannelId::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
