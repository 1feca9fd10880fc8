//! Sensor cache
//!
//! Holds the most recently sampled value and an enabled flag for every
//! channel. The cache is the single source of truth: the scheduler is its
//! only writer, the display presenter and the protocol responder only
//! read it. All access happens on one cooperative execution context, so
//! no locking is needed.

use crate::sample::{
    AxesSample, ChannelId, ChannelValue, EnvironmentSample, GestureSample, PressureSample,
    RgbSample,
};
use crate::traits::SensorBus;

/// One cached channel: last sampled value plus sampling eligibility
#[derive(Debug, Clone, Copy, Default)]
struct Channel<T> {
    value: T,
    enabled: bool,
}

/// Cache of the latest reading from every sensor channel
///
/// Disabling a channel stops sampling but never discards the stored
/// value; `read` serves the last known value regardless of the flag, so
/// the responder can answer for a disabled channel too.
#[derive(Debug, Clone, Default)]
pub struct SensorCache {
    environment: Channel<EnvironmentSample>,
    pressure: Channel<PressureSample>,
    gyroscope: Channel<AxesSample>,
    accelerometer: Channel<AxesSample>,
    rgb: Channel<RgbSample>,
    gesture: Channel<GestureSample>,
    last_update_ms: u32,
}

impl SensorCache {
    /// Create a cache with every channel disabled and zeroed
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle sampling eligibility without touching the stored value
    pub fn set_enabled(&mut self, channel: ChannelId, enabled: bool) {
        match channel {
            ChannelId::Environment => self.environment.enabled = enabled,
            ChannelId::Pressure => self.pressure.enabled = enabled,
            ChannelId::Gyroscope => self.gyroscope.enabled = enabled,
            ChannelId::Accelerometer => self.accelerometer.enabled = enabled,
            ChannelId::Rgb => self.rgb.enabled = enabled,
            ChannelId::Gesture => self.gesture.enabled = enabled,
        }
    }

    /// Whether a channel is currently sampled
    pub fn is_enabled(&self, channel: ChannelId) -> bool {
        match channel {
            ChannelId::Environment => self.environment.enabled,
            ChannelId::Pressure => self.pressure.enabled,
            ChannelId::Gyroscope => self.gyroscope.enabled,
            ChannelId::Accelerometer => self.accelerometer.enabled,
            ChannelId::Rgb => self.rgb.enabled,
            ChannelId::Gesture => self.gesture.enabled,
        }
    }

    /// Read the stored value for a channel, enabled or not
    pub fn read(&self, channel: ChannelId) -> ChannelValue {
        match channel {
            ChannelId::Environment => ChannelValue::Environment(self.environment.value),
            ChannelId::Pressure => ChannelValue::Pressure(self.pressure.value),
            ChannelId::Gyroscope => ChannelValue::Gyroscope(self.gyroscope.value),
            ChannelId::Accelerometer => ChannelValue::Accelerometer(self.accelerometer.value),
            ChannelId::Rgb => ChannelValue::Rgb(self.rgb.value),
            ChannelId::Gesture => ChannelValue::Gesture(self.gesture.value),
        }
    }

    /// Stored environment reading
    pub fn environment(&self) -> EnvironmentSample {
        self.environment.value
    }

    /// Stored pressure reading
    pub fn pressure(&self) -> PressureSample {
        self.pressure.value
    }

    /// Stored gyroscope reading
    pub fn gyroscope(&self) -> AxesSample {
        self.gyroscope.value
    }

    /// Stored accelerometer reading
    pub fn accelerometer(&self) -> AxesSample {
        self.accelerometer.value
    }

    /// Stored color reading
    pub fn rgb(&self) -> RgbSample {
        self.rgb.value
    }

    /// Stored gesture reading
    pub fn gesture(&self) -> GestureSample {
        self.gesture.value
    }

    /// Timestamp (monotonic milliseconds) of the last sample round
    pub fn last_update_ms(&self) -> u32 {
        self.last_update_ms
    }

    /// Stamp the cache after a sample round
    pub fn set_last_update_ms(&mut self, now_ms: u32) {
        self.last_update_ms = now_ms;
    }

    /// Sample every enabled channel from the bus
    ///
    /// A `None` poll leaves the stored value untouched: stale-read
    /// tolerance is deliberate policy, not an omission. Temperature and
    /// humidity are polled independently even though they share the
    /// environment channel's enable flag, matching the two reads the
    /// chip actually offers.
    pub fn sample_all<B: SensorBus>(&mut self, bus: &mut B) {
        if self.environment.enabled {
            if let Some(temperature) = bus.read_temperature() {
                self.environment.value.temperature = temperature;
            }
            if let Some(humidity) = bus.read_humidity() {
                self.environment.value.humidity = humidity;
            }
        }

        if self.pressure.enabled {
            if let Some(pressure) = bus.read_pressure() {
                self.pressure.value.pressure = pressure;
            }
        }

        if self.accelerometer.enabled {
            if let Some(axes) = bus.read_accelerometer() {
                self.accelerometer.value = axes;
            }
        }
        if self.gyroscope.enabled {
            if let Some(axes) = bus.read_gyroscope() {
                self.gyroscope.value = axes;
            }
        }

        if self.rgb.enabled {
            if let Some(color) = bus.read_color() {
                self.rgb.value = color;
            }
        }
        if self.gesture.enabled {
            if let Some(code) = bus.read_gesture() {
                self.gesture.value.code = code;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::SensorBus;

    /// Bus double that answers every poll with fixed values
    struct FixedBus {
        temperature: Option<f32>,
        humidity: Option<f32>,
        pressure: Option<f32>,
        accelerometer: Option<AxesSample>,
        gyroscope: Option<AxesSample>,
        color: Option<RgbSample>,
        gesture: Option<i32>,
    }

    impl FixedBus {
        fn all_fresh() -> Self {
            Self {
                temperature: Some(21.5),
                humidity: Some(48.0),
                pressure: Some(101_325.0),
                accelerometer: Some(AxesSample { x: 0.0, y: 0.0, z: 1.0 }),
                gyroscope: Some(AxesSample { x: 0.1, y: 0.2, z: 0.3 }),
                color: Some(RgbSample { r: 10, g: 20, b: 30 }),
                gesture: Some(1),
            }
        }

        fn nothing_fresh() -> Self {
            Self {
                temperature: None,
                humidity: None,
                pressure: None,
                accelerometer: None,
                gyroscope: None,
                color: None,
                gesture: None,
            }
        }
    }

    impl SensorBus for FixedBus {
        fn read_temperature(&mut self) -> Option<f32> {
            self.temperature
        }
        fn read_humidity(&mut self) -> Option<f32> {
            self.humidity
        }
        fn read_pressure(&mut self) -> Option<f32> {
            self.pressure
        }
        fn read_accelerometer(&mut self) -> Option<AxesSample> {
            self.accelerometer
        }
        fn read_gyroscope(&mut self) -> Option<AxesSample> {
            self.gyroscope
        }
        fn read_color(&mut self) -> Option<RgbSample> {
            self.color
        }
        fn read_gesture(&mut self) -> Option<i32> {
            self.gesture
        }
    }

    #[test]
    fn test_disabled_channel_is_never_overwritten() {
        let mut cache = SensorCache::new();
        let mut bus = FixedBus::all_fresh();

        // Everything disabled: repeated sampling changes nothing
        for _ in 0..3 {
            cache.sample_all(&mut bus);
        }
        for channel in ChannelId::ALL {
            assert_eq!(cache.read(channel), SensorCache::new().read(channel));
        }
    }

    #[test]
    fn test_enabled_channel_takes_fresh_reading() {
        let mut cache = SensorCache::new();
        let mut bus = FixedBus::all_fresh();

        cache.set_enabled(ChannelId::Environment, true);
        cache.set_enabled(ChannelId::Pressure, true);
        cache.sample_all(&mut bus);

        assert_eq!(cache.environment().temperature, 21.5);
        assert_eq!(cache.environment().humidity, 48.0);
        assert_eq!(cache.pressure().pressure, 101_325.0);
        // Still disabled, still zeroed
        assert_eq!(cache.gyroscope(), AxesSample::default());
    }

    #[test]
    fn test_stale_value_survives_empty_poll() {
        let mut cache = SensorCache::new();
        cache.set_enabled(ChannelId::Environment, true);

        let mut fresh = FixedBus::all_fresh();
        cache.sample_all(&mut fresh);

        let mut empty = FixedBus::nothing_fresh();
        cache.sample_all(&mut empty);

        assert_eq!(cache.environment().temperature, 21.5);
        assert_eq!(cache.environment().humidity, 48.0);
    }

    #[test]
    fn test_disable_retains_stored_value() {
        let mut cache = SensorCache::new();
        cache.set_enabled(ChannelId::Gesture, true);

        let mut bus = FixedBus::all_fresh();
        cache.sample_all(&mut bus);
        assert_eq!(cache.gesture().code, 1);

        cache.set_enabled(ChannelId::Gesture, false);
        bus.gesture = Some(7);
        cache.sample_all(&mut bus);

        // Value from when the channel was last enabled
        assert_eq!(cache.gesture().code, 1);
    }

    #[test]
    fn test_read_works_for_disabled_channel() {
        let mut cache = SensorCache::new();
        cache.set_enabled(ChannelId::Rgb, true);
        let mut bus = FixedBus::all_fresh();
        cache.sample_all(&mut bus);
        cache.set_enabled(ChannelId::Rgb, false);

        match cache.read(ChannelId::Rgb) {
            ChannelValue::Rgb(color) => assert_eq!(color, RgbSample { r: 10, g: 20, b: 30 }),
            other => panic!("wrong channel value: {other:?}"),
        }
    }

    #[test]
    fn test_humidity_updates_while_temperature_stays_stale() {
        let mut cache = SensorCache::new();
        cache.set_enabled(ChannelId::Environment, true);

        let mut bus = FixedBus::nothing_fresh();
        bus.humidity = Some(55.5);
        cache.sample_all(&mut bus);

        assert_eq!(cache.environment().humidity, 55.5);
        assert_eq!(cache.environment().temperature, 0.0);
    }
}
