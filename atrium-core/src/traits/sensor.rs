//! Sensor bus trait
//!
//! One poll method per physical source. `None` means the chip has no
//! fresh data this round; the cache keeps its stored value in that case.

use crate::sample::{AxesSample, RgbSample};

/// Trait for the board's sensor chips
///
/// Implementations wrap the actual bus drivers (I2C/SPI). Each method is
/// a single non-blocking poll: return `Some` with a fresh reading, or
/// `None` when the sensor reports nothing new.
pub trait SensorBus {
    /// Poll the temperature sensor (degrees Celsius)
    fn read_temperature(&mut self) -> Option<f32>;

    /// Poll the humidity sensor (percent relative humidity)
    fn read_humidity(&mut self) -> Option<f32>;

    /// Poll the pressure sensor (pascal)
    fn read_pressure(&mut self) -> Option<f32>;

    /// Poll the accelerometer (three axes)
    fn read_accelerometer(&mut self) -> Option<AxesSample>;

    /// Poll the gyroscope (three axes)
    fn read_gyroscope(&mut self) -> Option<AxesSample>;

    /// Poll the color sensor
    fn read_color(&mut self) -> Option<RgbSample>;

    /// Poll the gesture sensor
    fn read_gesture(&mut self) -> Option<i32>;
}
