//! Per-view screen layouts
//!
//! Each view is split into a static layout (icons and labels, drawn once
//! per view switch) and numeric fields (cleared and rewritten whenever
//! the cache changes). Field cells are filled with the background color
//! before text is rewritten so stale glyphs never show through.

use core::fmt::Write;

use atrium_core::cache::SensorCache;
use atrium_core::view::View;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use heapless::String;
use profont::{PROFONT_14_POINT, PROFONT_24_POINT};

use crate::icons;

/// Display width in pixels
pub const DISPLAY_WIDTH: u32 = 240;

/// Display height in pixels
pub const DISPLAY_HEIGHT: u32 = 240;

/// Screen background color
pub const BACKGROUND: Rgb565 = Rgb565::BLACK;

const MAX_FIELD_LEN: usize = 24;

fn value_style() -> MonoTextStyle<'static, Rgb565> {
    MonoTextStyle::new(&PROFONT_24_POINT, Rgb565::WHITE)
}

fn small_style() -> MonoTextStyle<'static, Rgb565> {
    MonoTextStyle::new(&PROFONT_14_POINT, Rgb565::WHITE)
}

/// Clear a field cell and write its text
fn field<D>(
    target: &mut D,
    cell: Rectangle,
    origin: Point,
    text: &str,
    style: MonoTextStyle<'static, Rgb565>,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    cell.into_styled(PrimitiveStyle::with_fill(BACKGROUND))
        .draw(target)?;
    Text::new(text, origin, style).draw(target)?;
    Ok(())
}

/// Draw a view's static layout (icons and labels)
pub fn draw_layout<D>(view: View, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    match view {
        View::Environment => {
            icons::thermometer(target, Rgb565::GREEN, 45, 50)?;
            icons::droplet(target, Rgb565::CYAN, 40, 130)?;
        }
        View::Motion => {
            icons::movement(target, Rgb565::GREEN, 20, 40)?;
            icons::rotation(target, Rgb565::CYAN, 20, 130)?;
        }
        View::Pressure => {
            icons::pressure(target, Rgb565::CYAN, 30, 90)?;
        }
        View::Status => {
            Text::new("atrium", Point::new(70, 50), value_style()).draw(target)?;
        }
    }
    Ok(())
}

/// Draw a view's numeric fields from the cache
///
/// `message` is only shown on the status view.
pub fn draw_fields<D>(
    view: View,
    cache: &SensorCache,
    message: &str,
    target: &mut D,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    match view {
        View::Environment => {
            let environment = cache.environment();

            let mut text: String<MAX_FIELD_LEN> = String::new();
            let _ = write!(text, "{:.1} C", environment.temperature);
            field(
                target,
                Rectangle::new(Point::new(90, 50), Size::new(150, 60)),
                Point::new(100, 95),
                &text,
                value_style(),
            )?;

            text.clear();
            let _ = write!(text, "{:.1} %", environment.humidity);
            field(
                target,
                Rectangle::new(Point::new(90, 130), Size::new(150, 60)),
                Point::new(100, 175),
                &text,
                value_style(),
            )?;
        }
        View::Motion => {
            let accelerometer = cache.accelerometer();
            let gyroscope = cache.gyroscope();

            let mut text: String<MAX_FIELD_LEN> = String::new();
            let _ = write!(
                text,
                "{:.1} {:.1} {:.1}",
                accelerometer.x, accelerometer.y, accelerometer.z
            );
            field(
                target,
                Rectangle::new(Point::new(90, 50), Size::new(150, 40)),
                Point::new(95, 75),
                &text,
                small_style(),
            )?;

            text.clear();
            let _ = write!(text, "{:.1} {:.1} {:.1}", gyroscope.x, gyroscope.y, gyroscope.z);
            field(
                target,
                Rectangle::new(Point::new(90, 140), Size::new(150, 40)),
                Point::new(95, 165),
                &text,
                small_style(),
            )?;
        }
        View::Pressure => {
            let mut text: String<MAX_FIELD_LEN> = String::new();
            let _ = write!(text, "{:.0} Pa", cache.pressure().pressure);
            field(
                target,
                Rectangle::new(Point::new(100, 90), Size::new(140, 60)),
                Point::new(105, 125),
                &text,
                small_style(),
            )?;
        }
        View::Status => {
            field(
                target,
                Rectangle::new(Point::new(10, 100), Size::new(220, 60)),
                Point::new(20, 135),
                message,
                small_style(),
            )?;
        }
    }
    Ok(())
}
