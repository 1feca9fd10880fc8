//! View icons
//!
//! Each icon is built from filled circles, rectangles, and triangles:
//! a colored silhouette first, then background-colored cutouts on top.
//! Coordinates are the icon's top-left corner; every icon fits in a
//! 60x60 box.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle, Triangle};

use crate::screens::BACKGROUND;

fn circle<D>(target: &mut D, cx: i32, cy: i32, r: u32, color: Rgb565) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(Point::new(cx, cy), 2 * r + 1)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(target)
}

fn rect<D>(target: &mut D, x: i32, y: i32, w: u32, h: u32, color: Rgb565) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(Point::new(x, y), Size::new(w, h))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(target)
}

fn triangle<D>(
    target: &mut D,
    p1: (i32, i32),
    p2: (i32, i32),
    p3: (i32, i32),
    color: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Triangle::new(p1.into(), p2.into(), p3.into())
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(target)
}

/// Thermometer (environment view, temperature row)
pub fn thermometer<D>(target: &mut D, color: Rgb565, x: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    circle(target, x + 15, y + 10, 10, color)?;
    rect(target, x + 5, y + 10, 21, 28, color)?;
    circle(target, x + 15, y + 45, 15, color)?;

    circle(target, x + 15, y + 10, 7, BACKGROUND)?;
    rect(target, x + 8, y + 13, 15, 25, BACKGROUND)?;
    circle(target, x + 15, y + 45, 12, BACKGROUND)
}

/// Droplet (environment view, humidity row)
pub fn droplet<D>(target: &mut D, color: Rgb565, x: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    triangle(target, (x + 2, y + 30), (x + 20, y), (x + 38, y + 30), color)?;
    circle(target, x + 20, y + 40, 20, color)?;
    triangle(target, (x + 6, y + 30), (x + 20, y + 5), (x + 34, y + 30), BACKGROUND)?;
    circle(target, x + 20, y + 40, 17, BACKGROUND)
}

/// Four-arrow cross (motion view, accelerometer row)
pub fn movement<D>(target: &mut D, color: Rgb565, x: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    // North
    triangle(target, (x + 20, y + 15), (x + 30, y), (x + 40, y + 15), color)?;
    triangle(target, (x + 25, y + 12), (x + 30, y + 5), (x + 35, y + 12), BACKGROUND)?;
    // West
    triangle(target, (x, y + 30), (x + 15, y + 20), (x + 15, y + 40), color)?;
    triangle(target, (x + 5, y + 30), (x + 12, y + 25), (x + 12, y + 35), BACKGROUND)?;
    // South
    triangle(target, (x + 20, y + 45), (x + 40, y + 45), (x + 30, y + 60), color)?;
    triangle(target, (x + 25, y + 48), (x + 35, y + 48), (x + 30, y + 55), BACKGROUND)?;
    // East
    triangle(target, (x + 45, y + 40), (x + 45, y + 20), (x + 60, y + 30), color)?;
    triangle(target, (x + 48, y + 35), (x + 48, y + 25), (x + 55, y + 30), BACKGROUND)?;
    // Crossbars
    rect(target, x + 15, y + 25, 30, 10, color)?;
    rect(target, x + 25, y + 15, 10, 30, color)?;
    rect(target, x + 12, y + 28, 36, 4, BACKGROUND)?;
    rect(target, x + 28, y + 12, 4, 36, BACKGROUND)
}

/// Circular arrow (motion view, gyroscope row)
pub fn rotation<D>(target: &mut D, color: Rgb565, x: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    circle(target, x + 30, y + 30, 27, color)?;
    circle(target, x + 30, y + 30, 24, BACKGROUND)?;
    circle(target, x + 30, y + 30, 20, color)?;
    circle(target, x + 30, y + 30, 17, BACKGROUND)?;

    // Open the ring's top-left quadrant
    triangle(target, (x, y), (x + 30, y), (x + 30, y + 30), BACKGROUND)?;

    // Arrow head
    triangle(target, (x + 15, y + 7), (x + 30, y), (x + 30, y + 15), color)?;
    triangle(target, (x + 22, y + 7), (x + 27, y + 5), (x + 27, y + 10), BACKGROUND)?;
    rect(target, x + 27, y + 6, 4, 4, BACKGROUND)?;

    // Ring tail
    triangle(target, (x + 12, y + 12), (x + 17, y + 17), (x + 12, y + 15), color)?;

    // Hub
    circle(target, x + 30, y + 30, 5, color)?;
    circle(target, x + 30, y + 30, 2, BACKGROUND)
}

/// Press (pressure view)
pub fn pressure<D>(target: &mut D, color: Rgb565, x: i32, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    rect(target, x, y + 50, 60, 10, color)?;

    triangle(target, (x + 5, y + 35), (x + 25, y + 35), (x + 15, y + 50), color)?;
    triangle(target, (x + 35, y + 35), (x + 55, y + 35), (x + 45, y + 50), color)?;

    rect(target, x + 10, y, 10, 35, color)?;
    rect(target, x + 40, y, 10, 35, color)?;

    rect(target, x + 3, y + 53, 54, 4, BACKGROUND)?;

    triangle(target, (x + 10, y + 38), (x + 20, y + 38), (x + 15, y + 45), BACKGROUND)?;
    triangle(target, (x + 40, y + 38), (x + 50, y + 38), (x + 45, y + 45), BACKGROUND)?;

    rect(target, x + 13, y + 3, 4, 35, BACKGROUND)?;
    rect(target, x + 43, y + 3, 4, 35, BACKGROUND)
}
