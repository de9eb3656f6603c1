//! Closed-form membership tests for the two largest components of the set.
//!
//! Both run before any iteration so that the points that cost the most (those
//! that never escape) are rejected in constant time.
//! Reference: https://en.wikipedia.org/wiki/Plotting_algorithms_for_the_Mandelbrot_set#Cardioid_/_bulb_checking

/// True iff `(x, y)` lies strictly inside the main cardioid.
#[inline]
pub fn inside_cardioid(x: f64, y: f64) -> bool {
    let x1 = x - 0.25;
    let yy = y * y;
    let q = x1 * x1 + yy;
    q * (q + x1) < 0.25 * yy
}

/// True iff `(x, y)` lies strictly inside the period-2 bulb, the disc of
/// radius 1/4 centred on -1.
#[inline]
pub fn inside_period2_bulb(x: f64, y: f64) -> bool {
    let x1 = x + 1.0;
    x1 * x1 + y * y < 0.0625
}
