//! Strongly-typed primitives for routeplot (zero-cost newtypes).
//!
//! Geographic values are `Degrees`, drawing-surface values are `Px`, and
//! projected points are `glam::DVec2` in pixel space (Y-down).

use std::fmt;
use std::ops::{Add, Sub};

use glam::DVec2;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Latitude or longitude in decimal degrees
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Degrees(pub f64);

impl Degrees {
    pub const ZERO: Degrees = Degrees(0.0);

    /// Create a Degrees value with validation (rejects NaN/infinite)
    #[inline]
    pub fn try_new(val: f64) -> Result<Degrees, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else {
            Ok(Degrees(val))
        }
    }

    #[inline]
    pub fn min(self, other: Degrees) -> Degrees {
        Degrees(self.0.min(other.0))
    }

    #[inline]
    pub fn max(self, other: Degrees) -> Degrees {
        Degrees(self.0.max(other.0))
    }

    /// Get the raw value (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Degrees {
    type Output = Degrees;
    fn add(self, rhs: Degrees) -> Degrees { Degrees(self.0 + rhs.0) }
}
impl Sub for Degrees {
    type Output = Degrees;
    fn sub(self, rhs: Degrees) -> Degrees { Degrees(self.0 - rhs.0) }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// Drawing-surface pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Px(pub f64);

impl Px {
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// Angle in radians, measured in surface space (Y-down, so positive is clockwise)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Angle(pub f64);

impl Angle {
    /// Direction of travel from `from` to `to`
    pub fn between(from: DVec2, to: DVec2) -> Angle {
        let delta = to - from;
        Angle(delta.y.atan2(delta.x))
    }

    /// Unit vector pointing along this angle
    pub fn unit(self) -> DVec2 {
        DVec2::from_angle(self.0)
    }

    /// This angle turned a quarter turn (toward +Y in surface space)
    pub fn perpendicular(self) -> Angle {
        Angle(self.0 + std::f64::consts::FRAC_PI_2)
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}rad", self.0)
    }
}

/// Size of a drawing surface
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: Px,
    pub height: Px,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Size {
            width: Px(width),
            height: Px(height),
        }
    }
}

/// Color model for drawing primitives
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    None,
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, f32),
}

impl Color {
    /// Build an opaque color from `0xRRGGBB`
    pub const fn hex(rgb: u32) -> Color {
        Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::None => write!(f, "none"),
            Color::Rgb(r, g, b) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
            Color::Rgba(r, g, b, a) => write!(f, "rgba({},{},{},{})", r, g, b, a),
        }
    }
}

/// A named geographic point. Identity is `index`, its position in the input list.
#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    pub index: usize,
    pub name: String,
    pub lat: Degrees,
    pub lng: Degrees,
}

impl Location {
    pub fn new(index: usize, name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            index,
            name: name.into(),
            lat: Degrees(lat),
            lng: Degrees(lng),
        }
    }
}

/// Ordered sequence of location indices to visit.
///
/// The first entry is conventionally the depot but nothing enforces it, and
/// repeated indices are allowed (they draw overlapping segments).
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Route(Vec<usize>);

impl Route {
    pub fn new(stops: Vec<usize>) -> Self {
        Route(stops)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn stops(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for Route {
    fn from(stops: Vec<usize>) -> Self {
        Route(stops)
    }
}

/// A point on the drawing surface, in pixels (Y-down)
pub type ProjectedPoint = DVec2;
