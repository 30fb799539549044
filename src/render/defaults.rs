//! Default sizes, offsets, and palette (all in surface pixels unless noted)

use crate::types::{Color, Degrees, Px};

// Surface and projection
pub const SURFACE_WIDTH: Px = Px(800.0);
pub const SURFACE_HEIGHT: Px = Px(400.0);
pub const PADDING: Px = Px(60.0);
/// Added to each side of the lat/lng bounding box before computing ranges
pub const MARGIN: Degrees = Degrees(0.01);

// Background
pub const GRID_SPACING: f64 = 30.0;
pub const GRID_STROKE_WIDTH: f64 = 1.0;
pub const GRADIENT_TOP: Color = Color::hex(0xe8f5e9);
pub const GRADIENT_BOTTOM: Color = Color::hex(0xc8e6c9);
pub const GRID_COLOR: Color = Color::Rgba(0, 0, 0, 0.1);

// Route path
pub const SHADOW_STROKE_WIDTH: f64 = 4.0;
pub const ROUTE_STROKE_WIDTH: f64 = 3.0;
pub const ROUTE_DASH: [f64; 2] = [6.0, 3.0];
pub const SHADOW_COLOR: Color = Color::Rgba(0, 0, 0, 0.3);
pub const BRAND: Color = Color::hex(0x2e7d32);
pub const BRAND_DARK: Color = Color::hex(0x1b5e20);
pub const BRAND_LIGHT: Color = Color::hex(0x4caf50);
pub const BRAND_PALE: Color = Color::hex(0xc8e6c9);
pub const LABEL_BORDER: Color = Color::hex(0x388e3c);
pub const LABEL_BACKGROUND: Color = Color::Rgba(255, 255, 255, 0.8);
pub const LABEL_TEXT: Color = Color::hex(0x212121);
pub const WHITE: Color = Color::hex(0xffffff);

// Arrows and sequence badges
pub const ARROW_LENGTH: f64 = 10.0;
pub const ARROW_HALF_WIDTH: f64 = 5.0;
pub const BADGE_OFFSET: f64 = 15.0;
pub const BADGE_RADIUS: f64 = 12.0;
pub const BADGE_FONT_SIZE: f64 = 14.0;

// Markers
pub const MARKER_SHADOW_OFFSET: f64 = 2.0;
pub const DEPOT_SHADOW_RADIUS: f64 = 10.0;
pub const STOP_SHADOW_RADIUS: f64 = 8.0;
pub const STOP_HALF_SIZE: f64 = 7.0;
pub const RIBBON_STROKE_WIDTH: f64 = 2.0;

// Labels
pub const LABEL_FONT_SIZE: f64 = 12.0;
pub const LABEL_PAD_X: f64 = 10.0;
pub const LABEL_HEIGHT: f64 = 20.0;
/// Top edge of the label box, relative to the marker anchor
pub const LABEL_TOP: f64 = -40.0;
/// Text baseline, relative to the marker anchor
pub const LABEL_BASELINE: f64 = -28.0;
/// Text width assumed when the surface cannot measure text
pub const FALLBACK_TEXT_WIDTH: f64 = 60.0;
pub const FONT_FAMILY: &str = "Arial, sans-serif";
