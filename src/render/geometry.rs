//! Pure geometry: everything the draw step needs, computed without a surface.
//!
//! `RouteGeometry` covers the path, arrowheads, and sequence badges.
//! `MarkerGeometry` covers glyphs, shadows, and label boxes. Both take a
//! `Projection` and return plain coordinates, so they can be tested without
//! any drawing surface.

use glam::{DVec2, dvec2};

use super::defaults;
use super::primitives::Font;
use super::projection::Projection;
use super::surface::TextMeasure;
use crate::errors::RenderError;
use crate::types::{Angle, Location, ProjectedPoint, Route};

/// Font used for location labels
pub const LABEL_FONT: Font = Font::bold(defaults::LABEL_FONT_SIZE);
/// Font used for sequence numbers
pub const BADGE_FONT: Font = Font::bold(defaults::BADGE_FONT_SIZE);

// ============================================================================
// Route path
// ============================================================================

/// Arrowhead and sequence badge for one leg of the route
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentMark {
    /// 1-based leg number
    pub sequence: usize,
    pub midpoint: ProjectedPoint,
    pub angle: Angle,
    /// Tip first, then the two base corners
    pub arrowhead: [ProjectedPoint; 3],
    pub badge_center: ProjectedPoint,
}

impl SegmentMark {
    /// Place the arrow and badge for the leg `from → to`
    pub fn between(sequence: usize, from: ProjectedPoint, to: ProjectedPoint) -> Self {
        let midpoint = (from + to) * 0.5;
        let angle = Angle::between(from, to);

        // Arrow is defined pointing along +x, then rotated into place.
        let rotation = angle.unit();
        let local = [
            dvec2(defaults::ARROW_LENGTH, 0.0),
            dvec2(0.0, defaults::ARROW_HALF_WIDTH),
            dvec2(0.0, -defaults::ARROW_HALF_WIDTH),
        ];
        let arrowhead = local.map(|p| midpoint + rotation.rotate(p));

        let badge_center = midpoint + angle.perpendicular().unit() * defaults::BADGE_OFFSET;

        Self {
            sequence,
            midpoint,
            angle,
            arrowhead,
            badge_center,
        }
    }
}

/// Projected route path plus one mark per leg
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouteGeometry {
    pub points: Vec<ProjectedPoint>,
    pub marks: Vec<SegmentMark>,
}

impl RouteGeometry {
    /// Project every stop on the route and place the leg marks.
    ///
    /// Routes with fewer than two stops produce an empty geometry.
    pub fn compute(
        route: &Route,
        locations: &[Location],
        projection: &Projection,
    ) -> Result<Self, RenderError> {
        let points = route
            .stops()
            .iter()
            .enumerate()
            .map(|(position, &index)| {
                locations
                    .get(index)
                    .map(|loc| projection.project_location(loc))
                    .ok_or(RenderError::UnknownLocation {
                        position,
                        index,
                        count: locations.len(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if points.len() < 2 {
            return Ok(Self::default());
        }

        let marks = points
            .windows(2)
            .enumerate()
            .map(|(i, pair)| SegmentMark::between(i + 1, pair[0], pair[1]))
            .collect();

        Ok(Self { points, marks })
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

// ============================================================================
// Markers
// ============================================================================

/// What a location is on this map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerRole {
    Depot,
    Stop,
}

/// Glyph parts for a marker, in surface coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum Glyph {
    /// Building: body, roof triangle, door
    Depot {
        body: Bounds,
        roof: [DVec2; 3],
        door: Bounds,
    },
    /// Parcel: square with a crosshair ribbon
    Stop {
        body: Bounds,
        ribbon: [(DVec2, DVec2); 2],
    },
}

/// Axis-aligned box given by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub origin: DVec2,
    pub size: DVec2,
}

impl Bounds {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            origin: dvec2(x, y),
            size: dvec2(w, h),
        }
    }

    pub fn center_x(&self) -> f64 {
        self.origin.x + self.size.x / 2.0
    }
}

/// Label box and text placement
#[derive(Debug, Clone, PartialEq)]
pub struct LabelGeometry {
    pub text: String,
    pub frame: Bounds,
    pub baseline: DVec2,
    /// False when the surface could not measure the text
    pub measured: bool,
}

impl LabelGeometry {
    /// Place `text` above `anchor`, sized by the surface's text metrics
    pub fn above(anchor: DVec2, text: &str, metrics: &dyn TextMeasure) -> Self {
        let measured_width = metrics.measure_text(text, &LABEL_FONT);
        let width = measured_width.unwrap_or(defaults::FALLBACK_TEXT_WIDTH);
        let frame = Bounds::new(
            anchor.x - width / 2.0 - defaults::LABEL_PAD_X / 2.0,
            anchor.y + defaults::LABEL_TOP,
            width + defaults::LABEL_PAD_X,
            defaults::LABEL_HEIGHT,
        );
        Self {
            text: text.to_string(),
            frame,
            baseline: dvec2(anchor.x, anchor.y + defaults::LABEL_BASELINE),
            measured: measured_width.is_some(),
        }
    }
}

/// Everything needed to draw one location
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerGeometry {
    pub index: usize,
    pub role: MarkerRole,
    pub anchor: ProjectedPoint,
    pub shadow_center: ProjectedPoint,
    pub shadow_radius: f64,
    pub glyph: Glyph,
    pub label: LabelGeometry,
}

impl MarkerGeometry {
    /// Geometry for one location
    pub fn for_location(
        location: &Location,
        role: MarkerRole,
        projection: &Projection,
        metrics: &dyn TextMeasure,
    ) -> Self {
        let anchor = projection.project_location(location);
        let (x, y) = (anchor.x, anchor.y);

        let (glyph, shadow_radius) = match role {
            MarkerRole::Depot => (
                Glyph::Depot {
                    body: Bounds::new(x - 10.0, y - 15.0, 20.0, 20.0),
                    roof: [
                        dvec2(x - 15.0, y - 15.0),
                        dvec2(x, y - 25.0),
                        dvec2(x + 15.0, y - 15.0),
                    ],
                    door: Bounds::new(x - 3.0, y - 8.0, 6.0, 13.0),
                },
                defaults::DEPOT_SHADOW_RADIUS,
            ),
            MarkerRole::Stop => {
                let h = defaults::STOP_HALF_SIZE;
                (
                    Glyph::Stop {
                        body: Bounds::new(x - h, y - h, 2.0 * h, 2.0 * h),
                        ribbon: [
                            (dvec2(x, y - h), dvec2(x, y + h)),
                            (dvec2(x - h, y), dvec2(x + h, y)),
                        ],
                    },
                    defaults::STOP_SHADOW_RADIUS,
                )
            }
        };

        let offset = defaults::MARKER_SHADOW_OFFSET;
        Self {
            index: location.index,
            role,
            anchor,
            shadow_center: anchor + dvec2(offset, offset),
            shadow_radius,
            glyph,
            label: LabelGeometry::above(anchor, &location.name, metrics),
        }
    }

    /// Geometry for every location, in input order.
    ///
    /// `depot` is the list position of the location drawn as the depot; it is
    /// not inferred.
    pub fn compute_all(
        locations: &[Location],
        depot: Option<usize>,
        projection: &Projection,
        metrics: &dyn TextMeasure,
    ) -> Vec<Self> {
        locations
            .iter()
            .enumerate()
            .map(|(position, loc)| {
                let role = if depot == Some(position) {
                    MarkerRole::Depot
                } else {
                    MarkerRole::Stop
                };
                Self::for_location(loc, role, projection, metrics)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::surface::{FixedWidthMetrics, NoTextMetrics};
    use crate::types::{Degrees, Size};
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-9;

    fn projection(locations: &[Location]) -> Projection {
        Projection::compute(
            locations,
            Size::new(800.0, 400.0),
            defaults::PADDING,
            defaults::MARGIN,
        )
        .unwrap()
    }

    fn sample_locations() -> Vec<Location> {
        vec![
            Location::new(0, "Depot", 0.0, 0.0),
            Location::new(1, "A", 0.0, 1.0),
            Location::new(2, "B", 1.0, 1.0),
        ]
    }

    #[test]
    fn arrow_angle_for_downward_leg() {
        let mark = SegmentMark::between(1, dvec2(0.0, 0.0), dvec2(0.0, 1.0));
        assert!((mark.angle.radians() - FRAC_PI_2).abs() < EPS);
        assert!((mark.angle.radians() - 1.0_f64.atan2(0.0)).abs() < EPS);
    }

    #[test]
    fn arrowhead_points_along_leg() {
        let mark = SegmentMark::between(1, dvec2(100.0, 100.0), dvec2(200.0, 100.0));
        assert_eq!(mark.midpoint, dvec2(150.0, 100.0));
        let [tip, left, right] = mark.arrowhead;
        assert!((tip - dvec2(160.0, 100.0)).length() < EPS);
        assert!((left - dvec2(150.0, 105.0)).length() < EPS);
        assert!((right - dvec2(150.0, 95.0)).length() < EPS);
    }

    #[test]
    fn badge_sits_perpendicular_to_leg() {
        let mark = SegmentMark::between(3, dvec2(0.0, 0.0), dvec2(100.0, 0.0));
        assert_eq!(mark.sequence, 3);
        assert!((mark.badge_center - dvec2(50.0, 15.0)).length() < EPS);

        let westward = SegmentMark::between(1, dvec2(100.0, 0.0), dvec2(0.0, 0.0));
        assert!((westward.angle.radians().abs() - PI).abs() < EPS);
        assert!((westward.badge_center - dvec2(50.0, -15.0)).length() < EPS);
    }

    #[test]
    fn route_geometry_numbers_legs_from_one() {
        let locations = sample_locations();
        let route = Route::new(vec![0, 1, 2]);
        let geometry = RouteGeometry::compute(&route, &locations, &projection(&locations)).unwrap();
        assert_eq!(geometry.points.len(), 3);
        let sequences: Vec<_> = geometry.marks.iter().map(|m| m.sequence).collect();
        assert_eq!(sequences, vec![1, 2]);
    }

    #[test]
    fn short_routes_have_no_path() {
        let locations = sample_locations();
        let proj = projection(&locations);
        for stops in [vec![], vec![0]] {
            let geometry = RouteGeometry::compute(&Route::new(stops), &locations, &proj).unwrap();
            assert!(geometry.is_empty());
            assert!(geometry.marks.is_empty());
        }
    }

    #[test]
    fn duplicate_visits_overlap_without_error() {
        let locations = sample_locations();
        let route = Route::new(vec![0, 1, 0, 1]);
        let geometry = RouteGeometry::compute(&route, &locations, &projection(&locations)).unwrap();
        assert_eq!(geometry.marks.len(), 3);
        assert_eq!(geometry.marks[0].midpoint, geometry.marks[2].midpoint);
    }

    #[test]
    fn unknown_route_index_is_a_render_error() {
        let locations = sample_locations();
        let route = Route::new(vec![0, 7]);
        let err = RouteGeometry::compute(&route, &locations, &projection(&locations)).unwrap_err();
        assert!(matches!(
            err,
            RenderError::UnknownLocation {
                position: 1,
                index: 7,
                count: 3
            }
        ));
    }

    #[test]
    fn depot_is_explicit_not_inferred() {
        let locations = sample_locations();
        let proj = projection(&locations);
        let metrics = FixedWidthMetrics::new(6.0);

        let markers = MarkerGeometry::compute_all(&locations, Some(2), &proj, &metrics);
        let roles: Vec<_> = markers.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![MarkerRole::Stop, MarkerRole::Stop, MarkerRole::Depot]);

        let none = MarkerGeometry::compute_all(&locations, None, &proj, &metrics);
        assert!(none.iter().all(|m| m.role == MarkerRole::Stop));
    }

    #[test]
    fn shadow_is_offset_down_right() {
        let locations = sample_locations();
        let proj = projection(&locations);
        let markers =
            MarkerGeometry::compute_all(&locations, Some(0), &proj, &FixedWidthMetrics::new(6.0));
        for m in &markers {
            assert_eq!(m.shadow_center - m.anchor, dvec2(2.0, 2.0));
        }
        assert_eq!(markers[0].shadow_radius, 10.0);
        assert_eq!(markers[1].shadow_radius, 8.0);
    }

    #[test]
    fn depot_glyph_has_roof_above_body() {
        let loc = Location::new(0, "Depot", 0.0, 0.0);
        let proj = projection(std::slice::from_ref(&loc));
        let marker =
            MarkerGeometry::for_location(&loc, MarkerRole::Depot, &proj, &NoTextMetrics);
        let Glyph::Depot { body, roof, door } = marker.glyph else {
            panic!("expected depot glyph");
        };
        assert!(roof[1].y < body.origin.y);
        assert!((body.center_x() - marker.anchor.x).abs() < EPS);
        assert!((door.center_x() - marker.anchor.x).abs() < EPS);
    }

    #[test]
    fn label_box_uses_measured_width() {
        let anchor = dvec2(100.0, 200.0);
        let label = LabelGeometry::above(anchor, "Depot", &FixedWidthMetrics::new(6.0));
        // 5 chars * 6px = 30px, plus 10px padding
        assert!(label.measured);
        assert_eq!(label.frame, Bounds::new(80.0, 160.0, 40.0, 20.0));
        assert_eq!(label.baseline, dvec2(100.0, 172.0));
    }

    #[test]
    fn label_box_falls_back_without_metrics() {
        let label = LabelGeometry::above(dvec2(100.0, 200.0), "Depot", &NoTextMetrics);
        assert!(!label.measured);
        assert_eq!(label.frame.size, dvec2(70.0, 20.0));
        assert!((label.frame.center_x() - 100.0).abs() < EPS);
    }

    #[test]
    fn marker_positions_follow_projection() {
        let locations = sample_locations();
        let proj = projection(&locations);
        let markers =
            MarkerGeometry::compute_all(&locations, Some(0), &proj, &NoTextMetrics);
        let expected = proj.project(Degrees(1.0), Degrees(1.0));
        assert_eq!(markers[2].anchor, expected);
    }
}
