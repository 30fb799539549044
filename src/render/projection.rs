//! Coordinate projection from lat/lng to surface pixels.
//!
//! This is a plain affine map over a margin-expanded bounding box, not a
//! cartographic projection. Longitude runs left to right and latitude is
//! inverted so north is up.

use glam::dvec2;

use crate::errors::RenderError;
use crate::types::{Degrees, Location, ProjectedPoint, Px, Size};

/// Lat/lng bounding box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoBounds {
    pub min_lat: Degrees,
    pub max_lat: Degrees,
    pub min_lng: Degrees,
    pub max_lng: Degrees,
}

impl GeoBounds {
    /// Bounds of all locations, or `None` for an empty set
    pub fn of(locations: &[Location]) -> Option<Self> {
        let first = locations.first()?;
        let init = GeoBounds {
            min_lat: first.lat,
            max_lat: first.lat,
            min_lng: first.lng,
            max_lng: first.lng,
        };
        Some(locations.iter().skip(1).fold(init, |b, loc| GeoBounds {
            min_lat: b.min_lat.min(loc.lat),
            max_lat: b.max_lat.max(loc.lat),
            min_lng: b.min_lng.min(loc.lng),
            max_lng: b.max_lng.max(loc.lng),
        }))
    }

    /// Grow every side by `margin`
    pub fn expand(self, margin: Degrees) -> Self {
        GeoBounds {
            min_lat: self.min_lat - margin,
            max_lat: self.max_lat + margin,
            min_lng: self.min_lng - margin,
            max_lng: self.max_lng + margin,
        }
    }

    pub fn lat_range(&self) -> Degrees {
        self.max_lat - self.min_lat
    }

    pub fn lng_range(&self) -> Degrees {
        self.max_lng - self.min_lng
    }
}

/// Affine lat/lng → pixel transform for one render call.
///
/// Built from margin-expanded bounds only, so both ranges are strictly
/// positive even when every location shares a coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    bounds: GeoBounds,
    padding: Px,
    inner_width: f64,
    inner_height: f64,
}

impl Projection {
    /// Compute the projection for a location set on a surface of `size`.
    ///
    /// `margin` must be finite and strictly positive and `padding` finite and
    /// non-negative; anything else is `RenderError::InvalidOptions`.
    pub fn compute(
        locations: &[Location],
        size: Size,
        padding: Px,
        margin: Degrees,
    ) -> Result<Self, RenderError> {
        if !margin.is_finite() || margin.raw() <= 0.0 {
            return Err(RenderError::InvalidOptions {
                option: "margin",
                requirement: "finite and greater than zero",
                value: margin.raw(),
            });
        }
        if !padding.raw().is_finite() || padding.raw() < 0.0 {
            return Err(RenderError::InvalidOptions {
                option: "padding",
                requirement: "finite and not negative",
                value: padding.raw(),
            });
        }

        if let Some(bad) = locations
            .iter()
            .find(|loc| !loc.lat.is_finite() || !loc.lng.is_finite())
        {
            return Err(RenderError::NonFiniteCoordinate { index: bad.index });
        }

        let inner_width = size.width.raw() - 2.0 * padding.raw();
        let inner_height = size.height.raw() - 2.0 * padding.raw();
        if inner_width <= 0.0 || inner_height <= 0.0 {
            return Err(RenderError::SurfaceTooSmall {
                width: size.width.raw(),
                height: size.height.raw(),
                padding: padding.raw(),
            });
        }

        // An empty set still gets a well-defined (if useless) box around 0,0.
        let raw = GeoBounds::of(locations).unwrap_or(GeoBounds {
            min_lat: Degrees::ZERO,
            max_lat: Degrees::ZERO,
            min_lng: Degrees::ZERO,
            max_lng: Degrees::ZERO,
        });
        let bounds = raw.expand(margin);

        crate::log::debug!(
            min_lat = bounds.min_lat.raw(),
            max_lat = bounds.max_lat.raw(),
            min_lng = bounds.min_lng.raw(),
            max_lng = bounds.max_lng.raw(),
            "projection bounds"
        );

        Ok(Projection {
            bounds,
            padding,
            inner_width,
            inner_height,
        })
    }

    /// Project a geographic coordinate onto the surface
    pub fn project(&self, lat: Degrees, lng: Degrees) -> ProjectedPoint {
        let b = &self.bounds;
        let pad = self.padding.raw();
        let x = pad + (lng - b.min_lng).raw() / b.lng_range().raw() * self.inner_width;
        let y = pad + (b.max_lat - lat).raw() / b.lat_range().raw() * self.inner_height;
        dvec2(x, y)
    }

    /// Project a location's coordinates
    pub fn project_location(&self, location: &Location) -> ProjectedPoint {
        self.project(location.lat, location.lng)
    }

    pub fn bounds(&self) -> GeoBounds {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::defaults;

    fn project_all(locations: &[Location]) -> (Projection, Vec<ProjectedPoint>) {
        let size = Size::new(800.0, 400.0);
        let projection =
            Projection::compute(locations, size, defaults::PADDING, defaults::MARGIN).unwrap();
        let points = locations
            .iter()
            .map(|loc| projection.project_location(loc))
            .collect();
        (projection, points)
    }

    #[test]
    fn north_is_up_and_east_is_right() {
        let locations = vec![
            Location::new(0, "south-west", 10.0, 20.0),
            Location::new(1, "north-east", 11.0, 21.0),
        ];
        let (_, points) = project_all(&locations);
        assert!(points[1].y < points[0].y, "higher latitude must be higher up");
        assert!(points[1].x > points[0].x, "higher longitude must be further right");
    }

    #[test]
    fn points_stay_inside_padding() {
        let locations = vec![
            Location::new(0, "a", -33.9, 151.2),
            Location::new(1, "b", -33.8, 151.3),
            Location::new(2, "c", -34.0, 151.0),
            Location::new(3, "d", -33.85, 151.25),
        ];
        let (_, points) = project_all(&locations);
        for p in points {
            assert!((60.0..=740.0).contains(&p.x), "x out of bounds: {}", p.x);
            assert!((60.0..=340.0).contains(&p.y), "y out of bounds: {}", p.y);
        }
    }

    #[test]
    fn identical_points_project_to_finite_center() {
        let locations = vec![
            Location::new(0, "depot", 52.0, 4.0),
            Location::new(1, "same", 52.0, 4.0),
        ];
        let (projection, points) = project_all(&locations);
        assert!(projection.bounds().lat_range().raw() > 0.0);
        assert!(projection.bounds().lng_range().raw() > 0.0);
        for p in points {
            assert!(p.is_finite());
            assert!((p.x - 400.0).abs() < 1e-9);
            assert!((p.y - 200.0).abs() < 1e-9);
        }
    }

    #[test]
    fn shared_latitude_still_has_positive_range() {
        let locations = vec![
            Location::new(0, "west", 0.0, 0.0),
            Location::new(1, "east", 0.0, 1.0),
        ];
        let (projection, points) = project_all(&locations);
        assert!((projection.bounds().lat_range().raw() - 0.02).abs() < 1e-12);
        assert!(points.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn margin_is_applied_before_range() {
        let locations = vec![Location::new(0, "only", 0.0, 0.0)];
        let (projection, _) = project_all(&locations);
        let b = projection.bounds();
        assert_eq!(b.min_lat, Degrees(-0.01));
        assert_eq!(b.max_lng, Degrees(0.01));
    }

    #[test]
    fn rejects_non_finite_coordinates() {
        let locations = vec![Location::new(0, "bad", f64::NAN, 0.0)];
        let err = Projection::compute(
            &locations,
            Size::new(800.0, 400.0),
            defaults::PADDING,
            defaults::MARGIN,
        )
        .unwrap_err();
        assert!(matches!(err, RenderError::NonFiniteCoordinate { index: 0 }));
    }

    fn compute_with(padding: Px, margin: Degrees) -> Result<Projection, RenderError> {
        let locations = vec![
            Location::new(0, "depot", 52.0, 4.0),
            Location::new(1, "same", 52.0, 4.0),
        ];
        Projection::compute(&locations, Size::new(800.0, 400.0), padding, margin)
    }

    #[test]
    fn zero_margin_is_rejected() {
        let err = compute_with(defaults::PADDING, Degrees(0.0)).unwrap_err();
        assert!(matches!(
            err,
            RenderError::InvalidOptions {
                option: "margin",
                ..
            }
        ));
    }

    #[test]
    fn negative_or_nan_margin_is_rejected() {
        for margin in [-0.01, f64::NAN, f64::INFINITY] {
            let err = compute_with(defaults::PADDING, Degrees(margin)).unwrap_err();
            assert!(
                matches!(err, RenderError::InvalidOptions { option: "margin", .. }),
                "margin {margin}"
            );
        }
    }

    #[test]
    fn negative_padding_is_rejected() {
        let err = compute_with(Px(-5.0), defaults::MARGIN).unwrap_err();
        assert!(matches!(
            err,
            RenderError::InvalidOptions {
                option: "padding",
                ..
            }
        ));
    }

    #[test]
    fn zero_padding_uses_the_whole_surface() {
        let projection = compute_with(Px(0.0), defaults::MARGIN).unwrap();
        let p = projection.project(Degrees(52.0), Degrees(4.0));
        assert!((p.x - 400.0).abs() < 1e-9);
        assert!((p.y - 200.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_surface_smaller_than_padding() {
        let locations = vec![Location::new(0, "a", 0.0, 0.0)];
        let err = Projection::compute(
            &locations,
            Size::new(100.0, 400.0),
            defaults::PADDING,
            defaults::MARGIN,
        )
        .unwrap_err();
        assert!(matches!(err, RenderError::SurfaceTooSmall { .. }));
    }
}
