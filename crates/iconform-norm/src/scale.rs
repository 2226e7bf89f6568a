//! Hull area integration and scale derivation.
//!
//! The convexified borders are integrated into a hull area, compared to
//! the bounding-box area to classify how round the silhouette is, and
//! mapped to a single multiplicative scale that equalizes perceived
//! icon footprint across shapes.

use crate::scan::{NO_PIXEL, PixelBounds};

/// Largest fraction of the rendered surface a square silhouette may
/// occupy after scaling.
pub const MAX_SQUARE_AREA_FACTOR: f32 = 375.0 / 576.0;

/// Largest fraction of the rendered surface a circular silhouette may
/// occupy after scaling. Slightly more generous than the square budget:
/// a circle's corners are empty, so it can afford a bigger footprint.
pub const MAX_CIRCLE_AREA_FACTOR: f32 = 380.0 / 576.0;

/// Area ratio of an inscribed circle to its bounding square (π/4).
///
/// Hull/box ratios below this read as "rounder than a circle" and get
/// the circle budget; ratios above interpolate toward the square budget.
pub const CIRCLE_AREA_BY_RECT: f32 = std::f32::consts::FRAC_PI_4;

/// Slope of the linear interpolation between the circle and square
/// budgets over the hull/box ratio range `[π/4, 1]`.
pub const LINEAR_SCALE_SLOPE: f32 =
    (MAX_CIRCLE_AREA_FACTOR - MAX_SQUARE_AREA_FACTOR) / (1.0 - CIRCLE_AREA_BY_RECT);

/// Integrated hull metrics for one scanned icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct HullMetrics {
    /// Sum of per-row convex hull widths, in cells.
    pub hull_area: f32,
    /// Hull area divided by bounding-box area; proxy for roundness.
    pub hull_by_box: f32,
}

/// Integrate the convexified borders into hull metrics.
///
/// Rows still holding the sentinel (outside `[top, bottom]`) contribute
/// nothing. The hull area can never exceed the bounding-box area.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn integrate_hull(
    left: &[f32],
    right: &[f32],
    height: usize,
    bounds: PixelBounds,
) -> HullMetrics {
    let mut hull_area = 0.0f32;
    for y in 0..height {
        if left[y] <= NO_PIXEL {
            continue;
        }
        hull_area += right[y] - left[y] + 1.0;
    }

    let box_area = (bounds.width() * bounds.height()) as f32;
    HullMetrics {
        hull_area,
        hull_by_box: hull_area / box_area,
    }
}

/// Map hull metrics to the final multiplicative scale for a render of
/// `width × height` cells.
///
/// The shape class picks a target area budget (`scale_required`); the
/// fraction of the whole render the hull actually occupies
/// (`area_scale`) is then pushed down to that budget. The square root
/// accounts for the scale applying to both axes. Icons already at or
/// under budget are never scaled up.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn scale_factor(metrics: HullMetrics, width: usize, height: usize) -> f32 {
    let scale_required = if metrics.hull_by_box < CIRCLE_AREA_BY_RECT {
        MAX_CIRCLE_AREA_FACTOR
    } else {
        LINEAR_SCALE_SLOPE.mul_add(1.0 - metrics.hull_by_box, MAX_SQUARE_AREA_FACTOR)
    };

    let area_scale = metrics.hull_area / (width * height) as f32;
    if area_scale > scale_required {
        (scale_required / area_scale).sqrt()
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn bounds(width: usize, height: usize) -> PixelBounds {
        PixelBounds {
            left: 0,
            top: 0,
            right: width - 1,
            bottom: height - 1,
        }
    }

    #[test]
    fn both_branches_agree_at_the_circle_threshold() {
        // Continuity check: at hull_by_box = π/4 the circle budget and
        // the interpolated square budget must be the same number.
        let circle_branch = MAX_CIRCLE_AREA_FACTOR;
        let square_branch =
            LINEAR_SCALE_SLOPE.mul_add(1.0 - CIRCLE_AREA_BY_RECT, MAX_SQUARE_AREA_FACTOR);
        assert!(
            (circle_branch - square_branch).abs() < 1e-6,
            "budget discontinuity at the circle threshold: \
             {circle_branch} vs {square_branch}"
        );
    }

    #[test]
    fn full_square_saturates_to_square_budget() {
        // A fully opaque N×N render: hull area = box area = render area.
        let metrics = integrate_hull(&[0.0; 64], &[63.0; 64], 64, bounds(64, 64));
        assert!((metrics.hull_by_box - 1.0).abs() < 1e-6);
        let scale = scale_factor(metrics, 64, 64);
        // sqrt(375/576) ≈ 0.8068
        assert!(
            (scale - 0.8068).abs() < 1e-3,
            "expected the square saturation scale, got {scale}"
        );
    }

    #[test]
    fn round_shapes_get_the_circle_budget() {
        let metrics = HullMetrics {
            hull_area: 700.0,
            hull_by_box: 0.70,
        };
        let scale = scale_factor(metrics, 32, 32);
        let expected = (MAX_CIRCLE_AREA_FACTOR / (700.0 / 1024.0)).sqrt();
        assert!((scale - expected).abs() < 1e-6, "got {scale}");
    }

    #[test]
    fn small_icons_are_never_scaled_up() {
        // Hull occupies far less of the render than the budget allows.
        let metrics = HullMetrics {
            hull_area: 100.0,
            hull_by_box: 1.0,
        };
        let scale = scale_factor(metrics, 64, 64);
        assert!((scale - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn hull_never_exceeds_box() {
        let left = [1.0, 0.0, 1.0, NO_PIXEL];
        let right = [2.0, 3.0, 2.0, NO_PIXEL];
        let metrics = integrate_hull(&left, &right, 4, bounds(4, 3));
        assert!(metrics.hull_by_box <= 1.0 + 1e-6);
        assert!((metrics.hull_area - 8.0).abs() < 1e-6);
    }

    #[test]
    fn growing_footprint_never_grows_the_scale() {
        // Fixed shape class (hull_by_box = 1); increasing area_scale.
        let mut previous = f32::INFINITY;
        for hull_area in [400.0, 1600.0, 2500.0, 4096.0] {
            let metrics = HullMetrics {
                hull_area,
                hull_by_box: 1.0,
            };
            let scale = scale_factor(metrics, 64, 64);
            assert!(
                scale <= previous,
                "scale increased from {previous} to {scale} at hull area {hull_area}"
            );
            previous = scale;
        }
    }
}
