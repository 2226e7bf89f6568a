//! Shape matcher: does the icon's silhouette equal a prescribed mask?
//!
//! Decides whether an icon already has the device mask's shape (and can
//! skip the "wrap in adaptive background" treatment) by rasterizing the
//! mask into the icon's bounding box and counting the symmetric
//! set-difference against the icon's own coverage.

use crate::mask::MaskPath;
use crate::scan::PixelBounds;
use crate::surface::{CoverageSurface, MIN_VISIBLE_ALPHA};

/// Maximum deviation of the bounding box from square before matching is
/// rejected outright. A decidedly non-square icon cannot be the mask.
pub(crate) const BOUND_RATIO_MARGIN: f32 = 0.05;

/// Fraction of differing pixels below which the silhouettes are
/// considered the same shape.
pub(crate) const PIXEL_DIFF_THRESHOLD: f32 = 0.005;

/// Whether the icon's silhouette matches the mask shape.
///
/// The aspect gate runs first: when the bounding box is more than
/// [`BOUND_RATIO_MARGIN`] away from square, the answer is `false`
/// without rasterizing anything.
pub(crate) fn matches_mask(
    surface: &CoverageSurface,
    bounds: PixelBounds,
    mask: &MaskPath,
) -> bool {
    if !aspect_is_square(bounds) {
        return false;
    }
    match differing_fraction(surface, bounds, mask) {
        Some(fraction) => fraction < PIXEL_DIFF_THRESHOLD,
        None => false,
    }
}

#[allow(clippy::cast_precision_loss)]
fn aspect_is_square(bounds: PixelBounds) -> bool {
    let ratio = bounds.width() as f32 / bounds.height() as f32;
    (ratio - 1.0).abs() <= BOUND_RATIO_MARGIN
}

/// Symmetric set-difference between the icon's coverage and the filled
/// mask, restricted to the bounding box, as a fraction of the box area.
///
/// Both sides are binarized with the same [`MIN_VISIBLE_ALPHA`]
/// threshold the scanner uses.
#[allow(clippy::cast_precision_loss)]
fn differing_fraction(
    surface: &CoverageSurface,
    bounds: PixelBounds,
    mask: &MaskPath,
) -> Option<f32> {
    let width = bounds.width();
    let height = bounds.height();
    let raster = mask.rasterize(width, height)?;
    let pixels = raster.pixels();

    let mut differing = 0usize;
    for y in 0..height {
        for x in 0..width {
            let icon_on = surface.is_visible(bounds.left + x, bounds.top + y);
            let mask_on = pixels[y * width + x].alpha() > MIN_VISIBLE_ALPHA;
            if icon_on != mask_on {
                differing += 1;
            }
        }
    }

    Some(differing as f32 / (width * height) as f32)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::scan::scan_borders;

    /// Draw a mask's own raster into a fresh surface and scan it.
    fn surface_from_mask(mask: &MaskPath, side: usize) -> (CoverageSurface, PixelBounds) {
        let mut surface = CoverageSurface::new(side);
        surface.reset(side, side);
        let raster = mask.rasterize(side, side).unwrap();
        let pixels = raster.pixels();
        for y in 0..side {
            for x in 0..side {
                surface.set_alpha(x, y, pixels[y * side + x].alpha());
            }
        }
        let mut left = vec![-1.0; side];
        let mut right = vec![-1.0; side];
        let bounds = scan_borders(&surface, &mut left, &mut right).unwrap();
        (surface, bounds)
    }

    #[test]
    fn mask_matches_its_own_raster_exactly() {
        let mask = MaskPath::circle().unwrap();
        let (surface, bounds) = surface_from_mask(&mask, 64);
        let fraction = differing_fraction(&surface, bounds, &mask).unwrap();
        assert!(
            fraction.abs() < f32::EPSILON,
            "identical silhouettes must have zero differing fraction, got {fraction}"
        );
        assert!(matches_mask(&surface, bounds, &mask));
    }

    #[test]
    fn circle_icon_does_not_match_square_mask() {
        let circle = MaskPath::circle().unwrap();
        let square = MaskPath::square().unwrap();
        let (surface, bounds) = surface_from_mask(&circle, 64);
        // The corner wedges differ: roughly 1 - π/4 of the box.
        let fraction = differing_fraction(&surface, bounds, &square).unwrap();
        assert!(fraction > 0.1, "expected large difference, got {fraction}");
        assert!(!matches_mask(&surface, bounds, &square));
    }

    #[test]
    fn non_square_bounds_short_circuit() {
        // A 100×40 bounding box (ratio 2.5) fails the aspect gate; the
        // surface content is irrelevant and never inspected.
        let surface = CoverageSurface::new(128);
        let bounds = PixelBounds {
            left: 0,
            top: 0,
            right: 99,
            bottom: 39,
        };
        let mask = MaskPath::circle().unwrap();
        assert!(!matches_mask(&surface, bounds, &mask));
    }

    #[test]
    fn aspect_gate_tolerates_five_percent() {
        assert!(aspect_is_square(PixelBounds {
            left: 0,
            top: 0,
            right: 103,
            bottom: 99,
        }));
        assert!(!aspect_is_square(PixelBounds {
            left: 0,
            top: 0,
            right: 110,
            bottom: 99,
        }));
    }
}
