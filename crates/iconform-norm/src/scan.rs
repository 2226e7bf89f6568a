//! Boundary scanner: per-row silhouette extraction.
//!
//! Walks the active region of a coverage surface row by row, recording
//! the first and last visible column of each row and the overall
//! bounding box. The resulting border sequences are the discretized
//! silhouette that the hull pass convexifies.

use crate::surface::CoverageSurface;

/// Row sentinel meaning "no visible cell in this row".
///
/// Border values are `f32` because the hull pass overwrites gap rows
/// with interpolated, fractional column positions.
pub(crate) const NO_PIXEL: f32 = -1.0;

/// Inclusive pixel-space bounding box of the visible icon content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PixelBounds {
    pub left: usize,
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
}

impl PixelBounds {
    pub(crate) const fn width(self) -> usize {
        self.right - self.left + 1
    }

    pub(crate) const fn height(self) -> usize {
        self.bottom - self.top + 1
    }
}

/// Scan the active region, filling `left` and `right` for rows
/// `0..height` and returning the bounding box of visible content.
///
/// Rows with no visible cell get [`NO_PIXEL`] in both borders. Returns
/// `None` when the surface has no visible cell at all, in which case the
/// caller must short-circuit to a scale of `1.0`.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn scan_borders(
    surface: &CoverageSurface,
    left: &mut [f32],
    right: &mut [f32],
) -> Option<PixelBounds> {
    let mut bounds: Option<PixelBounds> = None;

    for y in 0..surface.height() {
        let mut first_x: Option<usize> = None;
        let mut last_x = 0;
        for x in 0..surface.width() {
            if surface.is_visible(x, y) {
                if first_x.is_none() {
                    first_x = Some(x);
                }
                last_x = x;
            }
        }

        let Some(first_x) = first_x else {
            left[y] = NO_PIXEL;
            right[y] = NO_PIXEL;
            continue;
        };

        left[y] = first_x as f32;
        right[y] = last_x as f32;
        bounds = Some(match bounds {
            None => PixelBounds {
                left: first_x,
                top: y,
                right: last_x,
                bottom: y,
            },
            Some(b) => PixelBounds {
                left: b.left.min(first_x),
                top: b.top,
                right: b.right.max(last_x),
                bottom: y,
            },
        });
    }

    bounds
}
