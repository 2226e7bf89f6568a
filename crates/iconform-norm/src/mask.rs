//! Mask paths: closed silhouettes in unit-square coordinates.
//!
//! A [`MaskPath`] describes a target icon silhouette (the device-wide
//! adaptive mask, or any shape the caller wants to test against) as a
//! closed `tiny-skia` path over the unit square `[0, 1] × [0, 1]`.
//! Rasterization scales the path to pixel dimensions and fills it; the
//! normalizer only ever consumes the filled coverage.

use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform};

use crate::types::MaskPathError;

/// How far outside the unit square a path may stray before validation
/// rejects it. Absorbs float noise from curve flattening.
const UNIT_SLOP: f32 = 1e-4;

/// A closed mask silhouette in unit-square coordinates.
#[derive(Debug, Clone)]
pub struct MaskPath {
    path: tiny_skia::Path,
}

impl MaskPath {
    /// Wrap an arbitrary closed path, validating that it stays within
    /// the unit square.
    ///
    /// # Errors
    ///
    /// Returns [`MaskPathError::OutsideUnitSquare`] when the path's
    /// bounds escape `[0, 1] × [0, 1]`.
    pub fn new(path: tiny_skia::Path) -> Result<Self, MaskPathError> {
        let bounds = path.bounds();
        if bounds.left() < -UNIT_SLOP
            || bounds.top() < -UNIT_SLOP
            || bounds.right() > 1.0 + UNIT_SLOP
            || bounds.bottom() > 1.0 + UNIT_SLOP
        {
            return Err(MaskPathError::OutsideUnitSquare {
                left: bounds.left(),
                top: bounds.top(),
                right: bounds.right(),
                bottom: bounds.bottom(),
            });
        }
        Ok(Self { path })
    }

    /// The full-bleed circle inscribed in the unit square.
    ///
    /// # Errors
    ///
    /// Returns [`MaskPathError::Degenerate`] if path construction fails.
    pub fn circle() -> Result<Self, MaskPathError> {
        let mut pb = PathBuilder::new();
        pb.push_circle(0.5, 0.5, 0.5);
        pb.finish().ok_or(MaskPathError::Degenerate).and_then(Self::new)
    }

    /// The full unit square.
    ///
    /// # Errors
    ///
    /// Returns [`MaskPathError::Degenerate`] if path construction fails.
    pub fn square() -> Result<Self, MaskPathError> {
        Self::rounded_square(0.0)
    }

    /// A square with quarter-round corners of the given radius, as a
    /// fraction of the side. The radius is clamped to `[0, 0.5]`; at
    /// `0.5` the shape degenerates gracefully toward the circle.
    ///
    /// # Errors
    ///
    /// Returns [`MaskPathError::Degenerate`] if path construction fails.
    pub fn rounded_square(corner_radius: f32) -> Result<Self, MaskPathError> {
        let r = if corner_radius.is_finite() {
            corner_radius.clamp(0.0, 0.5)
        } else {
            0.0
        };

        let mut pb = PathBuilder::new();
        pb.move_to(r, 0.0);
        pb.line_to(1.0 - r, 0.0);
        pb.quad_to(1.0, 0.0, 1.0, r);
        pb.line_to(1.0, 1.0 - r);
        pb.quad_to(1.0, 1.0, 1.0 - r, 1.0);
        pb.line_to(r, 1.0);
        pb.quad_to(0.0, 1.0, 0.0, 1.0 - r);
        pb.line_to(0.0, r);
        pb.quad_to(0.0, 0.0, r, 0.0);
        pb.close();
        pb.finish().ok_or(MaskPathError::Degenerate).and_then(Self::new)
    }

    /// The underlying unit-square path.
    #[must_use]
    pub const fn path(&self) -> &tiny_skia::Path {
        &self.path
    }

    /// Rasterize the filled mask at the given pixel dimensions.
    ///
    /// Returns `None` for a zero-sized target; callers treat that as
    /// "no coverage" rather than an error.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub(crate) fn rasterize(&self, width: usize, height: usize) -> Option<Pixmap> {
        let mut pixmap = Pixmap::new(width as u32, height as u32)?;
        let mut paint = Paint::default();
        paint.set_color_rgba8(255, 255, 255, 255);
        paint.anti_alias = true;
        let transform = Transform::from_scale(width as f32, height as f32);
        pixmap.fill_path(&self.path, &paint, FillRule::Winding, transform, None);
        Some(pixmap)
    }
}
