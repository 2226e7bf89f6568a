//! The measurement pipeline: render, scan, convexify, integrate, scale.

use crate::cache::{AdaptiveScale, AdaptiveScaleCache};
use crate::hull::{Edge, convexify};
use crate::mask::MaskPath;
use crate::matcher;
use crate::scale::{integrate_hull, scale_factor};
use crate::scan::{NO_PIXEL, scan_borders};
use crate::source::{IconSource, PathSource};
use crate::surface::CoverageSurface;
use crate::types::{Insets, ScaleResult};

/// Measures rendered icons and derives footprint-equalizing scales.
///
/// A normalizer owns its scratch buffers (coverage surface, border
/// sequences, slope array) and reuses them across calls, so
/// [`measure`](Self::measure) takes `&mut self` and a single instance
/// must not be shared between threads mid-call. Callers either guard an
/// instance with a mutex or keep one per worker thread; the buffers are
/// small enough that per-worker instances are the usual choice.
#[derive(Debug, Clone)]
pub struct ShapeNormalizer {
    max_size: usize,
    surface: CoverageSurface,
    left_border: Vec<f32>,
    right_border: Vec<f32>,
    slopes: Vec<f32>,
}

impl ShapeNormalizer {
    /// Default target icon size in pixels.
    pub const DEFAULT_ICON_SIZE: usize = 48;

    /// Create a normalizer for icons drawn at `icon_size` pixels.
    ///
    /// The working surface is twice the target size so that consumers
    /// scaling the rendered icon down to `icon_size` never upscale.
    /// A zero size is clamped to one pixel.
    #[must_use]
    pub fn new(icon_size: usize) -> Self {
        let max_size = icon_size.max(1) * 2;
        Self {
            max_size,
            surface: CoverageSurface::new(max_size),
            left_border: vec![NO_PIXEL; max_size],
            right_border: vec![NO_PIXEL; max_size],
            slopes: vec![0.0; max_size],
        }
    }

    /// Side length of the working surface.
    #[must_use]
    pub const fn max_size(&self) -> usize {
        self.max_size
    }

    /// Measure an icon and derive its normalization scale.
    ///
    /// When `mask` is supplied, the result additionally reports whether
    /// the icon's silhouette matches that shape. A render with no
    /// visible pixel short-circuits to a scale of `1.0` with unset
    /// bounds (and a mask verdict of `false`).
    #[allow(clippy::cast_precision_loss)]
    pub fn measure(&mut self, source: &dyn IconSource, mask: Option<&MaskPath>) -> ScaleResult {
        // 1. Render at an aspect-preserving size within the surface.
        let (width, height) = self.render_dimensions(source);
        self.surface.reset(width, height);
        source.draw(&mut self.surface);

        // 2. Scan per-row borders and the bounding box.
        self.left_border.fill(NO_PIXEL);
        self.right_border.fill(NO_PIXEL);
        self.slopes.fill(0.0);
        let Some(bounds) = scan_borders(&self.surface, &mut self.left_border, &mut self.right_border)
        else {
            return ScaleResult {
                scale: 1.0,
                bounds: None,
                matches_mask: mask.map(|_| false),
            };
        };

        // 3. Convexify each border toward its own outside.
        convexify(
            &mut self.left_border,
            &mut self.slopes,
            Edge::Left,
            bounds.top,
            bounds.bottom,
        );
        convexify(
            &mut self.right_border,
            &mut self.slopes,
            Edge::Right,
            bounds.top,
            bounds.bottom,
        );

        // 4. Integrate the hull and derive the scale.
        let metrics = integrate_hull(&self.left_border, &self.right_border, height, bounds);
        let scale = scale_factor(metrics, width, height);

        let insets = Insets {
            left: bounds.left as f32 / width as f32,
            top: bounds.top as f32 / height as f32,
            right: 1.0 - bounds.right as f32 / width as f32,
            bottom: 1.0 - bounds.bottom as f32 / height as f32,
        };

        // 5. Optional mask-shape verdict on the same coverage.
        let matches_mask = mask.map(|m| matcher::matches_mask(&self.surface, bounds, m));

        ScaleResult {
            scale,
            bounds: Some(insets),
            matches_mask,
        }
    }

    /// Scale and bounds for icons that share the device-wide adaptive
    /// mask, computed once per process via `cache`.
    ///
    /// The first call renders the mask itself as a neutral filler
    /// (actual icon art is irrelevant: the silhouette is the mask) and
    /// caches the measurement; later calls return the cached value
    /// without touching the scratch buffers.
    pub fn adaptive_scale(
        &mut self,
        mask: &MaskPath,
        cache: &AdaptiveScaleCache,
    ) -> AdaptiveScale {
        cache.get_or_compute(|| {
            let filler = PathSource::new(mask.clone());
            let measured = self.measure(&filler, None);
            AdaptiveScale {
                scale: measured.scale,
                bounds: measured.bounds.unwrap_or(Insets::ZERO),
            }
        })
    }

    /// Pick render dimensions: the longest axis is pinned to the
    /// surface side and the other follows the intrinsic aspect ratio.
    /// Absent or zero intrinsic dimensions fall back to a full-surface
    /// square render; oversized intrinsics shrink proportionally.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn render_dimensions(&self, source: &dyn IconSource) -> (usize, usize) {
        let mut width = self.max_size;
        let mut height = self.max_size;
        if let Some((w, h)) = source.intrinsic_size() {
            if w > 0 && h > 0 {
                let ratio = f64::from(w) / f64::from(h);
                if w > h {
                    height = (width as f64 / ratio) as usize;
                } else if h > w {
                    width = (height as f64 * ratio) as usize;
                }
            }
        }
        (width, height)
    }
}
