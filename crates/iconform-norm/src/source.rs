//! Icon sources: the rendering capability consumed by the normalizer.
//!
//! [`IconSource`] decouples the measurement pipeline from any concrete
//! graphics stack. Anything that can report an intrinsic size and splat
//! coverage into a [`CoverageSurface`] can be measured — a decoded
//! raster, a vector shape, a GPU read-back, a test stub.

use image::GrayImage;
use image::imageops::FilterType;

use crate::mask::MaskPath;
use crate::surface::CoverageSurface;

/// A renderable icon: reports its natural size and draws its coverage.
pub trait IconSource {
    /// Natural pixel dimensions of the icon art, if it has any.
    ///
    /// Sources with no intrinsic size (vector shapes, procedural fills)
    /// return `None` and are rendered square at the full surface side.
    fn intrinsic_size(&self) -> Option<(u32, u32)>;

    /// Draw the icon's coverage into the active region of `surface`.
    ///
    /// The surface has already been cleared and sized to the region the
    /// normalizer chose; implementations must not draw outside it.
    fn draw(&self, surface: &mut CoverageSurface);
}

/// Icon source backed by a decoded raster image.
///
/// Only the alpha channel participates in measurement; color is
/// irrelevant to the silhouette and is dropped at construction.
#[derive(Debug, Clone)]
pub struct ImageSource {
    alpha: GrayImage,
}

impl ImageSource {
    /// Extract the alpha channel of a decoded RGBA image.
    #[must_use]
    pub fn from_rgba(image: &image::RgbaImage) -> Self {
        let alpha = GrayImage::from_fn(image.width(), image.height(), |x, y| {
            image::Luma([image.get_pixel(x, y)[3]])
        });
        Self { alpha }
    }

    /// Wrap a pre-extracted alpha (or luma-as-coverage) channel.
    #[must_use]
    pub const fn from_alpha(alpha: GrayImage) -> Self {
        Self { alpha }
    }
}

impl IconSource for ImageSource {
    fn intrinsic_size(&self) -> Option<(u32, u32)> {
        Some(self.alpha.dimensions())
    }

    #[allow(clippy::cast_possible_truncation)]
    fn draw(&self, surface: &mut CoverageSurface) {
        let width = surface.width();
        let height = surface.height();
        if width == 0 || height == 0 {
            return;
        }
        let resized = image::imageops::resize(
            &self.alpha,
            width as u32,
            height as u32,
            FilterType::Triangle,
        );
        for (x, y, pixel) in resized.enumerate_pixels() {
            surface.set_alpha(x as usize, y as usize, pixel.0[0]);
        }
    }
}

/// Icon source that rasterizes a [`MaskPath`] at full opacity.
///
/// The silhouette is exactly the mask shape, ignoring any icon art —
/// this is the neutral filler used to precompute the shared adaptive
/// scale, and a convenient synthetic shape for tests.
#[derive(Debug, Clone)]
pub struct PathSource {
    mask: MaskPath,
}

impl PathSource {
    /// Build a source that fills the given mask shape.
    #[must_use]
    pub const fn new(mask: MaskPath) -> Self {
        Self { mask }
    }
}

impl IconSource for PathSource {
    fn intrinsic_size(&self) -> Option<(u32, u32)> {
        None
    }

    fn draw(&self, surface: &mut CoverageSurface) {
        let width = surface.width();
        let height = surface.height();
        let Some(raster) = self.mask.rasterize(width, height) else {
            return;
        };
        let pixels = raster.pixels();
        for y in 0..height {
            for x in 0..width {
                surface.set_alpha(x, y, pixels[y * width + x].alpha());
            }
        }
    }
}
