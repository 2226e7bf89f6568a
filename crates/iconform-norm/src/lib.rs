//! iconform-norm: shape-aware icon scale normalization (sans-IO).
//!
//! Icons of different silhouettes — circles, squares, squircles,
//! free-form art — read as different visual sizes when drawn into the
//! same launcher grid cell. This crate measures a rendered icon's
//! silhouette and derives a single multiplicative scale factor that
//! equalizes the perceived footprint:
//!
//! boundary scan -> convex hull approximation -> area integration ->
//! scale mapping
//!
//! with an optional mask-shape match and a process-lifetime cache for
//! icons that share the device-wide adaptive mask.
//!
//! This crate has **no I/O dependencies** — icons arrive through the
//! [`IconSource`] capability (an in-memory coverage draw), and results
//! are plain values. Loading, theming, and drawing live with the
//! embedder.
//!
//! # Example
//!
//! ```
//! use iconform_norm::{MaskPath, PathSource, ShapeNormalizer};
//!
//! # fn main() -> Result<(), iconform_norm::MaskPathError> {
//! let mut normalizer = ShapeNormalizer::new(ShapeNormalizer::DEFAULT_ICON_SIZE);
//! let mask = MaskPath::circle()?;
//! let icon = PathSource::new(mask.clone());
//! let result = normalizer.measure(&icon, Some(&mask));
//! assert!(result.scale <= 1.0);
//! assert_eq!(result.matches_mask, Some(true));
//! # Ok(())
//! # }
//! ```

pub mod cache;
mod hull;
pub mod mask;
mod matcher;
pub mod normalizer;
pub mod scale;
mod scan;
pub mod source;
pub mod surface;
pub mod types;

pub use cache::{AdaptiveScale, AdaptiveScaleCache};
pub use mask::MaskPath;
pub use normalizer::ShapeNormalizer;
pub use source::{IconSource, ImageSource, PathSource};
pub use surface::{CoverageSurface, MIN_VISIBLE_ALPHA};
pub use types::{Insets, MaskPathError, ScaleResult};
