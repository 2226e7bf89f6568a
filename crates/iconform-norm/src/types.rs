//! Shared types for the icon normalization pipeline.

use serde::{Deserialize, Serialize};

/// Fractional insets of the visible bounding box within the rendered
/// region, each in `[0, 1]` relative to the render width/height.
///
/// Callers use these to pad shadows and badges so they hug the visible
/// art rather than the full (possibly mostly transparent) icon canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Insets {
    /// Distance from the left edge of the render to the first visible
    /// column, as a fraction of the render width.
    pub left: f32,
    /// Distance from the top edge to the first visible row, as a
    /// fraction of the render height.
    pub top: f32,
    /// Distance from the right edge to the last visible column, as a
    /// fraction of the render width.
    pub right: f32,
    /// Distance from the bottom edge to the last visible row, as a
    /// fraction of the render height.
    pub bottom: f32,
}

impl Insets {
    /// No inset on any side: the visible content touches every edge.
    pub const ZERO: Self = Self {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };
}

/// Result of measuring a single icon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleResult {
    /// Multiplicative factor to apply before drawing the icon at its
    /// target size. At most `1.0`; icons are never scaled up.
    pub scale: f32,

    /// Fractional insets of the visible bounding box, or `None` when the
    /// render contained no visible pixel.
    pub bounds: Option<Insets>,

    /// Whether the icon's silhouette matches the supplied mask shape.
    /// `None` when no mask was supplied to the measurement.
    pub matches_mask: Option<bool>,
}

/// Errors raised when constructing a [`MaskPath`](crate::mask::MaskPath).
///
/// The measurement pipeline itself is infallible; only mask construction
/// can be handed invalid input.
#[derive(Debug, thiserror::Error)]
pub enum MaskPathError {
    /// The path was empty or collapsed to nothing.
    #[error("mask path is empty or degenerate")]
    Degenerate,

    /// The path's bounds escape the unit square it must be defined in.
    #[error(
        "mask path extends outside the unit square: \
         left {left}, top {top}, right {right}, bottom {bottom}"
    )]
    OutsideUnitSquare {
        /// Leftmost extent of the offending path.
        left: f32,
        /// Topmost extent of the offending path.
        top: f32,
        /// Rightmost extent of the offending path.
        right: f32,
        /// Bottommost extent of the offending path.
        bottom: f32,
    },
}
