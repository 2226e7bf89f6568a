//! Convex hull approximation over per-row border sequences.
//!
//! The scanner's raw borders can have gap rows (no visible cell) and
//! local concavities (notches in the icon art). This pass rewrites a
//! border in place into a monotone convex piecewise-linear edge: gap
//! rows are filled by interpolation and concave bends are flattened by
//! re-anchoring the current segment further up the border.
//!
//! The anchor search is iterative over explicit row indices; the walk
//! is bounded by the top of the border, so worst-case behavior stays
//! `O(rows²)` on pathological zig-zag inputs and the stack stays flat.

use crate::scan::NO_PIXEL;

/// Which silhouette edge a border sequence describes.
///
/// The direction sign decides which way a bend counts as concave: the
/// left edge may only bulge leftward, the right edge only rightward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Edge {
    Left,
    Right,
}

impl Edge {
    const fn direction(self) -> f32 {
        match self {
            Self::Left => 1.0,
            Self::Right => -1.0,
        }
    }
}

/// Sentinel meaning "no segment slope recorded yet".
const NO_SLOPE: f32 = f32::MAX;

/// Rewrite `border[top..=bottom]` into a monotone convex edge.
///
/// `slopes` is caller-provided scratch of the same length as `border`;
/// after the pass, `slopes[j]` holds the slope of the hull segment
/// covering row `j` for every rewritten row.
///
/// `border[top]` must be a valid (non-sentinel) value — the scanner
/// guarantees this, since `top` is the first row with visible content.
/// Rows before `top` and after `bottom` are left untouched.
///
/// A candidate slope exactly equal to the previous segment's slope is
/// treated as convex: equal slopes merge into one straight segment,
/// which keeps the no-inward-bend invariant.
pub(crate) fn convexify(
    border: &mut [f32],
    slopes: &mut [f32],
    edge: Edge,
    top: usize,
    bottom: usize,
) {
    let direction = edge.direction();
    let mut last_valid: Option<usize> = None;
    let mut last_slope = NO_SLOPE;

    for i in (top + 1)..=bottom {
        if border[i] <= NO_PIXEL {
            continue;
        }

        let start = match last_valid {
            // First valid row after the top anchors straight to the top.
            None => top,
            Some(last) => {
                let candidate = slope(border, last, i);
                let mut start = last;
                // A bend against this edge's direction is a concavity:
                // walk the anchor upward until the slope joining it to
                // row `i` no longer undercuts the slope recorded there.
                if (candidate - last_slope) * direction < 0.0 {
                    while start > top {
                        start -= 1;
                        if (slope(border, start, i) - slopes[start]) * direction >= 0.0 {
                            break;
                        }
                    }
                }
                start
            }
        };

        last_slope = slope(border, start, i);
        for j in start..i {
            slopes[j] = last_slope;
            border[j] = offset(j, start).mul_add(last_slope, border[start]);
        }
        last_valid = Some(i);
    }
}

fn slope(border: &[f32], from: usize, to: usize) -> f32 {
    (border[to] - border[from]) / offset(to, from)
}

#[allow(clippy::cast_precision_loss)]
const fn offset(row: usize, anchor: usize) -> f32 {
    (row - anchor) as f32
}
