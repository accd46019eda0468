//! Places two resolved documents next to each other on one canvas.
use crate::error::LayoutError;
use crate::resolver::ResolvedDimensions;
use log::debug;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::Left => "left",
            Side::Right => "right",
        })
    }
}

/// Final on-canvas geometry for both documents.
///
/// `right_x == left.width + gap`, `canvas_width == right_x + right.width`
/// and `canvas_height == max(left.height, right.height)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutPlan {
    pub left: ResolvedDimensions,
    pub right: ResolvedDimensions,
    pub left_x: f64,
    pub right_x: f64,
    pub canvas_width: f64,
    pub canvas_height: f64,
}

impl LayoutPlan {
    pub fn side(&self, side: Side) -> (&ResolvedDimensions, f64) {
        match side {
            Side::Left => (&self.left, self.left_x),
            Side::Right => (&self.right, self.right_x),
        }
    }
}

fn match_height(
    dims: ResolvedDimensions,
    target: f64,
    side: Side,
) -> Result<ResolvedDimensions, LayoutError> {
    // Exact comparison: a side already at the target must not be rescaled by 1.0.
    if dims.height == target {
        return Ok(dims);
    }
    if dims.height <= 0.0 {
        return Err(LayoutError::DegenerateHeight(side));
    }
    let scaled = dims.scaled_to_height(target);
    debug!(
        "Scaled {} document from {}x{} to {}x{}",
        side, dims.width, dims.height, scaled.width, scaled.height
    );
    Ok(scaled)
}

/// Computes the side-by-side layout.
///
/// With `match_height`, the shorter document is uniformly scaled up to the
/// taller one's height. A negative or non-finite `gap` is rejected.
pub fn plan(
    left: ResolvedDimensions,
    right: ResolvedDimensions,
    gap: f64,
    match_heights: bool,
) -> Result<LayoutPlan, LayoutError> {
    if !gap.is_finite() || gap < 0.0 {
        return Err(LayoutError::InvalidGap(gap));
    }

    let (left, right) = if match_heights {
        let target = left.height.max(right.height);
        (
            match_height(left, target, Side::Left)?,
            match_height(right, target, Side::Right)?,
        )
    } else {
        (left, right)
    };

    let right_x = left.width + gap;
    let plan = LayoutPlan {
        left,
        right,
        left_x: 0.0,
        right_x,
        canvas_width: right_x + right.width,
        canvas_height: left.height.max(right.height),
    };
    debug!(
        "Layout plan: canvas {}x{}, right document at x={}",
        plan.canvas_width, plan.canvas_height, plan.right_x
    );
    Ok(plan)
}
