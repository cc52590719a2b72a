//! Per-axis crop/pad planning.
//!
//! Each axis is decided on its own: equal sizes are kept, a smaller target
//! crops a centered window out of the source, a larger target centers the
//! source on a filled canvas. Odd margins are floor-divided, so the extra
//! pixel always lands on the bottom/right side.

use crate::types::{AxisAction, TargetSize};

/// Mapping of one axis from source to destination coordinates.
///
/// Source range `[src_offset, src_offset + len)` is copied to destination
/// range `[dst_offset, dst_offset + len)`. At most one of the offsets is
/// non-zero.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct AxisPlan {
    pub action: AxisAction,
    pub src_offset: u32,
    pub dst_offset: u32,
    pub len: u32,
}

impl AxisPlan {
    pub fn new(source: u32, target: u32) -> Self {
        use std::cmp::Ordering;

        match target.cmp(&source) {
            Ordering::Equal => Self {
                action: AxisAction::Keep,
                src_offset: 0,
                dst_offset: 0,
                len: source,
            },
            Ordering::Less => Self {
                action: AxisAction::Crop,
                src_offset: (source - target) / 2,
                dst_offset: 0,
                len: target,
            },
            Ordering::Greater => Self {
                action: AxisAction::Pad,
                src_offset: 0,
                dst_offset: (target - source) / 2,
                len: source,
            },
        }
    }
}

/// Combined placement for both axes of a single normalize call.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Placement {
    pub source_width: u32,
    pub source_height: u32,
    pub target_width: u32,
    pub target_height: u32,
    pub x: AxisPlan,
    pub y: AxisPlan,
}

impl Placement {
    pub fn new(source_width: u32, source_height: u32, target: TargetSize) -> Self {
        let (target_width, target_height) = (target.width(), target.height());
        Self {
            source_width,
            source_height,
            target_width,
            target_height,
            x: AxisPlan::new(source_width, target_width),
            y: AxisPlan::new(source_height, target_height),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.x.action == AxisAction::Keep && self.y.action == AxisAction::Keep
    }

    /// True when at least one axis introduces background pixels.
    pub fn needs_fill(&self) -> bool {
        self.x.action == AxisAction::Pad || self.y.action == AxisAction::Pad
    }

    /// Source rectangle `(left, top, width, height)` that survives into the output.
    pub fn source_rect(&self) -> (u32, u32, u32, u32) {
        (self.x.src_offset, self.y.src_offset, self.x.len, self.y.len)
    }

    /// Where the surviving rectangle lands in the output, `(left, top)`.
    pub fn destination_origin(&self) -> (u32, u32) {
        (self.x.dst_offset, self.y.dst_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(w: u32, h: u32) -> TargetSize {
        TargetSize::new(w, h).unwrap()
    }

    #[test]
    fn equal_axis_is_kept() {
        let plan = AxisPlan::new(10, 10);
        assert_eq!(plan.action, AxisAction::Keep);
        assert_eq!((plan.src_offset, plan.dst_offset, plan.len), (0, 0, 10));
    }

    #[test]
    fn crop_is_top_left_biased_on_odd_margin() {
        let plan = AxisPlan::new(5, 4);
        assert_eq!(plan.action, AxisAction::Crop);
        assert_eq!((plan.src_offset, plan.dst_offset, plan.len), (0, 0, 4));

        let plan = AxisPlan::new(9, 4);
        assert_eq!(plan.src_offset, 2);
    }

    #[test]
    fn pad_is_top_left_biased_on_odd_margin() {
        let plan = AxisPlan::new(5, 6);
        assert_eq!(plan.action, AxisAction::Pad);
        assert_eq!((plan.src_offset, plan.dst_offset, plan.len), (0, 0, 5));

        let plan = AxisPlan::new(5, 10);
        assert_eq!(plan.dst_offset, 2);
    }

    #[test]
    fn mixed_axes_are_planned_independently() {
        let placement = Placement::new(100, 50, target(80, 70));
        assert_eq!(placement.x.action, AxisAction::Crop);
        assert_eq!(placement.y.action, AxisAction::Pad);
        assert_eq!(placement.source_rect(), (10, 0, 80, 50));
        assert_eq!(placement.destination_origin(), (0, 10));
        assert!(placement.needs_fill());
        assert!(!placement.is_identity());
    }

    #[test]
    fn pure_crop_needs_no_fill() {
        let placement = Placement::new(100, 80, target(60, 40));
        assert!(!placement.needs_fill());
        assert_eq!(placement.source_rect(), (20, 20, 60, 40));
        assert_eq!(placement.destination_origin(), (0, 0));
    }

    #[test]
    fn same_size_is_identity() {
        let placement = Placement::new(7, 3, target(7, 3));
        assert!(placement.is_identity());
        assert!(!placement.needs_fill());
    }
}
