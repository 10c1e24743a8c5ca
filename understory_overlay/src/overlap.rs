// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlap classification between anchor and target origins on one axis.

use crate::origin::AxisEdge;

/// How an anchor origin and a target origin relate along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverlapMode {
    /// Either origin passes through the axis median: the overlay is
    /// symmetric about the anchor point, so no side is preferred and no
    /// flip is needed.
    Auto,
    /// Both origins name the same edge: the overlay edge coincides with the
    /// anchor edge on that side and the overlay visually covers the anchor.
    Inclusive,
    /// The origins name opposite edges: the overlay sits adjacent to the
    /// anchor rather than overlapping it.
    Exclusive,
}

/// Classifies the relationship between two origin components on one axis.
#[must_use]
pub fn resolve_overlap<E: AxisEdge>(anchor: E, target: E) -> OverlapMode {
    if anchor == E::MEDIAN || target == E::MEDIAN {
        OverlapMode::Auto
    } else if anchor == target {
        OverlapMode::Inclusive
    } else {
        OverlapMode::Exclusive
    }
}

#[cfg(test)]
mod tests {
    use super::{OverlapMode, resolve_overlap};
    use crate::origin::{HorizontalEdge, VerticalEdge};

    #[test]
    fn median_on_either_side_is_auto() {
        use VerticalEdge::{Bottom, Center, Top};
        assert_eq!(resolve_overlap(Center, Top), OverlapMode::Auto);
        assert_eq!(resolve_overlap(Center, Bottom), OverlapMode::Auto);
        assert_eq!(resolve_overlap(Top, Center), OverlapMode::Auto);
        assert_eq!(resolve_overlap(Bottom, Center), OverlapMode::Auto);
        assert_eq!(resolve_overlap(Center, Center), OverlapMode::Auto);

        use HorizontalEdge::{Left, Middle, Right};
        assert_eq!(resolve_overlap(Middle, Left), OverlapMode::Auto);
        assert_eq!(resolve_overlap(Right, Middle), OverlapMode::Auto);
        assert_eq!(resolve_overlap(Middle, Middle), OverlapMode::Auto);
    }

    #[test]
    fn identical_outer_edges_are_inclusive() {
        assert_eq!(
            resolve_overlap(VerticalEdge::Top, VerticalEdge::Top),
            OverlapMode::Inclusive
        );
        assert_eq!(
            resolve_overlap(VerticalEdge::Bottom, VerticalEdge::Bottom),
            OverlapMode::Inclusive
        );
        assert_eq!(
            resolve_overlap(HorizontalEdge::Left, HorizontalEdge::Left),
            OverlapMode::Inclusive
        );
        assert_eq!(
            resolve_overlap(HorizontalEdge::Right, HorizontalEdge::Right),
            OverlapMode::Inclusive
        );
    }

    #[test]
    fn opposite_outer_edges_are_exclusive() {
        assert_eq!(
            resolve_overlap(VerticalEdge::Bottom, VerticalEdge::Top),
            OverlapMode::Exclusive
        );
        assert_eq!(
            resolve_overlap(VerticalEdge::Top, VerticalEdge::Bottom),
            OverlapMode::Exclusive
        );
        assert_eq!(
            resolve_overlap(HorizontalEdge::Left, HorizontalEdge::Right),
            OverlapMode::Exclusive
        );
        assert_eq!(
            resolve_overlap(HorizontalEdge::Right, HorizontalEdge::Left),
            OverlapMode::Exclusive
        );
    }
}
