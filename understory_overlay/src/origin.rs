// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Origin vocabulary: named alignment edges per axis and the pairs built
//! from them.

use core::fmt;

use crate::frame::EdgeFrame;

/// Alignment edges along the vertical axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VerticalEdge {
    /// Top edge.
    Top,
    /// Vertical midpoint; the median of this axis.
    Center,
    /// Bottom edge.
    Bottom,
}

/// Alignment edges along the horizontal axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HorizontalEdge {
    /// Left edge.
    Left,
    /// Horizontal midpoint; the median of this axis.
    Middle,
    /// Right edge.
    Right,
}

/// Edge vocabulary shared by both axes.
///
/// Overlap classification, fallback-candidate construction, and viewport
/// clamping are written once against this trait and applied independently to
/// each axis. Looking a frame coordinate up through [`AxisEdge::resolve`]
/// keeps edge access checked at compile time instead of going through
/// stringly-keyed fields.
pub trait AxisEdge: Copy + Eq + fmt::Debug {
    /// The centered edge of this axis.
    const MEDIAN: Self;
    /// The leading edge of this axis ([`VerticalEdge::Top`] / [`HorizontalEdge::Left`]).
    const NEAR: Self;
    /// The trailing edge of this axis ([`VerticalEdge::Bottom`] / [`HorizontalEdge::Right`]).
    const FAR: Self;

    /// The opposite edge on this axis; the median mirrors to itself.
    #[must_use]
    fn mirrored(self) -> Self;

    /// The coordinate of this edge on `frame`.
    #[must_use]
    fn resolve(self, frame: &EdgeFrame) -> f64;
}

impl AxisEdge for VerticalEdge {
    const MEDIAN: Self = Self::Center;
    const NEAR: Self = Self::Top;
    const FAR: Self = Self::Bottom;

    fn mirrored(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Center => Self::Center,
            Self::Bottom => Self::Top,
        }
    }

    fn resolve(self, frame: &EdgeFrame) -> f64 {
        match self {
            Self::Top => frame.top,
            Self::Center => frame.center,
            Self::Bottom => frame.bottom,
        }
    }
}

impl AxisEdge for HorizontalEdge {
    const MEDIAN: Self = Self::Middle;
    const NEAR: Self = Self::Left;
    const FAR: Self = Self::Right;

    fn mirrored(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Middle => Self::Middle,
            Self::Right => Self::Left,
        }
    }

    fn resolve(self, frame: &EdgeFrame) -> f64 {
        match self {
            Self::Left => frame.left,
            Self::Middle => frame.middle,
            Self::Right => frame.right,
        }
    }
}

/// An alignment point on an anchor or target: one edge per axis.
///
/// A placement request names one origin on each box; the engine offsets the
/// target so the two points coincide, then corrects for viewport overflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Origin {
    /// Vertical component.
    pub vertical: VerticalEdge,
    /// Horizontal component.
    pub horizontal: HorizontalEdge,
}

impl Origin {
    /// Creates an origin from its two components.
    #[must_use]
    pub const fn new(vertical: VerticalEdge, horizontal: HorizontalEdge) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }
}

/// Anchor point for scale/fade transitions, derived from a target origin.
///
/// Kept distinct from [`Origin`] because it speaks the visual-origin
/// vocabulary: the [`Display`](fmt::Display) rendering is
/// `"<vertical> <horizontal> 0"`, with the layout name `middle` translated to
/// `center`. An opening animation anchored here appears to grow from the
/// alignment point rather than the overlay's own top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TransformOrigin {
    /// Vertical component.
    pub vertical: VerticalEdge,
    /// Horizontal component, rendered as `center` when it is
    /// [`HorizontalEdge::Middle`].
    pub horizontal: HorizontalEdge,
}

impl From<Origin> for TransformOrigin {
    fn from(origin: Origin) -> Self {
        Self {
            vertical: origin.vertical,
            horizontal: origin.horizontal,
        }
    }
}

impl fmt::Display for TransformOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vertical = match self.vertical {
            VerticalEdge::Top => "top",
            VerticalEdge::Center => "center",
            VerticalEdge::Bottom => "bottom",
        };
        let horizontal = match self.horizontal {
            HorizontalEdge::Left => "left",
            HorizontalEdge::Middle => "center",
            HorizontalEdge::Right => "right",
        };
        write!(f, "{vertical} {horizontal} 0")
    }
}
