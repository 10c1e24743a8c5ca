// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edge frames: normalized anchor and target geometry.

use kurbo::{Point, Rect, Size};

/// Raw geometry reported for a visual element by the embedding platform.
///
/// This is the payload of the external "box provider": the element's bounding
/// rectangle in viewport coordinates plus its offset width/height. Platforms
/// report all-zero fields for a detached or unmeasured element; that input is
/// valid here and degrades to a zero-size frame rather than failing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementBox {
    /// Bounding rectangle in viewport coordinates.
    pub rect: Rect,
    /// Offset width/height, consulted when the rectangle does not report its
    /// far edges independently.
    pub offset_size: Size,
}

impl ElementBox {
    /// A detached or unmeasured element, with every field zero.
    pub const ZERO: Self = Self {
        rect: Rect::ZERO,
        offset_size: Size::ZERO,
    };

    /// Creates an element box from a bounding rectangle and offset dimensions.
    #[must_use]
    pub const fn new(rect: Rect, offset_size: Size) -> Self {
        Self { rect, offset_size }
    }
}

impl Default for ElementBox {
    fn default() -> Self {
        Self::ZERO
    }
}

/// The six alignment coordinates of an anchor or target box.
///
/// Frames come in two flavors:
/// - *absolute*: an anchor element or pointer location, in viewport
///   coordinates;
/// - *local*: the target overlay being placed, with its top-left corner
///   pinned at the origin, used only to measure offsets into itself.
///
/// `middle` and `center` are stored rather than derived because the pointer
/// flavor pins them to the pointer coordinate itself instead of the midpoint
/// of its degenerate 1×1 extent. For element and target frames they satisfy
/// `middle = left + (right - left) / 2` and `center = top + (bottom - top) / 2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeFrame {
    /// Top edge.
    pub top: f64,
    /// Left edge.
    pub left: f64,
    /// Right edge.
    pub right: f64,
    /// Bottom edge.
    pub bottom: f64,
    /// Horizontal midpoint.
    pub middle: f64,
    /// Vertical midpoint.
    pub center: f64,
}

impl EdgeFrame {
    /// Absolute frame of an anchor element.
    ///
    /// A reported `right` or `bottom` of zero is taken to mean the platform
    /// could not measure that edge; it is reconstructed from the near edge
    /// plus the offset dimension, which also covers zero-size boxes.
    #[must_use]
    pub fn from_element(element: ElementBox) -> Self {
        let top = element.rect.y0;
        let left = element.rect.x0;
        let right = if element.rect.x1 != 0.0 {
            element.rect.x1
        } else {
            left + element.offset_size.width
        };
        let bottom = if element.rect.y1 != 0.0 {
            element.rect.y1
        } else {
            top + element.offset_size.height
        };
        Self {
            top,
            left,
            right,
            bottom,
            middle: left + (right - left) / 2.0,
            center: top + (bottom - top) / 2.0,
        }
    }

    /// Degenerate 1×1 frame tracking a pointer or touch location.
    ///
    /// Every alignment coordinate collapses onto the pointer itself, so an
    /// overlay aligned to any origin of this frame opens at the event
    /// location.
    #[must_use]
    pub fn from_pointer(point: Point) -> Self {
        Self {
            top: point.y,
            left: point.x,
            right: point.x + 1.0,
            bottom: point.y + 1.0,
            middle: point.x,
            center: point.y,
        }
    }

    /// Local frame of the target overlay, top-left pinned at the origin.
    #[must_use]
    pub fn from_target_size(size: Size) -> Self {
        Self {
            top: 0.0,
            left: 0.0,
            right: size.width,
            bottom: size.height,
            middle: size.width / 2.0,
            center: size.height / 2.0,
        }
    }

    /// Width of the frame.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Height of the frame.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}
