// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The placement engine: request and output types plus the orchestration
//! from raw boxes to a corrected position.

use kurbo::{Point, Size};

use crate::candidates::build_axis;
use crate::clamp::clamp_axis;
use crate::frame::{EdgeFrame, ElementBox};
use crate::origin::{AxisEdge, Origin, TransformOrigin};

/// One overlay placement request.
///
/// All geometry is supplied by the caller: the anchor element's box as
/// reported by the platform, the overlay's fixed dimensions, and (optionally)
/// the pointer coordinates of the triggering event. The engine never reads
/// ambient state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementRequest {
    /// Box of the reference element the overlay is positioned against.
    pub anchor: ElementBox,
    /// Fixed width/height of the overlay being placed.
    pub target_size: Size,
    /// Alignment point on the anchor.
    pub anchor_origin: Origin,
    /// Alignment point on the target.
    pub target_origin: Origin,
    /// Overrides the derived max height (90% of the viewport height) when set.
    pub max_height: Option<f64>,
    /// Viewport coordinates of the triggering pointer/touch event, if any.
    pub trigger: Option<Point>,
    /// The triggering event was a click on the anchor itself: keep the
    /// placement on the anchor element rather than the pointer, unless
    /// `touch_tracked` asks for it anyway.
    pub anchor_is_click_origin: bool,
    /// Track the touch/click location even for anchor-originated clicks.
    pub touch_tracked: bool,
}

impl PlacementRequest {
    /// Creates a request with no trigger event and a derived max height.
    #[must_use]
    pub const fn new(
        anchor: ElementBox,
        target_size: Size,
        anchor_origin: Origin,
        target_origin: Origin,
    ) -> Self {
        Self {
            anchor,
            target_size,
            anchor_origin,
            target_origin,
            max_height: None,
            trigger: None,
            anchor_is_click_origin: false,
            touch_tracked: false,
        }
    }

    /// Overrides the max height passed through to the output.
    #[must_use]
    pub const fn with_max_height(mut self, max_height: f64) -> Self {
        self.max_height = Some(max_height);
        self
    }

    /// Supplies the pointer coordinates of the triggering event.
    #[must_use]
    pub const fn with_trigger(mut self, trigger: Point) -> Self {
        self.trigger = Some(trigger);
        self
    }

    /// Marks the request as originating from a click on the anchor.
    #[must_use]
    pub const fn with_anchor_click(mut self) -> Self {
        self.anchor_is_click_origin = true;
        self
    }

    /// Requests touch-tracked positioning even for anchor clicks.
    #[must_use]
    pub const fn with_touch_tracking(mut self) -> Self {
        self.touch_tracked = true;
        self
    }
}

/// Final placement for an overlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Absolute top in viewport coordinates, always `>= 0`.
    pub top: f64,
    /// Absolute left in viewport coordinates, always `>= 0`.
    pub left: f64,
    /// Height cap for the overlay.
    pub max_height: f64,
    /// Anchor point for scale/fade transitions.
    pub transform_origin: TransformOrigin,
}

/// Computes the final overlay placement for a request.
///
/// `viewport` must be sampled once by the caller immediately before this
/// call and is treated as immutable for its duration. The computation is a
/// pure function of its arguments: identical inputs yield identical output.
///
/// The anchor frame is the pointer frame when a trigger event is supplied
/// and the request is not an anchor-originated click (or explicitly wants
/// touch tracking); otherwise it is the anchor element's frame. The initial
/// position aligns the two requested origins, then each axis is corrected
/// independently against the viewport. A placement that still overflows the
/// viewport's far edge after both fallback attempts is returned as-is apart
/// from the floor at 0; that is expected behavior for overlays larger than
/// the viewport, not a failure.
#[must_use]
pub fn compute_position(request: &PlacementRequest, viewport: Size) -> Placement {
    let anchor = match request.trigger {
        Some(pointer) if !request.anchor_is_click_origin || request.touch_tracked => {
            EdgeFrame::from_pointer(pointer)
        }
        _ => EdgeFrame::from_element(request.anchor),
    };
    let target = EdgeFrame::from_target_size(request.target_size);

    let initial_top = request.anchor_origin.vertical.resolve(&anchor)
        - request.target_origin.vertical.resolve(&target);
    let initial_left = request.anchor_origin.horizontal.resolve(&anchor)
        - request.target_origin.horizontal.resolve(&target);

    let vertical = build_axis(request.anchor_origin.vertical, request.target_origin.vertical);
    let horizontal = build_axis(
        request.anchor_origin.horizontal,
        request.target_origin.horizontal,
    );

    let top = clamp_axis(&anchor, &target, &vertical, initial_top, viewport.height);
    let left = clamp_axis(&anchor, &target, &horizontal, initial_left, viewport.width);

    Placement {
        top: top.max(0.0),
        left: left.max(0.0),
        max_height: request.max_height.unwrap_or(viewport.height * 0.9),
        transform_origin: derive_transform_origin(request.target_origin),
    }
}

/// Derives the transform origin for scale/fade transitions from the target
/// origin, so an opening animation grows from the alignment point rather
/// than the overlay's own top-left corner.
#[must_use]
pub fn derive_transform_origin(target_origin: Origin) -> TransformOrigin {
    TransformOrigin::from(target_origin)
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};

    use super::{PlacementRequest, compute_position};
    use crate::frame::ElementBox;
    use crate::origin::{HorizontalEdge, Origin, VerticalEdge};

    fn button() -> ElementBox {
        ElementBox::new(Rect::new(200.0, 80.0, 300.0, 110.0), Size::new(100.0, 30.0))
    }

    fn below_left(anchor: ElementBox, target_size: Size) -> PlacementRequest {
        PlacementRequest::new(
            anchor,
            target_size,
            Origin::new(VerticalEdge::Bottom, HorizontalEdge::Left),
            Origin::new(VerticalEdge::Top, HorizontalEdge::Left),
        )
    }

    #[test]
    fn aligns_the_requested_origins_when_everything_fits() {
        let request = below_left(button(), Size::new(160.0, 240.0));
        let placed = compute_position(&request, Size::new(1280.0, 800.0));
        assert_eq!(placed.top, 110.0);
        assert_eq!(placed.left, 200.0);
    }

    #[test]
    fn pointer_frame_wins_for_non_anchor_clicks() {
        let request =
            below_left(button(), Size::new(160.0, 240.0)).with_trigger(Point::new(400.0, 300.0));
        let placed = compute_position(&request, Size::new(1280.0, 800.0));
        // Anchored to the pointer's degenerate frame: bottom is y + 1.
        assert_eq!(placed.top, 301.0);
        assert_eq!(placed.left, 400.0);
    }

    #[test]
    fn anchor_click_suppresses_pointer_tracking() {
        let request = below_left(button(), Size::new(160.0, 240.0))
            .with_trigger(Point::new(400.0, 300.0))
            .with_anchor_click();
        let placed = compute_position(&request, Size::new(1280.0, 800.0));
        assert_eq!(placed.top, 110.0);
        assert_eq!(placed.left, 200.0);
    }

    #[test]
    fn touch_tracking_overrides_the_anchor_click_suppression() {
        let request = below_left(button(), Size::new(160.0, 240.0))
            .with_trigger(Point::new(400.0, 300.0))
            .with_anchor_click()
            .with_touch_tracking();
        let placed = compute_position(&request, Size::new(1280.0, 800.0));
        assert_eq!(placed.top, 301.0);
        assert_eq!(placed.left, 400.0);
    }

    #[test]
    fn max_height_defaults_to_ninety_percent_of_the_viewport() {
        let request = below_left(button(), Size::new(160.0, 240.0));
        let placed = compute_position(&request, Size::new(1280.0, 800.0));
        assert_eq!(placed.max_height, 720.0);

        let placed = compute_position(
            &request.with_max_height(300.0),
            Size::new(1280.0, 800.0),
        );
        assert_eq!(placed.max_height, 300.0);
    }
}
