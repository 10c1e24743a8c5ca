// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay placement basics.
//!
//! Positions a dropdown menu against a button in a roomy viewport, then in a
//! cramped one that forces the fallback flip, and finally places a context
//! menu against a right-click location.
//!
//! Run:
//! - `cargo run -p understory_demos --example dropdown_placement`

use kurbo::{Point, Rect, Size};
use understory_overlay::{
    ElementBox, HorizontalEdge, Origin, PlacementRequest, VerticalEdge, compute_position,
};

fn main() {
    // A 100x30 button at (200, 80), opening a 160x240 menu below itself.
    let button = ElementBox::new(Rect::new(200.0, 80.0, 300.0, 110.0), Size::new(100.0, 30.0));
    let request = PlacementRequest::new(
        button,
        Size::new(160.0, 240.0),
        Origin::new(VerticalEdge::Bottom, HorizontalEdge::Left),
        Origin::new(VerticalEdge::Top, HorizontalEdge::Left),
    );

    for viewport in [Size::new(1280.0, 800.0), Size::new(1280.0, 300.0)] {
        let placed = compute_position(&request, viewport);
        println!(
            "viewport {:.0}x{:.0} -> top {:.1}, left {:.1}, max-height {:.1}, transform-origin \"{}\"",
            viewport.width,
            viewport.height,
            placed.top,
            placed.left,
            placed.max_height,
            placed.transform_origin,
        );
    }

    // A context menu tracks the click location instead of any element.
    let click = Point::new(900.0, 650.0);
    let context = PlacementRequest::new(
        ElementBox::ZERO,
        Size::new(200.0, 320.0),
        Origin::new(VerticalEdge::Top, HorizontalEdge::Left),
        Origin::new(VerticalEdge::Top, HorizontalEdge::Left),
    )
    .with_trigger(click);
    let placed = compute_position(&context, Size::new(1280.0, 800.0));
    println!(
        "context menu at ({:.0}, {:.0}) -> top {:.1}, left {:.1}",
        click.x, click.y, placed.top, placed.left,
    );
}
