// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_overlay --heading-base-level=0

//! Understory Overlay: headless anchoring and placement for floating overlays.
//!
//! This crate computes where to place a floating overlay (a menu, popover, or
//! tooltip — the *target*) relative to a reference element or pointer event
//! (the *anchor*) inside a single rectangular viewport, so the overlay stays
//! visible and aligns a requested pair of alignment points (*origins*) on
//! both boxes. It is purely geometric and owns no platform I/O. Callers are
//! expected to:
//! - Read element bounding boxes and pointer coordinates from their platform
//!   and hand them in as [`ElementBox`] / [`kurbo::Point`] values.
//! - Sample the viewport size once per call and pass it explicitly.
//! - Apply the resulting [`Placement`] (`top`, `left`, `max_height`,
//!   `transform_origin`) to their visual representation.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use understory_overlay::{
//!     ElementBox, HorizontalEdge, Origin, PlacementRequest, VerticalEdge, compute_position,
//! };
//!
//! // A 100x30 button whose top-left corner is at (200, 80).
//! let button = ElementBox::new(Rect::new(200.0, 80.0, 300.0, 110.0), Size::new(100.0, 30.0));
//!
//! // Open a 160x240 menu below the button, top-left corner to bottom-left corner.
//! let request = PlacementRequest::new(
//!     button,
//!     Size::new(160.0, 240.0),
//!     Origin::new(VerticalEdge::Bottom, HorizontalEdge::Left),
//!     Origin::new(VerticalEdge::Top, HorizontalEdge::Left),
//! );
//!
//! // Roomy viewport: the menu hangs off the button's bottom edge.
//! let placed = compute_position(&request, Size::new(1280.0, 800.0));
//! assert_eq!((placed.top, placed.left), (110.0, 200.0));
//! assert_eq!(placed.max_height, 720.0);
//!
//! // Cramped viewport: the menu flips above the button instead, and is
//! // floored at the viewport's top edge because it cannot fully fit there.
//! let placed = compute_position(&request, Size::new(1280.0, 300.0));
//! assert_eq!(placed.top, 0.0);
//! ```
//!
//! ## Pointer-anchored placement
//!
//! Supplying the triggering event's coordinates anchors the overlay to the
//! pointer instead of the element, which is how context menus and
//! touch-tracked popovers are placed:
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_overlay::{
//!     ElementBox, HorizontalEdge, Origin, PlacementRequest, VerticalEdge, compute_position,
//! };
//!
//! let menu = PlacementRequest::new(
//!     ElementBox::ZERO,
//!     Size::new(120.0, 160.0),
//!     Origin::new(VerticalEdge::Top, HorizontalEdge::Left),
//!     Origin::new(VerticalEdge::Top, HorizontalEdge::Left),
//! )
//! .with_trigger(Point::new(400.0, 300.0));
//!
//! let placed = compute_position(&menu, Size::new(1280.0, 800.0));
//! assert_eq!((placed.top, placed.left), (300.0, 400.0));
//! ```
//!
//! ## Design notes
//!
//! - Data flows one way: raw boxes become [`EdgeFrame`]s, origin pairs are
//!   classified into an [`OverlapMode`] per axis, each axis gets an
//!   [`AxisPlan`] of fallback candidates, and the clamper produces the
//!   corrected position. Nothing is retained across calls.
//! - Axes are corrected independently with a fixed two-try policy per axis,
//!   trading perfect containment for predictability. A placement that still
//!   overflows the viewport's *far* edge after both attempts is accepted
//!   as-is (apart from the floor at 0); only callers can decide to shrink or
//!   scroll the overlay instead.
//! - The overlay's size is a fixed input. Size negotiation, scrolling
//!   containers, and multi-monitor boundaries are out of scope.
//! - The algorithm is total: zero-size and detached boxes degrade to
//!   degenerate but well-defined placements.
//!
//! This crate is `no_std`.

#![no_std]

mod candidates;
mod clamp;
mod frame;
mod origin;
mod overlap;
mod place;

pub use candidates::{AxisPlan, build_axis};
pub use clamp::clamp_axis;
pub use frame::{EdgeFrame, ElementBox};
pub use origin::{AxisEdge, HorizontalEdge, Origin, TransformOrigin, VerticalEdge};
pub use overlap::{OverlapMode, resolve_overlap};
pub use place::{Placement, PlacementRequest, compute_position, derive_transform_origin};
