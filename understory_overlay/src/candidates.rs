// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-axis fallback plans: the ordered candidate edges and the anchor
//! origin to measure them from.

use crate::origin::AxisEdge;
use crate::overlap::{OverlapMode, resolve_overlap};

/// Fallback data for one axis, consumed by the viewport clamper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisPlan<E> {
    /// Target edges to try, in order, when the initial placement overflows.
    pub candidates: [E; 2],
    /// Anchor origin the fallback attempts measure from; mirrored to the
    /// opposite edge unless the overlap mode is [`OverlapMode::Auto`].
    pub anchor_origin: E,
    /// The overlap mode this plan was built under.
    pub overlap: OverlapMode,
}

/// Builds the fallback plan for one axis of an origin pair.
///
/// The candidate list starts from the axis's non-median edges minus the
/// target origin component, then the median is inserted first under
/// [`OverlapMode::Auto`] and second otherwise. Under `Auto` the first retry
/// is therefore the centered position, keeping the placement symmetric about
/// the anchor; in the other modes the flip to the opposite edge is tried
/// before centering. Only the first two entries are ever consulted, so the
/// plan carries exactly those.
///
/// Only the anchor origin is mirrored for the flipped placement; the target
/// origin is left untouched in every mode.
#[must_use]
pub fn build_axis<E: AxisEdge>(anchor: E, target: E) -> AxisPlan<E> {
    let overlap = resolve_overlap(anchor, target);
    let flipped = if target == E::NEAR { E::FAR } else { E::NEAR };
    let candidates = match overlap {
        OverlapMode::Auto => [E::MEDIAN, flipped],
        OverlapMode::Inclusive | OverlapMode::Exclusive => [flipped, E::MEDIAN],
    };
    let anchor_origin = match overlap {
        OverlapMode::Auto => anchor,
        OverlapMode::Inclusive | OverlapMode::Exclusive => anchor.mirrored(),
    };
    AxisPlan {
        candidates,
        anchor_origin,
        overlap,
    }
}
