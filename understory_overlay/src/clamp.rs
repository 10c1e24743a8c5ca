// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport overflow correction for one axis of a placement.

use crate::candidates::AxisPlan;
use crate::frame::EdgeFrame;
use crate::origin::AxisEdge;

/// Corrects one axis of an initial placement against the viewport extent.
///
/// The axis overflows when the initial position spills past either end of
/// `0..viewport_extent`. That triggers at most two fallback attempts, each
/// aligning the target edge named by the plan's next candidate with the
/// plan's anchor origin. An attempt is accepted as soon as the target's far
/// edge fits inside the viewport, floored at 0.
///
/// When neither candidate fits, the initial position is returned unchanged:
/// the overlay may extend past the far edge of the viewport, and the
/// caller's final floor clamp is the only remaining correction. That is the
/// accepted degraded outcome, not an error.
///
/// Each axis is corrected independently of the other; there is no joint-area
/// reasoning.
#[must_use]
pub fn clamp_axis<E: AxisEdge>(
    anchor: &EdgeFrame,
    target: &EdgeFrame,
    plan: &AxisPlan<E>,
    initial: f64,
    viewport_extent: f64,
) -> f64 {
    let far = E::FAR.resolve(target);
    if initial >= 0.0 && initial + far <= viewport_extent {
        return initial;
    }
    for candidate in plan.candidates {
        let attempt = plan.anchor_origin.resolve(anchor) - candidate.resolve(target);
        if attempt + far <= viewport_extent {
            return attempt.max(0.0);
        }
    }
    initial
}
