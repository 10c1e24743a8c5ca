// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runnable demos for `understory_overlay`.
//!
//! See the `examples/` directory of this package; for instance:
//! - `cargo run -p understory_demos --example dropdown_placement`
