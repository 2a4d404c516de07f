//
// Copyright (c) 2026 tracefix developers
//
// This file is part of the tracefix-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

pub mod events;
pub mod testing;

pub const PROJECT_NAME: &str = "tracefix-rs";

/// Log target used for every program-point record.
pub const TRACE_TARGET: &str = "trace";

pub use events::Registry;
pub use testing::*;
