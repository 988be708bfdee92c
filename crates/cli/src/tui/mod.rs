// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal presentation for the pagination component.
//!
//! The control row is rendered as ANSI text for one-shot output and through
//! iocraft for the interactive full-screen view.

mod app;
pub mod colors;
pub mod keys;
pub mod render;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use app::{PaginationApp, PaginationAppState, RenderState};
pub use keys::{key_action, KeyAction};
pub use render::{format_controls, styled_controls};
