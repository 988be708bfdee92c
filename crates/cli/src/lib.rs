// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pagination control
//!
//! A pagination widget: given a total item count and a page size it renders
//! a previous control, one control per page, and a next control, and tracks
//! the current page as controls are clicked.
//!
//! ```
//! use pagenation::config::PaginationConfig;
//! use pagenation::pagination::{ControlKind, Pagination};
//!
//! let config = PaginationConfig::new(9, 3)?;
//! let mut pagination = Pagination::new(config);
//! pagination.click(ControlKind::Next);
//!
//! assert_eq!(pagination.current_page(), 2);
//! assert_eq!(pagenation::tui::format_controls(&pagination.render()), "previous 1 [2] 3 next");
//! # Ok::<(), pagenation::config::ConfigError>(())
//! ```

pub mod cli;
pub mod config;
pub mod env;
pub mod logging;
pub mod output;
pub mod pagination;
pub mod tui;
