// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Control row formatting for terminals.
//!
//! - [`format_controls`] - plain text, used for non-terminal output
//! - [`styled_controls`] - ANSI-styled row for terminals
//! - [`render_pagination`] - iocraft element for the interactive view

use iocraft::prelude::*;
use unicode_width::UnicodeWidthStr;

use super::colors::{
    escape, navigation_text, styled_active_page, styled_disabled_navigation, styled_hint,
    styled_navigation, styled_page, styled_separator,
};
use crate::pagination::{Control, ControlKind};

/// Key hint shown under the control row in interactive mode
pub const KEY_HINT: &str = "←/→ page · 1-9 jump · home/end · q to quit";

/// Format controls as plain text.
///
/// Disabled navigation is parenthesized and the active page is bracketed:
/// `(previous) [1] 2 3 next`
pub fn format_controls(controls: &[Control]) -> String {
    controls
        .iter()
        .map(|control| {
            if control.disabled {
                format!("({})", control.label)
            } else if control.active {
                format!("[{}]", control.label)
            } else {
                control.label.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format controls with ANSI styling.
pub fn styled_controls(controls: &[Control]) -> String {
    controls
        .iter()
        .map(styled_control)
        .collect::<Vec<_>>()
        .join(" ")
}

fn styled_control(control: &Control) -> String {
    match control.kind {
        ControlKind::Previous | ControlKind::Next => {
            let arrow_first = control.kind == ControlKind::Previous;
            if control.disabled {
                styled_disabled_navigation(&control.label, arrow_first)
            } else {
                styled_navigation(&control.label, arrow_first)
            }
        }
        ControlKind::Page(_) if control.active => styled_active_page(&control.label),
        ControlKind::Page(_) => styled_page(&control.label),
    }
}

/// Display width of the styled row once escapes are stripped.
pub fn styled_width(controls: &[Control]) -> usize {
    let visible = controls
        .iter()
        .map(|control| match control.kind {
            ControlKind::Previous => navigation_text(&control.label, true),
            ControlKind::Next => navigation_text(&control.label, false),
            ControlKind::Page(_) => styled_page(&control.label),
        })
        .collect::<Vec<_>>()
        .join(" ");
    visible.width()
}

/// Left padding that centers a row of `content_width` in `width` columns.
pub fn center_padding(content_width: usize, width: usize) -> usize {
    width.saturating_sub(content_width) / 2
}

/// Status line, e.g. `page 2 of 5`.
pub fn page_status(current_page: usize, page_count: usize) -> String {
    if page_count == 0 {
        "no pages".to_string()
    } else {
        format!("page {current_page} of {page_count}")
    }
}

/// Render the pagination view: separator, centered control row, status, hint.
pub fn render_pagination(
    controls: &[Control],
    current_page: usize,
    page_count: usize,
    width: usize,
) -> AnyElement<'static> {
    let padding = " ".repeat(center_padding(styled_width(controls), width));
    // iocraft appends erase-to-EOL after Text content; a trailing reset
    // would be split by it. Lines open with their own reset instead.
    let row = format!(
        "{reset}{padding}{}",
        styled_controls(controls).trim_end_matches(escape::RESET),
        reset = escape::RESET,
    );
    let status = page_status(current_page, page_count);
    let status = format!(
        "{}{}{}",
        escape::RESET,
        " ".repeat(center_padding(status.width(), width)),
        status
    );

    element! {
        View(flex_direction: FlexDirection::Column) {
            Text(content: styled_separator(width))
            Text(content: "")
            Text(content: row)
            Text(content: "")
            Text(content: status)
            Text(content: styled_separator(width))
            Text(content: styled_hint(KEY_HINT))
        }
    }
    .into_any()
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
