// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pagination colors and styled text helpers.

/// Orange accent for enabled navigation controls: RGB(215, 119, 87)
pub const ACCENT_FG: (u8, u8, u8) = (215, 119, 87);

/// Gray for disabled controls and the key hint line: RGB(153, 153, 153)
pub const TEXT_GRAY: (u8, u8, u8) = (153, 153, 153);

/// Dark gray for separator lines: RGB(136, 136, 136)
pub const SEPARATOR_GRAY: (u8, u8, u8) = (136, 136, 136);

/// ANSI escape sequence helpers (public for reuse)
pub mod escape {
    /// 24-bit foreground color
    pub fn fg(r: u8, g: u8, b: u8) -> String {
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }

    /// Reset all attributes
    pub const RESET: &str = "\x1b[0m";

    /// Bold
    pub const BOLD: &str = "\x1b[1m";

    /// Dim
    pub const DIM: &str = "\x1b[2m";

    /// Inverse/reverse video
    pub const INVERSE: &str = "\x1b[7m";
}

fn gray() -> String {
    escape::fg(TEXT_GRAY.0, TEXT_GRAY.1, TEXT_GRAY.2)
}

/// Active page number: bold + inverse, padded so the highlight is visible.
///
/// Example output:
/// `[bold][inverse] 2 [reset]`
pub fn styled_active_page(label: &str) -> String {
    format!(
        "{bold}{inv} {label} {reset}",
        bold = escape::BOLD,
        inv = escape::INVERSE,
        reset = escape::RESET,
    )
}

/// Inactive page number, plain with the same padding as the active one.
pub fn styled_page(label: &str) -> String {
    format!(" {label} ")
}

/// Enabled previous/next control.
///
/// Example output:
/// `[orange]‹ previous[reset]`
pub fn styled_navigation(label: &str, arrow_first: bool) -> String {
    let fg_accent = escape::fg(ACCENT_FG.0, ACCENT_FG.1, ACCENT_FG.2);
    let text = navigation_text(label, arrow_first);
    format!("{fg_accent}{text}{reset}", reset = escape::RESET)
}

/// Disabled previous/next control (dim gray).
///
/// Example output:
/// `[dim][gray]‹ previous[reset]`
pub fn styled_disabled_navigation(label: &str, arrow_first: bool) -> String {
    let text = navigation_text(label, arrow_first);
    format!(
        "{dim}{fg_gray}{text}{reset}",
        dim = escape::DIM,
        fg_gray = gray(),
        reset = escape::RESET,
    )
}

/// Navigation label with its arrow: `‹ previous` or `next ›`.
pub fn navigation_text(label: &str, arrow_first: bool) -> String {
    if arrow_first {
        format!("‹ {label}")
    } else {
        format!("{label} ›")
    }
}

/// Gray hint text under the control row.
///
/// Starts with [0m] to reset from the separator's dim/gray. No trailing
/// reset: iocraft inserts \x1b[K (erase-to-EOL) after Text content and a
/// trailing \x1b[0m would get split by it.
///
/// Example output:
/// `[reset][gray]q to quit`
pub fn styled_hint(text: &str) -> String {
    format!("{reset}{fg_gray}{text}", reset = escape::RESET, fg_gray = gray())
}

/// Dim dark-gray separator line.
///
/// The separator does NOT include a reset - the next content line should
/// start with [0m].
///
/// Example output:
/// `[dim][dark gray]────────...`
pub fn styled_separator(width: usize) -> String {
    let fg_gray = escape::fg(SEPARATOR_GRAY.0, SEPARATOR_GRAY.1, SEPARATOR_GRAY.2);
    format!(
        "{dim}{fg_gray}{line}",
        dim = escape::DIM,
        line = "─".repeat(width),
    )
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
