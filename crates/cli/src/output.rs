// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output of rendered controls (text and JSON) plus error/warning
//! diagnostics on stderr.

use serde::Serialize;
use std::io::{self, IsTerminal, Write};

use crate::cli::OutputFormat;
use crate::pagination::{Control, Pagination};
use crate::tui::{format_controls, styled_controls};

/// JSON document for `--output-format json`
#[derive(Clone, Debug, Serialize)]
pub struct RenderedOutput {
    pub current_page: usize,
    pub page_count: usize,
    pub controls: Vec<Control>,
}

impl RenderedOutput {
    pub fn from_pagination(pagination: &Pagination) -> Self {
        Self {
            current_page: pagination.current_page(),
            page_count: pagination.page_count(),
            controls: pagination.render(),
        }
    }
}

/// Write the rendered controls to `writer`.
///
/// Text output is ANSI-styled only when `is_terminal` is set.
pub fn write_rendered<W: Write>(
    writer: &mut W,
    pagination: &Pagination,
    format: OutputFormat,
    is_terminal: bool,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            let controls = pagination.render();
            let row = if is_terminal {
                styled_controls(&controls)
            } else {
                format_controls(&controls)
            };
            writeln!(writer, "{}", row)
        }
        OutputFormat::Json => {
            let output = RenderedOutput::from_pagination(pagination);
            serde_json::to_writer(&mut *writer, &output)?;
            writeln!(writer)
        }
    }
}

/// Print the rendered controls to stdout.
pub fn print_rendered(pagination: &Pagination, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let is_tty = stdout.is_terminal();
    write_rendered(&mut stdout.lock(), pagination, format, is_tty)
}

/// Print an error message to stderr.
///
/// Displays in red when stderr is a terminal, plain text otherwise.
pub fn print_error(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_diagnostic(&mut io::stderr(), Severity::Error, msg, is_tty);
}

/// Print a warning message to stderr.
///
/// Displays in yellow when stderr is a terminal, plain text otherwise.
pub fn print_warning(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_diagnostic(&mut io::stderr(), Severity::Warning, msg, is_tty);
}

#[derive(Clone, Copy, Debug)]
enum Severity {
    Error,
    Warning,
}

impl Severity {
    fn prefix(self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Severity::Error => "\x1b[31m",
            Severity::Warning => "\x1b[33m",
        }
    }
}

fn write_diagnostic<W: Write>(
    writer: &mut W,
    severity: Severity,
    msg: impl std::fmt::Display,
    is_terminal: bool,
) {
    if is_terminal {
        let _ = writeln!(
            writer,
            "{}{}: {}\x1b[0m",
            severity.color(),
            severity.prefix(),
            msg
        );
    } else {
        let _ = writeln!(writer, "{}: {}", severity.prefix(), msg);
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
