// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pagination control binary entry point.

use clap::Parser;

use pagenation::cli::{ClickAction, Cli};
use pagenation::logging::init_logging;
use pagenation::output::{print_error, print_rendered, print_warning};
use pagenation::pagination::{ControlKind, Pagination};
use pagenation::tui::PaginationApp;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Err(e) = init_logging() {
        print_warning(format_args!("Failed to initialize logging: {}", e));
    }

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            print_error(e);
            std::process::exit(1);
        }
    };

    let mut pagination = Pagination::new(config);
    for ClickAction(target) in &cli.clicks {
        if let ControlKind::Page(page) = target {
            if *page > pagination.page_count() {
                print_warning(format_args!(
                    "page {} is out of range ({} pages)",
                    page,
                    pagination.page_count()
                ));
            }
        }
        pagination.click(*target);
    }

    if cli.tui {
        let mut app = PaginationApp::new(pagination);
        app.run()?;
        return Ok(());
    }

    print_rendered(&pagination, cli.output_format)?;
    Ok(())
}
