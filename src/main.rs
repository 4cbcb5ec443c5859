use std::process;

use clap::{Arg, Command};
use colored::*;

use gh_sheets_sync::config::{ConfigOverrides, SyncConfig};
use gh_sheets_sync::logging::{init_logging, log_error, log_info};
use gh_sheets_sync::sync;

#[tokio::main]
async fn main() {
    let app = Command::new("gh-sheets-sync")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Sync GitHub issues and project-board metadata into a Google Sheets tab")
        .arg(
            Arg::new("spreadsheet-id")
                .long("spreadsheet-id")
                .value_name("ID")
                .help("Destination spreadsheet id (overrides SPREADSHEET_ID)"),
        )
        .arg(
            Arg::new("sheet")
                .long("sheet")
                .short('s')
                .value_name("NAME")
                .help("Destination sheet/tab name (overrides SHEET_NAME)"),
        )
        .arg(
            Arg::new("repo")
                .long("repo")
                .short('r')
                .value_name("OWNER/NAME")
                .help("Source repository (overrides GITHUB_REPOSITORY)"),
        );

    let matches = app.get_matches();

    if let Err(e) = init_logging() {
        eprintln!("{} failed to initialize logging: {}", "Warning:".yellow(), e);
    }

    let overrides = ConfigOverrides {
        spreadsheet_id: matches.get_one::<String>("spreadsheet-id").cloned(),
        sheet_name: matches.get_one::<String>("sheet").cloned(),
        repository: matches.get_one::<String>("repo").cloned(),
    };

    let result = match SyncConfig::resolve(&overrides) {
        Ok(config) => sync::run(&config).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(report) => {
            log_info("Sync complete");
            println!(
                "{} {} issues fetched, {} pull requests skipped, {} rows written",
                "Done:".green(),
                report.fetched,
                report.pull_requests_skipped,
                report.rows_written
            );
        }
        Err(e) => {
            log_error(&e.to_string());
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    }
}
