use anyhow::{bail, Context, Result};
use clap::Parser;
use clipper_client::{sweep_excess, BackendApi, ClientSettings, HttpBackend, RemoteFile};
use clipper_core::{format_file_size, is_valid_url};
use comfy_table::{Cell, ContentArrangement, Table};

use crate::cli::{Cli, Command};
use crate::{logging, settings_file, tui};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    // The interactive screen owns the terminal, so its logs go to a file.
    match cli.command {
        None => logging::init_file_logger(),
        Some(_) => logging::init_terminal_logger(),
    }

    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let mut settings = settings_file::load_settings(&cwd);
    if let Some(base_url) = cli.base_url {
        settings.base_url = base_url;
    }

    match cli.command {
        None => tui::run(settings),
        Some(command) => run_command(command, settings),
    }
}

fn run_command(command: Command, settings: ClientSettings) -> Result<()> {
    let ceiling = settings.max_files;
    let backend = HttpBackend::new(settings)?;
    let runtime = tokio::runtime::Runtime::new().context("failed to start runtime")?;

    runtime.block_on(async {
        match command {
            Command::Extract { url, file_name } => {
                if !is_valid_url(&url) {
                    bail!("not a valid absolute URL: {url}");
                }
                let outcome = backend.extract(&url, file_name.as_deref()).await?;
                match (outcome.file, outcome.message) {
                    (Some(file), _) => println!("Extraction finished: {file}"),
                    (None, Some(message)) => println!("{message}"),
                    (None, None) => println!("Extraction finished"),
                }
                Ok(())
            }
            Command::Files => {
                let listing = backend.list_files().await?;
                print_files_table(&listing.files);
                println!("{} file(s)", listing.total);
                Ok(())
            }
            Command::Download { name } => {
                let path = backend.download(&name).await?;
                println!("Saved {}", path.display());
                Ok(())
            }
            Command::DownloadAll => {
                let path = backend.download_all().await?;
                println!("Saved {}", path.display());
                Ok(())
            }
            Command::Delete { name } => {
                backend.delete(&name).await?;
                println!("Deleted {name}");
                Ok(())
            }
            Command::Purge { days } => {
                let summary = backend.purge_recent(days).await?;
                println!("{}", summary.message);
                Ok(())
            }
            Command::Sweep => {
                let report = sweep_excess(&backend, ceiling).await?;
                println!(
                    "Removed {} file(s); {} remaining",
                    report.removed,
                    report.files.len()
                );
                Ok(())
            }
        }
    })
}

fn print_files_table(files: &[RemoteFile]) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Size", "Modified"]);

    for file in files {
        table.add_row(vec![
            Cell::new(file.name.as_str()),
            Cell::new(format_file_size(file.size)),
            Cell::new(file.modified.as_deref().unwrap_or("-")),
        ]);
    }

    println!("{table}");
}
