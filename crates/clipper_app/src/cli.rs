use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "clipper")]
#[command(bin_name = "clipper")]
#[command(version)]
#[command(about = "Terminal client for the text-extraction web service")]
pub struct Cli {
    /// Override the backend base URL from the settings file.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// With no subcommand the interactive screen opens.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(about = "Submit a URL for extraction")]
    Extract {
        url: String,
        /// Name for the result file; the server picks one when omitted.
        #[arg(long)]
        file_name: Option<String>,
    },
    #[command(about = "List extracted files")]
    Files,
    #[command(about = "Download one extracted file")]
    Download { name: String },
    #[command(about = "Download every extracted file as a ZIP archive")]
    DownloadAll,
    #[command(about = "Delete one extracted file")]
    Delete { name: String },
    #[command(about = "Bulk-delete files extracted within the last days")]
    Purge {
        #[arg(long, default_value_t = 1)]
        days: u32,
    },
    #[command(about = "Delete the oldest files above the retention ceiling")]
    Sweep,
}
