use crate::client::UploadField;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "freshscan")]
#[command(about = "Image freshness analysis client", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print request/response diagnostics
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upload an image (or a folder of images) for freshness analysis
    Analyze {
        /// Image file or folder
        #[arg(required = true)]
        path: PathBuf,

        /// Write the collected reports to a JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Analysis endpoint URL (overrides the stored configuration)
        #[arg(short, long)]
        endpoint: Option<String>,

        /// Multipart field name the endpoint expects (image/file)
        #[arg(short, long)]
        field: Option<UploadField>,
    },

    /// Check that the analysis service is reachable
    Ping {
        /// Analysis endpoint URL (overrides the stored configuration)
        #[arg(short, long)]
        endpoint: Option<String>,
    },

    /// Show or edit the stored configuration
    Config {
        /// Set the analysis endpoint URL
        #[arg(long)]
        set_endpoint: Option<String>,

        /// Set the multipart field name (image/file)
        #[arg(long)]
        set_field: Option<UploadField>,

        /// Show the stored configuration
        #[arg(long)]
        show: bool,
    },
}
