//! Command-line arguments.

use clap::{Parser, Subcommand, ValueEnum};

/// Ask questions about documents and read the answers as they stream in
#[derive(Parser)]
#[command(name = "docchat", about, version, propagate_version = true)]
pub struct Cli {
    /// Command to run (default: tui)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Backend base URL. Overrides DOCCHAT_API_BASE and VITE_API_BASE_URL.
    #[arg(long, global = true)]
    pub api_base: Option<String>,

    /// Log debug events to stderr (one-shot commands)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// text for people, json for scripts (one object per line)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Styled lines, tables and a spinner
    #[default]
    Text,
    /// One JSON record per line on stdout
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the interactive TUI: document pane and chat pane
    Tui {
        /// Open this document directly instead of the picker
        #[arg(short, long)]
        document: Option<String>,
    },
    /// List the documents the backend can answer questions about
    Journals,
    /// Ask one question and stream the answer to stdout
    Ask {
        /// Document id to ask about
        #[arg(short, long)]
        document: String,
        /// The question
        question: String,
    },
    /// Print (or open) the viewer URL of a document
    Pdf {
        /// Document id
        document: String,
        /// Page to open at
        #[arg(short, long)]
        page: Option<u32>,
        /// Open the URL with the system handler
        #[arg(long)]
        open: bool,
    },
    /// Check that the backend is reachable
    Health,
}
