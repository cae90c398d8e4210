//! CLI entry point for docchat.

mod cli;
mod commands;
mod output;

use clap::Parser;

use crate::cli::Cli;

/// `DOCCHAT_*` settings may live in the nearest `.env` above the working
/// directory or in `~/.docchat/env`. Variables already set are never
/// overridden, so the shell beats `.env`, which beats the home file.
fn load_env_files() {
    let nearest = std::env::current_dir().ok().and_then(|cwd| {
        cwd.ancestors()
            .map(|dir| dir.join(".env"))
            .find(|path| path.is_file())
    });
    let home = dirs::home_dir().map(|home| home.join(".docchat").join("env"));

    for path in nearest.into_iter().chain(home.filter(|p| p.is_file())) {
        if let Err(e) = dotenvy::from_path(&path) {
            eprintln!("ignoring {}: {}", path.display(), e);
        }
    }
}

#[tokio::main]
async fn main() {
    load_env_files();
    let cli = Cli::parse();
    output::init(cli.output);

    if let Err(e) = commands::handle(cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
