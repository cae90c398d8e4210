//! Command dispatch.

pub mod ask;
pub mod health;
pub mod journals;
pub mod pdf;
pub mod tui;

use anyhow::Result;
use docchat_client::ApiConfig;
use docchat_observability::{LogConfig, init};

use crate::cli::{Cli, Command};
use crate::output;

pub async fn handle(cli: Cli) -> Result<()> {
    let api = api_config(cli.api_base.as_deref())?;
    let command = cli.command.unwrap_or(Command::Tui { document: None });

    if !matches!(command, Command::Tui { .. }) {
        init_console_logging(cli.verbose);
    }

    match command {
        Command::Tui { document } => tui::handle(api, document).await,
        Command::Journals => journals::handle(api).await,
        Command::Ask { document, question } => ask::handle(api, &document, &question).await,
        Command::Pdf { document, page, open } => pdf::handle(api, &document, page, open),
        Command::Health => health::handle(api).await,
    }
}

/// `--api-base` beats `DOCCHAT_API_BASE`, which beats `VITE_API_BASE_URL`.
fn api_config(flag: Option<&str>) -> Result<ApiConfig> {
    let config = match flag {
        Some(base) => ApiConfig::from_env().with_base_url(base),
        None => ApiConfig::from_env(),
    };
    config.validate()?;
    Ok(config)
}

/// One-shot commands log to stderr: warnings by default, debug with `--verbose`.
fn init_console_logging(verbose: bool) {
    let config = LogConfig::stderr(if verbose { "debug" } else { "warn" })
        .with_version(env!("CARGO_PKG_VERSION"));
    if let Err(e) = init(config) {
        output::warning(&format!("Logging disabled: {}", e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_overrides_env_base() {
        let config = api_config(Some("https://docs.example.com/")).unwrap();
        assert_eq!(config.base_url, "https://docs.example.com");
    }

    #[test]
    fn rejects_non_http_base() {
        assert!(api_config(Some("ftp://example.com")).is_err());
    }
}
