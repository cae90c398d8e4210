//! `docchat pdf`: viewer URL of a document.

use anyhow::Result;
use docchat_client::ApiConfig;
use docchat_client::api::validate_document_id;

use crate::output;

pub fn handle(config: ApiConfig, document: &str, page: Option<u32>, open: bool) -> Result<()> {
    validate_document_id(document)?;
    let url = viewer_url(&config, document, page);
    if open {
        open::that(&url)?;
        output::success(&format!("Opened {}", url));
    } else if output::is_json() {
        output::data("pdf", &serde_json::json!({ "document": document, "url": url }));
    } else {
        println!("{}", url);
    }
    Ok(())
}

fn viewer_url(config: &ApiConfig, document: &str, page: Option<u32>) -> String {
    let url = config.pdf_url(document);
    match page {
        Some(page) => format!("{}#page={}", url, page.max(1)),
        None => url,
    }
}
