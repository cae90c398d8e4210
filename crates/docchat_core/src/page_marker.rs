//! Extraction of the `Page no: N` citation the backend appends to answers.

use std::sync::LazyLock;

use regex::Regex;

static PAGE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Page no: (\d+)").unwrap_or_else(|e| panic!("page marker pattern: {e}"))
});

/// An answer split into its body and the first page it cites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedAnswer {
    pub body: String,
    pub page: Option<u32>,
}

/// Removes the first page marker from `text` and returns its page number.
/// Later markers are left in the body untouched. A marker whose number does
/// not fit a page is kept as plain text.
pub fn format_answer(text: &str) -> FormattedAnswer {
    let citation = PAGE_MARKER.captures(text).and_then(|caps| {
        let page = caps.get(1)?.as_str().parse::<u32>().ok()?;
        Some((caps.get(0)?.range(), page))
    });
    let Some((marker, page)) = citation else {
        return FormattedAnswer {
            body: text.to_string(),
            page: None,
        };
    };
    let mut body = String::with_capacity(text.len() - marker.len());
    body.push_str(&text[..marker.start]);
    body.push_str(&text[marker.end..]);
    FormattedAnswer {
        body,
        page: Some(page),
    }
}

/// First page cited in `text`, without rebuilding the body.
pub fn cited_page(text: &str) -> Option<u32> {
    PAGE_MARKER
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
