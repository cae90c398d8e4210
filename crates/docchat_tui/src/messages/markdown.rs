//! Light markdown for answers: `# headers`, `- lists`, `**bold**` and `` `code` ``.
//!
//! Markup is styled line by line so a partial prefix (mid-reveal) renders
//! without special casing; unclosed markers are shown as typed.

use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::layouts::{background_style, text_style};
use crate::theme::DocchatPalette;
use crate::utils::wrap_lines;

/// Styles `line` for inline markup.
pub fn inline_spans(line: &str, palette: &DocchatPalette) -> Vec<Span<'static>> {
    let normal = text_style(palette.text);
    let bold = normal.add_modifier(Modifier::BOLD);
    let code = text_style(palette.text_accent).patch(background_style(palette.elevated_surface_background));

    let mut spans = Vec::new();
    let mut rest = line;
    while !rest.is_empty() {
        let next = match (rest.find("**"), rest.find('`')) {
            (Some(b), Some(c)) => b.min(c),
            (Some(b), None) => b,
            (None, Some(c)) => c,
            (None, None) => rest.len(),
        };
        if next > 0 {
            spans.push(Span::styled(rest[..next].to_string(), normal));
            rest = &rest[next..];
            continue;
        }
        let (marker, style) = if rest.starts_with("**") { ("**", bold) } else { ("`", code) };
        let body = &rest[marker.len()..];
        match body.find(marker) {
            Some(end) => {
                spans.push(Span::styled(body[..end].to_string(), style));
                rest = &body[end + marker.len()..];
            }
            None => {
                spans.push(Span::styled(rest.to_string(), normal));
                break;
            }
        }
    }
    spans
}

fn heading(line: &str) -> Option<&str> {
    let text = line.trim_start_matches('#');
    (text.len() < line.len() && text.starts_with(' ')).then(|| text.trim())
}

fn bullet(line: &str) -> Option<&str> {
    line.strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
        .or_else(|| line.strip_prefix("• "))
}

/// Renders `text` into lines of at most `width` columns, each starting with `indent`.
pub fn markdown_lines(
    text: &str,
    palette: &DocchatPalette,
    width: usize,
    indent: &str,
) -> Vec<Line<'static>> {
    let body_width = width.saturating_sub(indent.width()).max(1);
    let mut lines = Vec::new();
    for raw in text.trim().split('\n') {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            lines.push(Line::from(Span::raw(indent.to_string())));
            continue;
        }
        if let Some(title) = heading(trimmed) {
            let style = text_style(palette.accent).add_modifier(Modifier::BOLD);
            for seg in wrap_lines(title, body_width) {
                lines.push(Line::from(vec![Span::raw(indent.to_string()), Span::styled(seg, style)]));
            }
            continue;
        }
        let (first_prefix, cont_prefix, content) = match bullet(trimmed) {
            Some(item) => ("• ", "  ", item),
            None => ("", "", trimmed),
        };
        let wrap_width = body_width.saturating_sub(first_prefix.width()).max(1);
        for (i, seg) in wrap_lines(content, wrap_width).into_iter().enumerate() {
            let prefix = if i == 0 { first_prefix } else { cont_prefix };
            let mut spans = vec![Span::raw(indent.to_string())];
            if !prefix.is_empty() {
                spans.push(Span::styled(prefix, text_style(palette.accent)));
            }
            spans.extend(inline_spans(&seg, palette));
            lines.push(Line::from(spans));
        }
    }
    while lines.last().is_some_and(|l| l.width() <= indent.width()) {
        lines.pop();
    }
    lines
}
