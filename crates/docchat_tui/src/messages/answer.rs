//! Answer rendering: references box, static answer with its page affordance,
//! typing reveal, and the token usage line.

use docchat_core::{Reference, format_answer};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::markdown::markdown_lines;
use super::{ClickAction, HitTarget, RenderedEntry};
use crate::layouts::{link_style, text_muted_style, text_style};
use crate::theme::DocchatPalette;
use crate::utils::{LEFT_PADDING, truncate_ellipsis};

/// Cursor drawn after the revealed prefix.
pub const REVEAL_CURSOR: &str = "▌";

const REFERENCE_BULLET: &str = "▪ ";

/// Indent of reference rows under the "References" title.
const REFERENCE_INDENT: &str = "    ";

/// "References" title then one clickable row per reference name.
pub fn references_box(references: &[Reference], palette: &DocchatPalette, width: usize) -> RenderedEntry {
    let mut out = RenderedEntry::default();
    out.lines.push(Line::from(vec![
        Span::raw(LEFT_PADDING),
        Span::styled(
            "References",
            text_muted_style(palette.text_muted).add_modifier(Modifier::BOLD),
        ),
    ]));
    let start_col = REFERENCE_INDENT.width() + REFERENCE_BULLET.width();
    for reference in references {
        let label = if reference.name.trim().is_empty() {
            reference.id.as_str()
        } else {
            reference.name.as_str()
        };
        let label = truncate_ellipsis(label, width.saturating_sub(start_col).max(1));
        out.targets.push(HitTarget {
            line: out.lines.len(),
            start_col: start_col as u16,
            end_col: (start_col + label.width()) as u16,
            action: ClickAction::OpenReference(reference.id.clone()),
        });
        out.lines.push(Line::from(vec![
            Span::raw(REFERENCE_INDENT),
            Span::styled(REFERENCE_BULLET, text_muted_style(palette.text_muted)),
            Span::styled(label, link_style(palette.link)),
        ]));
    }
    out
}

/// Completed answer with its first `Page no: N` marker pulled out into a
/// clickable line of its own.
pub fn static_lines(answer: &str, palette: &DocchatPalette, width: usize) -> RenderedEntry {
    let formatted = format_answer(answer);
    let mut out = RenderedEntry {
        lines: markdown_lines(&formatted.body, palette, width, LEFT_PADDING),
        targets: Vec::new(),
    };
    if let Some(page) = formatted.page {
        let label = format!("Page no: {}", page);
        let start_col = LEFT_PADDING.width();
        out.targets.push(HitTarget {
            line: out.lines.len(),
            start_col: start_col as u16,
            end_col: (start_col + label.width()) as u16,
            action: ClickAction::GoToPage(page),
        });
        out.lines.push(Line::from(vec![
            Span::raw(LEFT_PADDING),
            Span::styled(label, link_style(palette.accent).add_modifier(Modifier::BOLD)),
        ]));
    }
    out
}

/// Revealed prefix rendered as-is (partial markup included) with a cursor.
pub fn typing_lines(revealed: &str, palette: &DocchatPalette, width: usize) -> Vec<Line<'static>> {
    let cursor = Span::styled(REVEAL_CURSOR, text_style(palette.accent));
    let mut lines = markdown_lines(revealed, palette, width.saturating_sub(1), LEFT_PADDING);
    match lines.last_mut() {
        Some(last) => last.spans.push(cursor),
        None => lines.push(Line::from(vec![Span::raw(LEFT_PADDING), cursor])),
    }
    lines
}

pub fn tokens_line(tokens: &str, palette: &DocchatPalette) -> Line<'static> {
    Line::from(vec![
        Span::raw(LEFT_PADDING),
        Span::styled(
            format!("Total tokens used: {}", tokens),
            text_muted_style(palette.text_muted),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn reference_targets_cover_names() {
        let palette = DocchatPalette::docchat_dark();
        let refs = vec![Reference::new("a1", "Cardiology Guide"), Reference::new("b2", "")];
        let out = references_box(&refs, &palette, 60);
        assert_eq!(out.lines.len(), 3);
        assert_eq!(out.targets[0].line, 1);
        assert_eq!(out.targets[0].start_col, 6);
        assert_eq!(out.targets[0].end_col, 6 + 16);
        // A nameless reference falls back to its id.
        assert!(text(&out.lines[2]).ends_with("b2"));
        assert_eq!(out.targets[1].action, ClickAction::OpenReference("b2".into()));
    }

    #[test]
    fn page_marker_becomes_clickable_line() {
        let palette = DocchatPalette::docchat_dark();
        let out = static_lines("Use with food. Page no: 7", &palette, 60);
        let last = out.lines.len() - 1;
        assert_eq!(text(&out.lines[last]), "  Page no: 7");
        assert_eq!(
            out.targets,
            vec![HitTarget {
                line: last,
                start_col: 2,
                end_col: 13,
                action: ClickAction::GoToPage(7),
            }]
        );
        assert_eq!(text(&out.lines[0]).trim_end(), "  Use with food.");
    }

    #[test]
    fn answer_without_marker_has_no_targets() {
        let palette = DocchatPalette::docchat_dark();
        let out = static_lines("No citation here.", &palette, 60);
        assert!(out.targets.is_empty());
    }

    #[test]
    fn typing_ends_with_cursor() {
        let palette = DocchatPalette::docchat_dark();
        let lines = typing_lines("**Dos", &palette, 40);
        assert!(text(lines.last().unwrap_or(&Line::default())).ends_with(REVEAL_CURSOR));
        let empty = typing_lines("", &palette, 40);
        assert_eq!(text(&empty[0]), format!("{}{}", LEFT_PADDING, REVEAL_CURSOR));
    }
}
