//! What the CLI prints. Text mode styles lines with `console`, lists with
//! `comfy-table`, and waits behind an `indicatif` spinner. `--output json`
//! turns every line into `{"level", "message", "data"?}` on its own line and
//! hides the spinner.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};
use console::{StyledObject, style};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

const ACCENT: u8 = 73;
const SPINNER_TICK: Duration = Duration::from_millis(80);

static JSON: AtomicBool = AtomicBool::new(false);

pub fn init(format: OutputFormat) {
    JSON.store(matches!(format, OutputFormat::Json), Ordering::Relaxed);
}

pub fn is_json() -> bool {
    JSON.load(Ordering::Relaxed)
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
enum Level {
    Info,
    Success,
    Warning,
    Error,
    Data,
}

impl Level {
    fn marker(self) -> Option<StyledObject<&'static str>> {
        match self {
            Self::Success => Some(style("✓").green()),
            Self::Warning => Some(style("!").yellow()),
            Self::Error => Some(style("✗").red()),
            Self::Info | Self::Data => None,
        }
    }
}

#[derive(Serialize)]
struct Record<'a> {
    level: Level,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a Value>,
}

fn to_json(level: Level, message: &str, data: Option<&Value>) -> String {
    let record = Record {
        level,
        message,
        data,
    };
    serde_json::to_string(&record).unwrap_or_else(|_| {
        serde_json::json!({ "level": level, "message": message }).to_string()
    })
}

/// Errors go to stderr in both modes; everything else to stdout.
fn emit(level: Level, message: &str, data: Option<&Value>, text: impl FnOnce() -> String) {
    let line = if is_json() {
        to_json(level, message, data)
    } else {
        text()
    };
    match level {
        Level::Error => eprintln!("{line}"),
        _ => println!("{line}"),
    }
}

fn marked(level: Level, text: &str) {
    emit(level, text, None, || match level.marker() {
        Some(marker) => format!("{} {}", marker, style(text).bright()),
        None => text.to_string(),
    });
}

pub fn header(text: &str) {
    emit(Level::Info, text, None, || {
        style(text).bold().color256(ACCENT).to_string()
    });
}

pub fn success(text: &str) {
    marked(Level::Success, text);
}

pub fn warning(text: &str) {
    marked(Level::Warning, text);
}

pub fn error(text: &str) {
    marked(Level::Error, text);
}

pub fn dim(text: &str) {
    emit(Level::Info, text, None, || style(text).dim().to_string());
}

/// Indented `key value` line; `{"key": value}` as data in JSON mode.
pub fn kv(key: &str, value: &str) {
    let data = serde_json::json!({ key: value });
    emit(Level::Info, key, Some(&data), || {
        format!("  {} {}", style(key).color256(ACCENT).bold(), value)
    });
}

/// Structured payload. Prints nothing in text mode, where callers render the
/// same value themselves.
pub fn data<T: Serialize>(label: &str, value: &T) {
    if is_json() {
        let value = serde_json::to_value(value).unwrap_or(Value::Null);
        println!("{}", to_json(Level::Data, label, Some(&value)));
    }
}

/// Writes a streamed chunk as-is (text mode only).
pub fn stream_text(text: &str) {
    if is_json() {
        return;
    }
    let mut out = std::io::stdout().lock();
    let _ = out.write_all(text.as_bytes());
    let _ = out.flush();
}

pub fn table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn table_header(table: &mut Table, columns: &[&str]) {
    table.set_header(
        columns
            .iter()
            .map(|c| Cell::new(c).fg(Color::Cyan).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );
}

/// The first cell is the id column and gets highlighted.
pub fn table_row(table: &mut Table, cells: &[&str]) {
    let row: Vec<Cell> = cells
        .iter()
        .enumerate()
        .map(|(i, c)| match i {
            0 => Cell::new(c).fg(Color::Green),
            _ => Cell::new(c),
        })
        .collect();
    table.add_row(row);
}

/// Spinner shown while waiting on the backend. Hidden in JSON mode so stdout
/// stays machine-readable.
pub fn spinner(message: &str) -> ProgressBar {
    if is_json() {
        return ProgressBar::hidden();
    }
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    let spinner = ProgressBar::new_spinner()
        .with_style(style)
        .with_message(message.to_string());
    spinner.enable_steady_tick(SPINNER_TICK);
    spinner
}

pub fn spinner_success(spinner: &ProgressBar, message: &str) {
    spinner.finish_and_clear();
    success(message);
}

pub fn spinner_error(spinner: &ProgressBar, message: &str) {
    spinner.finish_and_clear();
    error(message);
}
