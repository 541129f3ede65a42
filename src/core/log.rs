use crate::errors::AppResult;
use crate::sheet::journal::{JournalEntry, load_journal};
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

const OP_WIDTH_MAX: usize = 60;

static ANSI_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").ok());

fn strip_ansi(s: &str) -> String {
    match ANSI_RE.as_ref() {
        Some(re) => re.replace_all(s, "").into_owned(),
        None => s.to_string(),
    }
}

/// Colour for the operation column
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "update" => Colour::Yellow,
        "backup" => Colour::Blue,
        "export" => Colour::Cyan,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_journal(sheet: &Path) -> AppResult<()> {
        let entries = load_journal(sheet)?;

        if entries.is_empty() {
            info("The operation journal is empty.");
            return Ok(());
        }

        let idx_w = entries.len().to_string().len();
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(25);
        let op_w = entries
            .iter()
            .map(|e| op_target(e).chars().count())
            .max()
            .unwrap_or(10)
            .min(OP_WIDTH_MAX);

        println!("📜 Operation journal:\n");

        for (i, entry) in entries.iter().enumerate() {
            let color = color_for_operation(&entry.operation);
            let visible = truncate(&op_target(entry), OP_WIDTH_MAX);

            // only the operation word is coloured
            let colored = match visible.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(visible.as_str()).to_string(),
            };
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

            println!(
                "{:>idx_w$}: {:<date_w$} | {}{} => {}",
                i + 1,
                entry.date,
                colored,
                padding,
                entry.message,
                idx_w = idx_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

fn op_target(e: &JournalEntry) -> String {
    if e.target.is_empty() {
        e.operation.clone()
    } else {
        format!("{} ({})", e.operation, e.target)
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}
