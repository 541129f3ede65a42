use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Severity of a one-shot status line shown after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    Info,
    Success,
    Warning,
    Error,
}

impl Flash {
    fn style(&self) -> (&'static str, &'static str) {
        match self {
            Flash::Info => (FG_BLUE, "ℹ️"),
            Flash::Success => (FG_GREEN, "✅"),
            Flash::Warning => (FG_YELLOW, "⚠️"),
            Flash::Error => (FG_RED, "❌"),
        }
    }
}

/// Print a status line; errors go to stderr.
pub fn flash<T: fmt::Display>(level: Flash, msg: T) {
    let (color, icon) = level.style();
    let line = format!("{}{}{} {}{}", color, BOLD, icon, RESET, msg);
    if level == Flash::Error {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    flash(Flash::Info, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    flash(Flash::Success, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    flash(Flash::Warning, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    flash(Flash::Error, msg);
}
