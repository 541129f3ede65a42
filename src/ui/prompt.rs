use crate::errors::AppResult;
use crate::ui::messages::warning;
use std::io::{self, Write};

/// Yes/no question on stdin; anything but `y`/`yes` is a no.
pub fn confirm(question: &str) -> AppResult<bool> {
    warning(question);
    print!("Confirm [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
