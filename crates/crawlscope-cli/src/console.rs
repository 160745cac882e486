use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::Path;

/// Plain-mode styling; colors only when stdout is a terminal and NO_COLOR is unset
pub struct Console {
    color: bool,
}

impl Console {
    pub fn stdout() -> Self {
        Self {
            color: std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
        }
    }

    pub fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn path(&self, path: &Path) -> String {
        let text = path.display().to_string();
        if self.color {
            text.cyan().to_string()
        } else {
            text
        }
    }

    pub fn count(&self, n: usize) -> String {
        if self.color {
            n.green().to_string()
        } else {
            n.to_string()
        }
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// `5400` → `1h 30m 0s`
pub fn format_seconds(total: i64) -> String {
    let (h, rest) = (total / 3600, total % 3600);
    let (m, s) = (rest / 60, rest % 60);
    if h > 0 {
        format!("{}h {}m {}s", h, m, s)
    } else if m > 0 {
        format!("{}m {}s", m, s)
    } else {
        format!("{}s", s)
    }
}
