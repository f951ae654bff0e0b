//! Terminal output for markdown and JSON results.
//!
//! Markdown goes through termimad when color is enabled, otherwise it is
//! printed verbatim. JSON output bypasses styling entirely.

use anyhow::{Context, Result};
use serde::Serialize;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich, plain and JSON output
pub struct TerminalRenderer {
    rich_enabled: bool,
    json: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool, json: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Green);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self {
            rich_enabled,
            json,
            skin,
        }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            // Headers keep their hash marks so IDs like "# 3." stay visible
            for line in markdown.lines() {
                if line.starts_with('#') {
                    println!("\x1b[32m{line}\x1b[0m");
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
        }
        Ok(())
    }

    /// Print `value` as JSON when `--json` is set, otherwise its markdown form.
    pub fn output<T: Serialize + ?Sized>(&self, value: &T, markdown: &str) -> Result<()> {
        if self.json {
            let json =
                serde_json::to_string_pretty(value).context("Failed to serialize output")?;
            println!("{json}");
            Ok(())
        } else {
            self.render(markdown)
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true, false)
    }
}
