//! Terminal interaction.
//!
//! Everything gdeps asks the user goes through the [`Terminal`] trait so the
//! command pipeline can run against a scripted terminal in tests. The real
//! implementation, [`ConsoleTerminal`], is backed by `inquire`.
//!
//! ## Components
//!
//! - `Terminal` - prompts and forwarded log lines
//! - `Table` - boxed table used by `gdeps list`

use crate::error::{GdepsError, Result};
use colored::*;
use inquire::{Confirm, Select, Text};

/// A question asked on behalf of gdeps or the package manager.
///
/// gdeps itself only raises `Select`. `Input` and `Confirm` exist for package
/// managers that route their questions through [`Terminal`]; the bower client
/// runs attached to the terminal and asks its own.
#[derive(Debug, Clone, PartialEq)]
pub enum Prompt {
    /// Free-form text answer.
    Input {
        message: String,
        default: Option<String>,
    },
    /// Yes / no answer.
    Confirm { message: String, default: bool },
    /// Single choice from a list.
    Select {
        message: String,
        choices: Vec<String>,
    },
}

/// The user's reply to a [`Prompt`].
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Text(String),
    Bool(bool),
}

pub trait Terminal {
    /// Answer a prompt. Blocks until the user replies.
    fn ask(&mut self, prompt: &Prompt) -> Result<Answer>;

    /// Print a line produced by `source` (e.g. "Bower").
    fn log(&mut self, source: &str, message: &str);

    /// Single-choice list prompt returning the chosen entry.
    fn select(&mut self, message: &str, choices: &[String]) -> Result<String> {
        let prompt = Prompt::Select {
            message: message.to_string(),
            choices: choices.to_vec(),
        };
        match self.ask(&prompt)? {
            Answer::Text(choice) => Ok(choice),
            Answer::Bool(_) => Err(GdepsError::Prompt(format!(
                "expected a choice for '{}'",
                message
            ))),
        }
    }
}

/// Interactive terminal on stdin/stdout.
#[derive(Debug, Default)]
pub struct ConsoleTerminal;

impl Terminal for ConsoleTerminal {
    fn ask(&mut self, prompt: &Prompt) -> Result<Answer> {
        let answer = match prompt {
            Prompt::Input { message, default } => {
                let mut text = Text::new(message);
                if let Some(default) = default {
                    text = text.with_default(default);
                }
                Answer::Text(text.prompt()?)
            }
            Prompt::Confirm { message, default } => Answer::Bool(
                Confirm::new(message)
                    .with_default(*default)
                    .prompt()?,
            ),
            Prompt::Select { message, choices } => {
                Answer::Text(Select::new(message, choices.clone()).prompt()?)
            }
        };
        Ok(answer)
    }

    fn log(&mut self, source: &str, message: &str) {
        println!("{} {}", format!("{}:", source).dimmed(), message);
    }
}

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Rows with the wrong number of cells are dropped.
    pub fn add_row(&mut self, row: Vec<String>) {
        if row.len() == self.headers.len() {
            self.rows.push(row);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn print(&self) {
        for line in self.render(console::Term::stdout().size().1 as usize) {
            println!("{}", line);
        }
    }

    /// Lay the table out within `max_width` columns.
    pub fn render(&self, max_width: usize) -> Vec<String> {
        if self.headers.is_empty() {
            return Vec::new();
        }

        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .map(|h| console::measure_text_width(h))
            .collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(console::measure_text_width(cell));
            }
        }

        // Shrink the widest column until the table fits, keeping at least 8 chars.
        let overhead = 3 + 3 * widths.len();
        while overhead + widths.iter().sum::<usize>() > max_width {
            let (idx, &widest) = match widths.iter().enumerate().max_by_key(|(_, w)| **w) {
                Some(entry) => entry,
                None => break,
            };
            if widest <= 8 {
                break;
            }
            widths[idx] -= 1;
        }

        let border = |left: &str, mid: &str, right: &str| {
            let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
            format!("  {}{}{}", left, segments.join(mid), right)
        };
        let line = |cells: &[String], bold: bool| {
            let mut out = String::from("  │");
            for (cell, width) in cells.iter().zip(&widths) {
                let clean = cell.replace(['\n', '\r', '\t'], " ");
                let shown = console::truncate_str(&clean, *width, "...").to_string();
                let padding = width.saturating_sub(console::measure_text_width(&shown));
                let shown = if bold { shown.bold().to_string() } else { shown };
                out.push_str(&format!(" {}{} │", shown, " ".repeat(padding)));
            }
            out
        };

        let mut out = vec![border("┌", "┬", "┐"), line(&self.headers, true)];
        out.push(border("├", "┼", "┤"));
        for row in &self.rows {
            out.push(line(row, false));
        }
        out.push(border("└", "┴", "┘"));
        out
    }
}
