use crate::db::log::{LogEntry, load_log};
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use rusqlite::Connection;
use std::sync::LazyLock;

const MAX_OP_WIDTH: usize = 60;

static ANSI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));

fn strip_ansi(s: &str) -> String {
    ANSI.replace_all(s, "").into_owned()
}

/// ANSI colour for an audit operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "clock_in" => Colour::Green,
        "clock_out" => Colour::Red,
        "register" => Colour::Cyan,
        "redemption" | "rating" => Colour::Yellow,
        "archive" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Render one entry; the op/target column is cut to 60 visible chars.
    pub fn format_entry(entry: &LogEntry, id_w: usize, date_w: usize, op_w: usize) -> String {
        let color = color_for_operation(&entry.operation);

        let op_target = if entry.target.is_empty() {
            entry.operation.clone()
        } else {
            format!("{} ({})", entry.operation, entry.target)
        };

        let visible = if op_target.chars().count() > MAX_OP_WIDTH {
            let mut s: String = op_target.chars().take(MAX_OP_WIDTH - 3).collect();
            s.push_str("...");
            s
        } else {
            op_target
        };

        // only the operation word is coloured
        let colored = match visible.split_once(' ') {
            Some((op, rest)) => format!("{} {}", color.paint(op), rest),
            None => color.paint(visible.as_str()).to_string(),
        };

        let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

        format!(
            "{:>id_w$}: {:<date_w$} | {}{} => {}",
            entry.id,
            entry.date,
            colored,
            padding,
            entry.message,
            id_w = id_w,
            date_w = date_w
        )
    }

    pub fn print_log(conn: &Connection) -> AppResult<()> {
        let entries: Vec<LogEntry> = load_log(conn)?
            .into_iter()
            .map(|mut e| {
                if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(&e.date) {
                    e.date = dt.format("%FT%T%:z").to_string();
                }
                e
            })
            .collect();

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let op_w = entries
            .iter()
            .map(|e| e.operation.len() + e.target.len() + 3)
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);
        let id_w = entries.iter().map(|e| e.id.to_string().len()).max().unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");
        for e in &entries {
            println!("{}", Self::format_entry(e, id_w, date_w, op_w));
        }

        Ok(())
    }
}
