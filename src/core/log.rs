use crate::errors::AppResult;
use crate::store::DataStore;
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;

const OP_TARGET_MAX: usize = 60;

fn strip_ansi(s: &str) -> String {
    match Regex::new(r"\x1B\[[0-9;]*[mK]") {
        Ok(re) => re.replace_all(s, "").into_owned(),
        Err(_) => s.to_string(),
    }
}

/// ANSI colour for an operation kind.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "attendance" => Colour::Cyan,
        "export" => Colour::Purple,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// "op (target)" cut to `max` visible characters.
fn op_target_text(operation: &str, target: &str, max: usize) -> String {
    let text = if target.is_empty() {
        operation.to_string()
    } else {
        format!("{operation} ({target})")
    };

    if text.chars().count() > max {
        let mut s: String = text.chars().take(max.saturating_sub(3)).collect();
        s.push_str("...");
        s
    } else {
        text
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(store: &DataStore) -> AppResult<()> {
        let entries = store.log.entries()?;

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let rows: Vec<(usize, String, &str, String, &str)> = entries
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| e.date.clone());
                (
                    i + 1,
                    date,
                    e.operation.as_str(),
                    op_target_text(&e.operation, &e.target, OP_TARGET_MAX),
                    e.message.as_str(),
                )
            })
            .collect();

        let op_w = rows
            .iter()
            .map(|(_, _, _, t, _)| t.chars().count())
            .max()
            .unwrap_or(10);
        let id_w = rows.len().to_string().len();
        let date_w = rows
            .iter()
            .map(|(_, d, _, _, _)| d.len())
            .max()
            .unwrap_or(0);

        println!("📜 Internal log:\n");

        for (id, date, operation, op_target, message) in rows {
            let color = color_for_operation(operation);

            // only the operation word is coloured
            let colored = match op_target.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                None => color.paint(op_target.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                colored,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
