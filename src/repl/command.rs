#![forbid(unsafe_code)]

use std::sync::OnceLock;

use regex::Regex;

use crate::task::model::Status;

/// One parsed input line. Ordinals stay 1-based, as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    List(Option<Status>),
    Add(String),
    Update(usize, String),
    Delete(usize),
    MarkInProgress(usize),
    MarkDone(usize),
}

// The accepted grammar, compiled once. Ordinal arguments only match the
// literals 1-10; anything else falls through to "Invalid command!". The
// quoted-text groups accept the empty string so that blank descriptions
// reach their own validation message instead of being unrecognized.
struct Grammar {
    list_filter: Regex,
    add: Regex,
    update: Regex,
    delete: Regex,
    mark_in_progress: Regex,
    mark_done: Regex,
}

fn grammar() -> &'static Grammar {
    static GRAMMAR: OnceLock<Grammar> = OnceLock::new();
    GRAMMAR.get_or_init(|| Grammar {
        list_filter: pattern(r"^list\s+(todo|in-progress|done)$"),
        add: pattern(r#"^add\s+"(.*)"$"#),
        update: pattern(r#"^update\s+([1-9]|10)\s+"(.*)"$"#),
        delete: pattern(r"^delete\s+([1-9]|10)$"),
        mark_in_progress: pattern(r"^mark-in-progress\s+([1-9]|10)$"),
        mark_done: pattern(r"^mark-done\s+([1-9]|10)$"),
    })
}

fn pattern(re: &str) -> Regex {
    Regex::new(re).unwrap_or_else(|_| Regex::new("$^").unwrap())
}

/// Parses one trimmed input line; `None` means the line is not a command.
#[must_use]
pub fn parse(line: &str) -> Option<Command> {
    if line == "exit" {
        return Some(Command::Exit);
    }
    if line == "list" {
        return Some(Command::List(None));
    }

    let g = grammar();
    if let Some(caps) = g.list_filter.captures(line) {
        let status = match &caps[1] {
            "todo" => Status::Todo,
            "in-progress" => Status::InProgress,
            _ => Status::Done,
        };
        return Some(Command::List(Some(status)));
    }
    if let Some(caps) = g.add.captures(line) {
        return Some(Command::Add(caps[1].trim().to_owned()));
    }
    if let Some(caps) = g.update.captures(line) {
        let n = caps[1].parse().ok()?;
        return Some(Command::Update(n, caps[2].trim().to_owned()));
    }
    if let Some(caps) = g.delete.captures(line) {
        return Some(Command::Delete(caps[1].parse().ok()?));
    }
    if let Some(caps) = g.mark_in_progress.captures(line) {
        return Some(Command::MarkInProgress(caps[1].parse().ok()?));
    }
    if let Some(caps) = g.mark_done.captures(line) {
        return Some(Command::MarkDone(caps[1].parse().ok()?));
    }
    None
}
