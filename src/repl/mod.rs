#![forbid(unsafe_code)]

pub mod command;

use std::io::{BufRead, Write};

use anyhow::Context as _;

use crate::error::TasktabError;
use crate::repl::command::Command;
use crate::task::list::TaskList;
use crate::task::model::Status;
use crate::task::store::TaskStore;

pub const PROMPT: &str = "Enter command: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Runs the interactive session until `exit` or end of input.
///
/// Validation failures print their one-line message to `output` and the
/// session continues; store I/O failures are reported on stderr and the
/// session continues; a corrupt database ends the session with an error.
pub fn run(store: &TaskStore, input: impl BufRead, mut output: impl Write) -> anyhow::Result<()> {
    let mut lines = input.lines();
    loop {
        write!(output, "{PROMPT}").context("failed to write prompt")?;
        output.flush().context("failed to flush output")?;

        let Some(line) = lines.next() else {
            break; // input exhausted, same as `exit`
        };
        let line = line.context("failed to read command")?;

        match dispatch(store, line.trim(), &mut output) {
            Ok(Flow::Stop) => break,
            Ok(Flow::Continue) => {}
            Err(err) if err.is_fatal() => return Err(err.into()),
            Err(err) => eprintln!("{err}"),
        }
    }
    Ok(())
}

fn dispatch(store: &TaskStore, line: &str, output: &mut impl Write) -> Result<Flow, TasktabError> {
    let Some(cmd) = command::parse(line) else {
        report(output, "Invalid command!")?;
        return Ok(Flow::Continue);
    };

    match cmd {
        Command::Exit => return Ok(Flow::Stop),
        Command::List(filter) => {
            let tasks = store.load()?;
            for task in tasks.iter().filter(|t| filter.is_none_or(|s| t.status == s)) {
                report(output, &task.view_line())?;
            }
        }
        Command::Add(description) => mutate(store, output, |tasks| tasks.add(&description))?,
        Command::Update(n, description) => {
            mutate(store, output, |tasks| tasks.update(n, &description))?;
        }
        Command::Delete(n) => mutate(store, output, |tasks| tasks.delete(n))?,
        Command::MarkInProgress(n) => {
            mutate(store, output, |tasks| tasks.mark(n, Status::InProgress))?;
        }
        Command::MarkDone(n) => mutate(store, output, |tasks| tasks.mark(n, Status::Done))?,
    }
    Ok(Flow::Continue)
}

// Load-mutate-save. Successful mutations are silent; validation failures
// print their message and leave the file untouched.
fn mutate(
    store: &TaskStore,
    output: &mut impl Write,
    op: impl FnOnce(&mut TaskList) -> Result<(), TasktabError>,
) -> Result<(), TasktabError> {
    let mut tasks = store.load()?;
    match op(&mut tasks) {
        Ok(()) => store.save(&tasks),
        Err(
            err @ (TasktabError::NoSuchTask(_)
            | TasktabError::EmptyDescription
            | TasktabError::TableFull),
        ) => report(output, &err.to_string()),
        Err(err) => Err(err),
    }
}

fn report(output: &mut impl Write, msg: &str) -> Result<(), TasktabError> {
    writeln!(output, "{msg}")?;
    Ok(())
}
