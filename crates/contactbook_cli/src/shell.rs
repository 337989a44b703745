//! Line-oriented shell over [`LogicService`].
//!
//! Each input line is one command. Feedback goes to `out`; list and find
//! commands also print the matching entries with their one-based indexes.

use contactbook_core::command::event_commands::{FIND_EVENT_WORD, LIST_EVENTS_WORD};
use contactbook_core::command::person_commands::{FIND_WORD, LIST_WORD};
use contactbook_core::command::usage_reference;
use contactbook_core::{LogicError, LogicService, Storage};
use log::warn;
use std::io::{self, BufRead, Write};

const PROMPT: &str = "> ";
const WELCOME: &str = "Contact book ready. Type `help` for the command reference.";

/// What the shell should do after one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Reads commands from `input` until `exit` or end of input.
pub fn run<S, R, W>(service: &mut LogicService<S>, input: R, out: &mut W) -> io::Result<()>
where
    S: Storage,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{WELCOME}")?;
    let mut lines = input.lines();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        if handle_line(service, &line?, out)? == Flow::Exit {
            break;
        }
    }
    Ok(())
}

/// Executes `commands` in order, stopping early on `exit`.
pub fn run_batch<S, W>(
    service: &mut LogicService<S>,
    commands: &[String],
    out: &mut W,
) -> io::Result<()>
where
    S: Storage,
    W: Write,
{
    for command in commands {
        if handle_line(service, command, out)? == Flow::Exit {
            break;
        }
    }
    Ok(())
}

fn handle_line<S: Storage, W: Write>(
    service: &mut LogicService<S>,
    line: &str,
    out: &mut W,
) -> io::Result<Flow> {
    if line.trim().is_empty() {
        return Ok(Flow::Continue);
    }

    let result = match service.execute(line) {
        Ok(result) => result,
        Err(err) => {
            if matches!(err, LogicError::Storage(_)) {
                warn!("event=cli_command module=cli status=error error_code=save_failed");
            }
            writeln!(out, "{err}")?;
            return Ok(Flow::Continue);
        }
    };

    writeln!(out, "{}", result.feedback)?;
    if result.show_help {
        for usage in usage_reference() {
            writeln!(out, "\n{usage}")?;
        }
    }

    let word = line.split_whitespace().next().unwrap_or_default();
    if word == LIST_WORD || word == FIND_WORD {
        for (position, person) in service.filtered_persons().iter().enumerate() {
            writeln!(out, "{}. {}", position + 1, person)?;
        }
    } else if word == LIST_EVENTS_WORD || word == FIND_EVENT_WORD {
        for (position, event) in service.filtered_events().iter().enumerate() {
            writeln!(out, "{}. {}", position + 1, event)?;
        }
    }

    Ok(if result.exit { Flow::Exit } else { Flow::Continue })
}
