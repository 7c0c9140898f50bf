// repl.rs

use anyhow::Context;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use recall::{HistoryBuffer, HistoryOptions};

// Drives the history buffer the way a text input would: plain lines are
// submissions, colon commands stand in for the arrow keys.
pub fn start_repl() -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new().context("failed to create line editor")?;
    let mut history = HistoryBuffer::new(
        HistoryOptions::new()
            .max_size(50)
            .default_value(String::new())
            .validate(|line: &String| !line.trim().is_empty()),
    )
    .context("failed to configure history")?;
    println!("type lines to store them; browse with :prev :next :first :last :reset; :list :cap <n> :clear; exit quits");
    loop {
        let readline = rl.readline("> ");
        match readline {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                let trimmed = line.trim();
                match trimmed {
                    "exit" => break,
                    ":prev" => show(history.prev(), &history),
                    ":next" => show(history.next(), &history),
                    ":first" => show(history.first(), &history),
                    ":last" => show(history.last(), &history),
                    ":reset" => show(history.past_last(), &history),
                    ":clear" => history.clear(),
                    ":list" => {
                        for (i, entry) in history.entries().iter().enumerate() {
                            println!("{:>5}  {}", i + 1, entry);
                        }
                    }
                    _ if trimmed.starts_with(":cap") => {
                        match trimmed[4..].trim().parse::<usize>() {
                            Ok(max_size) => history
                                .reconfigure(HistoryOptions::new().max_size(max_size))
                                .context("failed to reconfigure history")?,
                            Err(_) => println!("usage: :cap <n>"),
                        }
                    }
                    _ => history.add(trimmed.to_string()),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}

fn show(flag: bool, history: &HistoryBuffer<String>) {
    let current = history.current().map(String::as_str).unwrap_or_default();
    println!("{flag:>5}  {current:?}");
}
