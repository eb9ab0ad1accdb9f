//! Interactive session on stdin.
//!
//! Reads one command per line and prints the session screen after each:
//! - `text <...>`: replace the input text
//! - `sample`: load the next sample text
//! - `go`: analyze the input
//! - `select <id>` / `clear`: choose the claim shown in the citation panel
//! - `view tree|document` / `toggle`: switch views
//! - `help`: show or hide the guide
//! - `show`: print the input text
//! - `quit`

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config;
use crate::domain::ClaimId;
use crate::render::render_session;
use crate::session::{Action, Session, View};

/// A parsed session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Text(String),
    Sample,
    Go,
    Select(ClaimId),
    Clear,
    View(View),
    Toggle,
    Help,
    Show,
    Quit,
}

/// Parse one input line
pub fn parse_command(line: &str) -> Result<SessionCommand> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "text" => SessionCommand::Text(rest.to_string()),
        "sample" => SessionCommand::Sample,
        "go" | "scan" => SessionCommand::Go,
        "select" if !rest.is_empty() => SessionCommand::Select(ClaimId::new(rest)),
        "select" => anyhow::bail!("Usage: select <claim-id>"),
        "clear" => SessionCommand::Clear,
        "view" => SessionCommand::View(rest.parse()?),
        "toggle" => SessionCommand::Toggle,
        "help" | "?" => SessionCommand::Help,
        "show" => SessionCommand::Show,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        "" => anyhow::bail!("Type `help` for the list of commands"),
        other => anyhow::bail!("Unknown command: {}", other),
    };

    Ok(command)
}

/// Run the session until `quit` or end of input
pub async fn run() -> Result<()> {
    let cfg = config::config()?;
    let mut session = Session::from_config(cfg);

    eprintln!(
        "Cite Rite session ({} client). Type `help` for commands, `quit` to leave.",
        session.client_name()
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        match command {
            SessionCommand::Quit => break,
            SessionCommand::Show => {
                println!("{}", session.state().text);
                continue;
            }
            SessionCommand::Go => {
                // Failures are recorded in the state and rendered below
                let _ = session.analyze().await;
            }
            SessionCommand::Text(text) => {
                session.dispatch(Action::EditText(text));
            }
            SessionCommand::Sample => {
                session.dispatch(Action::LoadSample);
                println!("{}", session.state().text);
                continue;
            }
            SessionCommand::Select(id) => {
                if session.dispatch(Action::SelectClaim(id.clone())).selected.as_ref() != Some(&id) {
                    eprintln!("Unknown claim: {}", id);
                }
            }
            SessionCommand::Clear => {
                session.dispatch(Action::ClearSelection);
            }
            SessionCommand::View(view) => {
                session.dispatch(Action::SetView(view));
            }
            SessionCommand::Toggle => {
                session.dispatch(Action::ToggleView);
            }
            SessionCommand::Help => {
                session.dispatch(Action::ToggleHelp);
            }
        }

        println!("{}\n", render_session(session.state()));
    }

    Ok(())
}
