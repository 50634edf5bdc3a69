// src/console.rs
//! Line-oriented front end over the page: set inputs, press buttons, show
//! outputs.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::{
    handlers,
    page::{ElementId, ElementKind, UnknownElement},
    state::SharedState,
};

pub const HELP: &str = "\
commands:
  set <element> <value...>   set an input (value may be empty)
  check <element> on|off     tick or clear a checkbox
  click <button>             press a button
  show <element>             print an element
  chat <message...>          set message, click sendBtn, show answer
  rate <n>                   set rating, click rateBtn, show rateResult
  kb <query...>              set kbQuery, click kbSearchBtn, show kbResults
  item <id>                  set kbItemId, click kbItemBtn, show kbItem
  es <query...>              set esQuery, click esSearchBtn, show esResults
  categories                 click esCategoriesBtn, show esCategoryList
  help | quit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Set(ElementId, String),
    Check(ElementId, bool),
    Click(ElementId),
    Show(ElementId),
    /// Set an input, press a button, print an output.
    Run {
        input: Option<(ElementId, String)>,
        button: ElementId,
        output: ElementId,
    },
    Help,
    Quit,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error(transparent)]
    UnknownElement(#[from] UnknownElement),

    #[error("'{0}' is a {1:?}, expected {2:?}")]
    WrongKind(ElementId, ElementKind, ElementKind),
}

fn split_word(line: &str) -> (&str, &str) {
    line.trim_start()
        .split_once(char::is_whitespace)
        .unwrap_or((line.trim_start(), ""))
}

fn element_of_kind(name: &str, kind: ElementKind) -> Result<ElementId, ParseError> {
    let id: ElementId = name.parse()?;
    if id.kind() != kind {
        return Err(ParseError::WrongKind(id, id.kind(), kind));
    }
    Ok(id)
}

fn run(input: Option<(ElementId, &str)>, button: ElementId, output: ElementId) -> Command {
    Command::Run {
        input: input.map(|(id, v)| (id, v.to_string())),
        button,
        output,
    }
}

pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (cmd, rest) = split_word(line);
    let cmd = cmd.to_ascii_lowercase();
    let arg = rest.trim();

    let command = match cmd.as_str() {
        "" => Command::Empty,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "set" => {
            let (name, value) = split_word(rest);
            if name.is_empty() {
                return Err(ParseError::Usage("set <element> <value...>"));
            }
            Command::Set(element_of_kind(name, ElementKind::Input)?, value.to_string())
        }
        "check" => {
            let (name, flag) = split_word(rest);
            let on = match flag.trim() {
                "on" | "true" | "yes" | "1" => true,
                "off" | "false" | "no" | "0" => false,
                _ => return Err(ParseError::Usage("check <element> on|off")),
            };
            Command::Check(element_of_kind(name, ElementKind::Checkbox)?, on)
        }
        "click" => {
            if arg.is_empty() {
                return Err(ParseError::Usage("click <button>"));
            }
            Command::Click(element_of_kind(arg, ElementKind::Button)?)
        }
        "show" => {
            if arg.is_empty() {
                return Err(ParseError::Usage("show <element>"));
            }
            Command::Show(arg.parse()?)
        }
        "chat" => run(
            Some((ElementId::Message, arg)),
            ElementId::SendBtn,
            ElementId::Answer,
        ),
        "rate" => run(
            Some((ElementId::Rating, arg)),
            ElementId::RateBtn,
            ElementId::RateResult,
        ),
        "kb" => run(
            Some((ElementId::KbQuery, arg)),
            ElementId::KbSearchBtn,
            ElementId::KbResults,
        ),
        "item" => run(
            Some((ElementId::KbItemId, arg)),
            ElementId::KbItemBtn,
            ElementId::KbItem,
        ),
        "es" => run(
            Some((ElementId::EsQuery, arg)),
            ElementId::EsSearchBtn,
            ElementId::EsResults,
        ),
        "categories" => run(None, ElementId::EsCategoriesBtn, ElementId::EsCategoryList),
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };
    Ok(command)
}

/// Applies one command to the page. Returns the text to print, if any.
pub async fn execute(state: &SharedState, command: Command) -> Option<String> {
    match command {
        Command::Set(id, value) => {
            state.page.write().await.set_value(id, value);
            None
        }
        Command::Check(id, on) => {
            state.page.write().await.set_checked(id, on);
            None
        }
        Command::Click(button) => handlers::click(state, button)
            .await
            .err()
            .map(|e| e.to_string()),
        Command::Show(id) => Some(state.page.read().await.render(id)),
        Command::Run {
            input,
            button,
            output,
        } => {
            if let Some((id, value)) = input {
                state.page.write().await.set_value(id, value);
            }
            if let Err(e) = handlers::click(state, button).await {
                return Some(e.to_string());
            }
            Some(state.page.read().await.render(output))
        }
        Command::Help => Some(HELP.to_string()),
        Command::Quit | Command::Empty => None,
    }
}

/// Reads commands from `input` until EOF or `quit`.
pub async fn run_loop<R, W>(state: &SharedState, input: R, mut output: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    output.write_all(b"> ").await?;
    output.flush().await?;

    while let Some(line) = lines.next_line().await? {
        let reply = match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => {
                debug!(?command, "console command");
                execute(state, command).await
            }
            Err(e) => Some(e.to_string()),
        };
        if let Some(text) = reply {
            output.write_all(text.as_bytes()).await?;
            output.write_all(b"\n").await?;
        }
        output.write_all(b"> ").await?;
        output.flush().await?;
    }
    output.flush().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_set_with_spaces_and_empty_values() {
        assert_eq!(
            parse_command("set message hello there").unwrap(),
            Command::Set(ElementId::Message, "hello there".into())
        );
        assert_eq!(
            parse_command("set sessionId").unwrap(),
            Command::Set(ElementId::SessionId, String::new())
        );
    }

    #[test]
    fn rejects_wrong_element_kinds() {
        assert_eq!(
            parse_command("click answer"),
            Err(ParseError::WrongKind(
                ElementId::Answer,
                ElementKind::Text,
                ElementKind::Button
            ))
        );
        assert!(matches!(
            parse_command("set esSave on"),
            Err(ParseError::WrongKind(..))
        ));
        assert!(matches!(
            parse_command("show nowhere"),
            Err(ParseError::UnknownElement(_))
        ));
    }

    #[test]
    fn shortcuts_expand() {
        assert_eq!(
            parse_command("kb vacation policy").unwrap(),
            Command::Run {
                input: Some((ElementId::KbQuery, "vacation policy".into())),
                button: ElementId::KbSearchBtn,
                output: ElementId::KbResults,
            }
        );
        assert_eq!(
            parse_command("check esSave on").unwrap(),
            Command::Check(ElementId::EsSave, true)
        );
        assert_eq!(parse_command("   ").unwrap(), Command::Empty);
        assert_eq!(parse_command("QUIT").unwrap(), Command::Quit);
        assert!(matches!(
            parse_command("dance"),
            Err(ParseError::UnknownCommand(_))
        ));
    }
}
