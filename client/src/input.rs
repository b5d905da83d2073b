//! Translation of command lines into site and gate messages

use crate::puzzle::GateEvent;
use shared::NewsTag;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("{0}")]
    BadValue(String),
}

/// A parsed site command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Home,
    News,
    Rules,
    Wiki,
    Status,
    Chat,
    Say(String),
    Login {
        username: String,
        password: String,
    },
    Register {
        username: String,
        email: String,
        password: String,
        confirm: String,
    },
    Logout,
    AddNews {
        title: String,
        content: String,
        tag: NewsTag,
    },
    AddRule {
        title: String,
        text: String,
    },
    Help,
    Quit,
}

/// Parses a line while the gate puzzle is active.
pub fn parse_gate(line: &str) -> Result<GateEvent, ParseError> {
    let mut words = line.split_whitespace();
    let verb = words.next().ok_or(ParseError::Empty)?;

    match verb {
        "drag" => {
            let wire = words.next().ok_or(ParseError::Usage("drag <green|yellow|orange>"))?;
            let wire = wire.parse().map_err(ParseError::BadValue)?;
            Ok(GateEvent::BeginDrag(wire))
        }
        "drop" => {
            let terminal = words
                .next()
                .ok_or(ParseError::Usage("drop <right-0|right-1|right-2>"))?;
            let terminal = terminal.parse().map_err(ParseError::BadValue)?;
            Ok(GateEvent::DropOn(terminal))
        }
        "reset" => Ok(GateEvent::Reset),
        other => Err(ParseError::Unknown(other.to_string())),
    }
}

/// Parses a line once the site proper is showing.
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let trimmed = line.trim();
    let mut words = trimmed.split_whitespace();
    let verb = words.next().ok_or(ParseError::Empty)?;

    match verb {
        "home" => Ok(Command::Home),
        "news" => Ok(Command::News),
        "rules" => Ok(Command::Rules),
        "wiki" => Ok(Command::Wiki),
        "status" => Ok(Command::Status),
        "chat" => Ok(Command::Chat),
        "say" => {
            let text = trimmed["say".len()..].trim();
            if text.is_empty() {
                return Err(ParseError::Usage("say <message>"));
            }
            Ok(Command::Say(text.to_string()))
        }
        "login" => {
            let (username, password) = match (words.next(), words.next()) {
                (Some(u), Some(p)) => (u, p),
                _ => return Err(ParseError::Usage("login <username> <password>")),
            };
            Ok(Command::Login {
                username: username.to_string(),
                password: password.to_string(),
            })
        }
        "register" => {
            let fields = (words.next(), words.next(), words.next(), words.next());
            let (username, email, password, confirm) = match fields {
                (Some(u), Some(e), Some(p), Some(c)) => (u, e, p, c),
                _ => {
                    return Err(ParseError::Usage(
                        "register <username> <email> <password> <confirm>",
                    ))
                }
            };
            Ok(Command::Register {
                username: username.to_string(),
                email: email.to_string(),
                password: password.to_string(),
                confirm: confirm.to_string(),
            })
        }
        "logout" => Ok(Command::Logout),
        "add-news" => {
            let rest = trimmed["add-news".len()..].trim();
            let parts: Vec<&str> = rest.split('|').map(str::trim).collect();
            if parts.len() != 3 {
                return Err(ParseError::Usage("add-news <title> | <content> | <tag>"));
            }
            let tag = parts[2].parse().map_err(ParseError::BadValue)?;
            Ok(Command::AddNews {
                title: parts[0].to_string(),
                content: parts[1].to_string(),
                tag,
            })
        }
        "add-rule" => {
            let rest = trimmed["add-rule".len()..].trim();
            let parts: Vec<&str> = rest.split('|').map(str::trim).collect();
            if parts.len() != 2 {
                return Err(ParseError::Usage("add-rule <title> | <text>"));
            }
            Ok(Command::AddRule {
                title: parts[0].to_string(),
                text: parts[1].to_string(),
            })
        }
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(ParseError::Unknown(other.to_string())),
    }
}
