//! Parsing of interactive text commands.

use serde_json::json;

use crate::domain::entities::UserId;
use crate::error::AppError;

/// One line of user input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Register,
    Login(UserId),
    Short {
        url: String,
        clicks_limit: i64,
        lifetime_hours: i64,
    },
    Open(String),
    EditClicksLimit {
        short_url: String,
        new_limit: i64,
    },
    Remove(String),
    List,
    Clear,
}

/// Help text, one command per line.
pub const HELP: &[(&str, &str)] = &[
    ("exit", "exit the program"),
    ("register", "create a new user"),
    ("login UUID", "login with an existing user"),
    ("short url clicksLimit lifetimeHours", "shorten a link"),
    ("open shortUrl", "open a shortened link"),
    ("edit_clicks_limit shortUrl newLimit", "change the redirect limit"),
    ("remove shortUrl", "remove a link"),
    ("list", "show your links"),
    ("clear", "remove expired links"),
];

impl Command {
    /// Parses a non-empty input line. The command word is case-insensitive and
    /// arguments are separated by any run of whitespace; extra arguments are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for unknown commands, missing
    /// arguments, malformed numbers or malformed UUIDs.
    pub fn parse(line: &str) -> Result<Self, AppError> {
        let chunks: Vec<&str> = line.split_whitespace().collect();
        let Some(action) = chunks.first() else {
            return Err(unknown(line));
        };

        match action.to_lowercase().as_str() {
            "help" => Ok(Self::Help),
            "exit" => Ok(Self::Exit),
            "register" => Ok(Self::Register),
            "list" => Ok(Self::List),
            "clear" => Ok(Self::Clear),
            "login" => {
                let [_, id, ..] = chunks[..] else {
                    return Err(usage("login UUID"));
                };
                let id = id
                    .parse()
                    .map_err(|_| AppError::bad_request("Invalid UUID", json!({ "input": id })))?;
                Ok(Self::Login(id))
            }
            "short" => {
                let [_, url, clicks, hours, ..] = chunks[..] else {
                    return Err(usage("short url clicksLimit lifetimeHours"));
                };
                Ok(Self::Short {
                    url: url.to_string(),
                    clicks_limit: parse_number("clicksLimit", clicks)?,
                    lifetime_hours: parse_number("lifetimeHours", hours)?,
                })
            }
            "open" => {
                let [_, short_url, ..] = chunks[..] else {
                    return Err(usage("open shortUrl"));
                };
                Ok(Self::Open(short_url.to_string()))
            }
            "edit_clicks_limit" => {
                let [_, short_url, limit, ..] = chunks[..] else {
                    return Err(usage("edit_clicks_limit shortUrl newLimit"));
                };
                Ok(Self::EditClicksLimit {
                    short_url: short_url.to_string(),
                    new_limit: parse_number("newLimit", limit)?,
                })
            }
            "remove" => {
                let [_, short_url, ..] = chunks[..] else {
                    return Err(usage("remove shortUrl"));
                };
                Ok(Self::Remove(short_url.to_string()))
            }
            _ => Err(unknown(action)),
        }
    }

    /// Returns true for commands that act on behalf of the logged-in user.
    pub fn requires_identity(&self) -> bool {
        matches!(
            self,
            Self::Short { .. } | Self::EditClicksLimit { .. } | Self::Remove(_) | Self::List
        )
    }
}

fn parse_number(name: &str, value: &str) -> Result<i64, AppError> {
    value.parse().map_err(|_| {
        AppError::bad_request(
            format!("Invalid number format for {name}"),
            json!({ "argument": name, "input": value }),
        )
    })
}

fn usage(form: &str) -> AppError {
    AppError::bad_request(
        format!("Incorrect input format: {form}"),
        json!({ "usage": form }),
    )
}

fn unknown(input: &str) -> AppError {
    AppError::bad_request(
        "Unknown command. Type help for a list of commands",
        json!({ "input": input }),
    )
}
