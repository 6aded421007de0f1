//! Interactive session: holds the logged-in identity and renders results.

use std::io::{BufRead, Write};

use anyhow::Result;
use colored::Colorize;
use tracing::debug;

use super::command::{Command, HELP};
use crate::domain::entities::{Link, UserId};
use crate::domain::redemption::RedeemOutcome;
use crate::error::AppError;
use crate::state::AppState;

/// Whether the read loop should keep going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// A single user's interactive session over the shared services.
///
/// The current identity lives here and is passed explicitly to every
/// owner-scoped operation.
pub struct Session<W: Write> {
    state: AppState,
    current_user: Option<UserId>,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(state: AppState, out: W) -> Self {
        Self {
            state,
            current_user: None,
            out,
        }
    }

    pub fn current_user(&self) -> Option<UserId> {
        self.current_user
    }

    /// Reads commands line by line until `exit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        writeln!(
            self.out,
            "{}",
            "Welcome to the link shortener! Type help for a list of commands".bright_blue()
        )?;
        self.prompt()?;

        for line in input.lines() {
            let line = line?;
            if !line.trim().is_empty() && self.handle_line(&line)? == Flow::Exit {
                return Ok(());
            }
            self.prompt()?;
        }

        Ok(())
    }

    /// Parses and executes one input line, printing any error.
    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        match Command::parse(line) {
            Ok(command) => self.execute(command),
            Err(e) => {
                self.print_error(&e)?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Executes a parsed command against the shared services.
    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        debug!(?command, "Executing command");

        let user = match (command.requires_identity(), self.current_user) {
            (true, None) => {
                writeln!(self.out, "{}", "Please register or login".yellow())?;
                return Ok(Flow::Continue);
            }
            (_, user) => user,
        };

        match command {
            Command::Help => self.print_help()?,
            Command::Exit => {
                writeln!(self.out, "{}", "Goodbye!".bright_blue())?;
                return Ok(Flow::Exit);
            }
            Command::Register => {
                let id = self.state.user_service.register();
                self.current_user = Some(id);
                writeln!(self.out, "Your UUID: {}", id.to_string().bright_yellow())?;
            }
            Command::Login(id) => {
                if self.state.user_service.exists(&id) {
                    self.current_user = Some(id);
                    writeln!(self.out, "{}", "Logged in successfully".green())?;
                } else {
                    writeln!(self.out, "{}", "User not found".red())?;
                }
            }
            Command::Short {
                url,
                clicks_limit,
                lifetime_hours,
            } => {
                let Some(owner) = user else {
                    return Ok(Flow::Continue);
                };
                match self
                    .state
                    .link_service
                    .create(owner, url, clicks_limit, lifetime_hours)
                {
                    Ok(link) => {
                        writeln!(self.out, "Shortened link: {}", link.short_url.bright_cyan())?
                    }
                    Err(e) => self.print_error(&e)?,
                }
            }
            Command::Open(short_url) => {
                let outcome = self.state.link_service.redeem(&short_url);
                self.print_outcome(&outcome)?;
            }
            Command::EditClicksLimit {
                short_url,
                new_limit,
            } => {
                let Some(owner) = user else {
                    return Ok(Flow::Continue);
                };
                match self
                    .state
                    .link_service
                    .edit_limit(owner, &short_url, new_limit)
                {
                    Ok(link) => writeln!(
                        self.out,
                        "{} {}",
                        "Click limit changed to".green(),
                        link.click_limit
                    )?,
                    Err(e) => self.print_error(&e)?,
                }
            }
            Command::Remove(short_url) => {
                let Some(owner) = user else {
                    return Ok(Flow::Continue);
                };
                match self.state.link_service.remove_link(owner, &short_url) {
                    Ok(_) => writeln!(self.out, "{}", "The link has been removed".green())?,
                    Err(e) => self.print_error(&e)?,
                }
            }
            Command::List => {
                let Some(owner) = user else {
                    return Ok(Flow::Continue);
                };
                let links = self.state.link_service.links_of(owner);
                self.print_links(&links)?;
            }
            Command::Clear => {
                let removed = self.state.link_service.remove_expired_links();
                writeln!(self.out, "Removed expired links: {removed}")?;
            }
        }

        Ok(Flow::Continue)
    }

    fn print_outcome(&mut self, outcome: &RedeemOutcome) -> Result<()> {
        match outcome {
            RedeemOutcome::NotFound => writeln!(self.out, "{}", "Link not found".red())?,
            RedeemOutcome::Unavailable { .. } => {
                writeln!(
                    self.out,
                    "{}",
                    "The expiration date has passed, or the click limit has been reached".red()
                )?;
                writeln!(
                    self.out,
                    "{}",
                    "The link has been deleted because it is unavailable".yellow()
                )?;
            }
            RedeemOutcome::Opened { link, opened } => self.print_opened(link, *opened)?,
            RedeemOutcome::OpenedAndExpired { link, opened } => {
                self.print_opened(link, *opened)?;
                writeln!(
                    self.out,
                    "{}",
                    "The click limit has been reached. The link has been deleted".yellow()
                )?;
            }
        }
        Ok(())
    }

    fn print_opened(&mut self, link: &Link, opened: bool) -> Result<()> {
        let verb = if opened { "Opened" } else { "Open the link manually:" };
        writeln!(
            self.out,
            "{verb} {} ({}/{} clicks)",
            link.original_url.bright_cyan(),
            link.click_count,
            link.click_limit
        )?;
        Ok(())
    }

    fn print_links(&mut self, links: &[Link]) -> Result<()> {
        if links.is_empty() {
            writeln!(self.out, "{}", "You have no links".yellow())?;
            return Ok(());
        }

        for link in links {
            writeln!(
                self.out,
                "{} -> {}  clicks {}/{} ({} left)  expires {}",
                link.short_url.bright_cyan(),
                link.original_url,
                link.click_count,
                link.click_limit,
                link.remaining_clicks(),
                link.expires_at().format("%Y-%m-%d %H:%M UTC")
            )?;
        }
        Ok(())
    }

    fn print_help(&mut self) -> Result<()> {
        writeln!(self.out, "{}", "Commands:".bright_white().bold())?;
        for (usage, description) in HELP {
            writeln!(self.out, "  {:<40} {}", usage.cyan(), description)?;
        }
        Ok(())
    }

    fn print_error(&mut self, error: &AppError) -> Result<()> {
        writeln!(self.out, "{}", error.to_string().red())?;
        Ok(())
    }

    fn prompt(&mut self) -> Result<()> {
        write!(self.out, "> ")?;
        self.out.flush()?;
        Ok(())
    }
}
