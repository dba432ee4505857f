use crate::config::OutputFormat;
use crate::core::decoder;
use crate::core::display::{render_table, Summary, WeightFormat};
use crate::core::session::{ClearOutcome, RemoveOutcome, Session, SessionManager};
use crate::domain::ports::Confirmer;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

const HELP: &str = "\
Scan or type a barcode and press Enter to add it.
  :list        show the tally
  :total       show the total weight
  :del <row>   remove a row (asks first)
  :clear       remove every row (asks first)
  :json        print the tally as JSON
  :help        show this help
  :quit        exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Scan(String),
    List,
    Total,
    Delete(Option<usize>),
    Clear,
    Json,
    Help,
    Quit,
    Unknown(String),
    Blank,
}

impl ConsoleCommand {
    /// Lines starting with ':' are commands, anything else is a raw scan.
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return ConsoleCommand::Blank;
        }

        let Some(command) = line.trim().strip_prefix(':') else {
            return ConsoleCommand::Scan(line.to_string());
        };

        let mut parts = command.split_whitespace();
        match parts.next().unwrap_or("") {
            "list" | "l" => ConsoleCommand::List,
            "total" | "t" => ConsoleCommand::Total,
            "del" | "d" | "rm" => ConsoleCommand::Delete(parts.next().and_then(|n| n.parse().ok())),
            "clear" => ConsoleCommand::Clear,
            "json" => ConsoleCommand::Json,
            "help" | "h" | "?" => ConsoleCommand::Help,
            "quit" | "q" | "exit" => ConsoleCommand::Quit,
            other => ConsoleCommand::Unknown(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Line-oriented front-end over a [`SessionManager`].
pub struct Console<C: Confirmer> {
    manager: SessionManager<C>,
    format: WeightFormat,
    output_format: OutputFormat,
    show_prompt: bool,
}

impl<C: Confirmer> Console<C> {
    pub fn new(manager: SessionManager<C>, format: WeightFormat) -> Self {
        Self {
            manager,
            format,
            output_format: OutputFormat::Text,
            show_prompt: false,
        }
    }

    pub fn with_output_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    pub fn with_prompt(mut self, show_prompt: bool) -> Self {
        self.show_prompt = show_prompt;
        self
    }

    pub fn session(&self) -> &Session {
        self.manager.session()
    }

    pub fn into_session(self) -> Session {
        self.manager.into_session()
    }

    /// Reads until `:quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<()> {
        let mut line = Vec::new();
        loop {
            if self.show_prompt {
                write!(out, "> ")?;
                out.flush()?;
            }

            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                tracing::debug!("end of input");
                break;
            }

            let text = match decoder::scan_text(&line) {
                Ok(text) => text,
                Err(e) => {
                    writeln!(out, "❌ {}", e.user_friendly_message())?;
                    continue;
                }
            };

            if self.handle_line(text, out)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        match ConsoleCommand::parse(line) {
            ConsoleCommand::Blank => {}
            ConsoleCommand::Scan(raw) => match decoder::decode(&raw) {
                Ok(scan) => {
                    self.manager.append(scan);
                    self.render(out)?;
                }
                Err(e) => {
                    writeln!(out, "❌ {}", e.user_friendly_message())?;
                }
            },
            ConsoleCommand::List => self.render(out)?,
            ConsoleCommand::Total => {
                writeln!(out, "TOTAL {}", self.format.format(self.manager.total()))?;
            }
            ConsoleCommand::Delete(None) => writeln!(out, "Usage: :del <row>")?,
            ConsoleCommand::Delete(Some(row)) => match self.manager.remove_row(row) {
                RemoveOutcome::Removed(entry) => {
                    writeln!(out, "Removed {}", entry.scan.code)?;
                    self.render(out)?;
                }
                RemoveOutcome::NotFound => writeln!(out, "No row {}", row)?,
                RemoveOutcome::Declined => writeln!(out, "Kept row {}", row)?,
            },
            ConsoleCommand::Clear => match self.manager.clear() {
                ClearOutcome::Cleared { removed } => {
                    writeln!(out, "Cleared {} row(s)", removed)?;
                    self.render(out)?;
                }
                ClearOutcome::Declined => writeln!(out, "Nothing cleared")?,
            },
            ConsoleCommand::Json => self.render_json(out)?,
            ConsoleCommand::Help => writeln!(out, "{}", HELP)?,
            ConsoleCommand::Quit => return Ok(Flow::Quit),
            ConsoleCommand::Unknown(name) => {
                writeln!(out, "Unknown command ':{}' (try :help)", name)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        match self.output_format {
            OutputFormat::Text => write!(out, "{}", render_table(self.session(), &self.format))?,
            OutputFormat::Json => self.render_json(out)?,
        }
        Ok(())
    }

    fn render_json<W: Write>(&self, out: &mut W) -> Result<()> {
        let summary = Summary::from_session(self.session(), &self.format);
        serde_json::to_writer_pretty(&mut *out, &summary)?;
        writeln!(out)?;
        Ok(())
    }
}
