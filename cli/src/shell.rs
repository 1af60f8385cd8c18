//! Read-eval loop mapping typed commands onto controller actions.

use std::io::{self, Write};
use std::str::FromStr;

use posts_core::render::{render, render_notice};
use posts_core::{Confirm, Mode, Notice, PostId, PostsController, Transport};
use tracing::debug;

use crate::terminal::LineSource;

pub const HELP: &str = "\
Commands:
  title <text>   set the draft title
  desc <text>    set the draft description
  submit         create a post, or save the one being edited
  edit <id>      load a post into the draft
  cancel         stop editing and clear the draft
  delete <id>    delete a post (asks first)
  refresh        reload the list
  retry          reload after a failed load
  show           print the current view
  help           this text
  quit           leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Title(String),
    Description(String),
    Submit,
    Edit(PostId),
    Cancel,
    Delete(PostId),
    Refresh,
    Retry,
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let id = |rest: &str| {
            let id = rest.trim();
            if id.is_empty() {
                Err(format!("`{word}` needs a post ID"))
            } else {
                Ok(PostId::new(id))
            }
        };

        match word {
            "title" => Ok(Command::Title(rest.to_string())),
            "desc" | "description" => Ok(Command::Description(rest.to_string())),
            "submit" | "save" => Ok(Command::Submit),
            "edit" => id(rest).map(Command::Edit),
            "cancel" => Ok(Command::Cancel),
            "delete" | "rm" => id(rest).map(Command::Delete),
            "refresh" => Ok(Command::Refresh),
            "retry" => Ok(Command::Retry),
            "show" | "" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(format!("unknown command `{other}`, type `help`")),
        }
    }
}

enum Flow {
    Continue,
    Quit,
}

pub struct Shell<T, C, L, W> {
    controller: PostsController<T, C>,
    input: L,
    out: W,
}

impl<T, C, L, W> Shell<T, C, L, W>
where
    T: Transport,
    C: Confirm,
    L: LineSource,
    W: Write,
{
    pub fn new(controller: PostsController<T, C>, input: L, out: W) -> Self {
        Self {
            controller,
            input,
            out,
        }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Mounts, then handles commands until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", render(self.controller.state()))?;
        self.controller.mount();
        self.show()?;

        loop {
            write!(self.out, "> ")?;
            self.out.flush()?;
            let Some(line) = self.input.next_line()? else {
                writeln!(self.out)?;
                break;
            };
            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(message) => {
                    self.notify(&Notice::error(message))?;
                    continue;
                }
            };
            debug!(?command, "command");
            if let Flow::Quit = self.execute(command)? {
                break;
            }
        }
        Ok(())
    }

    fn execute(&mut self, command: Command) -> io::Result<Flow> {
        let unavailable = matches!(self.controller.state().mode(), Mode::Error(_));
        if unavailable
            && !matches!(
                command,
                Command::Retry | Command::Refresh | Command::Show | Command::Help | Command::Quit
            )
        {
            self.notify(&Notice::error("Posts are unavailable; type `retry`"))?;
            return Ok(Flow::Continue);
        }

        match command {
            Command::Title(title) => self.controller.set_title(title),
            Command::Description(description) => self.controller.set_description(description),
            Command::Submit => {
                let notice = self.controller.submit();
                self.notify(&notice)?;
            }
            Command::Edit(id) => {
                if let Some(notice) = self.controller.start_edit(&id) {
                    self.notify(&notice)?;
                    return Ok(Flow::Continue);
                }
            }
            Command::Cancel => self.controller.cancel_edit(),
            Command::Delete(id) => match self.controller.delete(&id) {
                Some(notice) => self.notify(&notice)?,
                None => return Ok(Flow::Continue),
            },
            Command::Refresh => self.controller.refresh(),
            Command::Retry => self.controller.retry(),
            Command::Show => {}
            Command::Help => {
                writeln!(self.out, "{HELP}")?;
                return Ok(Flow::Continue);
            }
            Command::Quit => return Ok(Flow::Quit),
        }

        self.show()?;
        Ok(Flow::Continue)
    }

    fn show(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", render(self.controller.state()))
    }

    fn notify(&mut self, notice: &Notice) -> io::Result<()> {
        writeln!(self.out, "{}", render_notice(notice))
    }
}
