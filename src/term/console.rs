use ansi_term::Style;
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use minim::lang::Error;
use std::io::{BufRead, IsTerminal, Write};

pub enum Input {
    Line(String),
    Eof,
    Interrupt,
}

/// Terminal or pipe. On a terminal the unfinished output line is held
/// back and becomes the prompt of the next read.
pub enum Console {
    Interactive {
        interface: Interface<DefaultTerminal>,
        pending: String,
    },
    Piped,
}

impl Console {
    pub fn new() -> std::io::Result<Console> {
        if !std::io::stdin().is_terminal() || !std::io::stdout().is_terminal() {
            return Ok(Console::Piped);
        }
        let interface = Interface::new("minim")?;
        interface.set_report_signal(Signal::Interrupt, true);
        Ok(Console::Interactive {
            interface,
            pending: String::new(),
        })
    }

    pub fn print(&mut self, s: &str) -> std::io::Result<()> {
        match self {
            Console::Interactive { interface, pending } => {
                pending.push_str(s);
                if let Some(end) = pending.rfind('\n') {
                    let rest = pending.split_off(end + 1);
                    interface.write_fmt(format_args!("{}", pending))?;
                    *pending = rest;
                }
                Ok(())
            }
            Console::Piped => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(s.as_bytes())?;
                stdout.flush()
            }
        }
    }

    pub fn read_line(&mut self) -> std::io::Result<Input> {
        match self {
            Console::Interactive { interface, pending } => {
                interface.set_prompt(pending)?;
                pending.clear();
                match interface.read_line()? {
                    ReadResult::Input(line) => {
                        if !line.is_empty() {
                            interface.add_history_unique(line.clone());
                        }
                        Ok(Input::Line(line))
                    }
                    ReadResult::Signal(Signal::Interrupt) => {
                        interface.set_buffer("")?;
                        Ok(Input::Interrupt)
                    }
                    ReadResult::Signal(_) | ReadResult::Eof => Ok(Input::Eof),
                }
            }
            Console::Piped => {
                let mut line = String::new();
                if std::io::stdin().lock().read_line(&mut line)? == 0 {
                    return Ok(Input::Eof);
                }
                let trimmed = line.trim_end_matches(&['\n', '\r'][..]).len();
                line.truncate(trimmed);
                Ok(Input::Line(line))
            }
        }
    }

    pub fn error(&mut self, error: &Error) -> std::io::Result<()> {
        self.finish()?;
        match self {
            Console::Interactive { interface, .. } => interface.write_fmt(format_args!(
                "{}\n",
                Style::new().bold().paint(error.to_string())
            )),
            Console::Piped => writeln!(std::io::stderr(), "{}", error),
        }
    }

    /// Writes out any unfinished line.
    pub fn finish(&mut self) -> std::io::Result<()> {
        if let Console::Interactive { interface, pending } = self {
            if !pending.is_empty() {
                interface.write_fmt(format_args!("{}\n", pending))?;
                pending.clear();
            }
        }
        Ok(())
    }
}
