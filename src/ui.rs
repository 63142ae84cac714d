//! Console front-end: reads commands, and prints framed responses

use std::io::{self, BufRead, Write};

use crate::config::APP_NAME;
use crate::session::Session;

pub const HORIZONTAL_LINE: &str = "____________________________________________________________";
pub const GOODBYE_MESSAGE: &str = "Bye. Hope to see you again soon!";
pub const UNREADABLE_MESSAGE: &str = "OOPS!!! I could not read that command. Please type it again.";


/// Surround a message with horizontal lines
pub fn framed(message: &str) -> String {
    format!("{}\n{}\n{}\n", HORIZONTAL_LINE, message, HORIZONTAL_LINE)
}

pub fn welcome_message() -> String {
    let name = match APP_NAME.lock() {
        Ok(name) => name.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    };
    format!("Hello! I'm {}\nWhat can I do for you?", name)
}


/// The input and output streams of the app.
///
/// They are acquired once when the app starts, and released when this is dropped.
pub struct Ui<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl Ui<io::StdinLock<'static>, io::Stdout> {
    /// A UI over the standard input and output of this process
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Ui<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read the next command. Returns `None` once the input is exhausted.
    ///
    /// A line that is not valid UTF-8 is consumed, and returned as an [`io::ErrorKind::InvalidData`] error.
    pub fn read_command(&mut self) -> io::Result<Option<String>> {
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8(line).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        Ok(Some(line.trim().to_string()))
    }

    pub fn show(&mut self, message: &str) -> io::Result<()> {
        write!(self.output, "{}", framed(message))?;
        self.output.flush()
    }

    /// Run commands until the user says bye (or the input ends)
    pub fn run(&mut self, session: &mut Session) -> io::Result<()> {
        self.show(&welcome_message())?;

        loop {
            let input = match self.read_command() {
                Ok(Some(input)) => input,
                Ok(None) => {
                    log::debug!("End of input");
                    self.show(GOODBYE_MESSAGE)?;
                    return Ok(());
                },
                Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                    log::warn!("Unreadable command: {}", err);
                    self.show(UNREADABLE_MESSAGE)?;
                    continue;
                },
                Err(err) => return Err(err),
            };
            if input.is_empty() {
                continue;
            }

            let response = session.respond(&input);
            self.show(&response.text)?;
            if response.exit {
                return Ok(());
            }
        }
    }

    /// Give the streams back
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
