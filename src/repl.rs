use std::{
    fmt::Write as _,
    io::{self, BufRead, Write},
};

use log::debug;

use crate::{Session, interpreter::builtins::registry};

/// ANSI sequence erasing the terminal and moving the cursor home.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// One line of REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `.exit`: leave the REPL.
    Exit,
    /// `.clear`: forget every binding and the history.
    Clear,
    /// `.cls`: clear the terminal; the session is kept.
    ClearScreen,
    /// `.internal`: list the builtin overloads and the user bindings.
    Internal,
    /// `.history`: list the snippets evaluated so far.
    History,
    /// A blank line.
    Empty,
    /// Program text.
    Source(String),
}

impl Command {
    /// Classifies a line of input.
    ///
    /// # Example
    /// ```
    /// use anka::repl::Command;
    ///
    /// assert_eq!(Command::parse(" .exit \n"), Command::Exit);
    /// assert_eq!(Command::parse("inc 1"), Command::Source("inc 1".into()));
    /// assert_eq!(Command::parse("   "), Command::Empty);
    /// ```
    #[must_use]
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            ".exit" => Self::Exit,
            ".clear" => Self::Clear,
            ".cls" => Self::ClearScreen,
            ".internal" => Self::Internal,
            ".history" => Self::History,
            "" => Self::Empty,
            source => Self::Source(source.to_string()),
        }
    }
}

/// Lists every builtin overload, then every user binding of `session`
/// sorted by name.
#[must_use]
pub fn internal_listing(session: &Session) -> String {
    let mut listing = String::from("builtins:\n");
    for overload in registry::all() {
        let _ = writeln!(listing, "  {} {}", overload.name, overload.signature);
    }

    let store = session.store();
    let mut bindings: Vec<_> = store.bindings().collect();
    bindings.sort_unstable_by_key(|&(name, _)| name);

    listing.push_str("bindings:\n");
    for (name, word) in bindings {
        let _ = writeln!(listing, "  {name}: {}", store.display(word));
    }
    listing
}

/// Runs the REPL until `.exit` or the end of input.
///
/// Results are written to `out`, errors to `err`. Each snippet is one line;
/// a snippet that fails leaves the session usable.
///
/// # Errors
/// Returns an error if reading the input or writing the output fails.
///
/// # Example
/// ```
/// use std::io::Cursor;
///
/// use anka::{Session, repl::run};
///
/// let input = Cursor::new("val: 40\nadd [val 2]\n.history\n.exit\ninc 1\n");
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// run(&mut Session::new(), input, &mut out, &mut err, false).unwrap();
///
/// let out = String::from_utf8(out).unwrap();
/// assert_eq!(out, "40\n42\nval: 40\nadd [val 2]\n");
/// ```
pub fn run<R, W, E>(session: &mut Session,
                    reader: R,
                    out: &mut W,
                    err: &mut E,
                    prompt: bool)
                    -> io::Result<()>
    where R: BufRead,
          W: Write,
          E: Write
{
    let mut history: Vec<String> = Vec::new();
    let mut lines = reader.lines();

    loop {
        if prompt {
            write!(out, "anka> ")?;
            out.flush()?;
        }

        let Some(line) = lines.next().transpose()? else {
            break;
        };

        match Command::parse(&line) {
            Command::Exit => break,
            Command::Empty => {},
            Command::Clear => {
                debug!("clearing session");
                session.clear();
                history.clear();
            },
            Command::ClearScreen => write!(out, "{CLEAR_SCREEN}")?,
            Command::Internal => write!(out, "{}", internal_listing(session))?,
            Command::History => {
                for entry in &history {
                    writeln!(out, "{entry}")?;
                }
            },
            Command::Source(source) => {
                match session.run(&source) {
                    Ok(Some(result)) => writeln!(out, "{result}")?,
                    Ok(None) => {},
                    Err(error) => writeln!(err, "{error}")?,
                }
                history.push(source);
            },
        }
    }

    Ok(())
}
