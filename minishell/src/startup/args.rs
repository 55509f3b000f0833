// This file is part of minishell, a small interactive POSIX shell.
// Copyright (C) 2025 minishell developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Command line argument parser for the shell
//!
//! The outer interface is deliberately small: `-c COMMAND` runs one command
//! string, `--version` and `--help`/`-h` print and exit, anything else is an
//! error reported on the standard error with exit status 1. Without
//! arguments the shell reads commands from the standard input.

use thiserror::Error;

/// Help text printed for `--help`
pub const HELP: &str = "\
usage: minishell [-c COMMAND]

A small interactive POSIX shell with pipelines, redirections and job
control.

options:
  -c COMMAND   execute COMMAND and exit with its status
  -h, --help   print this help and exit
  --version    print version information and exit
";

/// Where the shell reads commands from
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Source {
    /// Read lines from the standard input
    Stdin,
    /// Execute one command string (the `-c` option)
    Command(String),
}

/// Parse result
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Parse {
    /// Runs the shell
    Run(Source),
    /// Prints the help message and exits
    Help,
    /// Prints version information and exits
    Version,
}

/// Error in command line parsing
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
    /// The `-c` option without a command string
    #[error("the -c option requires a command string")]
    MissingCommandString,

    /// Option that is not part of the interface
    #[error("unknown option `{0}`")]
    UnknownOption(String),

    /// Operand where none is expected
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
}

/// Parses the command line arguments, including the command name.
pub fn parse<I, S>(args: I) -> Result<Parse, Error>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::into);
    // Skip the command name.
    let _ = args.next();

    let mut source = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-c" => {
                let command = args.next().ok_or(Error::MissingCommandString)?;
                source = Some(Source::Command(command));
                break;
            }
            "--help" | "-h" => return Ok(Parse::Help),
            "--version" => return Ok(Parse::Version),
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(Error::UnknownOption(arg));
            }
            _ => return Err(Error::UnexpectedArgument(arg)),
        }
    }

    if let Some(extra) = args.next() {
        return Err(Error::UnexpectedArgument(extra));
    }

    Ok(Parse::Run(source.unwrap_or(Source::Stdin)))
}
