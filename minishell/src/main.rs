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

//! The minishell binary
//!
//! Startup wires everything together: parse the command line, capture the
//! shell's process group and terminal, install signal dispositions, read
//! `~/.minishellrc` when interactive, and enter the read-eval loop (or run
//! the single `-c` command).

mod color;
mod input;
mod prompt;
mod repl;
mod startup;

use minishell_env::context::ShellContext;
use minishell_env::semantics::Divert;
use minishell_env::semantics::ExitStatus;
use minishell_env::signal;
use minishell_env::Env;
use startup::args::Parse;
use startup::args::Source;
use std::ops::ControlFlow::Break;
use std::ops::ControlFlow::Continue;

fn main() {
    let status = run(std::env::args());
    std::process::exit(status.into());
}

fn run<I: IntoIterator<Item = String>>(args: I) -> ExitStatus {
    match startup::args::parse(args) {
        Ok(Parse::Run(source)) => run_shell(source),
        Ok(Parse::Help) => {
            print!("{}", startup::args::HELP);
            ExitStatus::SUCCESS
        }
        Ok(Parse::Version) => {
            println!("minishell {}", env!("CARGO_PKG_VERSION"));
            ExitStatus::SUCCESS
        }
        Err(error) => {
            eprintln!("minishell: {error}");
            eprintln!("try `minishell --help`");
            ExitStatus::FAILURE
        }
    }
}

fn run_shell(source: Source) -> ExitStatus {
    let context = ShellContext::new();
    let interactive = context.is_interactive() && source == Source::Stdin;

    signal::adopt_shell_dispositions(interactive);
    if let Err(errno) = signal::install_sigchld_handler() {
        eprintln!("minishell: cannot install SIGCHLD handler: {}", errno.desc());
        return ExitStatus::FAILURE;
    }

    let mut env = Env::new(context);
    match source {
        Source::Command(command) => match repl::execute_line(&mut env, &command) {
            Continue(()) => env.last_status,
            Break(Divert::Exit(status)) => status.unwrap_or(env.last_status),
        },
        Source::Stdin => {
            if interactive {
                startup::init_file::load_rc(&mut env);
            }
            repl::run(&mut env)
        }
    }
}
