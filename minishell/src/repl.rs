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

//! The read-eval loop
//!
//! Per iteration: fold any child statuses delivered via `SIGCHLD` into the
//! job table, render the prompt, read a line, and execute it. The loop ends
//! at end of input or when a built-in diverts with an exit request.
//!
//! [`execute_line`] holds the dispatch rule for built-ins: a built-in runs
//! in the shell process only when the parsed pipeline has exactly one stage
//! and no trailing `&`. Alias expansion and auto-cd are applied under the
//! same guard, so `echo x | cat` and `jobs &` both spawn real children.

use crate::input::LineReader;
use crate::prompt;
use minishell_builtin::cd;
use minishell_builtin::Builtin;
use minishell_env::semantics::Divert;
use minishell_env::semantics::ExitStatus;
use minishell_env::Env;
use minishell_semantics::command::parse_command_line;
use minishell_semantics::job_control;
use minishell_semantics::pipeline::run_pipeline;
use std::ops::ControlFlow::Break;
use std::ops::ControlFlow::Continue;

/// Runs the read-eval loop until end of input or an exit divert.
///
/// Returns the shell's final exit status.
pub fn run(env: &mut Env) -> ExitStatus {
    let interactive = env.context.is_interactive();
    let mut reader = LineReader::new(interactive);

    loop {
        job_control::handle_pending_sigchld(env);

        let prompt = if interactive {
            prompt::build_prompt(env.last_status)
        } else {
            String::new()
        };
        let Some(line) = reader.read_line(&prompt) else {
            break;
        };

        match execute_line(env, &line) {
            Continue(()) => {}
            Break(Divert::Exit(status)) => return status.unwrap_or(env.last_status),
        }
    }

    if interactive {
        println!();
    }
    ExitStatus::SUCCESS
}

/// Parses and executes one input line, updating `env.last_status`.
pub fn execute_line(env: &mut Env, line: &str) -> minishell_env::semantics::Result {
    let mut pipeline = match parse_command_line(line) {
        Ok(Some(pipeline)) => pipeline,
        Ok(None) => return Continue(()),
        Err(error) => {
            eprintln!("minishell: {error}");
            env.last_status = ExitStatus::ERROR;
            return Continue(());
        }
    };

    // Aliases, auto-cd and built-ins apply only to a single-stage
    // foreground command.
    if pipeline.stages.len() == 1 && !pipeline.background {
        let stage = &mut pipeline.stages[0];
        stage.words = env.aliases.expand(&stage.words);

        if let Some(status) = cd::auto_cd(&stage.words) {
            env.last_status = status;
            return Continue(());
        }

        if let Some(builtin) = stage.words.first().and_then(|word| Builtin::from_name(word)) {
            let (status, divert) = builtin.execute(env, &stage.words);
            env.last_status = status;
            return divert;
        }
    }

    env.last_status = run_pipeline(env, &pipeline);
    Continue(())
}
