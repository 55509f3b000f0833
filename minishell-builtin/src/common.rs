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

//! Common helpers for the built-in implementations

use minishell_env::job::JobId;

/// Parses the numeric job ID operand of `fg` and `bg`.
///
/// Prints the diagnostic itself and returns `None` on a missing or
/// non-numeric operand.
pub(crate) fn parse_job_id(builtin: &str, args: &[String]) -> Option<JobId> {
    let Some(operand) = args.first() else {
        eprintln!("minishell: {builtin}: job id operand required");
        return None;
    };
    match operand.parse() {
        Ok(id) => Some(id),
        Err(_) => {
            eprintln!("minishell: {builtin}: {operand}: numeric job id required");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_operand_parses() {
        assert_eq!(parse_job_id("fg", &["3".to_string()]), Some(3));
    }

    #[test]
    fn missing_and_malformed_operands_fail() {
        assert_eq!(parse_job_id("fg", &[]), None);
        assert_eq!(parse_job_id("bg", &["%1".to_string()]), None);
        assert_eq!(parse_job_id("bg", &["abc".to_string()]), None);
    }
}
