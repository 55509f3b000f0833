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

//! Thin system-call wrappers
//!
//! The calls the shell issues while children are running can be interrupted
//! by `SIGCHLD`; the wrappers here retry on `EINTR` so callers never see it.
//! `close` additionally treats `EBADF` as success, since closing the same
//! pipe end from two code paths is harmless.

use nix::errno::Errno;
use nix::sys::wait::WaitPidFlag;
use nix::sys::wait::WaitStatus;
use nix::unistd::Pid;
use std::os::unix::io::RawFd;
use std::path::PathBuf;

/// Closes a file descriptor, tolerating `EBADF`.
pub fn close(fd: RawFd) -> nix::Result<()> {
    loop {
        match nix::unistd::close(fd) {
            Err(Errno::EINTR) => (),
            Err(Errno::EBADF) => return Ok(()),
            other => return other,
        }
    }
}

/// Reads from a file descriptor, retrying on `EINTR`.
pub fn read(fd: RawFd, buffer: &mut [u8]) -> nix::Result<usize> {
    loop {
        let result = nix::unistd::read(fd, buffer);
        if result != Err(Errno::EINTR) {
            return result;
        }
    }
}

/// Duplicates `from` onto `to`, retrying on `EINTR`.
pub fn dup2(from: RawFd, to: RawFd) -> nix::Result<RawFd> {
    loop {
        let result = nix::unistd::dup2(from, to);
        if result != Err(Errno::EINTR) {
            return result;
        }
    }
}

/// Waits for a child status, retrying on `EINTR`.
pub fn waitpid(target: Pid, options: Option<WaitPidFlag>) -> nix::Result<WaitStatus> {
    loop {
        let result = nix::sys::wait::waitpid(target, options);
        if result != Err(Errno::EINTR) {
            return result;
        }
    }
}

/// Returns the current user's home directory.
///
/// `$HOME` wins; without it the password database entry for the real user
/// ID is consulted, and `/` is the last resort.
#[must_use]
pub fn home_dir() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        if !home.is_empty() {
            return PathBuf::from(home);
        }
    }
    if let Ok(Some(user)) = nix::unistd::User::from_uid(nix::unistd::getuid()) {
        return user.dir;
    }
    PathBuf::from("/")
}
