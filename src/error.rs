//
//  Copyright (C) 2022-2024  Chase Ruskin
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.
//

use colored::Colorize;
use std::{fmt::Display, path::PathBuf};

pub type Fault = Box<dyn std::error::Error>;

/// Errors raised while assembling a [RenameTable][crate::core::table::RenameTable].
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum TableError {
    #[error("module names cannot be empty")]
    EmptyName,
    #[error("{0:?} is not a valid module identifier")]
    InvalidIdentifier(String),
    #[error("module {0:?} is already renamed by an earlier entry")]
    DuplicateKey(String),
    #[error("module {0:?} cannot end with '$'")]
    TrailingDollar(String),
}

/// Errors raised while compiling the patterns of a [Renamer][crate::core::renamer::Renamer].
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum PatternError {
    #[error("failed to build the match pattern for module {0:?}: {1}")]
    Module(String, regex::Error),
    #[error("failed to build the blank line pattern: {0}")]
    BlankLines(regex::Error),
}

/// Errors raised before any file is touched, when the command line is malformed.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum UsageError {
    #[error("expected exactly 2 arguments (input file and output file) but got {0}")]
    ArgCount(usize),
}

/// The file operation that was being performed when an error occurred.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum FileOp {
    Read,
    Write,
}

impl Display for FileOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read => write!(f, "read"),
            Self::Write => write!(f, "write"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RenameError {
    #[error("failed to {op} file {path:?}: {}{hint}", LastError(.source.to_string()))]
    FileAccess {
        path: PathBuf,
        op: FileOp,
        source: std::io::Error,
        hint: Hint,
    },
    #[error("failed to write the run report: {0}")]
    Report(std::io::Error),
}

impl RenameError {
    pub fn read(path: PathBuf, source: std::io::Error) -> Self {
        let hint = match source.kind() {
            std::io::ErrorKind::InvalidData => Hint::Utf8Only,
            _ => Hint::None,
        };
        Self::FileAccess {
            path,
            op: FileOp::Read,
            source,
            hint,
        }
    }

    pub fn write(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileAccess {
            path,
            op: FileOp::Write,
            source,
            hint: Hint::None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct LastError(pub String);

impl Display for LastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", lowerize(self.0.to_string()))
    }
}

/// Lowercases the first character of `s` unless its first word is an acronym.
pub fn lowerize(s: String) -> String {
    let first_word = match s.split_whitespace().next() {
        Some(w) => w,
        None => return s,
    };
    // retain punctuation if the first word is all-caps and longer than 1 character
    if first_word.len() > 1 && first_word.chars().any(|c| c.is_ascii_lowercase()) == false {
        s
    } else {
        s.char_indices()
            .map(|(i, c)| if i == 0 { c.to_ascii_lowercase() } else { c })
            .collect()
    }
}

#[derive(Debug, PartialEq)]
pub enum Hint {
    None,
    Utf8Only,
}

impl Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::None => return Ok(()),
            Self::Utf8Only => "the input file must be utf-8 encoded text",
        };
        write!(f, "\n\n{}: {}", "hint".green(), lowerize(message.to_string()))
    }
}
