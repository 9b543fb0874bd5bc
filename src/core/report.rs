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

use crate::util::numfmt;
use std::fmt::Display;
use std::path::PathBuf;

/// Running totals accumulated across every entry of a rename table.
#[derive(Debug, PartialEq, Default, Clone, Copy)]
pub struct Counters {
    pub definitions_renamed: usize,
    pub instantiations_renamed: usize,
    /// Reserved; no step renames port connections.
    pub ports_fixed: usize,
}

/// A rename step that found at least one match.
#[derive(Debug, PartialEq, Clone)]
pub enum Finding {
    Definition {
        count: usize,
        old: String,
        new: String,
    },
    Instantiation {
        count: usize,
        old: String,
        new: String,
    },
}

impl Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Definition { count, old, new } => write!(
                f,
                "Found {} definition(s) of module '{}', renaming to '{}'",
                count, old, new
            ),
            Self::Instantiation { count, old, new } => write!(
                f,
                "Found {} instantiation(s) of '{}', renaming to '{}'",
                count, old, new
            ),
        }
    }
}

/// The outcome of a complete file-to-file rename.
#[derive(Debug, PartialEq)]
pub struct RunReport {
    pub definitions_renamed: usize,
    pub instantiations_renamed: usize,
    pub ports_fixed: usize,
    pub original_len: usize,
    pub new_len: usize,
    pub output: PathBuf,
}

impl RunReport {
    pub fn new(counters: Counters, original_len: usize, new_len: usize, output: PathBuf) -> Self {
        Self {
            definitions_renamed: counters.definitions_renamed,
            instantiations_renamed: counters.instantiations_renamed,
            ports_fixed: counters.ports_fixed,
            original_len,
            new_len,
            output,
        }
    }

    /// Absolute difference in bytes between the input and output files.
    pub fn len_delta(&self) -> usize {
        self.original_len.abs_diff(self.new_len)
    }
}

impl Display for RunReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Renamed {} module definition(s)", self.definitions_renamed)?;
        writeln!(
            f,
            "Renamed {} module instantiation(s)",
            self.instantiations_renamed
        )?;
        writeln!(
            f,
            "Fixed {} port connection(s) (removed 'io_' prefix)",
            self.ports_fixed
        )?;
        writeln!(
            f,
            "File size changed by {} bytes",
            numfmt::with_commas(self.len_delta())
        )?;
        write!(f, "Output written to: {}", self.output.display())
    }
}
