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

use crate::commands::helps::rename;
use crate::core::renamer::Renamer;
use crate::core::table::RenameTable;
use crate::error::{Fault, UsageError};
use std::path::PathBuf;

/// The number of positional arguments the command accepts.
const ARG_COUNT: usize = 2;

#[derive(Debug, PartialEq)]
pub struct Rename {
    input: PathBuf,
    output: PathBuf,
}

impl Rename {
    /// Interprets the raw program arguments (including the program name).
    ///
    /// Both paths are taken verbatim, so names beginning with `-` are still
    /// treated as files.
    pub fn from_args(args: &[String]) -> Result<Self, UsageError> {
        match args {
            [_, input, output] => Ok(Rename {
                input: PathBuf::from(input),
                output: PathBuf::from(output),
            }),
            _ => Err(UsageError::ArgCount(args.len().saturating_sub(1))),
        }
    }

    pub fn execute(self) -> Result<(), Fault> {
        let renamer = Renamer::new(RenameTable::default())?;
        renamer.rename(&self.input, &self.output)?;
        Ok(())
    }

    pub fn usage() -> &'static str {
        rename::USAGE
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn usage_requires_two_paths() {
        assert_eq!(Rename::from_args(&args(&["modrename"])), Err(UsageError::ArgCount(0)));
        assert_eq!(
            Rename::from_args(&args(&["modrename", "in.sv"])),
            Err(UsageError::ArgCount(1))
        );
        assert_eq!(
            Rename::from_args(&args(&["modrename", "in.sv", "out.sv"])),
            Ok(Rename {
                input: PathBuf::from("in.sv"),
                output: PathBuf::from("out.sv"),
            })
        );
        assert_eq!(
            Rename::from_args(&args(&["modrename", "in.sv", "out.sv", "extra"])),
            Err(UsageError::ArgCount(3))
        );
        assert_eq!(Rename::from_args(&[]), Err(UsageError::ArgCount(0)));
    }

    #[test]
    fn paths_are_never_flags() {
        assert_eq!(
            Rename::from_args(&args(&["modrename", "-in.sv", "--help"])),
            Ok(Rename {
                input: PathBuf::from("-in.sv"),
                output: PathBuf::from("--help"),
            })
        );
    }

    #[test]
    fn usage_has_example() {
        assert!(Rename::usage().starts_with("Usage: modrename <input_file> <output_file>"));
        assert!(Rename::usage().contains("Example: "));
    }
}
