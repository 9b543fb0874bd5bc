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

//! Renames duplicate module declarations and their instantiations within a
//! single source file.
//!
//! Matching is purely textual. A declaration is `module <name>` at the start
//! of a line, and an instantiation is the shape `<ws><name><ws><instance>(`.
//! Neither pattern is aware of comments or string literals.

use super::report::{Counters, Finding, RunReport};
use super::table::RenameTable;
use crate::error::{PatternError, RenameError};
use regex::{Captures, NoExpand, Regex};
use std::fs;
use std::io::Write;
use std::path::Path;

/// The compiled patterns for a single table entry.
#[derive(Debug)]
struct Rule {
    old: String,
    new: String,
    declaration: Regex,
    instantiation: Regex,
}

impl Rule {
    fn new(old: &str, new: &str) -> Result<Self, PatternError> {
        let name = regex::escape(old);
        let compile = |pattern: String| {
            Regex::new(&pattern).map_err(|e| PatternError::Module(old.to_string(), e))
        };
        Ok(Self {
            old: old.to_string(),
            new: new.to_string(),
            declaration: compile(format!(r"(?m)^module\s+{}\b", name))?,
            instantiation: compile(format!(r"(\s+){}(\s+\w+\s*\()", name))?,
        })
    }

    /// Rewrites every line-start `module <old>` to `module <new>`.
    fn rename_declarations(&self, text: String) -> (String, usize) {
        let count = self.declaration.find_iter(&text).count();
        if count == 0 {
            return (text, 0);
        }
        let replacement = format!("module {}", self.new);
        let text = self
            .declaration
            .replace_all(&text, NoExpand(&replacement))
            .into_owned();
        (text, count)
    }

    /// Rewrites every `<ws><old><ws><instance>(` to `<ws><new><ws><instance>(`.
    fn rename_instantiations(&self, text: String) -> (String, usize) {
        let count = self.instantiation.find_iter(&text).count();
        if count == 0 {
            return (text, 0);
        }
        let text = self
            .instantiation
            .replace_all(&text, |caps: &Captures| {
                format!("{}{}{}", &caps[1], self.new, &caps[2])
            })
            .into_owned();
        (text, count)
    }
}

/// The in-memory result of applying a [Renamer] to some text.
#[derive(Debug, PartialEq)]
pub struct Transform {
    pub text: String,
    pub counters: Counters,
    pub findings: Vec<Finding>,
}

#[derive(Debug)]
pub struct Renamer {
    rules: Vec<Rule>,
    blank_lines: Regex,
}

impl Renamer {
    /// Compiles the match patterns for every entry in `table`.
    pub fn new(table: RenameTable) -> Result<Self, PatternError> {
        let rules = table
            .iter()
            .map(|(old, new)| Rule::new(old, new))
            .collect::<Result<Vec<Rule>, PatternError>>()?;
        let blank_lines = Regex::new(r"\n{3,}").map_err(PatternError::BlankLines)?;
        Ok(Self { rules, blank_lines })
    }

    /// Applies every rename in table order, then collapses runs of three or
    /// more newlines into a single blank line.
    ///
    /// Each entry is matched against the text produced by all previous steps.
    pub fn transform(&self, text: &str) -> Transform {
        let mut counters = Counters::default();
        let mut findings = Vec::new();
        let mut text = text.to_string();

        for rule in &self.rules {
            let (renamed, count) = rule.rename_declarations(text);
            text = renamed;
            if count > 0 {
                counters.definitions_renamed += count;
                findings.push(Finding::Definition {
                    count,
                    old: rule.old.clone(),
                    new: rule.new.clone(),
                });
            }

            let (renamed, count) = rule.rename_instantiations(text);
            text = renamed;
            if count > 0 {
                counters.instantiations_renamed += count;
                findings.push(Finding::Instantiation {
                    count,
                    old: rule.old.clone(),
                    new: rule.new.clone(),
                });
            }
        }

        let text = self.blank_lines.replace_all(&text, "\n\n").into_owned();
        Transform {
            text,
            counters,
            findings,
        }
    }

    /// Renames the modules in the file at `input` and writes the result to
    /// `output`, printing the progress and summary to standard output.
    pub fn rename(&self, input: &Path, output: &Path) -> Result<RunReport, RenameError> {
        let stdout = std::io::stdout();
        let mut log = stdout.lock();
        self.rename_to(input, output, &mut log)
    }

    /// Same as [Renamer::rename] but sends the console report to `log`.
    ///
    /// The output file is only created once the input was read successfully.
    pub fn rename_to<W: Write>(
        &self,
        input: &Path,
        output: &Path,
        log: &mut W,
    ) -> Result<RunReport, RenameError> {
        let contents =
            fs::read_to_string(input).map_err(|e| RenameError::read(input.to_path_buf(), e))?;

        let result = self.transform(&contents);
        for finding in &result.findings {
            writeln!(log, "{}", finding).map_err(RenameError::Report)?;
        }

        fs::write(output, &result.text)
            .map_err(|e| RenameError::write(output.to_path_buf(), e))?;

        let report = RunReport::new(
            result.counters,
            contents.len(),
            result.text.len(),
            output.to_path_buf(),
        );
        writeln!(log, "\n{}", report).map_err(RenameError::Report)?;
        Ok(report)
    }
}
