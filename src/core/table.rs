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

use crate::error::TableError;

/// The duplicate generated SRAM wrappers that collide with their
/// lower-case counterparts at link time.
const DEFAULT_RENAMES: [(&str, &str); 2] = [
    ("SRAM_512x128", "SRAM_512x128_wrapper"),
    ("SRAM_2048x128", "SRAM_2048x128_wrapper"),
];

mod char_set {
    pub const UNDER_SCORE: char = '_';
    pub const DOLLAR_SIGN: char = '$';
}

/// Checks if `c` may begin a simple identifier.
fn is_identifier_start(c: &char) -> bool {
    c.is_ascii_alphabetic() || c == &char_set::UNDER_SCORE
}

/// The set of characters \[a-z]\[A-Z]\[0-9]\[_]\[$] are allowed in identifiers
/// after the initial letter is captured.
fn is_identifier_character(c: &char) -> bool {
    match c {
        'a'..='z' | 'A'..='Z' | '0'..='9' | '_' | '$' => true,
        _ => false,
    }
}

fn check_identifier(s: &str) -> Result<(), TableError> {
    let mut chars = s.chars();
    match chars.next() {
        None => Err(TableError::EmptyName),
        Some(c) => match is_identifier_start(&c) && chars.all(|c| is_identifier_character(&c)) {
            true => Ok(()),
            false => Err(TableError::InvalidIdentifier(s.to_string())),
        },
    }
}

/// An ordered list of (old name, new name) module renames.
///
/// Entries are applied in the order they were added.
#[derive(Debug, PartialEq, Clone)]
pub struct RenameTable(Vec<(String, String)>);

impl RenameTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a rename to the end of the table.
    ///
    /// Errors if either name is not a simple identifier or if `old` is
    /// already a key in the table.
    ///
    /// A module being renamed cannot end with `$` since its declaration is
    /// matched up to a word boundary.
    pub fn push(&mut self, old: &str, new: &str) -> Result<(), TableError> {
        check_identifier(old)?;
        check_identifier(new)?;
        if old.ends_with(char_set::DOLLAR_SIGN) == true {
            return Err(TableError::TrailingDollar(old.to_string()));
        }
        if self.0.iter().any(|(k, _)| k == old) == true {
            return Err(TableError::DuplicateKey(old.to_string()));
        }
        self.0.push((old.to_string(), new.to_string()));
        Ok(())
    }

    /// Builds a table from an ordered sequence of pairs.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut table = Self::new();
        for (old, new) in pairs {
            table.push(old, new)?;
        }
        Ok(table)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Default for RenameTable {
    fn default() -> Self {
        Self(
            DEFAULT_RENAMES
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_table_is_valid() {
        let table = RenameTable::default();
        assert_eq!(
            RenameTable::from_pairs(DEFAULT_RENAMES).as_ref(),
            Ok(&table)
        );
        let pairs: Vec<(&str, &str)> = table.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("SRAM_512x128", "SRAM_512x128_wrapper"),
                ("SRAM_2048x128", "SRAM_2048x128_wrapper"),
            ]
        );
        assert_eq!(table.iter().any(|(k, _)| k == "SRAM_1"), false);
    }

    #[test]
    fn keeps_insertion_order() {
        let table = RenameTable::from_pairs([("b", "b2"), ("a", "a2"), ("c", "c2")]).unwrap();
        let keys: Vec<&str> = table.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn rejects_duplicate_keys() {
        assert_eq!(
            RenameTable::from_pairs([("ram", "ram_a"), ("ram", "ram_b")]),
            Err(TableError::DuplicateKey("ram".to_string()))
        );
    }

    #[test]
    fn rejects_bad_identifiers() {
        let mut table = RenameTable::new();
        assert_eq!(table.push("", "x"), Err(TableError::EmptyName));
        assert_eq!(table.push("x", ""), Err(TableError::EmptyName));
        assert_eq!(
            table.push("9ram", "ram"),
            Err(TableError::InvalidIdentifier("9ram".to_string()))
        );
        assert_eq!(
            table.push("ram", "ram wrapper"),
            Err(TableError::InvalidIdentifier("ram wrapper".to_string()))
        );
        assert_eq!(table.push("_ram$0", "ram_1"), Ok(()));
        assert_eq!(table.iter().count(), 1);
    }

    #[test]
    fn rejects_trailing_dollar_on_old_name() {
        assert_eq!(
            RenameTable::from_pairs([("ram$", "ram_w")]),
            Err(TableError::TrailingDollar("ram$".to_string()))
        );
        // only the matched name is restricted
        let table = RenameTable::from_pairs([("ram", "ram$"), ("rom$1", "rom_w")]).unwrap();
        assert_eq!(table.iter().count(), 2);
    }
}
