//! Character set building for password generation.

use std::fmt;

use crate::settings::Config;

const DIGITS: &str = "0123456789";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A selectable alphabet. Declaration order is the order groups are built in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Digits,
    Lower,
    Upper,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Digits, Category::Lower, Category::Upper];

    pub fn alphabet(self) -> &'static str {
        match self {
            Category::Digits => DIGITS,
            Category::Lower => LOWERCASE,
            Category::Upper => UPPERCASE,
        }
    }

    fn enabled(self, config: &Config) -> bool {
        match self {
            Category::Digits => config.use_digits,
            Category::Lower => config.use_lower,
            Category::Upper => config.use_upper,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Digits => "digit",
            Category::Lower => "lowercase",
            Category::Upper => "uppercase",
        })
    }
}

/// The symbols of one category, in alphabet order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    category: Category,
    symbols: Vec<char>,
}

impl Group {
    pub(crate) fn new(category: Category, symbols: Vec<char>) -> Self {
        Self { category, symbols }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }
}

/// Flat symbol list plus the per-category groups it was assembled from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    symbols: Vec<char>,
    groups: Vec<Group>,
}

impl Charset {
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Category owning `symbol`, if it is part of this charset.
    pub fn group_of(&self, symbol: char) -> Option<Category> {
        self.groups
            .iter()
            .find(|g| g.contains(symbol))
            .map(Group::category)
    }

    pub(crate) fn into_parts(self) -> (Vec<char>, Vec<Group>) {
        (self.symbols, self.groups)
    }
}

/// Build the character pool from the selected categories.
pub fn build(config: &Config) -> Charset {
    let mut symbols = Vec::new();
    let mut groups = Vec::new();

    for category in Category::ALL {
        if !category.enabled(config) {
            continue;
        }
        let group: Vec<char> = category.alphabet().chars().collect();
        symbols.extend_from_slice(&group);
        groups.push(Group::new(category, group));
    }

    Charset { symbols, groups }
}
