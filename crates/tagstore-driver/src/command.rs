//! # Command Parsing
//!
//! One command per line. `#` starts a comment line, blank lines are skipped.
//!
//! ```text
//! Insert 22 19.97 475 1238 9742 0
//! Find 22
//! FindMinPrice 475
//! FindMaxPrice 475
//! FindPriceRange 475 10.00 20.00
//! PriceHike 2 30 12.5
//! RemoveNames 22 475 0
//! Delete 22
//! End
//! ```
//!
//! Tag lists run to the end of the line. A trailing `0` closes the list and
//! is not itself a tag.

use tagstore_core::{HikeRate, ItemId, Money, Tag};

use crate::error::{DriverError, DriverResult};

/// A parsed script command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Insert {
        id: ItemId,
        price: Money,
        tags: Vec<Tag>,
    },
    Find {
        id: ItemId,
    },
    Delete {
        id: ItemId,
    },
    FindMinPrice {
        tag: Tag,
    },
    FindMaxPrice {
        tag: Tag,
    },
    FindPriceRange {
        tag: Tag,
        low: Money,
        high: Money,
    },
    PriceHike {
        low: ItemId,
        high: ItemId,
        rate: HikeRate,
    },
    RemoveNames {
        id: ItemId,
        tags: Vec<Tag>,
    },
    End,
}

impl Command {
    /// Script name of the command.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Insert { .. } => "Insert",
            Command::Find { .. } => "Find",
            Command::Delete { .. } => "Delete",
            Command::FindMinPrice { .. } => "FindMinPrice",
            Command::FindMaxPrice { .. } => "FindMaxPrice",
            Command::FindPriceRange { .. } => "FindPriceRange",
            Command::PriceHike { .. } => "PriceHike",
            Command::RemoveNames { .. } => "RemoveNames",
            Command::End => "End",
        }
    }
}

/// Parses one script line. Returns `Ok(None)` for blank and comment lines.
pub fn parse_line(line_no: usize, line: &str) -> DriverResult<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut tokens = Tokens {
        line: line_no,
        inner: line.split_whitespace(),
    };
    let name = tokens.next_str("command")?;

    let command = match name {
        "Insert" => Command::Insert {
            id: tokens.next_int("id")?,
            price: tokens.next_money("price")?,
            tags: tokens.tag_list()?,
        },
        "Find" => Command::Find {
            id: tokens.next_int("id")?,
        },
        "Delete" => Command::Delete {
            id: tokens.next_int("id")?,
        },
        "FindMinPrice" => Command::FindMinPrice {
            tag: tokens.next_int("tag")?,
        },
        "FindMaxPrice" => Command::FindMaxPrice {
            tag: tokens.next_int("tag")?,
        },
        "FindPriceRange" => Command::FindPriceRange {
            tag: tokens.next_int("tag")?,
            low: tokens.next_money("low")?,
            high: tokens.next_money("high")?,
        },
        "PriceHike" => Command::PriceHike {
            low: tokens.next_int("low")?,
            high: tokens.next_int("high")?,
            rate: tokens.next_rate("rate")?,
        },
        "RemoveNames" => Command::RemoveNames {
            id: tokens.next_int("id")?,
            tags: tokens.tag_list()?,
        },
        "End" => Command::End,
        other => {
            return Err(DriverError::parse(
                line_no,
                format!("unknown command '{}'", other),
            ))
        }
    };

    tokens.finish()?;
    Ok(Some(command))
}

/// Token cursor over one line, carrying the line number for errors.
struct Tokens<'a> {
    line: usize,
    inner: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn next_str(&mut self, what: &str) -> DriverResult<&'a str> {
        self.inner
            .next()
            .ok_or_else(|| DriverError::parse(self.line, format!("missing {}", what)))
    }

    fn next_int(&mut self, what: &str) -> DriverResult<i64> {
        let token = self.next_str(what)?;
        token.parse().map_err(|_| {
            DriverError::parse(self.line, format!("{} '{}' is not an integer", what, token))
        })
    }

    fn next_money(&mut self, what: &str) -> DriverResult<Money> {
        let token = self.next_str(what)?;
        token
            .parse()
            .map_err(|e| DriverError::parse(self.line, format!("{}: {}", what, e)))
    }

    fn next_rate(&mut self, what: &str) -> DriverResult<HikeRate> {
        let token = self.next_str(what)?;
        let pct: f64 = token.parse().map_err(|_| {
            DriverError::parse(self.line, format!("{} '{}' is not a number", what, token))
        })?;
        HikeRate::try_from_percentage(pct)
            .map_err(|e| DriverError::parse(self.line, e.to_string()))
    }

    /// Reads tags up to a `0` terminator or the end of the line.
    fn tag_list(&mut self) -> DriverResult<Vec<Tag>> {
        let mut tags = Vec::new();
        while let Some(token) = self.inner.next() {
            let tag: Tag = token.parse().map_err(|_| {
                DriverError::parse(self.line, format!("tag '{}' is not an integer", token))
            })?;
            if tag == 0 {
                break;
            }
            tags.push(tag);
        }
        Ok(tags)
    }

    fn finish(mut self) -> DriverResult<()> {
        match self.inner.next() {
            Some(extra) => Err(DriverError::parse(
                self.line,
                format!("unexpected trailing token '{}'", extra),
            )),
            None => Ok(()),
        }
    }
}
