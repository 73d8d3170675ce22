//! # Script Runner
//!
//! Executes parsed commands against an [`IndexedStore`] and keeps a checksum.
//!
//! ## Checksum
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command            Result            Added to checksum                 │
//! │  ─────────────      ──────────────    ─────────────────────             │
//! │  Insert             1 / 0             as-is                             │
//! │  Find, Min, Max     Money             total cents                       │
//! │  PriceHike          Money             total cents                       │
//! │  Delete, Remove     tag sum           as-is                             │
//! │  FindPriceRange     count             as-is                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! The checksum wraps on overflow so long scripts never abort.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{BufRead, Write};

use tagstore_core::{IndexedStore, Money};
use tracing::{debug, info};

use crate::command::{parse_line, Command};
use crate::error::{DriverError, DriverResult};

/// Result of one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    Value(i64),
    Price(Money),
}

impl CommandResult {
    /// Contribution to the checksum.
    pub fn checksum_value(&self) -> i64 {
        match self {
            CommandResult::Value(v) => *v,
            CommandResult::Price(m) => m.total_cents(),
        }
    }
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandResult::Value(v) => write!(f, "{}", v),
            CommandResult::Price(m) => write!(f, "{}", m),
        }
    }
}

/// Totals reported at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Commands executed (`End` excluded).
    pub commands: usize,
    pub checksum: i64,
    /// Items left in the store.
    pub items: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "commands: {}\nchecksum: {}\nitems: {}",
            self.commands, self.checksum, self.items
        )
    }
}

/// Owns the store for the length of a run.
#[derive(Debug, Default)]
pub struct Runner {
    store: IndexedStore,
    commands: usize,
    checksum: i64,
}

impl Runner {
    pub fn new() -> Self {
        Runner::default()
    }

    /// Read access to the store.
    pub fn store(&self) -> &IndexedStore {
        &self.store
    }

    /// Executes one command. `line` is only used for error reporting.
    pub fn execute(&mut self, line: usize, command: &Command) -> DriverResult<CommandResult> {
        let result = match command {
            Command::Insert { id, price, tags } => {
                CommandResult::Value(self.store.insert(*id, *price, tags).code() as i64)
            }
            Command::Find { id } => CommandResult::Price(self.store.find(*id)),
            Command::Delete { id } => CommandResult::Value(self.store.delete(*id)),
            Command::FindMinPrice { tag } => CommandResult::Price(self.store.find_min_price(*tag)),
            Command::FindMaxPrice { tag } => CommandResult::Price(self.store.find_max_price(*tag)),
            Command::FindPriceRange { tag, low, high } => {
                CommandResult::Value(self.store.find_price_range(*tag, *low, *high) as i64)
            }
            Command::PriceHike { low, high, rate } => {
                CommandResult::Price(self.store.price_hike(*low, *high, *rate))
            }
            Command::RemoveNames { id, tags } => {
                let sum = self
                    .store
                    .remove_names(*id, tags)
                    .map_err(|source| DriverError::Store { line, source })?;
                CommandResult::Value(sum)
            }
            Command::End => CommandResult::Value(0),
        };

        if !matches!(command, Command::End) {
            self.commands += 1;
            self.checksum = self.checksum.wrapping_add(result.checksum_value());
        }
        Ok(result)
    }

    /// Runs a whole script, stopping at `End` or end of input.
    ///
    /// With `echo`, each result is written to `out` as `<line>: <Name> <result>`.
    pub fn run_script<R, W>(&mut self, reader: R, out: &mut W, echo: bool) -> DriverResult<RunSummary>
    where
        R: BufRead,
        W: Write,
    {
        for (index, line) in reader.lines().enumerate() {
            let line_no = index + 1;
            let line = line?;

            let Some(command) = parse_line(line_no, &line)? else {
                continue;
            };
            if command == Command::End {
                debug!(line = line_no, "Reached End");
                break;
            }

            let result = self.execute(line_no, &command)?;
            if echo {
                writeln!(out, "{}: {} {}", line_no, command.name(), result)?;
            }
        }

        let summary = self.summary();
        info!(
            commands = summary.commands,
            checksum = summary.checksum,
            items = summary.items,
            "Script finished"
        );
        Ok(summary)
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            commands: self.commands,
            checksum: self.checksum,
            items: self.store.len(),
        }
    }
}
