//! Begrenzter Verlauf der erfolgreich ausgeführten Commands.
//!
//! Jeder Eintrag trägt eine fortlaufende Nummer. Ein Host, der den Verlauf
//! abfragt, erkennt damit auch nach dem Kürzen, welche Einträge neu sind.

use super::AppCommand;
use std::collections::VecDeque;

/// Standard-Kapazität des Verlaufs
pub const DEFAULT_CAPACITY: usize = 1000;

/// Ein ausgeführter Command mit seiner laufenden Nummer (ab 0)
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedCommand {
    /// Laufende Nummer über die gesamte Sitzung, auch über Kürzungen hinweg
    pub sequence: u64,
    /// Der ausgeführte Command
    pub command: AppCommand,
}

/// Verlauf mit fester Kapazität; ist er voll, fällt die ältere Hälfte weg.
#[derive(Debug, Clone)]
pub struct CommandLog {
    entries: VecDeque<LoggedCommand>,
    capacity: usize,
    next_sequence: u64,
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl CommandLog {
    /// Leerer Verlauf mit `DEFAULT_CAPACITY`
    pub fn new() -> Self {
        Self::default()
    }

    /// Leerer Verlauf mit eigener Kapazität (mindestens 2)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(2);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            next_sequence: 0,
        }
    }

    /// Hängt einen ausgeführten Command an und gibt seine Nummer zurück.
    pub fn record(&mut self, command: AppCommand) -> u64 {
        if self.entries.len() >= self.capacity {
            let dropped = self.capacity / 2;
            self.entries.drain(..dropped);
            log::debug!("Command-Verlauf gekürzt um {dropped} Einträge");
        }

        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.entries.push_back(LoggedCommand { sequence, command });
        sequence
    }

    /// Anzahl gehaltener Einträge
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Kapazität des Verlaufs
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Anzahl aller jemals aufgezeichneten Commands (inkl. verworfener)
    pub fn total_recorded(&self) -> u64 {
        self.next_sequence
    }

    /// Zuletzt ausgeführter Command
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.back().map(|entry| &entry.command)
    }

    /// Alle gehaltenen Einträge, älteste zuerst
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &LoggedCommand> + '_ {
        self.entries.iter()
    }

    /// Einträge ab einschließlich der Nummer `sequence`
    pub fn since(&self, sequence: u64) -> impl Iterator<Item = &LoggedCommand> + '_ {
        self.entries
            .iter()
            .skip_while(move |entry| entry.sequence < sequence)
    }
}
