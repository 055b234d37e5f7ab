//! Ringpuffer der zuletzt ausgeführten Commands für Diagnosezwecke.

use super::AppCommand;
use crate::shared::options::COMMAND_LOG_CAPACITY;
use std::collections::VecDeque;

/// Hält die zuletzt ausgeführten Commands in Ausführungsreihenfolge.
///
/// Bei vollem Puffer fällt der älteste Eintrag heraus. Die Kapazität
/// kommt aus [`COMMAND_LOG_CAPACITY`]; Tests können sie über
/// [`CommandLog::with_capacity`] verkleinern.
pub struct CommandLog {
    entries: VecDeque<AppCommand>,
    capacity: usize,
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::with_capacity(COMMAND_LOG_CAPACITY)
    }
}

impl CommandLog {
    /// Erstellt ein leeres Command-Log mit Standard-Kapazität.
    pub fn new() -> Self {
        Self::default()
    }

    /// Log mit abweichender Kapazität (mindestens 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Übernimmt einen ausgeführten Command.
    pub fn record(&mut self, command: AppCommand) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(command);
    }

    /// Der zuletzt ausgeführte Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.back()
    }

    /// Anzahl der geloggten Commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iteriert vom ältesten zum neuesten Eintrag.
    pub fn iter(&self) -> impl Iterator<Item = &AppCommand> {
        self.entries.iter()
    }
}
