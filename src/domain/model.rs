use std::fmt;

/// One customer name held in the waitlist.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    pub name: String,
}

impl Entry {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Result of removing a customer by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotFound,
}

impl RemoveOutcome {
    pub fn is_found(self) -> bool {
        matches!(self, RemoveOutcome::Removed)
    }
}

impl From<RemoveOutcome> for bool {
    fn from(outcome: RemoveOutcome) -> Self {
        outcome.is_found()
    }
}
