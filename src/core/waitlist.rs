use crate::domain::model::{Entry, RemoveOutcome};
use std::collections::VecDeque;

/// Customer names in arrival order.
///
/// Names are only ever added at the front or the end and removed by value;
/// no positional access is exposed. Duplicates are allowed and removal
/// always takes the front-most match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Waitlist {
    entries: VecDeque<Entry>,
}

impl Waitlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `name` ahead of everyone already waiting.
    pub fn insert_front(&mut self, name: impl Into<String>) {
        self.entries.push_front(Entry::new(name));
    }

    /// Put `name` behind everyone already waiting.
    pub fn insert_end(&mut self, name: impl Into<String>) {
        self.entries.push_back(Entry::new(name));
    }

    /// Remove the first entry, scanning from the front, whose name equals
    /// `name` exactly.
    pub fn remove_first(&mut self, name: &str) -> RemoveOutcome {
        match self.entries.iter().position(|entry| entry.name == name) {
            Some(index) => {
                self.entries.remove(index);
                RemoveOutcome::Removed
            }
            None => RemoveOutcome::NotFound,
        }
    }

    /// Names front to back, borrowed from the current state.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.iter().map(str::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Waitlist {
    type Item = &'a str;
    type IntoIter = Box<dyn Iterator<Item = &'a str> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
