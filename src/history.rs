// history.rs

use std::fmt;

use crate::options::{HistoryOptions, InvalidConfiguration, Validator};

/// Bounded command history with a navigable cursor, the state behind
/// up/down recall in a line editor.
///
/// Entries are kept oldest first and compared with the caller's
/// `PartialEq`; a re-submitted entry moves to the newest position instead
/// of being stored twice. The cursor is either on a stored entry or at one
/// of two unselected positions: `-1` (nothing browsed yet) and
/// `entries.len()` (one past the newest entry, where every submission
/// parks it).
pub struct HistoryBuffer<T> {
    entries: Vec<T>,
    cursor: isize,
    max_size: usize,
    default_value: Option<T>,
    validate: Option<Validator<T>>,
}

impl<T> HistoryBuffer<T> {
    /// Creates an empty buffer from the given settings. Fails only when
    /// `max_size` is unset; a `max_size` of zero is accepted and keeps the
    /// buffer permanently empty.
    pub fn new(options: HistoryOptions<T>) -> Result<Self, InvalidConfiguration> {
        let max_size = options.max_size.ok_or(InvalidConfiguration)?;
        Ok(Self {
            entries: Vec::new(),
            cursor: -1,
            max_size,
            default_value: options.default_value,
            validate: options.validate,
        })
    }

    /// Applies new settings in place. Unset fields keep their stored
    /// values, except `max_size` which must always be supplied. Stored
    /// entries and the cursor are untouched; shrinking the capacity below
    /// the current length only affects future insertions.
    pub fn reconfigure(&mut self, options: HistoryOptions<T>) -> Result<(), InvalidConfiguration> {
        self.max_size = options.max_size.ok_or(InvalidConfiguration)?;
        if let Some(default_value) = options.default_value {
            self.default_value = Some(default_value);
        }
        if let Some(validate) = options.validate {
            self.validate = Some(validate);
        }
        Ok(())
    }

    /// The entry under the cursor, or the configured default value while
    /// the cursor sits at an unselected position.
    pub fn current(&self) -> Option<&T> {
        if self.cursor >= 0 && (self.cursor as usize) < self.entries.len() {
            self.entries.get(self.cursor as usize)
        } else {
            self.default_value.as_ref()
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }

    /// Stored entries, oldest first.
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Drops all entries and returns the cursor to the fresh `-1`
    /// position. Settings are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = -1;
    }

    /// Moves the cursor one entry back. Returns whether it moved; at the
    /// oldest entry it stays put.
    pub fn prev(&mut self) -> bool {
        if self.cursor <= 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Moves the cursor one entry forward, up to one past the newest
    /// entry. Returns whether it moved.
    pub fn next(&mut self) -> bool {
        if self.cursor == self.entries.len() as isize {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Puts the cursor on the oldest entry. Returns whether the buffer
    /// holds anything; on an empty buffer the cursor falls back to
    /// unselected. Note the contract difference from `prev`/`next`: the
    /// flag reports non-emptiness, not whether the cursor moved.
    pub fn first(&mut self) -> bool {
        if self.entries.is_empty() {
            self.cursor = -1;
            return false;
        }
        self.cursor = 0;
        true
    }

    /// Puts the cursor on the newest entry. Same contract as `first`.
    pub fn last(&mut self) -> bool {
        if self.entries.is_empty() {
            self.cursor = -1;
            return false;
        }
        self.cursor = self.entries.len() as isize - 1;
        true
    }

    /// Parks the cursor one past the newest entry, where submissions leave
    /// it. Same contract as `first`.
    pub fn past_last(&mut self) -> bool {
        if self.entries.is_empty() {
            self.cursor = -1;
            return false;
        }
        self.cursor = self.entries.len() as isize;
        true
    }

    fn accepts(&self, entry: &T) -> bool {
        self.validate.as_ref().map_or(true, |validate| validate(entry))
    }
}

impl<T: PartialEq> HistoryBuffer<T> {
    /// Submits an entry. An entry the predicate rejects changes nothing
    /// except parking the cursor past the newest entry, so a failed
    /// submission still leaves navigation in the fresh state. An accepted
    /// entry first displaces any stored equal, then evicts the oldest
    /// entry if the buffer is at capacity, and lands at the newest
    /// position with the cursor past it. Never fails.
    pub fn add(&mut self, entry: T) {
        if !self.accepts(&entry) {
            self.cursor = self.entries.len() as isize;
            return;
        }
        self.entries.retain(|stored| *stored != entry);
        if self.entries.len() >= self.max_size {
            if self.entries.is_empty() {
                // capacity of zero: nothing can ever be stored
                self.cursor = 0;
                return;
            }
            self.entries.remove(0);
        }
        self.entries.push(entry);
        self.cursor = self.entries.len() as isize;
    }
}

impl<T: fmt::Debug> fmt::Debug for HistoryBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryBuffer")
            .field("entries", &self.entries)
            .field("cursor", &self.cursor)
            .field("max_size", &self.max_size)
            .field("default_value", &self.default_value)
            .finish_non_exhaustive()
    }
}
