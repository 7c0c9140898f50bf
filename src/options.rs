// options.rs

use thiserror::Error;

/// Predicate deciding whether a submitted entry may be stored.
pub type Validator<T> = Box<dyn Fn(&T) -> bool>;

/// The one error this crate produces: a configuration without `max_size`.
/// Raised by construction and reconfiguration, never by insertion,
/// navigation, or reads.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("history configuration requires max_size")]
pub struct InvalidConfiguration;

/// Settings for a history buffer. `max_size` is required; the other two
/// fields are optional, and on reconfiguration an unset field keeps the
/// value already stored in the buffer rather than resetting it.
pub struct HistoryOptions<T> {
    pub max_size: Option<usize>,
    pub default_value: Option<T>,
    pub validate: Option<Validator<T>>,
}

impl<T> HistoryOptions<T> {
    pub fn new() -> Self {
        Self {
            max_size: None,
            default_value: None,
            validate: None,
        }
    }

    pub fn max_size(mut self, max_size: usize) -> Self {
        self.max_size = Some(max_size);
        self
    }

    pub fn default_value(mut self, value: T) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn validate(mut self, validate: impl Fn(&T) -> bool + 'static) -> Self {
        self.validate = Some(Box::new(validate));
        self
    }
}

impl<T> Default for HistoryOptions<T> {
    fn default() -> Self {
        Self::new()
    }
}
