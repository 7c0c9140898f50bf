// lib.rs

//! A bounded command-history buffer with a navigable cursor, the kind a
//! line editor drives from the up/down arrow keys.
//!
//! ```
//! use recall::{HistoryBuffer, HistoryOptions};
//!
//! let mut history = HistoryBuffer::new(HistoryOptions::new().max_size(2)).unwrap();
//! history.add("entry1");
//! history.add("entry2");
//! history.add("entry3");
//!
//! // capacity 2: the oldest entry was evicted
//! assert_eq!(history.entries(), ["entry2", "entry3"]);
//!
//! // walk back from the fresh position
//! assert!(history.prev());
//! assert_eq!(history.current(), Some(&"entry3"));
//! assert!(history.prev());
//! assert_eq!(history.current(), Some(&"entry2"));
//! assert!(!history.prev()); // clamped at the oldest entry
//! ```

pub mod history;
pub mod options;

pub use history::HistoryBuffer;
pub use options::{HistoryOptions, InvalidConfiguration, Validator};
