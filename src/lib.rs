//! iulist - an index-addressable, insertion-ordered list with fail-fast iteration.
//!
//! # Overview
//!
//! [`ArrayList`] stores its elements in a contiguous buffer that doubles when
//! full. Elements are addressed by position, inserted and removed at any
//! position (later elements shift to close or open the gap), and looked up by
//! value. Iteration is fail-fast: an [`Iter`] detects structural changes made to
//! its list after it was created and reports them instead of yielding stale
//! elements.
//!
//! # Quick Start
//!
//! ```
//! use iulist::{ArrayList, ListError};
//!
//! let mut list = ArrayList::with_capacity(2);
//! list.add("x");
//! list.add("z");
//! list.insert_after("y", &"x").unwrap();
//! assert_eq!(list.to_string(), "[x, y, z]");
//!
//! assert_eq!(list.index_of(&"z"), Some(2));
//! assert_eq!(list.remove_value(&"q"), Err(ListError::NotFound));
//!
//! for word in &list {
//!     let word = word.unwrap();
//!     assert!(list.contains(&word));
//! }
//! ```
//!
//! # Errors
//!
//! Every fallible operation returns [`Result`] with a [`ListError`]. A failed
//! call leaves the list unchanged.
//!
//! # Threads
//!
//! Lists are single-threaded: neither [`ArrayList`] nor [`Iter`] is `Send` or
//! `Sync`.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

mod buffer;
pub mod error;
pub mod iter;
pub mod list;

pub use error::{ListError, Result};
pub use iter::Iter;
pub use list::{ArrayList, DEFAULT_CAPACITY};
