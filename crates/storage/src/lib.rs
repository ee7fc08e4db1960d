//! Local storage for Trashmap
//!
//! This crate provides the persistent key-value layer backing the app:
//! a sled-based store with scoped keys, plus the session store that holds
//! the logged-in user's credential across launches.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod kv;
pub mod session;

pub use kv::{KvConfig, KvError, KvStore};
pub use session::{SessionStore, USER_KEY};
