//! Application state for Trashmap
//!
//! This crate provides the data layer behind the map screen: the logged-in
//! user's credential (with its async lookup interface) and the shared board
//! of trashcan pins fed by a remote source.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod pins;
pub mod session;

pub use pins::{Pin, PinBoard, PinError, PinSource};
pub use session::{Credential, CredentialSource, SessionError, StoredCredentials};
