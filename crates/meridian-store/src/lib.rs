//! # Meridian Store
//!
//! The keyed object store the Meridian facade persists through.
//!
//! The store is a collaborator, not part of the valuation core: the core
//! only ever touches it through the [`ObjectStore`] trait's atomic
//! load/save/query primitives. This crate provides:
//!
//! - **Structured Keys**: [`ObjectKey`] - namespace, category, and name,
//!   with a single serialization point, so callers never concatenate
//!   identifier strings
//! - **Properties**: A searchable property bag saved alongside each object
//! - **Memory Store**: A concurrent in-memory reference implementation
//!
//! No retries, transactions, or locking discipline is offered here; each
//! operation is individually atomic and callers treat it as such.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod key;
pub mod memory;
pub mod properties;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use key::{Category, Namespace, ObjectKey};
pub use memory::MemoryStore;
pub use properties::Properties;
pub use store::{ObjectStore, StoredObject};
