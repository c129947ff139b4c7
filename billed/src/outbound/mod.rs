//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **bills_api**: reqwest-backed gateway against the bills REST API
//! - **memory_storage**: in-process key-value store standing in for session
//!   storage
//! - **modal**: modal controller that renders the receipt preview inline
//!
//! Adapters are thin translators between domain types and infrastructure
//! representations. They contain no business logic.

pub mod bills_api;
mod memory_storage;
mod modal;

pub use bills_api::HttpBillsGateway;
pub use memory_storage::MemoryStorage;
pub use modal::InlineModal;
