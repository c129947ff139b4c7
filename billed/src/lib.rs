//! Billed expense-report front end.
//!
//! The crate is split the hexagonal way: `domain` owns records, identities,
//! view states, and ports; `app` holds the router and the bills list
//! container; `views` renders markup as pure functions; `inbound` and
//! `outbound` adapt HTTP, sessions, and the bills API to the ports.

pub mod app;
pub mod config;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod views;

pub use middleware::Trace;
