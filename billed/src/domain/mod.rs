//! Domain primitives and ports.
//!
//! Purpose: define the records the bills list displays, the identity read
//! from the session, and the view states the router renders. Types here are
//! free of HTTP and markup concerns.
//!
//! Public surface:
//! - Bill / BillRow: gateway record and its display projection.
//! - Identity / Role: the persisted `user` session entry.
//! - ViewState: Normal, Loading, or Error.
//! - Error / ErrorCode: transport-agnostic failure payload.

pub mod bill;
pub mod error;
pub mod formatting;
pub mod identity;
pub mod ports;
pub mod view_state;

pub use self::bill::{Bill, BillId, BillRow, BillStatus, sort_anti_chrono};
pub use self::error::{Error, ErrorCode};
pub use self::formatting::{DateFormatError, format_date, format_status, parse_bill_date};
pub use self::identity::{Identity, IdentityError, JWT_STORAGE_KEY, Role, USER_STORAGE_KEY};
pub use self::view_state::ViewState;

/// Response header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
