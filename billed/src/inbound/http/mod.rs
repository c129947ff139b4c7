//! HTTP inbound adapter: page handlers and the endpoints serving them.

pub mod error;
pub mod health;
pub mod pages;
pub mod session;
pub mod sign_in;
pub mod state;

pub use error::ApiResult;
