//! Driving port for triggering a route change.
//!
//! Containers receive a navigator instead of reaching for a global
//! `onNavigate` function, so handlers stay testable with a double.

use async_trait::async_trait;

/// Entry point for changing the current route.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Navigator: Send + Sync {
    /// Navigate to `path` and render the matching page.
    async fn on_navigate(&self, path: &str);
}
