//! What a list page currently displays.

use super::bill::BillRow;

/// Exactly one variant is active per render; nothing persists between renders.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// Fetched rows, in the order they should be displayed.
    Normal(Vec<BillRow>),
    /// The fetch has not resolved yet.
    Loading,
    /// The fetch failed; the message is shown verbatim.
    Error(String),
}

impl ViewState {
    /// Empty normal state, used by pages that display no records.
    pub fn empty() -> Self {
        Self::Normal(Vec::new())
    }

    /// Rows to render. Empty for Loading and Error.
    pub fn rows(&self) -> &[BillRow] {
        match self {
            Self::Normal(rows) => rows.as_slice(),
            Self::Loading | Self::Error(_) => &[],
        }
    }

    /// Whether this is the Loading state.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Error message, when this is the Error state.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message.as_str()),
            Self::Normal(_) | Self::Loading => None,
        }
    }
}
