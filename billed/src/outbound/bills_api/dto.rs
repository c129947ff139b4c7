//! DTOs for decoding bills API responses.

use serde::Deserialize;

use crate::domain::Bill;

/// Success payload: the bills visible to the caller.
pub(super) type BillsResponseDto = Vec<Bill>;

/// Error payload the API sends alongside non-success statuses.
#[derive(Debug, Deserialize)]
pub(super) struct ErrorBodyDto {
    #[serde(default)]
    pub(super) message: Option<String>,
}

impl ErrorBodyDto {
    /// Non-blank message carried by `body`, if it decodes.
    pub(super) fn message_from(body: &[u8]) -> Option<String> {
        serde_json::from_slice::<Self>(body)
            .ok()
            .and_then(|dto| dto.message)
            .map(|message| message.trim().to_owned())
            .filter(|message| !message.is_empty())
    }
}
