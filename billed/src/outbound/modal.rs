//! Modal controller that keeps the rendered receipt body in memory.

use std::sync::{Mutex, PoisonError};

use tracing::debug;

use crate::domain::ports::{ModalContent, ModalController};
use crate::views::modal::receipt_body;

/// Modal of a fixed width whose last opened body can be read back.
#[derive(Debug)]
pub struct InlineModal {
    width: u32,
    shown: Mutex<Option<String>>,
}

impl InlineModal {
    /// Closed modal `width` pixels wide.
    pub fn new(width: u32) -> Self {
        Self {
            width,
            shown: Mutex::new(None),
        }
    }

    /// Markup of the open modal body, if any.
    pub fn shown(&self) -> Option<String> {
        self.shown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ModalController for InlineModal {
    fn width(&self) -> u32 {
        self.width
    }

    fn open(&self, content: ModalContent) {
        debug!(bill_url = %content.bill_url, "modal opened");
        let body = receipt_body(&content);
        *self.shown.lock().unwrap_or_else(PoisonError::into_inner) = Some(body);
    }
}
