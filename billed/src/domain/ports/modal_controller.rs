//! Driven port for showing the receipt preview modal.

/// What the preview modal should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalContent {
    /// Receipt image URL.
    pub bill_url: String,
    /// Image width in pixels.
    pub image_width: u32,
}

/// Capability to open the receipt modal.
#[cfg_attr(test, mockall::automock)]
pub trait ModalController: Send + Sync {
    /// Current modal width in pixels; the receipt image takes half of it.
    fn width(&self) -> u32;

    /// Show the modal with `content`.
    fn open(&self, content: ModalContent);
}
