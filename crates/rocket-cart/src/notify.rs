//! Toast notifications.
//!
//! Every cart operation reports to the shopper through a [`Notifier`]. The
//! messages are fixed per outcome, see [`messages`].

use serde::Serialize;
use std::sync::Mutex;
use tracing::{info, warn};

/// User-facing message texts.
pub mod messages {
    pub const PRODUCT_ADDED: &str = "Product added to cart";
    pub const PRODUCT_REMOVED: &str = "Product removed successfully";
    pub const OUT_OF_STOCK: &str = "Requested quantity out of stock";
    pub const ADD_FAILED: &str = "Error adding product";
    pub const REMOVE_FAILED: &str = "Error removing product";
    pub const UPDATE_FAILED: &str = "Error updating product quantity";
}

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    /// Shopper-correctable problem, such as asking for more than is in stock.
    Warning,
    Error,
}

/// A transient, non-blocking message for the shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}

/// Sink for toasts.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// Notifier that only logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, toast: Toast) {
        match toast.kind {
            ToastKind::Success => info!(message = %toast.message, "toast"),
            ToastKind::Warning | ToastKind::Error => {
                warn!(kind = ?toast.kind, message = %toast.message, "toast")
            }
        }
    }
}

/// Notifier that keeps every toast it receives.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toasts received so far, oldest first.
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts
            .lock()
            .map(|t| t.clone())
            .unwrap_or_default()
    }

    /// Drain and return received toasts.
    pub fn take(&self) -> Vec<Toast> {
        self.toasts
            .lock()
            .map(|mut t| std::mem::take(&mut *t))
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.push(toast);
        }
    }
}

impl<N: Notifier + ?Sized> Notifier for std::sync::Arc<N> {
    fn notify(&self, toast: Toast) {
        (**self).notify(toast)
    }
}
