use chrono::{DateTime, TimeDelta, Utc};
use derive_more::Display;
use crate::storefront::util::time::helper::get_utc_now;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub(crate) enum ToastKind {
    #[display("success")]
    Success,
    #[display("error")]
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub shown_at: DateTime<Utc>,
}

/// Transient messages, each dismissed once `lifetime` has passed.
#[derive(Debug)]
pub(crate) struct ToastQueue {
    lifetime: TimeDelta,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new(lifetime: TimeDelta) -> Self {
        Self { lifetime, toasts: Vec::new() }
    }

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.toasts.push(Toast {
            message: message.into(),
            kind,
            shown_at: get_utc_now(),
        });
    }

    /// toasts still on screen, oldest first
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        let now = get_utc_now();
        self.toasts.iter().filter(move |t| now - t.shown_at < self.lifetime)
    }

    pub fn prune(&mut self) {
        let now = get_utc_now();
        let lifetime = self.lifetime;
        self.toasts.retain(|t| now - t.shown_at < lifetime);
    }
}
