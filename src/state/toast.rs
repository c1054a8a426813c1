use std::time::Duration;

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);
/// Fade-out time between hiding a toast and removing it.
pub const TOAST_FADE: Duration = Duration::from_millis(300);

pub type ToastId = u64;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "toast-success",
            Self::Error => "toast-error",
            Self::Warning => "toast-warning",
            Self::Info => "toast-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    pub duration: Duration,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastList {
    items: Vec<Toast>,
    next_id: ToastId,
}

impl ToastList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn push(
        &mut self,
        message: impl Into<String>,
        kind: ToastKind,
        duration: Duration,
    ) -> ToastId {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            message: message.into(),
            kind,
            duration,
        });
        id
    }

    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.items.len();
        self.items.retain(|toast| toast.id != id);
        let removed = self.items.len() != before;
        if removed {
            tracing::debug!(id, "toast dismissed");
        }
        removed
    }
}
