//! Transient user-facing notifications.
//!
//! Each submit outcome pushes exactly one toast: success or error. Toasts
//! are identified by a fresh UUID so dismissal (manual or timed) removes
//! only the intended entry.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A single notification awaiting display or dismissal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

/// Shared notification queue, newest last.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Queue a success toast; returns its id.
    pub fn success(&mut self, text: impl Into<String>) -> String {
        self.push(ToastKind::Success, text.into())
    }

    /// Queue an error toast; returns its id.
    pub fn error(&mut self, text: impl Into<String>) -> String {
        self.push(ToastKind::Error, text.into())
    }

    /// Remove a toast by id. Unknown ids are a no-op.
    pub fn dismiss(&mut self, id: &str) {
        self.toasts.retain(|t| t.id != id);
    }

    fn push(&mut self, kind: ToastKind, text: String) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.toasts.push(Toast {
            id: id.clone(),
            kind,
            text,
        });
        id
    }
}
