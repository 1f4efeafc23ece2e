use super::*;

// =============================================================
// ToastState
// =============================================================

#[test]
fn toast_state_default_empty() {
    let state = ToastState::default();
    assert!(state.toasts.is_empty());
}

#[test]
fn success_queues_one_toast() {
    let mut state = ToastState::default();
    let id = state.success("Login successful!");
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, id);
    assert_eq!(state.toasts[0].kind, ToastKind::Success);
    assert_eq!(state.toasts[0].text, "Login successful!");
}

#[test]
fn error_queues_one_toast() {
    let mut state = ToastState::default();
    state.error("Invalid credentials");
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].kind, ToastKind::Error);
}

#[test]
fn toast_ids_are_unique() {
    let mut state = ToastState::default();
    let a = state.success("one");
    let b = state.success("two");
    assert_ne!(a, b);
}

#[test]
fn dismiss_removes_only_that_toast() {
    let mut state = ToastState::default();
    let a = state.success("one");
    let b = state.error("two");
    state.dismiss(&a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, b);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = ToastState::default();
    state.success("one");
    state.dismiss("nope");
    assert_eq!(state.toasts.len(), 1);
}
