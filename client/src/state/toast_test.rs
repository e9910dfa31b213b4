use super::*;

// =============================================================
// ToastState
// =============================================================

#[test]
fn toast_state_default_empty() {
    assert!(ToastState::default().toasts.is_empty());
}

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Success, "Welcome back!");
    let second = state.push(ToastKind::Error, "Invalid credentials");
    assert!(second > first);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[1].message, "Invalid credentials");
}

#[test]
fn push_drops_oldest_beyond_limit() {
    let mut state = ToastState::default();
    for i in 0..5 {
        state.push(ToastKind::Error, format!("error {i}"));
    }
    assert_eq!(state.toasts.len(), MAX_VISIBLE_TOASTS);
    assert_eq!(state.toasts[0].message, "error 2");
    assert_eq!(state.toasts[2].message, "error 4");
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let keep = state.push(ToastKind::Success, "kept");
    let gone = state.push(ToastKind::Error, "gone");
    state.dismiss(gone);
    state.dismiss(999);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, keep);
}

#[test]
fn kind_maps_to_css_modifier() {
    assert_eq!(ToastKind::Success.css_modifier(), "toast--success");
    assert_eq!(ToastKind::Error.css_modifier(), "toast--error");
}

// =============================================================
// Toasts handle
// =============================================================

#[test]
fn toasts_handle_queues_and_dismisses() {
    Owner::new().with(|| {
        let toasts = Toasts::new();
        toasts.success("Account created successfully!");
        toasts.error("Passwords do not match");
        let visible = toasts.visible();
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].kind, ToastKind::Success);
        toasts.dismiss(visible[0].id);
        assert_eq!(toasts.visible().len(), 1);
    });
}
