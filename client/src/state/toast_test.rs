use super::*;

// =============================================================
// ToastState defaults
// =============================================================

#[test]
fn toast_state_default_is_empty() {
    let state = ToastState::default();
    assert!(state.is_empty());
    assert!(state.items().is_empty());
}

// =============================================================
// push / dismiss
// =============================================================

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(Notice::success("one"));
    let b = state.push(Notice::error("two"));
    assert!(b > a);
    assert_eq!(state.items().len(), 2);
    assert_eq!(state.items()[1].notice.title, "two");
}

#[test]
fn push_keeps_only_newest_visible() {
    let mut state = ToastState::default();
    for i in 0..5 {
        state.push(Notice::success(format!("n{i}")));
    }
    let titles: Vec<_> = state.items().iter().map(|t| t.notice.title.as_str()).collect();
    assert_eq!(titles, vec!["n2", "n3", "n4"]);
}

#[test]
fn dismiss_removes_by_id() {
    let mut state = ToastState::default();
    let a = state.push(Notice::success("one"));
    let b = state.push(Notice::success("two"));
    assert!(state.dismiss(a));
    assert!(!state.dismiss(a));
    assert_eq!(state.items().len(), 1);
    assert_eq!(state.items()[0].id, b);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let a = state.push(Notice::success("one"));
    state.dismiss(a);
    let b = state.push(Notice::success("two"));
    assert_ne!(a, b);
}
