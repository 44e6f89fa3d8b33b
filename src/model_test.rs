use super::*;

fn fresh() -> Rc<KioskState> {
    Rc::new(KioskState::new(Timestamp(1_000.0)))
}

fn run(state: Rc<KioskState>, actions: &[KioskAction]) -> Rc<KioskState> {
    actions.iter().fold(state, |s, a| s.reduce(*a))
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn new_state_is_idle_with_no_touches() {
    let state = fresh();
    assert_eq!(state.touch_count, 0);
    assert_eq!(state.last_touch, None);
    assert_eq!(state.phase, Phase::Idle);
    assert!(!state.show_dialog());
    assert_eq!(state.current_time, Timestamp(1_000.0));
}

// =============================================================
// Touch
// =============================================================

#[test]
fn touch_count_equals_number_of_touches() {
    for n in 0..25u32 {
        let actions: Vec<_> = (0..n)
            .map(|i| KioskAction::Touch { at: Timestamp(2_000.0 + f64::from(i)) })
            .collect();
        let state = run(fresh(), &actions);
        assert_eq!(state.touch_count, u64::from(n));
        assert_eq!(state.last_touch.is_some(), n > 0);
    }
}

#[test]
fn touch_opens_dialog_and_records_time() {
    let state = fresh().reduce(KioskAction::Touch { at: Timestamp(5_000.0) });
    assert!(state.show_dialog());
    assert_eq!(state.touch_count, 1);
    assert_eq!(state.last_touch, Some(Timestamp(5_000.0)));
}

#[test]
fn touch_while_confirming_keeps_dialog_open() {
    let state = run(
        fresh(),
        &[
            KioskAction::Touch { at: Timestamp(2_000.0) },
            KioskAction::Touch { at: Timestamp(3_000.0) },
        ],
    );
    assert_eq!(state.phase, Phase::ConfirmingTouch);
    assert_eq!(state.touch_count, 2);
    assert_eq!(state.last_touch, Some(Timestamp(3_000.0)));
}

#[test]
fn touch_count_saturates() {
    let mut state = KioskState::new(Timestamp(0.0));
    state.touch_count = u64::MAX;
    let state = Rc::new(state).reduce(KioskAction::Touch { at: Timestamp(1.0) });
    assert_eq!(state.touch_count, u64::MAX);
}

// =============================================================
// Dismiss
// =============================================================

#[test]
fn dismiss_hides_dialog_but_keeps_history() {
    let touched = fresh().reduce(KioskAction::Touch { at: Timestamp(2_000.0) });
    let dismissed = touched.clone().reduce(KioskAction::Dismiss);
    assert!(!dismissed.show_dialog());
    assert_eq!(dismissed.touch_count, touched.touch_count);
    assert_eq!(dismissed.last_touch, touched.last_touch);
}

#[test]
fn dismiss_when_idle_is_a_noop() {
    let state = fresh();
    let after = state.clone().reduce(KioskAction::Dismiss);
    assert!(Rc::ptr_eq(&state, &after));
}

#[test]
fn repeated_dismiss_is_idempotent() {
    let state = run(
        fresh(),
        &[
            KioskAction::Touch { at: Timestamp(2_000.0) },
            KioskAction::Dismiss,
        ],
    );
    let again = state.clone().reduce(KioskAction::Dismiss);
    assert_eq!(*state, *again);
}

// =============================================================
// Tick
// =============================================================

#[test]
fn tick_only_moves_the_clock() {
    let touched = fresh().reduce(KioskAction::Touch { at: Timestamp(2_000.0) });
    let ticked = touched.clone().reduce(KioskAction::Tick { now: Timestamp(3_000.0) });
    assert_eq!(ticked.current_time, Timestamp(3_000.0));
    assert_eq!(ticked.touch_count, touched.touch_count);
    assert_eq!(ticked.last_touch, touched.last_touch);
    assert_eq!(ticked.phase, touched.phase);
}

#[test]
fn tick_fires_in_idle_too() {
    let ticked = fresh().reduce(KioskAction::Tick { now: Timestamp(9_000.0) });
    assert_eq!(ticked.current_time, Timestamp(9_000.0));
    assert_eq!(ticked.phase, Phase::Idle);
}

// =============================================================
// Scenario
// =============================================================

#[test]
fn touch_dismiss_touch_scenario() {
    let s0 = fresh();
    assert_eq!((s0.touch_count, s0.last_touch, s0.show_dialog()), (0, None, false));

    let s1 = s0.reduce(KioskAction::Touch { at: Timestamp(2_000.0) });
    assert_eq!(s1.touch_count, 1);
    assert!(s1.show_dialog());
    let t1 = s1.last_touch.unwrap();

    let s2 = s1.reduce(KioskAction::Dismiss);
    assert!(!s2.show_dialog());
    assert_eq!(s2.touch_count, 1);

    let s3 = s2.reduce(KioskAction::Touch { at: Timestamp(4_500.0) });
    assert_eq!(s3.touch_count, 2);
    assert!(s3.show_dialog());
    assert!(s3.last_touch.unwrap() > t1);
}
