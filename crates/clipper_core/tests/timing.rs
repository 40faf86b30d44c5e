use std::sync::Once;

use clipper_core::{
    update, AppState, Debouncer, Msg, NoticePhase, INPUT_DEBOUNCE_TICKS, NOTICE_LEAVING_TICKS,
    NOTICE_VISIBLE_TICKS,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(client_logging::initialize_for_tests);
}

fn tick(state: AppState, count: u32) -> AppState {
    let mut state = state;
    for _ in 0..count {
        let (next, effects) = update(state, Msg::Tick);
        assert!(effects.is_empty());
        state = next;
    }
    state
}

#[test]
fn debouncer_yields_only_after_quiet_period() {
    init_logging();
    let mut debounce = Debouncer::new(4);
    debounce.push("a".to_string());

    assert_eq!(debounce.tick(), None);
    assert_eq!(debounce.tick(), None);
    assert_eq!(debounce.tick(), None);
    assert_eq!(debounce.tick(), Some("a".to_string()));
    assert!(debounce.is_idle());
    assert_eq!(debounce.tick(), None);
}

#[test]
fn debouncer_discards_superseded_values() {
    init_logging();
    let mut debounce = Debouncer::new(3);
    debounce.push("first".to_string());
    assert_eq!(debounce.tick(), None);
    assert_eq!(debounce.tick(), None);

    // A new push restarts the quiet period and drops the old value.
    debounce.push("second".to_string());
    assert_eq!(debounce.tick(), None);
    assert_eq!(debounce.tick(), None);
    assert_eq!(debounce.tick(), Some("second".to_string()));
}

#[test]
fn input_validation_applies_after_debounce() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::InputChanged("not a url".to_string()));
    // Still considered valid until the quiet period elapses.
    assert!(state.input_valid());

    let state = tick(state, u32::from(INPUT_DEBOUNCE_TICKS));
    assert!(!state.input_valid());

    let (state, _) = update(state, Msg::InputChanged("https://example.com".to_string()));
    let state = tick(state, u32::from(INPUT_DEBOUNCE_TICKS));
    assert!(state.input_valid());
}

#[test]
fn empty_input_is_never_flagged_invalid() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::InputChanged("   ".to_string()));
    let state = tick(state, u32::from(INPUT_DEBOUNCE_TICKS));
    assert!(state.input_valid());
}

#[test]
fn notices_expire_after_display_and_leaving_periods() {
    init_logging();
    let state = AppState::new();
    // Submitting with an empty input posts a warning notice.
    let (state, _) = update(state, Msg::SubmitRequested);
    assert_eq!(state.notices().len(), 1);
    assert_eq!(state.notices()[0].phase(), NoticePhase::Visible);

    let state = tick(state, u32::from(NOTICE_VISIBLE_TICKS));
    assert_eq!(state.notices().len(), 1);
    assert_eq!(state.notices()[0].phase(), NoticePhase::Leaving);

    let state = tick(state, u32::from(NOTICE_LEAVING_TICKS));
    assert!(state.notices().is_empty());
}
