use appwrap_core::{update, AppState, Msg, Phase, Variant, DOWNLOAD_STEPS};

fn submit(state: AppState, app_name: &str, url: &str) -> AppState {
    let (state, _) = update(state, Msg::AppNameChanged(app_name.to_string()));
    let (state, _) = update(state, Msg::UrlChanged(url.to_string()));
    let (state, _) = update(state, Msg::GenerateClicked);
    state
}

fn step(state: AppState, run_id: u64, percent: u8, label: &str) -> AppState {
    let (state, _) = update(
        state,
        Msg::SequenceStep {
            run_id,
            percent,
            label: label.to_string(),
        },
    );
    state
}

#[test]
fn steps_advance_percent_and_label_monotonically() {
    let mut state = submit(
        AppState::new(Variant::Download),
        "My App",
        "https://example.com",
    );

    let mut last_percent = 0;
    for planned in &DOWNLOAD_STEPS {
        state = step(state, 1, planned.percent, planned.label);
        let view = state.view();
        assert!(view.percent > last_percent);
        assert_eq!(view.percent, planned.percent);
        assert_eq!(view.label, planned.label);
        assert_eq!(view.phase, Phase::Processing { run_id: 1 });
        last_percent = planned.percent;
    }

    // The 100% step alone is not enough; Success waits for completion.
    let (state, _) = update(state, Msg::SequenceCompleted { run_id: 1 });
    let view = state.view();
    assert_eq!(view.phase, Phase::Success { run_id: 1 });
    assert_eq!(view.app_name, "My App");
    assert_eq!(view.url, "https://example.com");
}

#[test]
fn completion_without_the_final_step_is_ignored() {
    let mut state = submit(
        AppState::new(Variant::Download),
        "My App",
        "https://example.com",
    );
    state = step(state, 1, 10, "Analyzing website...");
    state = step(state, 1, 30, "Fetching site metadata...");

    let (state, _) = update(state, Msg::SequenceCompleted { run_id: 1 });
    assert_eq!(state.view().phase, Phase::Processing { run_id: 1 });
}

#[test]
fn a_late_step_cannot_regress_the_displayed_percent() {
    let mut state = submit(
        AppState::new(Variant::Download),
        "My App",
        "https://example.com",
    );
    state = step(state, 1, 50, "Packaging assets...");
    state = step(state, 1, 30, "Fetching site metadata...");

    let view = state.view();
    assert_eq!(view.percent, 50);
    assert_eq!(view.label, "Packaging assets...");
}

#[test]
fn deliveries_from_a_cancelled_run_are_stale() {
    let state = submit(
        AppState::new(Variant::Download),
        "My App",
        "https://example.com",
    );
    let (state, _) = update(state, Msg::ResetClicked);

    // Second run gets a fresh id; the old run's timers must not touch it.
    let state = submit(state, "Second App", "https://example.org");
    assert_eq!(state.view().phase, Phase::Processing { run_id: 2 });

    let state = step(state, 1, 90, "Signing application...");
    assert_eq!(state.view().percent, 0);

    let (state, _) = update(state, Msg::SequenceCompleted { run_id: 1 });
    assert_eq!(state.view().phase, Phase::Processing { run_id: 2 });
}

#[test]
fn stale_step_after_reset_cannot_resurrect_processing() {
    let state = submit(
        AppState::new(Variant::Download),
        "My App",
        "https://example.com",
    );
    let (state, _) = update(state, Msg::ResetClicked);

    let state = step(state, 1, 75, "Building configuration...");
    let view = state.view();
    assert_eq!(view.phase, Phase::Idle);
    assert_eq!(view.percent, 0);
    assert_eq!(view.label, "");
}
