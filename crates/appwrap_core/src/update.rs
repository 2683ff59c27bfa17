use crate::validate::is_valid_url;
use crate::{AppState, Effect, LogoFile, Msg, Phase, ValidationError, Variant};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::UrlChanged(url) => {
            if state.inputs_enabled() {
                state.set_url(url);
            }
            Vec::new()
        }
        Msg::AppNameChanged(app_name) => {
            if state.inputs_enabled() {
                state.set_app_name(app_name);
            }
            Vec::new()
        }
        Msg::LogoSelected(file) => {
            if !state.inputs_enabled() {
                return (state, Vec::new());
            }
            // A non-image selection behaves exactly like an explicit clear.
            let accepted = file.filter(LogoFile::is_image);
            state.set_logo(accepted.clone());
            vec![Effect::SyncLogoPreview { logo: accepted }]
        }
        Msg::LogoPreviewReady { token } => {
            state.set_preview_token(Some(token));
            Vec::new()
        }
        Msg::LogoPreviewCleared => {
            state.set_preview_token(None);
            Vec::new()
        }
        Msg::GenerateClicked => {
            if state.phase() != Phase::Idle {
                return (state, Vec::new());
            }
            match validate_form(&state) {
                Err(error) => {
                    state.fail_validation(error);
                    Vec::new()
                }
                Ok(()) => {
                    let run_id = state.begin_run();
                    vec![Effect::StartSequence { run_id }]
                }
            }
        }
        Msg::SequenceStep {
            run_id,
            percent,
            label,
        } => {
            state.apply_step(run_id, percent, label);
            Vec::new()
        }
        Msg::SequenceCompleted { run_id } => {
            state.complete_run(run_id);
            Vec::new()
        }
        Msg::DownloadClicked => match state.phase() {
            Phase::Success { .. } if state.variant() == Variant::Download => {
                vec![Effect::ProduceArtifact {
                    app_name: state.form().app_name.clone(),
                    url: state.form().url.clone(),
                }]
            }
            _ => Vec::new(),
        },
        Msg::OpenInBrowserClicked => match state.phase() {
            Phase::Success { .. } if state.variant() == Variant::LivePreview => {
                vec![Effect::OpenExternal {
                    url: state.form().url.clone(),
                }]
            }
            _ => Vec::new(),
        },
        Msg::ResetClicked => {
            let mut effects = Vec::new();
            if let Phase::Processing { run_id } = state.phase() {
                effects.push(Effect::CancelSequence { run_id });
            }
            if state.form().logo.is_some() || state.preview_token().is_some() {
                effects.push(Effect::SyncLogoPreview { logo: None });
            }
            state.reset();
            effects
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// URL validity is checked before the name, so the URL message wins when
/// both fields are bad.
fn validate_form(state: &AppState) -> Result<(), ValidationError> {
    let policy = state.variant().scheme_policy();
    if !is_valid_url(state.form().url.trim(), policy) {
        return Err(ValidationError::InvalidUrl);
    }
    if state.form().app_name.trim().is_empty() {
        return Err(ValidationError::MissingAppName);
    }
    Ok(())
}
