use std::fmt;

use crate::view_model::AppViewModel;
use crate::Variant;

pub type RunId = u64;

/// A user-selected logo file. Plain data in the core; the engine owns the
/// derived preview resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoFile {
    pub file_name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl LogoFile {
    pub fn is_image(&self) -> bool {
        self.media_type.starts_with("image/")
    }
}

/// The mutable form fields, owned exclusively by [`AppState`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormInput {
    pub url: String,
    pub app_name: String,
    pub logo: Option<LogoFile>,
}

/// Exactly one phase is active at a time. A validation error is a message
/// attached to `Idle`, not a phase of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Processing {
        run_id: RunId,
    },
    Success {
        run_id: RunId,
    },
}

/// The two recoverable, user-facing validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    InvalidUrl,
    MissingAppName,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidUrl => {
                write!(f, "Please enter a valid website URL (e.g., https://example.com)")
            }
            ValidationError::MissingAppName => write!(f, "Please enter an app name."),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    variant: Variant,
    form: FormInput,
    phase: Phase,
    percent: u8,
    label: String,
    error: Option<ValidationError>,
    preview_token: Option<String>,
    next_run_id: RunId,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Variant::Download)
    }
}

impl AppState {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            form: FormInput::default(),
            phase: Phase::Idle,
            percent: 0,
            label: String::new(),
            error: None,
            preview_token: None,
            next_run_id: 1,
            dirty: false,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn form(&self) -> &FormInput {
        &self.form
    }

    pub fn preview_token(&self) -> Option<&str> {
        self.preview_token.as_deref()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            phase: self.phase,
            url: self.form.url.clone(),
            app_name: self.form.app_name.clone(),
            percent: self.percent,
            label: self.label.clone(),
            error_message: self.error.map(|e| e.to_string()),
            preview_token: self.preview_token.clone(),
            inputs_enabled: self.inputs_enabled(),
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn inputs_enabled(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    pub(crate) fn set_url(&mut self, url: String) {
        if self.form.url != url {
            self.form.url = url;
            self.dirty = true;
        }
    }

    pub(crate) fn set_app_name(&mut self, app_name: String) {
        if self.form.app_name != app_name {
            self.form.app_name = app_name;
            self.dirty = true;
        }
    }

    pub(crate) fn set_logo(&mut self, logo: Option<LogoFile>) {
        if self.form.logo != logo {
            self.form.logo = logo;
            self.dirty = true;
        }
    }

    pub(crate) fn set_preview_token(&mut self, token: Option<String>) {
        if self.preview_token != token {
            self.preview_token = token;
            self.dirty = true;
        }
    }

    pub(crate) fn fail_validation(&mut self, error: ValidationError) {
        self.error = Some(error);
        self.dirty = true;
    }

    /// Transition Idle -> Processing with a fresh run id, clearing any
    /// previous progress and error message.
    pub(crate) fn begin_run(&mut self) -> RunId {
        let run_id = self.next_run_id;
        self.next_run_id += 1;
        self.phase = Phase::Processing { run_id };
        self.percent = 0;
        self.label.clear();
        self.error = None;
        self.dirty = true;
        run_id
    }

    /// Applies one sequencer step. Deliveries carrying a stale run id, or a
    /// percent below the one already shown, are dropped so a late timer can
    /// never regress the display.
    pub(crate) fn apply_step(&mut self, run_id: RunId, percent: u8, label: String) {
        match self.phase {
            Phase::Processing { run_id: active } if active == run_id => {
                if percent < self.percent {
                    return;
                }
                self.percent = percent;
                self.label = label;
                self.dirty = true;
            }
            _ => {}
        }
    }

    /// Transition Processing -> Success. Requires the matching run id and
    /// that the final 100% step has already been observed.
    pub(crate) fn complete_run(&mut self, run_id: RunId) {
        if let Phase::Processing { run_id: active } = self.phase {
            if active == run_id && self.percent == 100 {
                self.phase = Phase::Success { run_id };
                self.dirty = true;
            }
        }
    }

    /// Back to an empty Idle form. The run id counter survives the reset so
    /// stale deliveries from a cancelled run can never match a future one.
    pub(crate) fn reset(&mut self) {
        let variant = self.variant;
        let next_run_id = self.next_run_id;
        *self = Self::new(variant);
        self.next_run_id = next_run_id;
        self.dirty = true;
    }
}
