//! AppWrap core: pure workflow state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod steps;
mod update;
mod validate;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, FormInput, LogoFile, Phase, RunId, ValidationError};
pub use steps::{ProgressStep, Variant, DOWNLOAD_STEPS, PREVIEW_STEPS};
pub use update::update;
pub use validate::{is_valid_url, SchemePolicy};
pub use view_model::AppViewModel;
