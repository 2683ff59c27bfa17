use crate::Phase;

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub phase: Phase,
    pub url: String,
    pub app_name: String,
    pub percent: u8,
    pub label: String,
    pub error_message: Option<String>,
    pub preview_token: Option<String>,
    pub inputs_enabled: bool,
    pub dirty: bool,
}
