/// Capability allowlist for the sandboxed preview frame. Everything not
/// listed here is denied by the embedding surface.
pub const SANDBOX_ALLOWLIST: [&str; 8] = [
    "allow-forms",
    "allow-modals",
    "allow-pointer-lock",
    "allow-popups",
    "allow-popups-to-escape-sandbox",
    "allow-same-origin",
    "allow-scripts",
    "allow-top-navigation-by-user-activation",
];

/// What the live-preview variant hands to the embedding surface once a run
/// succeeds: the raw submitted URL plus the fixed sandbox allowlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedView {
    pub url: String,
    pub title: String,
    pub sandbox: &'static [&'static str],
}

pub fn build_embed(app_name: &str, url: &str) -> EmbedView {
    EmbedView {
        url: url.to_string(),
        title: app_name.to_string(),
        sandbox: &SANDBOX_ALLOWLIST,
    }
}

/// Descriptor for opening the submitted URL in a new, unreferenced
/// browsing context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalOpen {
    pub url: String,
    pub window_features: &'static str,
}

pub fn build_external_open(url: &str) -> ExternalOpen {
    ExternalOpen {
        url: url.to_string(),
        window_features: "noopener,noreferrer",
    }
}
