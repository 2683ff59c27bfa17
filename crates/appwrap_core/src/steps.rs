use crate::validate::SchemePolicy;

/// One discrete (percent, label) unit of the simulated build sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressStep {
    pub percent: u8,
    pub label: &'static str,
}

/// Step table for the download variant. Percentages are strictly increasing
/// and the final step is always 100.
pub const DOWNLOAD_STEPS: [ProgressStep; 6] = [
    ProgressStep {
        percent: 10,
        label: "Analyzing website...",
    },
    ProgressStep {
        percent: 30,
        label: "Fetching site metadata...",
    },
    ProgressStep {
        percent: 50,
        label: "Packaging assets...",
    },
    ProgressStep {
        percent: 75,
        label: "Building configuration...",
    },
    ProgressStep {
        percent: 90,
        label: "Signing application...",
    },
    ProgressStep {
        percent: 100,
        label: "Done!",
    },
];

/// Step table for the live-preview variant.
pub const PREVIEW_STEPS: [ProgressStep; 6] = [
    ProgressStep {
        percent: 10,
        label: "Analyzing website...",
    },
    ProgressStep {
        percent: 30,
        label: "Fetching site metadata...",
    },
    ProgressStep {
        percent: 50,
        label: "Packaging assets...",
    },
    ProgressStep {
        percent: 75,
        label: "Building preview...",
    },
    ProgressStep {
        percent: 90,
        label: "Finalizing simulation...",
    },
    ProgressStep {
        percent: 100,
        label: "Done!",
    },
];

/// Which terminal result the workflow produces on success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// A placeholder downloadable artifact, offered on explicit request.
    #[default]
    Download,
    /// An embedded live preview of the submitted site.
    LivePreview,
}

impl Variant {
    /// The fixed step table driven by the sequencer for this variant.
    pub fn steps(self) -> &'static [ProgressStep; 6] {
        match self {
            Variant::Download => &DOWNLOAD_STEPS,
            Variant::LivePreview => &PREVIEW_STEPS,
        }
    }

    /// The download variant historically also accepted `ftp` URLs.
    pub fn scheme_policy(self) -> SchemePolicy {
        match self {
            Variant::Download => SchemePolicy::WebAndFtp,
            Variant::LivePreview => SchemePolicy::WebOnly,
        }
    }
}
