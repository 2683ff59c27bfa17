#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the website URL field.
    UrlChanged(String),
    /// User edited the app name field.
    AppNameChanged(String),
    /// User picked a logo file, or cleared the current one with `None`.
    LogoSelected(Option<crate::LogoFile>),
    /// Engine created a displayable preview reference for the current logo.
    LogoPreviewReady { token: String },
    /// Engine released the preview reference.
    LogoPreviewCleared,
    /// User submitted the form.
    GenerateClicked,
    /// Sequencer emitted one progress step.
    SequenceStep {
        run_id: crate::RunId,
        percent: u8,
        label: String,
    },
    /// Sequencer finished the full step plan.
    SequenceCompleted { run_id: crate::RunId },
    /// User asked for the placeholder artifact (download variant only).
    DownloadClicked,
    /// User asked to open the submitted URL externally (preview variant only).
    OpenInBrowserClicked,
    /// User clicked "Create another app".
    ResetClicked,
    /// Fallback for placeholder wiring.
    NoOp,
}
