#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Begin the simulated build sequence for a fresh run.
    StartSequence { run_id: crate::RunId },
    /// Invalidate all pending timers of an in-flight run.
    CancelSequence { run_id: crate::RunId },
    /// Hand the (possibly cleared) logo to the intake so the preview
    /// resource can be released and recreated.
    SyncLogoPreview { logo: Option<crate::LogoFile> },
    /// Materialize the placeholder artifact. Emitted only on explicit user
    /// request from the success screen, never automatically.
    ProduceArtifact { app_name: String, url: String },
    /// Open the submitted URL in a new top-level browsing context.
    OpenExternal { url: String },
}
