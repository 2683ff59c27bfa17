use crate::{build_artifact, build_embed, ArtifactFile, EmbedView};

/// The final form data of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub app_name: String,
    pub url: String,
}

/// What the presentation layer shows once a run succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutput {
    Artifact(ArtifactFile),
    Embed(EmbedView),
}

/// Strategy seam between the one workflow controller and its two terminal
/// results.
pub trait ResultProducer: Send + Sync {
    fn produce(&self, submission: &Submission) -> RunOutput;
}

/// Variant A: a placeholder downloadable artifact.
pub struct DownloadProducer;

impl ResultProducer for DownloadProducer {
    fn produce(&self, submission: &Submission) -> RunOutput {
        RunOutput::Artifact(build_artifact(&submission.app_name, &submission.url))
    }
}

/// Variant B: a sandboxed live preview of the submitted site.
pub struct LivePreviewProducer;

impl ResultProducer for LivePreviewProducer {
    fn produce(&self, submission: &Submission) -> RunOutput {
        RunOutput::Embed(build_embed(&submission.app_name, &submission.url))
    }
}
