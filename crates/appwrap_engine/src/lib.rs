//! AppWrap engine: timer-driven sequencing, preview resources and result
//! producers backing the workflow core.
mod artifact;
mod embed;
mod logo;
mod persist;
mod producer;
mod sequencer;
mod types;

pub use artifact::{build_artifact, sanitize_app_name, ArtifactFile, WEBVIEW_ENGINE};
pub use embed::{build_embed, build_external_open, EmbedView, ExternalOpen, SANDBOX_ALLOWLIST};
pub use logo::{LogoIntake, PreviewHandle, PreviewRegistry};
pub use persist::{ensure_output_dir, ArtifactWriter, PersistError};
pub use producer::{DownloadProducer, LivePreviewProducer, ResultProducer, RunOutput, Submission};
pub use sequencer::{run_plan, ChannelEventSink, EventSink, SequencerHandle, SequencerTimings};
pub use types::{LogoFile, PlannedStep, RunId, SequencerEvent, StepPlan};
