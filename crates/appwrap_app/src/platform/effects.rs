use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use appwrap_core::{Effect, Msg, Variant};
use appwrap_engine::{
    build_external_open, ArtifactWriter, DownloadProducer, LivePreviewProducer, LogoIntake,
    PlannedStep, PreviewRegistry, ResultProducer, RunOutput, SequencerEvent, SequencerHandle,
    SequencerTimings, StepPlan, Submission,
};
use wrap_logging::{wrap_error, wrap_info};

/// Executes the effects the pure core asks for and feeds engine events back
/// into the message loop.
pub struct EffectRunner {
    variant: Variant,
    sequencer: SequencerHandle,
    intake: LogoIntake,
    producer: Box<dyn ResultProducer>,
    writer: ArtifactWriter,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(variant: Variant, msg_tx: mpsc::Sender<Msg>) -> Self {
        let (sequencer, event_rx) = SequencerHandle::new(SequencerTimings::default());
        spawn_event_loop(event_rx, msg_tx.clone());

        let output_dir = std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join("output");

        let producer: Box<dyn ResultProducer> = match variant {
            Variant::Download => Box::new(DownloadProducer),
            Variant::LivePreview => Box::new(LivePreviewProducer),
        };

        Self {
            variant,
            sequencer,
            intake: LogoIntake::new(PreviewRegistry::new()),
            producer,
            writer: ArtifactWriter::new(output_dir),
            msg_tx,
        }
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartSequence { run_id } => {
                    wrap_logging::set_active_run(run_id);
                    wrap_info!("run {}: starting generation sequence", run_id);
                    self.sequencer.start(run_id, step_plan(self.variant));
                }
                Effect::CancelSequence { run_id } => {
                    wrap_info!("run {}: cancelled", run_id);
                    self.sequencer.cancel(run_id);
                }
                Effect::SyncLogoPreview { logo } => {
                    let msg = match self.intake.set_logo(logo.map(to_engine_logo)) {
                        Some(handle) => Msg::LogoPreviewReady {
                            token: handle.token().to_string(),
                        },
                        None => Msg::LogoPreviewCleared,
                    };
                    let _ = self.msg_tx.send(msg);
                }
                Effect::ProduceArtifact { app_name, url } => {
                    let output = self.producer.produce(&Submission { app_name, url });
                    if let RunOutput::Artifact(artifact) = output {
                        match self.writer.save(&artifact) {
                            Ok(path) => {
                                wrap_info!(
                                    "run {}: artifact saved to {}",
                                    wrap_logging::active_run(),
                                    path.display()
                                );
                                println!("Saved demo APK to {}", path.display());
                            }
                            Err(err) => {
                                wrap_error!("failed to save artifact: {err}");
                                eprintln!("Could not save the demo APK: {err}");
                            }
                        }
                    }
                }
                Effect::OpenExternal { url } => {
                    let open = build_external_open(&url);
                    println!("Open in your browser: {} [{}]", open.url, open.window_features);
                }
            }
        }
    }

    /// The terminal result for the current variant, built from the
    /// submitted form data.
    pub fn success_output(&self, app_name: &str, url: &str) -> RunOutput {
        self.producer.produce(&Submission {
            app_name: app_name.to_string(),
            url: url.to_string(),
        })
    }
}

fn step_plan(variant: Variant) -> StepPlan {
    StepPlan::new(
        variant
            .steps()
            .iter()
            .map(|step| PlannedStep {
                percent: step.percent,
                label: step.label.to_string(),
            })
            .collect(),
    )
}

fn to_engine_logo(logo: appwrap_core::LogoFile) -> appwrap_engine::LogoFile {
    appwrap_engine::LogoFile {
        file_name: logo.file_name,
        media_type: logo.media_type,
        bytes: logo.bytes,
    }
}

fn spawn_event_loop(event_rx: mpsc::Receiver<SequencerEvent>, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        while let Ok(event) = event_rx.recv() {
            let msg = match event {
                SequencerEvent::Step {
                    run_id,
                    percent,
                    label,
                } => Msg::SequenceStep {
                    run_id,
                    percent,
                    label,
                },
                SequencerEvent::Completed { run_id } => Msg::SequenceCompleted { run_id },
            };
            if msg_tx.send(msg).is_err() {
                break;
            }
        }
    });
}
