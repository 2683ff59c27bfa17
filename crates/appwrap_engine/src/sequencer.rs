use std::collections::HashMap;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use wrap_logging::{wrap_debug, wrap_warn};

use crate::{RunId, SequencerEvent, StepPlan};

/// Delays driving the simulated build. Injectable so tests never depend on
/// wall-clock defaults.
#[derive(Debug, Clone)]
pub struct SequencerTimings {
    /// Delay before each step, including the first one after start.
    pub step_delay: Duration,
    /// Extra delay between the final 100% step and the completion signal.
    pub completion_delay: Duration,
}

impl Default for SequencerTimings {
    fn default() -> Self {
        Self {
            step_delay: Duration::from_millis(800),
            completion_delay: Duration::from_millis(500),
        }
    }
}

pub trait EventSink: Send + Sync {
    fn emit(&self, event: SequencerEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<SequencerEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<SequencerEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: SequencerEvent) {
        let _ = self.tx.send(event);
    }
}

enum SequencerCommand {
    Start { run_id: RunId, plan: StepPlan },
    Cancel { run_id: RunId },
}

/// Handle to the sequencer thread. Commands go in over a channel; step and
/// completion events come back out of the receiver returned by [`new`].
///
/// [`new`]: SequencerHandle::new
#[derive(Clone)]
pub struct SequencerHandle {
    cmd_tx: mpsc::Sender<SequencerCommand>,
}

impl SequencerHandle {
    pub fn new(timings: SequencerTimings) -> (Self, mpsc::Receiver<SequencerEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            // One cancellation token per run id; an entry also marks the id
            // as used, so re-starting it is refused.
            let mut runs: HashMap<RunId, CancellationToken> = HashMap::new();
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    SequencerCommand::Start { run_id, plan } => {
                        if runs.contains_key(&run_id) {
                            wrap_warn!("sequencer: run {} already started, ignoring", run_id);
                            continue;
                        }
                        let cancel = CancellationToken::new();
                        runs.insert(run_id, cancel.clone());
                        let sink = ChannelEventSink::new(event_tx.clone());
                        let timings = timings.clone();
                        runtime.spawn(async move {
                            run_plan(run_id, plan, timings, &sink, cancel).await;
                        });
                    }
                    SequencerCommand::Cancel { run_id } => {
                        if let Some(cancel) = runs.get(&run_id) {
                            wrap_debug!("sequencer: cancelling run {}", run_id);
                            cancel.cancel();
                        }
                    }
                }
            }
        });

        (Self { cmd_tx }, event_rx)
    }

    pub fn start(&self, run_id: RunId, plan: StepPlan) {
        let _ = self.cmd_tx.send(SequencerCommand::Start { run_id, plan });
    }

    /// Invalidates all pending timers of the run. Events already sitting in
    /// the event channel may still be drained; consumers drop them by run id.
    pub fn cancel(&self, run_id: RunId) {
        let _ = self.cmd_tx.send(SequencerCommand::Cancel { run_id });
    }
}

/// Walks the plan: one step per `step_delay`, then `completion_delay`, then
/// the completion signal. Cancellation wins over an elapsed timer, so a
/// token cancelled before the next suspension point suppresses every later
/// event of the run.
pub async fn run_plan(
    run_id: RunId,
    plan: StepPlan,
    timings: SequencerTimings,
    sink: &dyn EventSink,
    cancel: CancellationToken,
) {
    for step in plan.steps() {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => return,
            _ = tokio::time::sleep(timings.step_delay) => {}
        }
        sink.emit(SequencerEvent::Step {
            run_id,
            percent: step.percent,
            label: step.label.clone(),
        });
    }

    tokio::select! {
        biased;
        _ = cancel.cancelled() => return,
        _ = tokio::time::sleep(timings.completion_delay) => {}
    }
    sink.emit(SequencerEvent::Completed { run_id });
}
