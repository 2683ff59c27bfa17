use std::sync::{Arc, Mutex};
use std::time::Duration;

use appwrap_engine::{
    run_plan, EventSink, PlannedStep, SequencerEvent, SequencerHandle, SequencerTimings, StepPlan,
};
use pretty_assertions::assert_eq;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

#[derive(Clone, Default)]
struct TestSink {
    events: Arc<Mutex<Vec<(Instant, SequencerEvent)>>>,
}

impl TestSink {
    fn new() -> Self {
        Self::default()
    }

    fn take(&self) -> Vec<(Instant, SequencerEvent)> {
        self.events.lock().unwrap().drain(..).collect()
    }
}

impl EventSink for TestSink {
    fn emit(&self, event: SequencerEvent) {
        self.events.lock().unwrap().push((Instant::now(), event));
    }
}

fn demo_plan() -> StepPlan {
    let labels = [
        (10, "Analyzing website..."),
        (30, "Fetching site metadata..."),
        (50, "Packaging assets..."),
        (75, "Building configuration..."),
        (90, "Signing application..."),
        (100, "Done!"),
    ];
    StepPlan::new(
        labels
            .into_iter()
            .map(|(percent, label)| PlannedStep {
                percent,
                label: label.to_string(),
            })
            .collect(),
    )
}

#[tokio::test(start_paused = true)]
async fn full_run_emits_six_ordered_steps_then_completion() {
    let sink = TestSink::new();
    let start = Instant::now();

    run_plan(
        1,
        demo_plan(),
        SequencerTimings::default(),
        &sink,
        CancellationToken::new(),
    )
    .await;

    let events = sink.take();
    assert_eq!(events.len(), 7);

    let mut percents = Vec::new();
    for (index, (at, event)) in events[..6].iter().enumerate() {
        match event {
            SequencerEvent::Step { run_id, percent, .. } => {
                assert_eq!(*run_id, 1);
                // Step N is emitted 800ms after step N-1, the first 800ms
                // after start.
                assert_eq!(*at - start, Duration::from_millis(800) * (index as u32 + 1));
                percents.push(*percent);
            }
            other => panic!("expected step, got {other:?}"),
        }
    }
    assert_eq!(percents, vec![10, 30, 50, 75, 90, 100]);

    let (completed_at, completed) = &events[6];
    assert_eq!(*completed, SequencerEvent::Completed { run_id: 1 });
    // Completion follows the 100% step after the extra settle delay.
    let (final_step_at, _) = &events[5];
    assert_eq!(*completed_at - *final_step_at, Duration::from_millis(500));
}

#[tokio::test(start_paused = true)]
async fn a_cancelled_token_suppresses_every_event() {
    let sink = TestSink::new();
    let cancel = CancellationToken::new();
    cancel.cancel();

    run_plan(2, demo_plan(), SequencerTimings::default(), &sink, cancel).await;

    assert!(sink.take().is_empty());
}

#[tokio::test(start_paused = true)]
async fn cancelling_mid_run_stops_before_the_next_step() {
    let sink = TestSink::new();
    let cancel = CancellationToken::new();
    let task_sink = sink.clone();
    let task_cancel = cancel.clone();

    let task = tokio::spawn(async move {
        run_plan(
            3,
            demo_plan(),
            SequencerTimings::default(),
            &task_sink,
            task_cancel,
        )
        .await;
    });

    // Steps land at 800ms and 1600ms; cancel between the second and third.
    tokio::time::sleep(Duration::from_millis(2000)).await;
    cancel.cancel();
    task.await.unwrap();

    let events = sink.take();
    assert_eq!(events.len(), 2);
    assert!(events
        .iter()
        .all(|(_, event)| matches!(event, SequencerEvent::Step { .. })));
}

#[tokio::test(start_paused = true)]
async fn completion_waits_for_the_settle_delay() {
    let sink = TestSink::new();
    let task_sink = sink.clone();

    let task = tokio::spawn(async move {
        run_plan(
            4,
            demo_plan(),
            SequencerTimings::default(),
            &task_sink,
            CancellationToken::new(),
        )
        .await;
    });

    // Just past the final step, but before the settle delay has elapsed.
    tokio::time::sleep(Duration::from_millis(6 * 800 + 499)).await;
    assert!(!sink
        .events
        .lock()
        .unwrap()
        .iter()
        .any(|(_, event)| matches!(event, SequencerEvent::Completed { .. })));

    task.await.unwrap();
    assert!(sink
        .take()
        .iter()
        .any(|(_, event)| matches!(event, SequencerEvent::Completed { run_id: 4 })));
}

fn fast_timings() -> SequencerTimings {
    SequencerTimings {
        step_delay: Duration::from_millis(2),
        completion_delay: Duration::from_millis(1),
    }
}

fn collect_run(events: &std::sync::mpsc::Receiver<SequencerEvent>) -> Vec<SequencerEvent> {
    let mut seen = Vec::new();
    while let Ok(event) = events.recv_timeout(Duration::from_secs(5)) {
        let done = matches!(event, SequencerEvent::Completed { .. });
        seen.push(event);
        if done {
            break;
        }
    }
    seen
}

#[test]
fn handle_delivers_the_plan_in_order() {
    let (handle, events) = SequencerHandle::new(fast_timings());
    handle.start(1, demo_plan());

    let seen = collect_run(&events);
    assert_eq!(seen.len(), 7);
    assert_eq!(*seen.last().unwrap(), SequencerEvent::Completed { run_id: 1 });
}

#[test]
fn handle_cancel_right_after_start_delivers_nothing() {
    let timings = SequencerTimings {
        step_delay: Duration::from_millis(100),
        completion_delay: Duration::from_millis(100),
    };
    let (handle, events) = SequencerHandle::new(timings);
    handle.start(1, demo_plan());
    handle.cancel(1);

    assert!(events.recv_timeout(Duration::from_millis(400)).is_err());
}

#[test]
fn handle_refuses_to_restart_a_run_id() {
    let (handle, events) = SequencerHandle::new(fast_timings());
    handle.start(9, demo_plan());
    handle.start(9, demo_plan());

    let mut seen = collect_run(&events);
    // Nothing more should trickle in from a duplicate run.
    while let Ok(event) = events.recv_timeout(Duration::from_millis(100)) {
        seen.push(event);
    }

    assert_eq!(seen.len(), 7);
    assert_eq!(
        seen.iter()
            .filter(|event| matches!(event, SequencerEvent::Completed { .. }))
            .count(),
        1
    );
}
