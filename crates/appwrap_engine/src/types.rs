pub type RunId = u64;

/// One (percent, label) unit of a step plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedStep {
    pub percent: u8,
    pub label: String,
}

/// The fixed, ordered list of steps one run walks through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepPlan {
    steps: Vec<PlannedStep>,
}

impl StepPlan {
    /// Callers are expected to hand in strictly increasing percentages
    /// ending at 100; the sequencer replays the list verbatim.
    pub fn new(steps: Vec<PlannedStep>) -> Self {
        debug_assert!(steps.windows(2).all(|w| w[0].percent < w[1].percent));
        Self { steps }
    }

    pub fn steps(&self) -> &[PlannedStep] {
        &self.steps
    }
}

/// Events delivered by the sequencer, strictly in order, one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequencerEvent {
    Step {
        run_id: RunId,
        percent: u8,
        label: String,
    },
    Completed {
        run_id: RunId,
    },
}

/// A user-selected logo as the engine sees it. The app shell maps this from
/// the core's form data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoFile {
    pub file_name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl LogoFile {
    pub fn is_image(&self) -> bool {
        self.media_type.starts_with("image/")
    }
}
