/// One stage of the decorative progress animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressStep {
    pub threshold_percent: u8,
    pub label: &'static str,
}

pub const PROGRESS_STEPS: [ProgressStep; 4] = [
    ProgressStep {
        threshold_percent: 20,
        label: "Analyzing dataset",
    },
    ProgressStep {
        threshold_percent: 40,
        label: "Parsing intent",
    },
    ProgressStep {
        threshold_percent: 60,
        label: "Generating code",
    },
    ProgressStep {
        threshold_percent: 80,
        label: "Building notebook",
    },
];

/// Forced on success; the step sequence itself never gets there.
pub const COMPLETE_PERCENT: u8 = 100;

/// Perceived-latency animation. It advances one step per tick while running
/// and knows nothing about the remote job; completion comes from the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProgressSimulator {
    running: bool,
    steps_shown: usize,
    percent: u8,
    label: Option<&'static str>,
}

impl ProgressSimulator {
    pub fn start(&mut self) {
        *self = Self {
            running: true,
            ..Self::default()
        };
    }

    /// Advances one step. Returns `false` when stopped or out of steps.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        let Some(step) = PROGRESS_STEPS.get(self.steps_shown) else {
            return false;
        };
        self.percent = step.threshold_percent;
        self.label = Some(step.label);
        self.steps_shown += 1;
        true
    }

    /// Idempotent. Returns whether the simulator was running.
    pub fn stop(&mut self) -> bool {
        std::mem::replace(&mut self.running, false)
    }

    pub fn complete(&mut self) {
        self.percent = COMPLETE_PERCENT;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn label(&self) -> Option<&'static str> {
        self.label
    }
}
