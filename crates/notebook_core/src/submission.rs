pub type SubmissionId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

/// Owns the single submission state. Transitions are only reachable through
/// the methods below, which keep at most one submission in flight.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmissionController {
    state: SubmissionState,
    current: SubmissionId,
}

impl SubmissionController {
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn can_submit(&self) -> bool {
        self.state != SubmissionState::InFlight
    }

    /// Idle/Succeeded/Failed -> InFlight. Refused while a submission is in flight.
    pub fn begin(&mut self) -> Option<SubmissionId> {
        if !self.can_submit() {
            return None;
        }
        self.current += 1;
        self.state = SubmissionState::InFlight;
        Some(self.current)
    }

    /// InFlight -> Succeeded for the current submission only.
    pub fn succeed(&mut self, id: SubmissionId) -> bool {
        self.resolve(id, SubmissionState::Succeeded)
    }

    /// InFlight -> Failed for the current submission only.
    pub fn fail(&mut self, id: SubmissionId) -> bool {
        self.resolve(id, SubmissionState::Failed)
    }

    pub fn is_in_flight(&self, id: SubmissionId) -> bool {
        self.state == SubmissionState::InFlight && self.is_current(id)
    }

    pub fn is_current(&self, id: SubmissionId) -> bool {
        self.current != 0 && id == self.current
    }

    fn resolve(&mut self, id: SubmissionId, next: SubmissionState) -> bool {
        if !self.is_in_flight(id) {
            return false;
        }
        self.state = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_submission_can_be_in_flight() {
        let mut controller = SubmissionController::default();
        assert_eq!(controller.state(), SubmissionState::Idle);

        let first = controller.begin().unwrap();
        assert_eq!(controller.state(), SubmissionState::InFlight);
        assert_eq!(controller.begin(), None);

        assert!(controller.succeed(first));
        assert_eq!(controller.state(), SubmissionState::Succeeded);

        let second = controller.begin().unwrap();
        assert!(second > first);
        assert!(controller.fail(second));
        assert_eq!(controller.state(), SubmissionState::Failed);
    }

    #[test]
    fn stale_ids_cannot_resolve() {
        let mut controller = SubmissionController::default();
        let first = controller.begin().unwrap();
        controller.fail(first);
        let second = controller.begin().unwrap();

        assert!(!controller.succeed(first));
        assert!(!controller.fail(first));
        assert_eq!(controller.state(), SubmissionState::InFlight);
        assert!(controller.is_in_flight(second));
        assert!(!controller.is_current(0));
    }
}
