/// Lifecycle of the "fechar mês" action on the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClosingState {
    #[default]
    Idle,
    /// Waiting for the user to confirm the destructive action.
    Confirming,
    /// Request sent; the trigger stays disabled until it resolves.
    InFlight,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClosingEvent {
    Request,
    Cancel,
    Confirm,
    Succeeded,
    Failed,
}

impl ClosingState {
    /// Applies `event`; events that make no sense in the current state are ignored.
    pub fn next(self, event: ClosingEvent) -> Self {
        match (self, event) {
            (ClosingState::Idle, ClosingEvent::Request) => ClosingState::Confirming,
            (ClosingState::Confirming, ClosingEvent::Cancel) => ClosingState::Idle,
            (ClosingState::Confirming, ClosingEvent::Confirm) => ClosingState::InFlight,
            (ClosingState::InFlight, ClosingEvent::Succeeded | ClosingEvent::Failed) => ClosingState::Idle,
            (state, _) => state,
        }
    }

    pub fn is_confirming(self) -> bool {
        self == ClosingState::Confirming
    }

    pub fn is_in_flight(self) -> bool {
        self == ClosingState::InFlight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_goes_through_confirmation() {
        let state = ClosingState::default()
            .next(ClosingEvent::Request)
            .next(ClosingEvent::Confirm);
        assert!(state.is_in_flight());
        assert_eq!(state.next(ClosingEvent::Succeeded), ClosingState::Idle);
    }

    #[test]
    fn confirm_without_request_does_nothing() {
        assert_eq!(ClosingState::Idle.next(ClosingEvent::Confirm), ClosingState::Idle);
    }

    #[test]
    fn cancel_returns_to_idle() {
        let state = ClosingState::Idle.next(ClosingEvent::Request);
        assert!(state.is_confirming());
        assert_eq!(state.next(ClosingEvent::Cancel), ClosingState::Idle);
    }

    #[test]
    fn in_flight_ignores_new_requests_until_resolved() {
        let state = ClosingState::InFlight;
        assert_eq!(state.next(ClosingEvent::Request), ClosingState::InFlight);
        assert_eq!(state.next(ClosingEvent::Cancel), ClosingState::InFlight);
        assert_eq!(state.next(ClosingEvent::Failed), ClosingState::Idle);
    }
}
