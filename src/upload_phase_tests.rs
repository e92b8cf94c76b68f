#[cfg(test)]
mod tests {
    use crate::core::models::{UploadEvent, UploadPhase};

    #[test]
    fn test_idle_moves_to_validating_on_submit() {
        let phase = UploadPhase::Idle.transition(UploadEvent::SubmitRequested);
        assert_eq!(phase, UploadPhase::Validating);
    }

    #[test]
    fn test_validating_fails_on_validation_error() {
        let phase = UploadPhase::Validating.transition(UploadEvent::ValidationFailed {
            message: "no image".to_string(),
        });
        assert_eq!(
            phase,
            UploadPhase::Failed {
                message: "no image".to_string()
            }
        );
    }

    #[test]
    fn test_validating_moves_in_flight_once_validated() {
        let phase = UploadPhase::Validating.transition(UploadEvent::Validated);
        assert_eq!(phase, UploadPhase::InFlight);
    }

    #[test]
    fn test_in_flight_completes_with_image() {
        let phase = UploadPhase::InFlight.transition(UploadEvent::Completed {
            image: "data:image/png;base64,AAAA".to_string(),
        });
        assert_eq!(
            phase,
            UploadPhase::Success {
                image: "data:image/png;base64,AAAA".to_string()
            }
        );
    }

    #[test]
    fn test_in_flight_fails_on_error() {
        let phase = UploadPhase::InFlight.transition(UploadEvent::Errored {
            message: "HTTP 500: internal error".to_string(),
        });
        assert_eq!(
            phase,
            UploadPhase::Failed {
                message: "HTTP 500: internal error".to_string()
            }
        );
    }

    #[test]
    fn test_terminal_phases_accept_a_new_submission() {
        assert!(UploadPhase::Idle.accepts_submission());
        assert!(UploadPhase::Success {
            image: "x".to_string()
        }
        .accepts_submission());
        assert!(UploadPhase::Failed {
            message: "x".to_string()
        }
        .accepts_submission());
    }

    #[test]
    fn test_in_flight_does_not_accept_a_submission() {
        assert!(!UploadPhase::InFlight.accepts_submission());
        assert!(!UploadPhase::Validating.accepts_submission());
    }

    #[test]
    fn test_submit_while_in_flight_is_ignored() {
        let phase = UploadPhase::InFlight.transition(UploadEvent::SubmitRequested);
        assert_eq!(phase, UploadPhase::InFlight);
    }

    #[test]
    fn test_completed_outside_in_flight_is_ignored() {
        let phase = UploadPhase::Idle.transition(UploadEvent::Completed {
            image: "x".to_string(),
        });
        assert_eq!(phase, UploadPhase::Idle);
    }

    #[test]
    fn test_failed_phase_restarts_into_validating() {
        let phase = UploadPhase::Failed {
            message: "old error".to_string(),
        }
        .transition(UploadEvent::SubmitRequested);
        assert_eq!(phase, UploadPhase::Validating);
    }
}
