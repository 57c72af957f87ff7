use serde::{Deserialize, Serialize};

use doctor_cell::models::SearchOutcome;
use shared_models::outcome::FlowOutcome;

/// User interactions the portal reacts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PageEvent {
    /// A form was submitted. Default submission is always suppressed.
    Submit { form_id: String },
    /// "Book Appointment" on a doctor card.
    OpenBooking { doctor_id: i64, doctor_name: String },
    /// The booking modal's confirm button.
    ConfirmBooking,
}

impl PageEvent {
    pub fn submit(form_id: impl Into<String>) -> Self {
        PageEvent::Submit { form_id: form_id.into() }
    }

    pub fn open_booking(doctor_id: i64, doctor_name: impl Into<String>) -> Self {
        PageEvent::OpenBooking {
            doctor_id,
            doctor_name: doctor_name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    Search(SearchOutcome),
    Flow(FlowOutcome),
    ModalOpened,
    /// Nothing is bound to the event's target.
    Ignored,
}

impl EventResult {
    /// Whether the interaction reached its intended end state.
    pub fn is_success(&self) -> bool {
        match self {
            EventResult::Search(outcome) => *outcome != SearchOutcome::Failed,
            EventResult::Flow(outcome) => outcome.is_completed(),
            EventResult::ModalOpened => true,
            EventResult::Ignored => false,
        }
    }
}
