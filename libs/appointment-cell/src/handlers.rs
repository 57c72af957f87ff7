use tracing::{debug, error, info, warn};

use shared_models::{error::PortalError, outcome::FlowOutcome};
use shared_utils::page::{ids, Page};

use crate::models::{BookingRequest, BookingSelection};
use crate::services::AppointmentBookingService;

pub const MISSING_DATE_TIME_PROMPT: &str = "Please select date and time";
pub const BOOKING_FALLBACK: &str = "Error booking appointment";

/// Fill the modal with the chosen doctor and show it.
pub fn show_booking_modal<P: Page + ?Sized>(
    page: &P,
    selection: &BookingSelection,
) -> Result<(), PortalError> {
    debug!("Opening booking modal for doctor {}", selection.doctor_id);

    page.set_value(ids::BOOKING_DOCTOR_ID, &selection.doctor_id.to_string())?;
    page.set_text(ids::BOOKING_DOCTOR_NAME, &selection.doctor_name)?;
    page.show_modal(ids::BOOKING_MODAL)
}

pub fn read_booking_request<P: Page + ?Sized>(page: &P) -> Result<BookingRequest, PortalError> {
    Ok(BookingRequest {
        doctor_id: page.value(ids::BOOKING_DOCTOR_ID)?,
        date: page.value(ids::BOOKING_DATE)?,
        time: page.value(ids::BOOKING_TIME)?,
        symptoms: page.value(ids::SYMPTOMS)?,
    })
}

/// Submit the booking modal.
///
/// A missing date or time prompts the user and sends nothing. Success hides the
/// modal and reloads the page; any failure alerts the server's reason or the
/// generic message.
pub async fn book_appointment<P: Page + ?Sized>(
    page: &P,
    service: &AppointmentBookingService,
) -> Result<FlowOutcome, PortalError> {
    let request = read_booking_request(page)?;

    if let Err(e) = request.validate() {
        debug!("Booking aborted: {}", e);
        page.alert(MISSING_DATE_TIME_PROMPT);
        return Ok(FlowOutcome::Aborted {
            reason: MISSING_DATE_TIME_PROMPT.to_string(),
        });
    }

    match service.book_appointment(&request).await {
        Ok(()) => {
            info!("Appointment booked, reloading page");
            page.hide_modal(ids::BOOKING_MODAL)?;
            page.reload();
            Ok(FlowOutcome::Completed)
        }
        Err(e) => {
            if e.is_transport() {
                error!("Booking request failed: {}", e);
            } else {
                warn!("Booking rejected: {}", e);
            }
            let message = e.user_message(BOOKING_FALLBACK);
            page.alert(&message);
            Ok(FlowOutcome::Failed { message })
        }
    }
}
