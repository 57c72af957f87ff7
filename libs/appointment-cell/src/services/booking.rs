use tracing::debug;

use shared_config::AppConfig;
use shared_http::HospitalClient;
use shared_models::{error::PortalError, response::ActionResponse};

use crate::models::BookingRequest;

pub const BOOK_APPOINTMENT_PATH: &str = "/book_appointment";

pub struct AppointmentBookingService {
    client: HospitalClient,
}

impl AppointmentBookingService {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_client(HospitalClient::new(config))
    }

    pub fn with_client(client: HospitalClient) -> Self {
        Self { client }
    }

    /// Validate presence of date and time, then post the booking.
    pub async fn book_appointment(&self, request: &BookingRequest) -> Result<(), PortalError> {
        request.validate()?;

        debug!(
            "Booking doctor {} on {} at {}",
            request.doctor_id, request.date, request.time
        );

        let response: ActionResponse = self
            .client
            .post_form(BOOK_APPOINTMENT_PATH, &request.to_form())
            .await?;

        response.into_result()
    }
}
