use tracing::{error, info, warn};

use shared_models::{error::PortalError, outcome::FlowOutcome};
use shared_utils::html::loading_spinner;
use shared_utils::page::{ids, Page};

use crate::models::{DoctorSearchFilters, NewDoctorForm, SearchOutcome};
use crate::render::{render_doctor_results, render_search_error};
use crate::services::{DoctorAdminService, DoctorSearchService};

pub const ADD_DOCTOR_FALLBACK: &str = "Error adding doctor";

/// Read the filters, show a spinner, then replace it with cards, the empty
/// message or the error banner.
///
/// Only page contract violations are returned as errors; request failures are
/// rendered and reported through the outcome.
pub async fn search_doctors<P: Page + ?Sized>(
    page: &P,
    service: &DoctorSearchService,
) -> Result<SearchOutcome, PortalError> {
    let filters = DoctorSearchFilters::new(
        page.value(ids::SPECIALIZATION)?,
        page.value(ids::APPOINTMENT_DATE)?,
    );

    page.set_inner_html(ids::DOCTOR_RESULTS, &loading_spinner())?;

    match service.search_doctors(&filters).await {
        Ok(doctors) => {
            page.set_inner_html(ids::DOCTOR_RESULTS, &render_doctor_results(&doctors))?;
            if doctors.is_empty() {
                Ok(SearchOutcome::Empty)
            } else {
                Ok(SearchOutcome::Found(doctors.len()))
            }
        }
        Err(e) => {
            error!("Doctor search failed: {}", e);
            page.set_inner_html(ids::DOCTOR_RESULTS, &render_search_error())?;
            Ok(SearchOutcome::Failed)
        }
    }
}

/// Post every field of the add-doctor form. On success the form is cleared and
/// the page reloaded; on failure the form keeps its values.
pub async fn add_doctor<P: Page + ?Sized>(
    page: &P,
    service: &DoctorAdminService,
) -> Result<FlowOutcome, PortalError> {
    let form = NewDoctorForm::from(page.form_fields(ids::ADD_DOCTOR_FORM)?);

    match service.add_doctor(&form).await {
        Ok(()) => {
            info!("Doctor added, reloading page");
            page.reset_form(ids::ADD_DOCTOR_FORM)?;
            page.reload();
            Ok(FlowOutcome::Completed)
        }
        Err(e) => {
            if e.is_transport() {
                error!("Add doctor request failed: {}", e);
            } else {
                warn!("Add doctor rejected: {}", e);
            }
            let message = e.user_message(ADD_DOCTOR_FALLBACK);
            page.alert(&message);
            Ok(FlowOutcome::Failed { message })
        }
    }
}
