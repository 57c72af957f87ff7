use std::collections::HashMap;
use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use appointment_cell::handlers as appointment_handlers;
use appointment_cell::models::BookingSelection;
use doctor_cell::handlers as doctor_handlers;
use shared_models::error::PortalError;
use shared_utils::page::{ids, Page};

use crate::events::{EventResult, PageEvent};
use crate::state::PortalState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubmitHandler {
    SearchDoctors,
    AddDoctor,
}

const SUBMIT_BINDINGS: [(&str, SubmitHandler); 2] = [
    (ids::SEARCH_DOCTORS_FORM, SubmitHandler::SearchDoctors),
    (ids::ADD_DOCTOR_FORM, SubmitHandler::AddDoctor),
];

/// Routes page events to the cell handlers.
///
/// Submit handlers exist only for forms that were on the page when
/// [`PortalRouter::on_load`] ran. Every handler reads the page afresh; the
/// router keeps no state between events.
pub struct PortalRouter<P: Page + ?Sized> {
    page: Arc<P>,
    state: Arc<PortalState>,
    bindings: HashMap<&'static str, SubmitHandler>,
}

impl<P: Page + ?Sized + 'static> PortalRouter<P> {
    pub fn new(page: Arc<P>, state: Arc<PortalState>) -> Self {
        Self {
            page,
            state,
            bindings: HashMap::new(),
        }
    }

    pub fn page(&self) -> &Arc<P> {
        &self.page
    }

    /// Bind submit handlers for the forms present and schedule the
    /// notification banners to close. The returned task yields how many
    /// banners it closed.
    pub fn on_load(&mut self) -> JoinHandle<usize> {
        for (form_id, handler) in SUBMIT_BINDINGS {
            if self.page.has_element(form_id) {
                debug!("Binding submit handler for #{}", form_id);
                self.bindings.insert(form_id, handler);
            }
        }

        let page = Arc::clone(&self.page);
        let delay = self.state.config.alert_dismiss_delay();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let closed = page.dismiss_alerts();
            debug!("Dismissed {} notification banners", closed);
            closed
        })
    }

    pub fn is_bound(&self, form_id: &str) -> bool {
        self.bindings.contains_key(form_id)
    }

    pub async fn dispatch(&self, event: PageEvent) -> Result<EventResult, PortalError> {
        match event {
            PageEvent::Submit { form_id } => {
                let Some(handler) = self.bindings.get(form_id.as_str()).copied() else {
                    debug!("No submit handler bound for #{}", form_id);
                    return Ok(EventResult::Ignored);
                };

                match handler {
                    SubmitHandler::SearchDoctors => {
                        let outcome =
                            doctor_handlers::search_doctors(&*self.page, &self.state.search).await?;
                        Ok(EventResult::Search(outcome))
                    }
                    SubmitHandler::AddDoctor => {
                        let outcome =
                            doctor_handlers::add_doctor(&*self.page, &self.state.admin).await?;
                        Ok(EventResult::Flow(outcome))
                    }
                }
            }
            PageEvent::OpenBooking { doctor_id, doctor_name } => {
                let selection = BookingSelection::new(doctor_id, doctor_name);
                appointment_handlers::show_booking_modal(&*self.page, &selection)?;
                Ok(EventResult::ModalOpened)
            }
            PageEvent::ConfirmBooking => {
                let outcome =
                    appointment_handlers::book_appointment(&*self.page, &self.state.booking).await?;
                info!("Booking flow finished: {:?}", outcome);
                Ok(EventResult::Flow(outcome))
            }
        }
    }
}
