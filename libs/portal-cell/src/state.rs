use appointment_cell::services::AppointmentBookingService;
use doctor_cell::services::{DoctorAdminService, DoctorSearchService};
use shared_config::AppConfig;

/// Services shared by every handler on the page.
pub struct PortalState {
    pub config: AppConfig,
    pub search: DoctorSearchService,
    pub admin: DoctorAdminService,
    pub booking: AppointmentBookingService,
}

impl PortalState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            search: DoctorSearchService::new(&config),
            admin: DoctorAdminService::new(&config),
            booking: AppointmentBookingService::new(&config),
            config,
        }
    }
}
