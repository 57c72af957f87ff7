use tracing::debug;

use shared_config::AppConfig;
use shared_http::HospitalClient;
use shared_models::error::PortalError;

use crate::models::{Doctor, DoctorSearchFilters};

pub const SEARCH_DOCTORS_PATH: &str = "/search_doctors";

pub struct DoctorSearchService {
    client: HospitalClient,
}

impl DoctorSearchService {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_client(HospitalClient::new(config))
    }

    pub fn with_client(client: HospitalClient) -> Self {
        Self { client }
    }

    /// Fetch doctors matching the filters. No retry; a second call while one is
    /// pending is independent of it.
    pub async fn search_doctors(
        &self,
        filters: &DoctorSearchFilters,
    ) -> Result<Vec<Doctor>, PortalError> {
        debug!(
            "Searching doctors: specialization={:?} date={:?}",
            filters.specialization, filters.date
        );

        let doctors: Vec<Doctor> = self
            .client
            .get_json(SEARCH_DOCTORS_PATH, &filters.as_query())
            .await?;

        debug!("Search returned {} doctors", doctors.len());
        Ok(doctors)
    }
}
