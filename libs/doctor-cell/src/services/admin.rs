use tracing::debug;

use shared_config::AppConfig;
use shared_http::HospitalClient;
use shared_models::{error::PortalError, response::ActionResponse};

use crate::models::NewDoctorForm;

pub const ADD_DOCTOR_PATH: &str = "/admin/add_doctor";

pub struct DoctorAdminService {
    client: HospitalClient,
}

impl DoctorAdminService {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_client(HospitalClient::new(config))
    }

    pub fn with_client(client: HospitalClient) -> Self {
        Self { client }
    }

    /// Submit the add-doctor form as-is.
    pub async fn add_doctor(&self, form: &NewDoctorForm) -> Result<(), PortalError> {
        debug!("Adding doctor with {} form fields", form.len());

        let response: ActionResponse = self
            .client
            .post_form(ADD_DOCTOR_PATH, form.fields())
            .await?;

        response.into_result()
    }
}
