use shared_models::error::PortalError;

/// Element ids the portal binds to.
pub mod ids {
    pub const SEARCH_DOCTORS_FORM: &str = "searchDoctorsForm";
    pub const ADD_DOCTOR_FORM: &str = "addDoctorForm";
    pub const SPECIALIZATION: &str = "specialization";
    pub const APPOINTMENT_DATE: &str = "appointmentDate";
    pub const DOCTOR_RESULTS: &str = "doctorResults";
    pub const BOOKING_MODAL: &str = "bookingModal";
    pub const BOOKING_DOCTOR_ID: &str = "bookingDoctorId";
    pub const BOOKING_DOCTOR_NAME: &str = "bookingDoctorName";
    pub const BOOKING_DATE: &str = "bookingDate";
    pub const BOOKING_TIME: &str = "bookingTime";
    pub const SYMPTOMS: &str = "symptoms";
}

/// The document the portal renders into.
///
/// Methods take `&self` so one page can be shared between handlers behind an
/// `Arc`; implementations keep their state behind a lock. Element operations
/// fail with [`PortalError::MissingElement`] for ids the page does not have.
pub trait Page: Send + Sync {
    fn has_element(&self, id: &str) -> bool;

    /// Current value of an input.
    fn value(&self, id: &str) -> Result<String, PortalError>;

    fn set_value(&self, id: &str, value: &str) -> Result<(), PortalError>;

    /// Replaces the element's text content. Never interpreted as markup.
    fn set_text(&self, id: &str, text: &str) -> Result<(), PortalError>;

    fn set_inner_html(&self, id: &str, html: &str) -> Result<(), PortalError>;

    /// Every named field of a form, in document order.
    fn form_fields(&self, form_id: &str) -> Result<Vec<(String, String)>, PortalError>;

    fn reset_form(&self, form_id: &str) -> Result<(), PortalError>;

    fn show_modal(&self, id: &str) -> Result<(), PortalError>;

    fn hide_modal(&self, id: &str) -> Result<(), PortalError>;

    /// Blocking prompt.
    fn alert(&self, message: &str);

    fn reload(&self);

    /// Closes the notification banners currently shown and returns how many.
    fn dismiss_alerts(&self) -> usize;
}
