//! Markup for the doctor search results container.
//!
//! Server-provided text is escaped before it is placed in the fragment.

use shared_utils::html::{alert_banner, escape, AlertKind};

use crate::models::Doctor;

pub const NO_DOCTORS_MESSAGE: &str = "No doctors found matching your criteria.";
pub const SEARCH_ERROR_MESSAGE: &str = "Error searching doctors";

/// Renders the whole results fragment: one card per doctor, or the info
/// banner when the list is empty.
pub fn render_doctor_results(doctors: &[Doctor]) -> String {
    if doctors.is_empty() {
        return render_no_results();
    }

    let mut html = String::from(r#"<div class="row">"#);
    for doctor in doctors {
        html.push_str(&render_doctor_card(doctor));
    }
    html.push_str("</div>");
    html
}

pub fn render_doctor_card(doctor: &Doctor) -> String {
    format!(
        r#"
<div class="col-md-6 mb-3">
    <div class="card appointment-card">
        <div class="card-body">
            <h5 class="card-title">{title}</h5>
            <p class="card-text">
                <strong>Specialization:</strong> {specialization}<br>
                <strong>Department:</strong> {department}<br>
                <strong>Experience:</strong> {experience} years<br>
                <strong>Fee:</strong> ${fee}
            </p>
            <button class="btn btn-primary btn-sm" data-action="book" data-doctor-id="{id}" data-doctor-name="{name}">
                Book Appointment
            </button>
        </div>
    </div>
</div>
"#,
        title = escape(&doctor.display_name()),
        specialization = escape(&doctor.specialization),
        department = escape(&doctor.department),
        experience = doctor.experience_label(),
        fee = doctor.fee_label(),
        id = doctor.id,
        name = escape(&doctor.name),
    )
}

pub fn render_no_results() -> String {
    alert_banner(AlertKind::Info, NO_DOCTORS_MESSAGE)
}

pub fn render_search_error() -> String {
    alert_banner(AlertKind::Danger, SEARCH_ERROR_MESSAGE)
}
