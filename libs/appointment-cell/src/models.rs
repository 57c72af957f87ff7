use shared_models::error::PortalError;

/// One booking submission. Built fresh from the modal on every submit and
/// dropped afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingRequest {
    pub doctor_id: String,
    pub date: String,
    pub time: String,
    pub symptoms: String,
}

impl BookingRequest {
    /// Date and time must be present. Nothing else is checked here.
    pub fn validate(&self) -> Result<(), PortalError> {
        if self.date.is_empty() {
            return Err(PortalError::MissingField("date".to_string()));
        }
        if self.time.is_empty() {
            return Err(PortalError::MissingField("time".to_string()));
        }
        Ok(())
    }

    pub fn to_form(&self) -> Vec<(String, String)> {
        vec![
            ("doctor_id".to_string(), self.doctor_id.clone()),
            ("date".to_string(), self.date.clone()),
            ("time".to_string(), self.time.clone()),
            ("symptoms".to_string(), self.symptoms.clone()),
        ]
    }
}

/// The doctor a booking modal was opened for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSelection {
    pub doctor_id: i64,
    pub doctor_name: String,
}

impl BookingSelection {
    pub fn new(doctor_id: i64, doctor_name: impl Into<String>) -> Self {
        Self {
            doctor_id,
            doctor_name: doctor_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn request(date: &str, time: &str) -> BookingRequest {
        BookingRequest {
            doctor_id: "4".to_string(),
            date: date.to_string(),
            time: time.to_string(),
            symptoms: String::new(),
        }
    }

    #[test]
    fn date_and_time_are_required() {
        assert_matches!(request("", "10:00").validate(), Err(PortalError::MissingField(ref f)) if f == "date");
        assert_matches!(request("2025-05-02", "").validate(), Err(PortalError::MissingField(ref f)) if f == "time");
        assert!(request("2025-05-02", "10:00").validate().is_ok());
    }

    #[test]
    fn empty_symptoms_are_still_sent() {
        let form = request("2025-05-02", "10:00").to_form();
        let names: Vec<&str> = form.iter().map(|(name, _)| name.as_str()).collect();

        assert_eq!(names, ["doctor_id", "date", "time", "symptoms"]);
        assert_eq!(form[3].1, "");
    }
}
