use serde::Deserialize;

use shared_utils::html::format_number;

/// A doctor as returned by the search endpoint. Read-only on this side.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub specialization: String,
    pub department: String,
    #[serde(default)]
    pub experience: Option<i64>,
    #[serde(default)]
    pub consultation_fee: Option<f64>,
}

impl Doctor {
    pub fn display_name(&self) -> String {
        format!("Dr. {}", self.name)
    }

    /// Years of experience, or "N/A" when unknown. Zero counts as unknown.
    pub fn experience_label(&self) -> String {
        match self.experience {
            Some(years) if years != 0 => years.to_string(),
            _ => "N/A".to_string(),
        }
    }

    /// Consultation fee without the currency sign; "0" when unknown.
    pub fn fee_label(&self) -> String {
        match self.consultation_fee {
            Some(fee) if fee != 0.0 && !fee.is_nan() => format_number(fee),
            _ => "0".to_string(),
        }
    }
}

/// Filters read from the search form. Both are passed through unchecked;
/// empty means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoctorSearchFilters {
    pub specialization: String,
    pub date: String,
}

impl DoctorSearchFilters {
    pub fn new(specialization: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            specialization: specialization.into(),
            date: date.into(),
        }
    }

    pub fn as_query(&self) -> [(&str, &str); 2] {
        [
            ("specialization", self.specialization.as_str()),
            ("date", self.date.as_str()),
        ]
    }
}

/// Serialized add-doctor form. Fields are forwarded verbatim and in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewDoctorForm {
    fields: Vec<(String, String)>,
}

impl NewDoctorForm {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Vec<(String, String)>> for NewDoctorForm {
    fn from(fields: Vec<(String, String)>) -> Self {
        Self::new(fields)
    }
}

/// What the results container ended up showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(usize),
    Empty,
    Failed,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doctor(experience: Option<i64>, fee: Option<f64>) -> Doctor {
        Doctor {
            id: 3,
            name: "kgrey".to_string(),
            specialization: "Neurologist".to_string(),
            department: "Neurology".to_string(),
            experience,
            consultation_fee: fee,
        }
    }

    #[test]
    fn absent_values_fall_back() {
        let doc = doctor(None, None);
        assert_eq!(doc.experience_label(), "N/A");
        assert_eq!(doc.fee_label(), "0");
    }

    #[test]
    fn zero_values_fall_back_too() {
        let doc = doctor(Some(0), Some(0.0));
        assert_eq!(doc.experience_label(), "N/A");
        assert_eq!(doc.fee_label(), "0");
    }

    #[test]
    fn present_values_are_shown() {
        let doc = doctor(Some(8), Some(120.5));
        assert_eq!(doc.display_name(), "Dr. kgrey");
        assert_eq!(doc.experience_label(), "8");
        assert_eq!(doc.fee_label(), "120.5");
    }

    #[test]
    fn missing_optional_keys_deserialize() {
        let doc: Doctor = serde_json::from_str(
            r#"{"id": 5, "name": "x", "specialization": "y", "department": "z"}"#,
        )
        .unwrap();
        assert_eq!(doc.experience, None);
        assert_eq!(doc.consultation_fee, None);
    }

    #[test]
    fn search_query_keeps_empty_filters() {
        let filters = DoctorSearchFilters::default();
        assert_eq!(filters.as_query(), [("specialization", ""), ("date", "")]);
    }

    #[test]
    fn new_doctor_form_lookup() {
        let form = NewDoctorForm::from(vec![("username".to_string(), "drx".to_string())]);
        assert_eq!(form.field("username"), Some("drx"));
        assert_eq!(form.field("email"), None);
        assert_eq!(form.len(), 1);
    }
}
