use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::error::PortalError;

use crate::page::{ids, Page};

pub struct TestConfig {
    pub base_url: String,
    pub session_cookie: Option<String>,
    pub alert_dismiss_after_ms: u64,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            session_cookie: None,
            alert_dismiss_after_ms: 5000,
        }
    }
}

impl TestConfig {
    pub fn for_server(uri: impl Into<String>) -> Self {
        Self {
            base_url: uri.into(),
            ..Self::default()
        }
    }

    /// A base URL nothing listens on.
    pub fn unreachable() -> Self {
        Self::for_server("http://127.0.0.1:1")
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            hospital_base_url: self.base_url.clone(),
            session_cookie: self.session_cookie.clone(),
            alert_dismiss_after_ms: self.alert_dismiss_after_ms,
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

#[derive(Debug, Default, Clone)]
struct Element {
    value: String,
    text: String,
    html: String,
    html_writes: Vec<String>,
    visible: bool,
}

#[derive(Debug, Clone)]
struct FormField {
    name: String,
    element_id: String,
}

#[derive(Debug, Default)]
struct PageState {
    elements: HashMap<String, Element>,
    forms: HashMap<String, Vec<FormField>>,
    alerts: Vec<String>,
    banners: usize,
    reloads: usize,
}

/// In-memory [`Page`] that records every effect a flow has on it.
#[derive(Debug, Default)]
pub struct MemoryPage {
    state: Mutex<PageState>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// The patient dashboard: search form, results container and booking modal.
    pub fn patient_dashboard() -> Self {
        Self::new()
            .with_form(ids::SEARCH_DOCTORS_FORM, &[])
            .with_input(ids::SPECIALIZATION, "")
            .with_input(ids::APPOINTMENT_DATE, "")
            .with_container(ids::DOCTOR_RESULTS)
            .with_modal(ids::BOOKING_MODAL)
            .with_input(ids::BOOKING_DOCTOR_ID, "")
            .with_container(ids::BOOKING_DOCTOR_NAME)
            .with_input(ids::BOOKING_DATE, "")
            .with_input(ids::BOOKING_TIME, "")
            .with_input(ids::SYMPTOMS, "")
    }

    /// The admin doctors page with its add-doctor form.
    pub fn admin_doctors(fields: &[(&str, &str)]) -> Self {
        Self::new().with_form(ids::ADD_DOCTOR_FORM, fields)
    }

    pub fn with_input(self, id: &str, value: &str) -> Self {
        self.lock().elements.insert(
            id.to_string(),
            Element { value: value.to_string(), ..Element::default() },
        );
        self
    }

    pub fn with_container(self, id: &str) -> Self {
        self.lock().elements.insert(id.to_string(), Element::default());
        self
    }

    pub fn with_modal(self, id: &str) -> Self {
        self.with_container(id)
    }

    /// Registers a form whose named fields start out holding the given values.
    /// Each field is also an input addressable by its name.
    pub fn with_form(self, form_id: &str, fields: &[(&str, &str)]) -> Self {
        {
            let mut state = self.lock();
            state.elements.insert(form_id.to_string(), Element::default());
            let mut form = Vec::with_capacity(fields.len());
            for (name, value) in fields {
                state.elements.insert(
                    name.to_string(),
                    Element { value: value.to_string(), ..Element::default() },
                );
                form.push(FormField {
                    name: name.to_string(),
                    element_id: name.to_string(),
                });
            }
            state.forms.insert(form_id.to_string(), form);
        }
        self
    }

    /// Flash banners shown when the page was rendered.
    pub fn with_banners(self, count: usize) -> Self {
        self.lock().banners = count;
        self
    }

    fn lock(&self) -> MutexGuard<'_, PageState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn with_element<R>(
        &self,
        id: &str,
        f: impl FnOnce(&mut Element) -> R,
    ) -> Result<R, PortalError> {
        let mut state = self.lock();
        state
            .elements
            .get_mut(id)
            .map(f)
            .ok_or_else(|| PortalError::MissingElement(id.to_string()))
    }

    pub fn alerts(&self) -> Vec<String> {
        self.lock().alerts.clone()
    }

    pub fn reload_count(&self) -> usize {
        self.lock().reloads
    }

    pub fn banner_count(&self) -> usize {
        self.lock().banners
    }

    pub fn inner_html(&self, id: &str) -> Option<String> {
        self.lock().elements.get(id).map(|el| el.html.clone())
    }

    /// Every markup write to the element, oldest first.
    pub fn html_history(&self, id: &str) -> Vec<String> {
        self.lock()
            .elements
            .get(id)
            .map(|el| el.html_writes.clone())
            .unwrap_or_default()
    }

    pub fn text(&self, id: &str) -> Option<String> {
        self.lock().elements.get(id).map(|el| el.text.clone())
    }

    pub fn input_value(&self, id: &str) -> Option<String> {
        self.lock().elements.get(id).map(|el| el.value.clone())
    }

    pub fn is_modal_visible(&self, id: &str) -> bool {
        self.lock().elements.get(id).map(|el| el.visible).unwrap_or(false)
    }
}

impl Page for MemoryPage {
    fn has_element(&self, id: &str) -> bool {
        self.lock().elements.contains_key(id)
    }

    fn value(&self, id: &str) -> Result<String, PortalError> {
        self.with_element(id, |el| el.value.clone())
    }

    fn set_value(&self, id: &str, value: &str) -> Result<(), PortalError> {
        self.with_element(id, |el| el.value = value.to_string())
    }

    fn set_text(&self, id: &str, text: &str) -> Result<(), PortalError> {
        self.with_element(id, |el| el.text = text.to_string())
    }

    fn set_inner_html(&self, id: &str, html: &str) -> Result<(), PortalError> {
        self.with_element(id, |el| {
            el.html = html.to_string();
            el.html_writes.push(html.to_string());
        })
    }

    fn form_fields(&self, form_id: &str) -> Result<Vec<(String, String)>, PortalError> {
        let state = self.lock();
        let form = state
            .forms
            .get(form_id)
            .ok_or_else(|| PortalError::MissingElement(form_id.to_string()))?;

        Ok(form
            .iter()
            .map(|field| {
                let value = state
                    .elements
                    .get(&field.element_id)
                    .map(|el| el.value.clone())
                    .unwrap_or_default();
                (field.name.clone(), value)
            })
            .collect())
    }

    fn reset_form(&self, form_id: &str) -> Result<(), PortalError> {
        let mut state = self.lock();
        let form = state
            .forms
            .get(form_id)
            .cloned()
            .ok_or_else(|| PortalError::MissingElement(form_id.to_string()))?;

        for field in form {
            if let Some(el) = state.elements.get_mut(&field.element_id) {
                el.value.clear();
            }
        }
        Ok(())
    }

    fn show_modal(&self, id: &str) -> Result<(), PortalError> {
        self.with_element(id, |el| el.visible = true)
    }

    fn hide_modal(&self, id: &str) -> Result<(), PortalError> {
        self.with_element(id, |el| el.visible = false)
    }

    fn alert(&self, message: &str) {
        self.lock().alerts.push(message.to_string());
    }

    fn reload(&self) {
        self.lock().reloads += 1;
    }

    fn dismiss_alerts(&self) -> usize {
        std::mem::take(&mut self.lock().banners)
    }
}

pub struct MockHospitalResponses;

impl MockHospitalResponses {
    pub fn doctor(
        id: i64,
        name: &str,
        specialization: &str,
        department: &str,
        experience: Option<i64>,
        consultation_fee: Option<f64>,
    ) -> Value {
        json!({
            "id": id,
            "name": name,
            "specialization": specialization,
            "department": department,
            "experience": experience,
            "consultation_fee": consultation_fee
        })
    }

    pub fn doctor_list() -> Value {
        json!([
            Self::doctor(1, "asmith", "Cardiologist", "Cardiology", Some(12), Some(150.0)),
            Self::doctor(2, "bjones", "Pediatrician", "Pediatrics", None, None),
        ])
    }

    pub fn success() -> Value {
        json!({ "success": true })
    }

    pub fn error(message: &str) -> Value {
        json!({ "error": message })
    }
}
