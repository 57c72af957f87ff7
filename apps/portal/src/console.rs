use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, info};

use shared_models::error::PortalError;
use shared_utils::page::Page;

#[derive(Debug, Default)]
struct ConsoleState {
    elements: HashSet<String>,
    values: HashMap<String, String>,
    forms: HashMap<String, Vec<String>>,
    html: HashMap<String, String>,
}

/// Terminal stand-in for the browser page. Inputs are preset from the command
/// line, markup is kept per element and alerts go to stderr.
#[derive(Debug, Default)]
pub struct ConsolePage {
    state: Mutex<ConsoleState>,
}

impl ConsolePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_element(self, id: &str) -> Self {
        self.lock().elements.insert(id.to_string());
        self
    }

    pub fn with_value(self, id: &str, value: &str) -> Self {
        {
            let mut state = self.lock();
            state.elements.insert(id.to_string());
            state.values.insert(id.to_string(), value.to_string());
        }
        self
    }

    pub fn with_form(self, form_id: &str, fields: &[(String, String)]) -> Self {
        {
            let mut state = self.lock();
            state.elements.insert(form_id.to_string());
            let mut names = Vec::with_capacity(fields.len());
            for (name, value) in fields {
                state.elements.insert(name.clone());
                state.values.insert(name.clone(), value.clone());
                names.push(name.clone());
            }
            state.forms.insert(form_id.to_string(), names);
        }
        self
    }

    /// Last markup written into the element, if any.
    pub fn inner_html(&self, id: &str) -> Option<String> {
        self.lock().html.get(id).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, ConsoleState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn ensure(&self, id: &str) -> Result<(), PortalError> {
        if self.has_element(id) {
            Ok(())
        } else {
            Err(PortalError::MissingElement(id.to_string()))
        }
    }
}

impl Page for ConsolePage {
    fn has_element(&self, id: &str) -> bool {
        self.lock().elements.contains(id)
    }

    fn value(&self, id: &str) -> Result<String, PortalError> {
        self.ensure(id)?;
        Ok(self.lock().values.get(id).cloned().unwrap_or_default())
    }

    fn set_value(&self, id: &str, value: &str) -> Result<(), PortalError> {
        self.ensure(id)?;
        self.lock().values.insert(id.to_string(), value.to_string());
        Ok(())
    }

    fn set_text(&self, id: &str, text: &str) -> Result<(), PortalError> {
        self.ensure(id)?;
        debug!("#{} text: {}", id, text);
        Ok(())
    }

    fn set_inner_html(&self, id: &str, html: &str) -> Result<(), PortalError> {
        self.ensure(id)?;
        debug!("#{} markup replaced ({} bytes)", id, html.len());
        self.lock().html.insert(id.to_string(), html.to_string());
        Ok(())
    }

    fn form_fields(&self, form_id: &str) -> Result<Vec<(String, String)>, PortalError> {
        let state = self.lock();
        let names = state
            .forms
            .get(form_id)
            .ok_or_else(|| PortalError::MissingElement(form_id.to_string()))?;

        Ok(names
            .iter()
            .map(|name| (name.clone(), state.values.get(name).cloned().unwrap_or_default()))
            .collect())
    }

    fn reset_form(&self, form_id: &str) -> Result<(), PortalError> {
        let mut state = self.lock();
        let names = state
            .forms
            .get(form_id)
            .cloned()
            .ok_or_else(|| PortalError::MissingElement(form_id.to_string()))?;
        for name in names {
            state.values.insert(name, String::new());
        }
        Ok(())
    }

    fn show_modal(&self, id: &str) -> Result<(), PortalError> {
        self.ensure(id)?;
        debug!("Showing #{}", id);
        Ok(())
    }

    fn hide_modal(&self, id: &str) -> Result<(), PortalError> {
        self.ensure(id)?;
        debug!("Hiding #{}", id);
        Ok(())
    }

    fn alert(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn reload(&self) {
        info!("Page reload requested");
    }

    fn dismiss_alerts(&self) -> usize {
        0
    }
}
