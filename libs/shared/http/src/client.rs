use reqwest::{
    Client,
    header::{HeaderMap, HeaderValue, ACCEPT, COOKIE},
    Method,
};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use shared_config::AppConfig;
use shared_models::error::PortalError;

/// Thin reqwest wrapper for the hospital server's page endpoints.
#[derive(Debug, Clone)]
pub struct HospitalClient {
    client: Client,
    base_url: String,
    session_cookie: Option<String>,
}

impl HospitalClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.hospital_base_url.trim_end_matches('/').to_string(),
            session_cookie: config.session_cookie.clone(),
        }
    }

    fn get_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(cookie) = &self.session_cookie {
            match HeaderValue::from_str(cookie) {
                Ok(value) => {
                    headers.insert(COOKIE, value);
                }
                Err(_) => warn!("Session cookie contains invalid header characters, not sending it"),
            }
        }

        headers
    }

    /// Sends a request and decodes the JSON body.
    ///
    /// The body is decoded whatever the status: the server reports rejections as
    /// JSON with 4xx codes and callers inspect the payload themselves.
    pub async fn request<T>(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, &str)]>,
        form: Option<&[(String, String)]>,
    ) -> Result<T, PortalError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making {} request to {}", method, url);

        let mut req = self.client.request(method, &url).headers(self.get_headers());

        if let Some(params) = query {
            req = req.query(params);
        }

        if let Some(fields) = form {
            req = req.form(fields);
        }

        let response = req
            .send()
            .await
            .map_err(|e| PortalError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Hospital server answered {} for {}", status, url);
        }

        let body = response
            .text()
            .await
            .map_err(|e| PortalError::Transport(e.to_string()))?;

        let data = serde_json::from_str::<T>(&body).inspect_err(|_| {
            debug!("Undecodable body from {} ({}): {}", url, status, body);
        })?;
        Ok(data)
    }

    pub async fn get_json<T>(&self, path: &str, query: &[(&str, &str)]) -> Result<T, PortalError>
    where
        T: DeserializeOwned,
    {
        self.request(Method::GET, path, Some(query), None).await
    }

    /// POSTs `fields` form-encoded, in order, exactly as given.
    pub async fn post_form<T>(&self, path: &str, fields: &[(String, String)]) -> Result<T, PortalError>
    where
        T: DeserializeOwned,
    {
        self.request(Method::POST, path, None, Some(fields)).await
    }

    pub fn get_base_url(&self) -> &str {
        &self.base_url
    }
}
