use crate::{CliClientResult, ClientError};

use reqwest::{Client as ReqwestClient, Method};
use serde_json::Value;

/// HTTP client for the emp-server REST API
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8080")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Send the request and return the body text of a 2xx response.
    ///
    /// Error bodies are plain text and become `ClientError::Api`.
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<String> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::api_error(status.as_u16(), body));
        }

        Ok(body)
    }

    async fn execute_json(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let body = self.execute(req).await?;
        Ok(serde_json::from_str(&body)?)
    }

    // =========================================================================
    // Employee Operations
    // =========================================================================

    /// List all stored employees
    pub async fn list_employees(&self) -> CliClientResult<Value> {
        let req = self.request(Method::GET, "/employees");
        self.execute_json(req).await
    }

    /// Get an employee by ID
    pub async fn get_employee(&self, id: i64) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &format!("/employees/{}", id));
        self.execute_json(req).await
    }

    /// Annual salary of an employee
    pub async fn get_annual_salary(&self, id: i64) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &format!("/employees/annual-salary/{}", id));
        self.execute_json(req).await
    }

    /// Trigger a sync from the external API; returns the server's message
    pub async fn fetch_employees(&self) -> CliClientResult<Value> {
        let req = self.request(Method::POST, "/employees/fetch");
        let message = self.execute(req).await?;
        Ok(Value::String(message))
    }
}
