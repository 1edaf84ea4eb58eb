//! Business operations over employees.
//!
//! The service is stateless: it holds a shared store, an HTTP client and the
//! base URL of the external source. Reads go straight to the store; the sync
//! pulls the full list from the source and upserts it in one transaction.

use crate::store::EmployeeStore;
use crate::sync::EmployeeEnvelope;
use crate::{ServiceError, ServiceResult};

use emp_core::Employee;

use std::sync::Arc;

use log::{debug, error, info, warn};

pub struct EmployeeService<S> {
    store: Arc<S>,
    http: reqwest::Client,
    base_url: String,
}

impl<S> Clone for EmployeeService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            http: self.http.clone(),
            base_url: self.base_url.clone(),
        }
    }
}

impl<S: EmployeeStore> EmployeeService<S> {
    pub fn new(store: Arc<S>, http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            store,
            http,
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn employees_url(&self) -> String {
        format!("{}/employees", self.base_url)
    }

    pub async fn list_employees(&self) -> ServiceResult<Vec<Employee>> {
        self.store.find_all().await.map_err(|e| {
            error!("Listing employees failed: {e}");
            ServiceError::retrieval("Failed to list employees from storage", e)
        })
    }

    pub async fn get_employee_by_id(&self, id: i64) -> ServiceResult<Employee> {
        debug!("Looking up employee {id}");

        let found = self.store.find_by_id(id).await.map_err(|e| {
            error!("Looking up employee {id} failed: {e}");
            ServiceError::retrieval(format!("Failed to look up employee with ID {}", id), e)
        })?;

        found.ok_or_else(|| ServiceError::not_found(id))
    }

    /// `salary * 12` for the stored employee, unrounded.
    pub async fn compute_annual_salary(&self, id: i64) -> ServiceResult<f64> {
        let employee = self.get_employee_by_id(id).await?;

        employee
            .annual_salary()
            .map_err(|e| ServiceError::computation(id, e))
    }

    /// Pull every employee from the external source and upsert them.
    ///
    /// Returns the number of records written. An empty `data` list is a
    /// successful no-op; a missing one is an error and storage is not touched.
    pub async fn fetch_and_save_all_employees(&self) -> ServiceResult<usize> {
        let url = self.employees_url();
        info!("Fetching employees from {url}");

        let envelope = self.fetch_envelope(&url).await.inspect_err(|e| {
            error!("Fetching employees from {url} failed: {e}");
        })?;

        let Some(envelope) = envelope else {
            warn!("Response from {url} carried no envelope");
            return Err(ServiceError::no_source_data());
        };

        let Some(remote) = envelope.data else {
            warn!(
                "Response from {url} carried no employee data (status: {}, message: {})",
                envelope.status.as_deref().unwrap_or("none"),
                envelope.message.as_deref().unwrap_or("none")
            );
            return Err(ServiceError::no_source_data());
        };

        let employees: Vec<Employee> = remote.into_iter().map(Employee::from).collect();
        if employees.is_empty() {
            info!("Source returned an empty employee list, nothing to save");
            return Ok(0);
        }

        let saved = self.store.save_all(&employees).await.map_err(|e| {
            error!("Saving {} fetched employees failed: {e}", employees.len());
            ServiceError::persistence("Failed to save employees to database", e)
        })?;

        info!("Fetched and saved {} employees", saved.len());
        Ok(saved.len())
    }

    async fn fetch_envelope(&self, url: &str) -> ServiceResult<Option<EmployeeEnvelope>> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ServiceError::source_fetch("Failed to fetch employees from API", e))?;

        let response = response
            .error_for_status()
            .map_err(|e| ServiceError::source_fetch("Failed to fetch employees from API", e))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| ServiceError::source_fetch("Failed to read employees response", e))?;

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        serde_json::from_slice::<Option<EmployeeEnvelope>>(&body)
            .map_err(|e| ServiceError::source_fetch("Failed to decode employees response", e))
    }
}
