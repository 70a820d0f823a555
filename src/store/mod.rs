use log::{debug, info};
use reqwest::{Client, Response};
use serde::Deserialize;

use crate::config::Config;
use crate::errors::{AppError, Operation};
use crate::models::employee::Employee;

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// HTTP client for the remote employee service. Holds the most recent
/// successfully fetched list.
#[derive(Debug)]
pub struct EmployeeStore {
    client: Client,
    config: Config,
    records: Vec<Employee>,
}

impl EmployeeStore {
    pub fn new(config: Config) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(AppError::Client)?;

        Ok(Self {
            client,
            config,
            records: Vec::new(),
        })
    }

    pub fn records(&self) -> &[Employee] {
        &self.records
    }

    pub fn find(&self, id: i64) -> Option<&Employee> {
        self.records.iter().find(|employee| employee.id == id)
    }

    /// Replaces the local list with the service's. On failure the previous
    /// list is kept.
    pub async fn list(&mut self) -> Result<&[Employee], AppError> {
        let url = self.config.endpoint(None);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(AppError::transport(Operation::Fetch))?;
        let response = check(Operation::Fetch, response).await?;
        let records: Vec<Employee> = response
            .json()
            .await
            .map_err(AppError::transport(Operation::Fetch))?;

        info!("Loaded {} employees", records.len());
        self.records = records;
        Ok(&self.records)
    }

    pub async fn create(&self, draft: &Employee) -> Result<(), AppError> {
        let url = self.config.endpoint(None);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(draft)
            .send()
            .await
            .map_err(AppError::transport(Operation::Save))?;
        check(Operation::Save, response).await?;

        info!("Created employee {}", draft.employee_number);
        Ok(())
    }

    pub async fn update(&self, draft: &Employee) -> Result<(), AppError> {
        let url = self.config.endpoint(Some(draft.id));
        debug!("PUT {}", url);

        let response = self
            .client
            .put(&url)
            .json(draft)
            .send()
            .await
            .map_err(AppError::transport(Operation::Save))?;
        check(Operation::Save, response).await?;

        info!("Updated employee {}", draft.id);
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let url = self.config.endpoint(Some(id));
        debug!("DELETE {}", url);

        let response = self
            .client
            .delete(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(AppError::transport(Operation::Delete))?;
        check(Operation::Delete, response).await?;

        info!("Deleted employee {}", id);
        Ok(())
    }
}

/// Identifier precondition for delete: present, not blank, a non-zero integer.
pub fn parse_employee_id(raw: Option<&str>) -> Result<i64, AppError> {
    let raw = raw.map(str::trim).filter(|raw| !raw.is_empty());
    match raw.map(str::parse::<i64>) {
        Some(Ok(id)) if id != 0 => Ok(id),
        _ => Err(AppError::InvalidId),
    }
}

async fn check(op: Operation, response: Response) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = rejection_message(&body).unwrap_or_else(|| op.fallback_message().to_string());
    Err(AppError::Rejected {
        op,
        status,
        message,
    })
}

fn rejection_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()?
        .message
        .filter(|message| !message.trim().is_empty())
}
