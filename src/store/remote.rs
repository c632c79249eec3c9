//! HTTP-backed store talking to the bill backend API.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::debug;

use super::{BillStore, DraftReceipt, ReceiptUpload, StoreError};
use crate::config::HttpConfig;
use crate::models::{Bill, BillDraft};

/// Resource path for the bills collection, relative to the API base URL.
const BILLS_ENDPOINT: &str = "bills";

pub struct RemoteStore {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl RemoteStore {
    pub fn new(
        base_url: impl Into<String>,
        token: Option<String>,
        http: &HttpConfig,
    ) -> Result<Self, StoreError> {
        let client = Client::builder()
            .user_agent(&http.user_agent)
            .timeout(http.timeout())
            .build()?;

        Ok(RemoteStore {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        })
    }

    fn bills_url(&self, id: Option<&str>) -> String {
        match id {
            Some(id) => format!("{}/{}/{}", self.base_url, BILLS_ENDPOINT, id),
            None => format!("{}/{}", self.base_url, BILLS_ENDPOINT),
        }
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

/// Map a non-success HTTP status to the rejection message the client
/// surfaces, e.g. `Erreur 404`.
fn status_error(status: reqwest::StatusCode) -> StoreError {
    StoreError::Rejected(format!("Erreur {}", status.as_u16()))
}

#[async_trait]
impl BillStore for RemoteStore {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        let response = self
            .authorize(self.client.get(self.bills_url(None)))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(status_error(response.status()));
        }
        Ok(response.json().await?)
    }

    async fn create(&self, upload: ReceiptUpload) -> Result<DraftReceipt, StoreError> {
        debug!("uploading receipt {}", upload.file_name);
        let form = Form::new()
            .text("email", upload.email)
            .part("file", Part::bytes(upload.content).file_name(upload.file_name));

        let response = self
            .authorize(self.client.post(self.bills_url(None)))
            .multipart(form)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(status_error(response.status()));
        }
        Ok(response.json().await?)
    }

    async fn update(&self, id: Option<&str>, draft: &BillDraft) -> Result<Bill, StoreError> {
        let id = id.ok_or_else(|| StoreError::Rejected("missing bill selector".to_string()))?;

        let response = self
            .authorize(self.client.patch(self.bills_url(Some(id))))
            .json(draft)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(status_error(response.status()));
        }
        Ok(response.json().await?)
    }
}
