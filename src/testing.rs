//! Test support: a programmable mock store and recording collaborators.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::diagnostics::{Diagnostics, Observation};
use crate::models::{Bill, BillDraft};
use crate::store::{BillStore, DraftReceipt, ReceiptUpload, StoreError};
use crate::ui::{Alert, Navigator, ProofViewer, Route};

/// Minimal bill row, the shape the suite's fixtures use.
pub fn bill(id: &str, date: &str, status: &str) -> Bill {
    Bill {
        id: id.to_string(),
        email: None,
        bill_type: None,
        name: None,
        amount: None,
        date: date.to_string(),
        vat: None,
        pct: None,
        commentary: None,
        file_url: None,
        file_name: None,
        status: status.to_string(),
    }
}

pub fn receipt(id: &str, file_name: &str) -> DraftReceipt {
    DraftReceipt {
        id: id.to_string(),
        file_url: format!("https://example.test/{}", file_name),
        file_name: file_name.to_string(),
    }
}

#[derive(Default)]
pub struct MockStore {
    bills: Vec<Bill>,
    list_error: Option<String>,
    create_response: Option<DraftReceipt>,
    create_error: Option<String>,
    update_error: Option<String>,
    pub create_calls: AtomicUsize,
    pub update_calls: AtomicUsize,
    pub uploads: Mutex<Vec<ReceiptUpload>>,
    pub updates: Mutex<Vec<(Option<String>, BillDraft)>>,
}

impl MockStore {
    pub fn with_bills(bills: Vec<Bill>) -> Arc<Self> {
        Arc::new(MockStore {
            bills,
            ..Default::default()
        })
    }

    pub fn with_receipt(response: DraftReceipt) -> Arc<Self> {
        Arc::new(MockStore {
            create_response: Some(response),
            ..Default::default()
        })
    }

    pub fn failing_list(message: &str) -> Arc<Self> {
        Arc::new(MockStore {
            list_error: Some(message.to_string()),
            ..Default::default()
        })
    }

    pub fn failing_create(message: &str) -> Arc<Self> {
        Arc::new(MockStore {
            create_error: Some(message.to_string()),
            ..Default::default()
        })
    }

    pub fn failing_update(message: &str) -> Arc<Self> {
        Arc::new(MockStore {
            create_response: Some(receipt("draft-1", "facture.jpg")),
            update_error: Some(message.to_string()),
            ..Default::default()
        })
    }
}

#[async_trait]
impl BillStore for MockStore {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        match &self.list_error {
            Some(message) => Err(StoreError::Rejected(message.clone())),
            None => Ok(self.bills.clone()),
        }
    }

    async fn create(&self, upload: ReceiptUpload) -> Result<DraftReceipt, StoreError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.uploads.lock().unwrap().push(upload.clone());
        if let Some(message) = &self.create_error {
            return Err(StoreError::Rejected(message.clone()));
        }
        Ok(self
            .create_response
            .clone()
            .unwrap_or_else(|| receipt("draft-1", &upload.file_name)))
    }

    async fn update(&self, id: Option<&str>, draft: &BillDraft) -> Result<Bill, StoreError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.updates
            .lock()
            .unwrap()
            .push((id.map(str::to_string), draft.clone()));
        if let Some(message) = &self.update_error {
            return Err(StoreError::Rejected(message.clone()));
        }
        let mut updated = bill(id.unwrap_or("draft-1"), &draft.date, &draft.status);
        updated.email = Some(draft.email.clone());
        updated.file_url = draft.file_url.clone();
        updated.file_name = draft.file_name.clone();
        Ok(updated)
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub routes: Mutex<Vec<Route>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

#[derive(Default)]
pub struct RecordingViewer {
    pub shown: Mutex<Vec<String>>,
}

impl ProofViewer for RecordingViewer {
    fn show(&self, file_url: &str) {
        self.shown.lock().unwrap().push(file_url.to_string());
    }
}

#[derive(Default)]
pub struct RecordingAlert {
    pub messages: Mutex<Vec<String>>,
}

impl Alert for RecordingAlert {
    fn alert(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

#[derive(Default)]
pub struct RecordingDiagnostics {
    pub observations: Mutex<Vec<Observation>>,
}

impl RecordingDiagnostics {
    pub fn observations(&self) -> Vec<Observation> {
        self.observations.lock().unwrap().clone()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn record(&self, observation: Observation) {
        self.observations.lock().unwrap().push(observation);
    }
}
