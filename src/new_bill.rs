//! New-bill form component: receipt validation and upload, then final
//! submission of the draft record.

use std::sync::Arc;

use tracing::debug;

use crate::diagnostics::{Diagnostics, Observation};
use crate::models::{BillDraft, BillFormValues, BillStatus};
use crate::session::User;
use crate::store::{BillStore, ReceiptUpload};
use crate::ui::{Alert, Navigator, Route};

/// Rejection message shown when the selected file is not an image the
/// backend accepts. Exact wording is part of the contract.
pub const UNSUPPORTED_FILE_MESSAGE: &str = "Seuls les fichiers PNG, JPG et JPEG sont acceptés.";

const ACCEPTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// A file picked in the host's file input.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub content: Vec<u8>,
}

pub struct NewBillForm {
    store: Arc<dyn BillStore>,
    navigator: Arc<dyn Navigator>,
    alert: Arc<dyn Alert>,
    diagnostics: Arc<dyn Diagnostics>,
    user: User,
    file_url: Option<String>,
    file_name: Option<String>,
    bill_id: Option<String>,
}

impl NewBillForm {
    pub fn new(
        store: Arc<dyn BillStore>,
        navigator: Arc<dyn Navigator>,
        alert: Arc<dyn Alert>,
        diagnostics: Arc<dyn Diagnostics>,
        user: User,
    ) -> Self {
        NewBillForm {
            store,
            navigator,
            alert,
            diagnostics,
            user,
            file_url: None,
            file_name: None,
            bill_id: None,
        }
    }

    pub fn file_url(&self) -> Option<&str> {
        self.file_url.as_deref()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn bill_id(&self) -> Option<&str> {
        self.bill_id.as_deref()
    }

    /// Handle a change of the form's file input.
    ///
    /// A cancelled selection is a no-op. An unsupported extension surfaces
    /// the fixed rejection message and never reaches the store. An accepted
    /// file is uploaded right away, creating a draft bill whose reference is
    /// kept for submission time; an upload failure is recorded as a
    /// diagnostic and leaves the state untouched.
    pub async fn on_file_selected(&mut self, selection: Option<SelectedFile>) {
        let Some(file) = selection else {
            return;
        };

        if !has_accepted_extension(&file.name) {
            self.alert.alert(UNSUPPORTED_FILE_MESSAGE);
            return;
        }

        let upload = ReceiptUpload {
            email: self.user.email.clone(),
            file_name: file.name,
            content: file.content,
        };
        match self.store.create(upload).await {
            Ok(receipt) => {
                debug!("created draft bill {}", receipt.id);
                self.bill_id = Some(receipt.id);
                self.file_url = Some(receipt.file_url);
                self.file_name = Some(receipt.file_name);
            }
            Err(error) => {
                self.diagnostics
                    .record(Observation::OperationError(error.to_string()));
            }
        }
    }

    /// Handle the form's submit event: finalize the draft bill with the
    /// collected field values, then navigate back to the list. A failed
    /// update is recorded as a diagnostic and the user stays on the form.
    pub async fn on_submit(&self, values: BillFormValues) {
        let draft = BillDraft {
            email: self.user.email.clone(),
            bill_type: values.bill_type,
            name: values.name,
            amount: values.amount,
            date: values.date,
            vat: values.vat,
            pct: values.pct,
            commentary: values.commentary,
            file_url: self.file_url.clone(),
            file_name: self.file_name.clone(),
            status: BillStatus::Pending.as_str().to_string(),
        };

        match self.store.update(self.bill_id.as_deref(), &draft).await {
            Ok(_) => self.navigator.navigate(Route::Bills),
            Err(error) => {
                self.diagnostics
                    .record(Observation::OperationError(error.to_string()));
            }
        }
    }
}

fn has_accepted_extension(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .map(|(_, extension)| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| extension.eq_ignore_ascii_case(accepted))
        })
        .unwrap_or(false)
}
