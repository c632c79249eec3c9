//! Bill list component: fetch, format and order the user's bills.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::diagnostics::{Diagnostics, Observation};
use crate::error::Error;
use crate::format;
use crate::models::Bill;
use crate::store::BillStore;
use crate::ui::{Navigator, ProofViewer, Route};

pub struct BillsList {
    store: Option<Arc<dyn BillStore>>,
    navigator: Arc<dyn Navigator>,
    viewer: Arc<dyn ProofViewer>,
    diagnostics: Arc<dyn Diagnostics>,
}

impl BillsList {
    /// The store is optional: without one the component runs in offline/demo
    /// mode and `fetch_all` resolves to no result instead of erroring.
    pub fn new(
        store: Option<Arc<dyn BillStore>>,
        navigator: Arc<dyn Navigator>,
        viewer: Arc<dyn ProofViewer>,
        diagnostics: Arc<dyn Diagnostics>,
    ) -> Self {
        BillsList {
            store,
            navigator,
            viewer,
            diagnostics,
        }
    }

    /// Fetch the user's bills and format them for display, most recent
    /// first.
    ///
    /// A store rejection propagates to the caller unchanged. A row whose
    /// date does not parse is still emitted with its raw date preserved and
    /// its status formatted; the failure is reported as a diagnostic paired
    /// with the raw row.
    pub async fn fetch_all(&self) -> Result<Option<Vec<Bill>>, Error> {
        let Some(store) = &self.store else {
            debug!("no store configured, skipping fetch");
            return Ok(None);
        };

        let bills = store.list().await?;
        self.diagnostics.record(Observation::ListLength(bills.len()));

        let mut rows: Vec<(Option<NaiveDate>, Bill)> = Vec::with_capacity(bills.len());
        for mut bill in bills {
            let parsed = match format::parse_date(&bill.date) {
                Ok(date) => {
                    bill.date = format::display_date(date);
                    Some(date)
                }
                Err(error) => {
                    // Best-effort row: keep the raw date and move on.
                    self.diagnostics.record(Observation::RowFormat {
                        error: error.to_string(),
                        row: bill.clone(),
                    });
                    None
                }
            };
            bill.status = format::format_status(&bill.status);
            rows.push((parsed, bill));
        }

        // Stable sort keeps ties in arrival order; rows without a parseable
        // date sort last.
        rows.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(Some(rows.into_iter().map(|(_, bill)| bill).collect()))
    }

    /// Show the receipt image referenced by a list row's eye icon.
    pub fn handle_click_icon_eye(&self, file_url: &str) {
        self.viewer.show(file_url);
    }

    /// Navigate to the new-bill form.
    pub fn handle_click_new_bill(&self) {
        self.navigator.navigate(Route::NewBill);
    }
}
