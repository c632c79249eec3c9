use serde::{Deserialize, Serialize};

/// A bill record as stored by the backend. The record is owned by the
/// store; the client never caches it beyond the current page view.
///
/// `date` stays a raw string because the backend may hold values that do
/// not parse as calendar dates; display formatting degrades gracefully on
/// those rows instead of failing the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "type", default)]
    pub bill_type: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    pub date: String,
    #[serde(default)]
    pub vat: Option<String>,
    #[serde(default)]
    pub pct: Option<u32>,
    #[serde(default)]
    pub commentary: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillStatus {
    Pending,
    Accepted,
    Refused,
    Other(String),
}

impl BillStatus {
    pub fn from_wire(status: &str) -> Self {
        match status {
            "pending" => BillStatus::Pending,
            "accepted" => BillStatus::Accepted,
            "refused" => BillStatus::Refused,
            other => BillStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            BillStatus::Pending => "pending",
            BillStatus::Accepted => "accepted",
            BillStatus::Refused => "refused",
            BillStatus::Other(s) => s,
        }
    }

    /// Display label shown in the bill list. Unknown statuses pass through
    /// unchanged, which also makes label formatting idempotent.
    pub fn label(&self) -> &str {
        match self {
            BillStatus::Pending => "En attente",
            BillStatus::Accepted => "Accepté",
            // Historical label kept as-is; the suite pins it down.
            BillStatus::Refused => "Refused",
            BillStatus::Other(s) => s,
        }
    }
}

/// Body of the update call that finalizes a draft bill on form submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillDraft {
    pub email: String,
    #[serde(rename = "type")]
    pub bill_type: String,
    pub name: String,
    pub amount: f64,
    pub date: String,
    pub vat: String,
    pub pct: u32,
    pub commentary: String,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub status: String,
}

/// Field values collected from the new-bill form at submission time.
/// Amount and pct are numeric where the form exposes numeric inputs; all
/// other fields are carried as strings with no further validation here.
#[derive(Debug, Clone, PartialEq)]
pub struct BillFormValues {
    pub bill_type: String,
    pub name: String,
    pub amount: f64,
    pub date: String,
    pub vat: String,
    pub pct: u32,
    pub commentary: String,
}
