//! Local SQLite-backed store, used by the CLI host when no remote backend
//! is configured. Receipt files are written under a receipts directory and
//! referenced by `file://` URLs.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use tracing::debug;
use uuid::Uuid;

use super::{BillStore, DraftReceipt, ReceiptUpload, StoreError};
use crate::models::{Bill, BillDraft, BillStatus};

pub struct SqliteStore {
    pool: SqlitePool,
    receipts_dir: PathBuf,
}

impl SqliteStore {
    pub async fn new(database_path: &str, receipts_dir: &Path) -> Result<Self, StoreError> {
        if !Path::new(database_path).exists() {
            std::fs::File::create(database_path)?;
        }
        std::fs::create_dir_all(receipts_dir)?;

        let database_url = format!("sqlite://{}", database_path);
        let pool = SqlitePool::connect(&database_url).await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS bills (
                id TEXT PRIMARY KEY,
                email TEXT,
                type TEXT,
                name TEXT,
                amount REAL,
                date TEXT NOT NULL,
                vat TEXT,
                pct INTEGER,
                commentary TEXT,
                file_url TEXT,
                file_name TEXT,
                status TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_bills_email ON bills(email);
            CREATE INDEX IF NOT EXISTS idx_bills_date ON bills(date);
            CREATE INDEX IF NOT EXISTS idx_bills_status ON bills(status);
            "#,
        )
        .execute(&pool)
        .await?;

        Ok(SqliteStore {
            pool,
            receipts_dir: receipts_dir.to_path_buf(),
        })
    }

    async fn fetch_bill(&self, id: &str) -> Result<Bill, StoreError> {
        let row = sqlx::query("SELECT * FROM bills WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        bill_from_row(&row)
    }
}

#[async_trait]
impl BillStore for SqliteStore {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        let rows = sqlx::query("SELECT * FROM bills ORDER BY date DESC")
            .fetch_all(&self.pool)
            .await?;

        let mut bills = Vec::with_capacity(rows.len());
        for row in rows {
            bills.push(bill_from_row(&row)?);
        }
        Ok(bills)
    }

    async fn create(&self, upload: ReceiptUpload) -> Result<DraftReceipt, StoreError> {
        let id = Uuid::new_v4().to_string();
        let receipt_path = self.receipts_dir.join(format!("{}-{}", id, upload.file_name));
        std::fs::write(&receipt_path, &upload.content)?;
        let file_url = format!("file://{}", receipt_path.display());
        debug!("stored receipt at {}", receipt_path.display());

        // The remaining expense fields arrive with the update call; until
        // then the row holds an empty date, which the list view degrades on.
        sqlx::query(
            r#"
            INSERT INTO bills (id, email, date, file_url, file_name, status)
            VALUES (?, ?, '', ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&upload.email)
        .bind(&file_url)
        .bind(&upload.file_name)
        .bind(BillStatus::Pending.as_str())
        .execute(&self.pool)
        .await?;

        Ok(DraftReceipt {
            id,
            file_url,
            file_name: upload.file_name,
        })
    }

    async fn update(&self, id: Option<&str>, draft: &BillDraft) -> Result<Bill, StoreError> {
        let id = id.ok_or_else(|| StoreError::Rejected("missing bill selector".to_string()))?;

        let result = sqlx::query(
            r#"
            UPDATE bills
            SET email = ?, type = ?, name = ?, amount = ?, date = ?, vat = ?,
                pct = ?, commentary = ?, file_url = ?, file_name = ?, status = ?
            WHERE id = ?
            "#,
        )
        .bind(&draft.email)
        .bind(&draft.bill_type)
        .bind(&draft.name)
        .bind(draft.amount)
        .bind(&draft.date)
        .bind(&draft.vat)
        .bind(draft.pct)
        .bind(&draft.commentary)
        .bind(&draft.file_url)
        .bind(&draft.file_name)
        .bind(&draft.status)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        self.fetch_bill(id).await
    }
}

fn bill_from_row(row: &SqliteRow) -> Result<Bill, StoreError> {
    Ok(Bill {
        id: row.try_get("id")?,
        email: row.try_get("email")?,
        bill_type: row.try_get("type")?,
        name: row.try_get("name")?,
        amount: row.try_get("amount")?,
        date: row.try_get("date")?,
        vat: row.try_get("vat")?,
        pct: row.try_get::<Option<i64>, _>("pct")?.map(|p| p as u32),
        commentary: row.try_get("commentary")?,
        file_url: row.try_get("file_url")?,
        file_name: row.try_get("file_name")?,
        status: row.try_get("status")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn open_store(dir: &Path) -> SqliteStore {
        let db_path = dir.join("billflow.db");
        SqliteStore::new(db_path.to_str().unwrap(), &dir.join("receipts"))
            .await
            .unwrap()
    }

    fn sample_upload() -> ReceiptUpload {
        ReceiptUpload {
            email: "test@test.com".to_string(),
            file_name: "facture.jpg".to_string(),
            content: b"jpeg bytes".to_vec(),
        }
    }

    fn sample_draft(file: &DraftReceipt) -> BillDraft {
        BillDraft {
            email: "test@test.com".to_string(),
            bill_type: "Transports".to_string(),
            name: "Vol Paris Londres".to_string(),
            amount: 348.0,
            date: "2021-11-22".to_string(),
            vat: "70".to_string(),
            pct: 20,
            commentary: String::new(),
            file_url: Some(file.file_url.clone()),
            file_name: Some(file.file_name.clone()),
            status: "pending".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_writes_receipt_and_draft_row() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(dir.path()).await;

        let receipt = store.create(sample_upload()).await.unwrap();
        assert!(!receipt.id.is_empty());
        assert!(receipt.file_url.starts_with("file://"));
        assert_eq!(receipt.file_name, "facture.jpg");

        let bills = store.list().await.unwrap();
        assert_eq!(bills.len(), 1);
        assert_eq!(bills[0].status, "pending");
        assert_eq!(bills[0].email.as_deref(), Some("test@test.com"));
    }

    #[tokio::test]
    async fn test_update_finalizes_draft() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(dir.path()).await;

        let receipt = store.create(sample_upload()).await.unwrap();
        let bill = store
            .update(Some(&receipt.id), &sample_draft(&receipt))
            .await
            .unwrap();

        assert_eq!(bill.id, receipt.id);
        assert_eq!(bill.name.as_deref(), Some("Vol Paris Londres"));
        assert_eq!(bill.amount, Some(348.0));
        assert_eq!(bill.date, "2021-11-22");
        assert_eq!(bill.pct, Some(20));
    }

    #[tokio::test]
    async fn test_update_without_selector_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(dir.path()).await;

        let receipt = store.create(sample_upload()).await.unwrap();
        let err = store.update(None, &sample_draft(&receipt)).await.unwrap_err();
        assert!(matches!(err, StoreError::Rejected(_)));
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(dir.path()).await;

        let receipt = store.create(sample_upload()).await.unwrap();
        let err = store
            .update(Some("nope"), &sample_draft(&receipt))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }
}
