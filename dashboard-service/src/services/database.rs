//! Database service for dashboard-service.

use crate::models::{CreateInvoice, Invoice, ListInvoicesFilter, UpdateInvoice};
use crate::services::metrics::{DB_QUERY_DURATION, ERRORS_TOTAL};
use dashboard_core::error::AppError;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{info, instrument};
use uuid::Uuid;

fn db_error(context: &str, e: sqlx::Error) -> AppError {
    ERRORS_TOTAL.with_label_values(&["database"]).inc();
    AppError::DatabaseError(anyhow::anyhow!("{}: {}", context, e))
}

/// Database connection pool wrapper.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new database connection pool.
    #[instrument(skip(database_url), fields(service = "dashboard-service"))]
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, AppError> {
        info!(
            max_connections = max_connections,
            min_connections = min_connections,
            "Connecting to PostgreSQL"
        );

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .connect(database_url)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to connect: {}", e)))?;

        info!("PostgreSQL connection pool established");

        Ok(Self { pool })
    }

    /// Create a pool without establishing connections up front. Connections
    /// are opened on first use; queries against an unreachable server fail
    /// at call time instead of startup.
    pub fn connect_lazy(database_url: &str) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .connect_lazy(database_url)
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Invalid database URL: {}", e)))?;
        Ok(Self { pool })
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Check database health.
    #[instrument(skip(self))]
    pub async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Health check failed", e))?;
        Ok(())
    }

    /// Run database migrations.
    #[instrument(skip(self))]
    pub async fn run_migrations(&self) -> Result<(), AppError> {
        info!("Running database migrations");
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Migration failed: {}", e)))?;
        info!("Database migrations completed");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Invoice Operations
    // -------------------------------------------------------------------------

    /// Create a new invoice. The invoice date is the creation day.
    #[instrument(skip(self, input), fields(customer_id = %input.customer_id))]
    pub async fn create_invoice(&self, input: &CreateInvoice) -> Result<Invoice, AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["create_invoice"])
            .start_timer();

        let invoice_id = Uuid::new_v4();
        let date = chrono::Utc::now().date_naive();
        let invoice = sqlx::query_as::<_, Invoice>(
            r#"
            INSERT INTO invoices (invoice_id, customer_id, amount, status, date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING invoice_id, customer_id, amount, status, date, created_utc
            "#,
        )
        .bind(invoice_id)
        .bind(input.customer_id)
        .bind(input.amount)
        .bind(input.status.as_str())
        .bind(date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("Failed to create invoice", e))?;

        timer.observe_duration();

        info!(invoice_id = %invoice.invoice_id, status = %invoice.status, "Invoice created");

        Ok(invoice)
    }

    /// Get an invoice by ID.
    #[instrument(skip(self), fields(invoice_id = %invoice_id))]
    pub async fn get_invoice(&self, invoice_id: Uuid) -> Result<Option<Invoice>, AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["get_invoice"])
            .start_timer();

        let invoice = sqlx::query_as::<_, Invoice>(
            r#"
            SELECT invoice_id, customer_id, amount, status, date, created_utc
            FROM invoices
            WHERE invoice_id = $1
            "#,
        )
        .bind(invoice_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to get invoice", e))?;

        timer.observe_duration();

        Ok(invoice)
    }

    /// List invoices with optional status/customer filters, paged by id with
    /// a keyset cursor. Page order follows the id ordering, not recency.
    #[instrument(skip(self, filter))]
    pub async fn list_invoices(&self, filter: &ListInvoicesFilter) -> Result<Vec<Invoice>, AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["list_invoices"])
            .start_timer();

        let limit = filter.page_size.clamp(1, 100) as i64;
        let status = filter.status.map(|s| s.as_str().to_string());

        let invoices = if let Some(cursor) = filter.page_token {
            sqlx::query_as::<_, Invoice>(
                r#"
                SELECT invoice_id, customer_id, amount, status, date, created_utc
                FROM invoices
                WHERE ($1::text IS NULL OR status = $1)
                  AND ($2::uuid IS NULL OR customer_id = $2)
                  AND invoice_id > $3
                ORDER BY invoice_id
                LIMIT $4
                "#,
            )
            .bind(status)
            .bind(filter.customer_id)
            .bind(cursor)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
        } else {
            sqlx::query_as::<_, Invoice>(
                r#"
                SELECT invoice_id, customer_id, amount, status, date, created_utc
                FROM invoices
                WHERE ($1::text IS NULL OR status = $1)
                  AND ($2::uuid IS NULL OR customer_id = $2)
                ORDER BY invoice_id
                LIMIT $3
                "#,
            )
            .bind(status)
            .bind(filter.customer_id)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
        }
        .map_err(|e| db_error("Failed to list invoices", e))?;

        timer.observe_duration();

        Ok(invoices)
    }

    /// Update an invoice. Returns `None` when the id is unknown.
    #[instrument(skip(self, input), fields(invoice_id = %invoice_id))]
    pub async fn update_invoice(
        &self,
        invoice_id: Uuid,
        input: &UpdateInvoice,
    ) -> Result<Option<Invoice>, AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["update_invoice"])
            .start_timer();

        let invoice = sqlx::query_as::<_, Invoice>(
            r#"
            UPDATE invoices
            SET customer_id = $2, amount = $3, status = $4
            WHERE invoice_id = $1
            RETURNING invoice_id, customer_id, amount, status, date, created_utc
            "#,
        )
        .bind(invoice_id)
        .bind(input.customer_id)
        .bind(input.amount)
        .bind(input.status.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to update invoice", e))?;

        timer.observe_duration();

        if let Some(invoice) = &invoice {
            info!(invoice_id = %invoice.invoice_id, "Invoice updated");
        }

        Ok(invoice)
    }

    /// Delete an invoice. The existence check runs first so an unknown id is
    /// reported as not-found rather than as a silently successful delete.
    #[instrument(skip(self), fields(invoice_id = %invoice_id))]
    pub async fn delete_invoice(&self, invoice_id: Uuid) -> Result<(), AppError> {
        let timer = DB_QUERY_DURATION
            .with_label_values(&["delete_invoice"])
            .start_timer();

        let existing = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT invoice_id FROM invoices WHERE invoice_id = $1
            "#,
        )
        .bind(invoice_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("Failed to look up invoice", e))?;

        if existing.is_none() {
            return Err(AppError::NotFound(anyhow::anyhow!(
                "Invoice with ID {} not found",
                invoice_id
            )));
        }

        sqlx::query("DELETE FROM invoices WHERE invoice_id = $1")
            .bind(invoice_id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to delete invoice", e))?;

        timer.observe_duration();

        info!(invoice_id = %invoice_id, "Invoice deleted");

        Ok(())
    }
}
