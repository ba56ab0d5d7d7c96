//! SQLite store backend.
//!
//! Persists enrollments in a single `enrollments` table. Timestamps are
//! stored as fixed-width RFC 3339 UTC strings (microsecond precision) so
//! lexicographic order matches chronological order, and email uniqueness
//! is enforced case-insensitively by the database itself.

use crate::error::{StoreError, StoreResult};
use crate::store::EnrollmentStore;
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use cohort_model::{normalize_email, Enrollment, NewEnrollment};
use cohort_types::EnrollmentId;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Enrollment store backed by a SQLite database file.
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Opens (or creates) the database at `path` and ensures the schema exists.
    pub fn open(path: &Path) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// Opens a throwaway in-memory database. Used by tests.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> StoreResult<Self> {
        init_schema(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}

fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS enrollments (
            id              TEXT PRIMARY KEY,
            name            TEXT NOT NULL,
            email           TEXT NOT NULL,
            phone           TEXT NOT NULL,
            education       TEXT,
            experience      TEXT,
            motivation      TEXT,
            kind            TEXT NOT NULL,
            plan            TEXT NOT NULL,
            transaction_id  TEXT,
            payment_status  TEXT NOT NULL,
            created_at      TEXT NOT NULL,
            updated_at      TEXT NOT NULL,
            source          TEXT,
            ip_address      TEXT,
            user_agent      TEXT
        );
        CREATE UNIQUE INDEX IF NOT EXISTS idx_enrollments_email
            ON enrollments (email COLLATE NOCASE);",
    )
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

fn encode_time(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Raw row as stored. Parsed into an [`Enrollment`] after the query so
/// `query_map` closures stay infallible on the rusqlite side.
struct RawRow {
    id: String,
    name: String,
    email: String,
    phone: String,
    education: Option<String>,
    experience: Option<String>,
    motivation: Option<String>,
    kind: String,
    plan: String,
    transaction_id: Option<String>,
    payment_status: String,
    created_at: String,
    updated_at: String,
    source: Option<String>,
    ip_address: Option<String>,
    user_agent: Option<String>,
}

impl RawRow {
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
            phone: row.get(3)?,
            education: row.get(4)?,
            experience: row.get(5)?,
            motivation: row.get(6)?,
            kind: row.get(7)?,
            plan: row.get(8)?,
            transaction_id: row.get(9)?,
            payment_status: row.get(10)?,
            created_at: row.get(11)?,
            updated_at: row.get(12)?,
            source: row.get(13)?,
            ip_address: row.get(14)?,
            user_agent: row.get(15)?,
        })
    }

    fn into_enrollment(self) -> StoreResult<Enrollment> {
        let id: EnrollmentId = self
            .id
            .parse()
            .map_err(|e| StoreError::InvalidData(format!("bad id: {e}")))?;
        let kind = self
            .kind
            .parse()
            .map_err(|e| StoreError::InvalidData(format!("bad kind: {e}")))?;
        let plan = self
            .plan
            .parse()
            .map_err(|e| StoreError::InvalidData(format!("bad plan: {e}")))?;
        let payment_status = self
            .payment_status
            .parse()
            .map_err(|e| StoreError::InvalidData(format!("bad payment status: {e}")))?;
        let created_at = parse_time(&self.created_at)?;
        let updated_at = parse_time(&self.updated_at)?;
        Ok(Enrollment {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            education: self.education,
            experience: self.experience,
            motivation: self.motivation,
            kind,
            plan,
            transaction_id: self.transaction_id,
            payment_status,
            created_at,
            updated_at,
            source: self.source,
            ip_address: self.ip_address,
            user_agent: self.user_agent,
        })
    }
}

fn parse_time(raw: &str) -> StoreResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| StoreError::InvalidData(format!("bad timestamp {raw:?}: {e}")))
}

const SELECT_COLUMNS: &str = "id, name, email, phone, education, experience, motivation, \
     kind, plan, transaction_id, payment_status, created_at, updated_at, \
     source, ip_address, user_agent";

fn query_by_email(conn: &Connection, email: &str) -> StoreResult<Option<Enrollment>> {
    let sql = format!(
        "SELECT {SELECT_COLUMNS} FROM enrollments WHERE email = ?1 COLLATE NOCASE"
    );
    let raw = conn
        .query_row(&sql, params![normalize_email(email)], RawRow::from_row)
        .optional()?;
    raw.map(RawRow::into_enrollment).transpose()
}

#[async_trait]
impl EnrollmentStore for SqliteStore {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn create(&self, new: NewEnrollment) -> StoreResult<Enrollment> {
        let record = Enrollment::create(new);
        let conn = self.conn.lock().unwrap();
        let inserted = conn.execute(
            "INSERT INTO enrollments
                (id, name, email, phone, education, experience, motivation,
                 kind, plan, transaction_id, payment_status, created_at,
                 updated_at, source, ip_address, user_agent)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)",
            params![
                record.id.to_string(),
                record.name,
                record.email,
                record.phone,
                record.education,
                record.experience,
                record.motivation,
                record.kind.to_string(),
                record.plan.to_string(),
                record.transaction_id,
                record.payment_status.to_string(),
                encode_time(record.created_at),
                encode_time(record.updated_at),
                record.source,
                record.ip_address,
                record.user_agent,
            ],
        );
        match inserted {
            Ok(_) => Ok(record),
            Err(e) if is_unique_violation(&e) => Err(StoreError::DuplicateEmail(record.email)),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Enrollment>> {
        let conn = self.conn.lock().unwrap();
        query_by_email(&conn, email)
    }

    async fn attach_transaction(
        &self,
        email: &str,
        transaction_id: &str,
    ) -> StoreResult<Enrollment> {
        let conn = self.conn.lock().unwrap();
        let changed = conn.execute(
            "UPDATE enrollments
                SET transaction_id = ?1, payment_status = 'completed', updated_at = ?2
              WHERE email = ?3 COLLATE NOCASE",
            params![
                transaction_id,
                encode_time(Utc::now()),
                normalize_email(email)
            ],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound(email.to_string()));
        }
        query_by_email(&conn, email)?.ok_or_else(|| StoreError::NotFound(email.to_string()))
    }

    async fn list_all(&self) -> StoreResult<Vec<Enrollment>> {
        let conn = self.conn.lock().unwrap();
        let sql = format!(
            "SELECT {SELECT_COLUMNS} FROM enrollments ORDER BY created_at DESC, id DESC"
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([], RawRow::from_row)?;
        let mut all = Vec::new();
        for raw in rows {
            all.push(raw?.into_enrollment()?);
        }
        Ok(all)
    }

    async fn clear_all(&self) -> StoreResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute("DELETE FROM enrollments", [])?;
        Ok(())
    }
}
