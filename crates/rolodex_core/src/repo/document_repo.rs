//! Document repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Persist any `Document` as a JSON body in the `documents` table.
//! - Scope reads to one user's partition when callers ask for owned data.
//!
//! # Invariants
//! - Write paths call `Document::validate()` before SQL mutations.
//! - Read paths reject bodies that fail to decode or whose `_id` disagrees
//!   with the row key, instead of masking them.
//! - `replace` never moves a document to another owner's partition.
//! - Listing order is insertion order (`created_at`, then `rowid`).

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::document::Document;
use crate::model::ids::UserId;
use crate::model::validation::ValidationError;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

const DOCUMENTS_TABLE: &str = "documents";
const DOCUMENT_COLUMNS: [&str; 6] = [
    "collection",
    "id",
    "owner",
    "body",
    "created_at",
    "updated_at",
];

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for document persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// Document failed write-path validation.
    Validation(ValidationError),
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// Document body could not be encoded or decoded.
    Codec(serde_json::Error),
    /// No document with this id in the collection (or the caller's partition).
    NotFound { collection: &'static str, id: String },
    /// Insert hit an existing id in the same collection.
    AlreadyExists { collection: &'static str, id: String },
    /// Replace attempted to change the stored owner.
    OwnerMismatch { collection: &'static str, id: String },
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Required column is missing from expected table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
    /// Persisted row cannot be converted to a valid document.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Codec(err) => write!(f, "document codec error: {err}"),
            Self::NotFound { collection, id } => write!(f, "{collection} document not found: {id}"),
            Self::AlreadyExists { collection, id } => {
                write!(f, "{collection} document already exists: {id}")
            }
            Self::OwnerMismatch { collection, id } => {
                write!(f, "{collection} document {id} belongs to another owner")
            }
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "document repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "document repository requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "document repository requires column `{column}` in table `{table}`"
            ),
            Self::InvalidData(message) => write!(f, "invalid persisted document: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Codec(err) => Some(err),
            Self::NotFound { .. }
            | Self::AlreadyExists { .. }
            | Self::OwnerMismatch { .. }
            | Self::UninitializedConnection { .. }
            | Self::MissingRequiredTable(_)
            | Self::MissingRequiredColumn { .. }
            | Self::InvalidData(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(value.into())
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Codec(value)
    }
}

/// Pagination options for owned listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub limit: Option<u32>,
    pub offset: u32,
}

/// Repository interface over document collections.
pub trait DocumentRepository {
    /// Stores a new document. Fails with `AlreadyExists` on id collision.
    fn insert<D: Document>(&self, doc: &D) -> RepoResult<()>;
    /// Overwrites an existing document within the same owner partition.
    fn replace<D: Document>(&self, doc: &D) -> RepoResult<()>;
    /// Loads a document by id regardless of owner.
    fn get<D: Document>(&self, id: &str) -> RepoResult<Option<D>>;
    /// Loads a document by id only if it belongs to `owner`.
    fn get_owned<D: Document>(&self, owner: &UserId, id: &str) -> RepoResult<Option<D>>;
    /// Lists `owner`'s documents in insertion order.
    fn list_owned<D: Document>(&self, owner: &UserId, query: &ListQuery) -> RepoResult<Vec<D>>;
    /// Deletes a document by id.
    fn delete<D: Document>(&self, id: &str) -> RepoResult<()>;
}

/// SQLite-backed document repository.
pub struct SqliteDocumentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDocumentRepository<'conn> {
    /// Wraps a connection after checking it was opened through `db::open_db*`.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_document_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl DocumentRepository for SqliteDocumentRepository<'_> {
    fn insert<D: Document>(&self, doc: &D) -> RepoResult<()> {
        doc.validate()?;
        let body = serde_json::to_string(doc)?;

        let result = self.conn.execute(
            "INSERT INTO documents (collection, id, owner, body)
             VALUES (?1, ?2, ?3, ?4);",
            params![D::COLLECTION, doc.id(), doc.owner().map(UserId::as_str), body],
        );

        match result.map_err(DbError::from) {
            Ok(_) => Ok(()),
            Err(DbError::DuplicateKey) => Err(RepoError::AlreadyExists {
                collection: D::COLLECTION,
                id: doc.id().to_string(),
            }),
            Err(err) => Err(err.into()),
        }
    }

    fn replace<D: Document>(&self, doc: &D) -> RepoResult<()> {
        doc.validate()?;
        let body = serde_json::to_string(doc)?;

        let changed = self.conn.execute(
            "UPDATE documents
             SET
                body = ?1,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE collection = ?2 AND id = ?3 AND owner IS ?4;",
            params![body, D::COLLECTION, doc.id(), doc.owner().map(UserId::as_str)],
        )?;
        if changed > 0 {
            return Ok(());
        }

        // Nothing written: tell a missing row apart from a foreign owner.
        let exists: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM documents WHERE collection = ?1 AND id = ?2);",
            params![D::COLLECTION, doc.id()],
            |row| row.get(0),
        )?;
        let collection = D::COLLECTION;
        let id = doc.id().to_string();
        if exists {
            Err(RepoError::OwnerMismatch { collection, id })
        } else {
            Err(RepoError::NotFound { collection, id })
        }
    }

    fn get<D: Document>(&self, id: &str) -> RepoResult<Option<D>> {
        let body: Option<String> = self
            .conn
            .query_row(
                "SELECT body FROM documents WHERE collection = ?1 AND id = ?2;",
                params![D::COLLECTION, id],
                |row| row.get(0),
            )
            .optional()?;

        body.map(|body| decode_document(id, &body)).transpose()
    }

    fn get_owned<D: Document>(&self, owner: &UserId, id: &str) -> RepoResult<Option<D>> {
        let body: Option<String> = self
            .conn
            .query_row(
                "SELECT body FROM documents
                 WHERE collection = ?1 AND id = ?2 AND owner = ?3;",
                params![D::COLLECTION, id, owner.as_str()],
                |row| row.get(0),
            )
            .optional()?;

        body.map(|body| decode_document(id, &body)).transpose()
    }

    fn list_owned<D: Document>(&self, owner: &UserId, query: &ListQuery) -> RepoResult<Vec<D>> {
        let mut sql = String::from(
            "SELECT id, body FROM documents
             WHERE collection = ? AND owner = ?
             ORDER BY created_at ASC, rowid ASC",
        );
        let mut bind_values: Vec<Value> = vec![
            Value::Text(D::COLLECTION.to_string()),
            Value::Text(owner.as_str().to_string()),
        ];

        if let Some(limit) = query.limit {
            sql.push_str(" LIMIT ?");
            bind_values.push(Value::Integer(i64::from(limit)));
            if query.offset > 0 {
                sql.push_str(" OFFSET ?");
                bind_values.push(Value::Integer(i64::from(query.offset)));
            }
        } else if query.offset > 0 {
            sql.push_str(" LIMIT -1 OFFSET ?");
            bind_values.push(Value::Integer(i64::from(query.offset)));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut docs = Vec::new();

        while let Some(row) = rows.next()? {
            let id: String = row.get(0)?;
            let body: String = row.get(1)?;
            docs.push(decode_document(&id, &body)?);
        }

        Ok(docs)
    }

    fn delete<D: Document>(&self, id: &str) -> RepoResult<()> {
        let changed = self.conn.execute(
            "DELETE FROM documents WHERE collection = ?1 AND id = ?2;",
            params![D::COLLECTION, id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                collection: D::COLLECTION,
                id: id.to_string(),
            });
        }

        Ok(())
    }
}

fn decode_document<D: Document>(row_id: &str, body: &str) -> RepoResult<D> {
    let doc: D = serde_json::from_str(body).map_err(|err| {
        RepoError::InvalidData(format!(
            "cannot decode {} document `{row_id}`: {err}",
            D::COLLECTION
        ))
    })?;

    if doc.id() != row_id {
        return Err(RepoError::InvalidData(format!(
            "{} row `{row_id}` holds a body with `_id` `{}`",
            D::COLLECTION,
            doc.id()
        )));
    }

    Ok(doc)
}

fn ensure_document_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, DOCUMENTS_TABLE)? {
        return Err(RepoError::MissingRequiredTable(DOCUMENTS_TABLE));
    }

    for column in DOCUMENT_COLUMNS {
        if !table_has_column(conn, DOCUMENTS_TABLE, column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: DOCUMENTS_TABLE,
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
