//! SurrealStore - CategoryStore Implementation for SurrealDB
//!
//! Categories live in a single SCHEMALESS `categories` table. Each record is
//! keyed by `categories:<uuid>` and also carries the UUID in a `uuid` field,
//! which is what every lookup filters on.
//!
//! # Engines
//!
//! - **RocksDB** (`SurrealStore::new`): embedded on-disk storage
//! - **Memory** (`SurrealStore::new_in_memory`): ephemeral, used by tests and
//!   the `memory` database setting of the server
//!
//! # Examples
//!
//! ```rust,no_run
//! use category_tree_core::db::{CategoryStore, SurrealStore};
//! use std::path::PathBuf;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = SurrealStore::new(PathBuf::from("./data/categories.db")).await?;
//!     let roots = store.get_children(None).await?;
//!     println!("{} root categories", roots.len());
//!     Ok(())
//! }
//! ```

use crate::db::{CategoryStore, DatabaseError};
use crate::models::{Category, DeleteResult};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use surrealdb::engine::local::{Db, Mem, RocksDb};
use surrealdb::Surreal;

const NAMESPACE: &str = "category_tree";
const DATABASE: &str = "categories";
const TABLE: &str = "categories";

/// Internal struct matching the stored record layout
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SurrealCategory {
    uuid: String,
    name: String,
    // Absent field (NONE) marks a root category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent_id: Option<String>,
    path: String,
    level: i64,
    created_at: String,
    modified_at: String,
}

/// Fixed-width RFC 3339 so that `ORDER BY created_at` sorts chronologically
fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

impl From<&Category> for SurrealCategory {
    fn from(category: &Category) -> Self {
        SurrealCategory {
            uuid: category.id.clone(),
            name: category.name.clone(),
            parent_id: category.parent_id.clone(),
            path: category.path.clone(),
            level: i64::from(category.level),
            created_at: format_timestamp(&category.created_at),
            modified_at: format_timestamp(&category.modified_at),
        }
    }
}

impl From<SurrealCategory> for Category {
    fn from(sc: SurrealCategory) -> Self {
        Category {
            id: sc.uuid,
            name: sc.name,
            parent_id: sc.parent_id,
            path: sc.path,
            level: u32::try_from(sc.level).unwrap_or(0),
            created_at: parse_timestamp(&sc.created_at),
            modified_at: parse_timestamp(&sc.modified_at),
        }
    }
}

/// SurrealStore implements CategoryStore for the embedded SurrealDB engines
#[derive(Clone)]
pub struct SurrealStore {
    /// SurrealDB connection (RocksDB or in-memory)
    db: Arc<Surreal<Db>>,
}

impl SurrealStore {
    /// Open (or create) an on-disk store backed by RocksDB
    ///
    /// The parent directory of `db_path` is created if missing.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created, RocksDB fails to open,
    /// or the schema cannot be defined.
    pub async fn new(db_path: PathBuf) -> Result<Self, DatabaseError> {
        if let Some(parent) = db_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let db = Surreal::new::<RocksDb>(db_path.clone())
            .await
            .map_err(|e| DatabaseError::connection_failed(db_path, e))?;

        Self::from_connection(db).await
    }

    /// Open an ephemeral in-memory store
    pub async fn new_in_memory() -> Result<Self, DatabaseError> {
        let db = Surreal::new::<Mem>(()).await?;
        Self::from_connection(db).await
    }

    async fn from_connection(db: Surreal<Db>) -> Result<Self, DatabaseError> {
        db.use_ns(NAMESPACE).use_db(DATABASE).await.map_err(|e| {
            DatabaseError::initialization_failed(format!(
                "Failed to set namespace/database: {}",
                e
            ))
        })?;

        Self::initialize_schema(&db).await?;

        tracing::debug!(namespace = NAMESPACE, database = DATABASE, "Category store ready");

        Ok(Self { db: Arc::new(db) })
    }

    /// Define the categories table and its lookup indexes
    async fn initialize_schema(db: &Surreal<Db>) -> Result<(), DatabaseError> {
        db.query(
            "
            DEFINE TABLE IF NOT EXISTS categories SCHEMALESS;
            DEFINE INDEX IF NOT EXISTS category_uuid ON TABLE categories FIELDS uuid UNIQUE;
            DEFINE INDEX IF NOT EXISTS category_parent ON TABLE categories FIELDS parent_id;
            ",
        )
        .await?
        .check()
        .map_err(|e| {
            DatabaseError::initialization_failed(format!("Failed to define categories table: {}", e))
        })?;

        Ok(())
    }

    async fn select(&self, query: &'static str, parent_id: Option<&str>) -> Result<Vec<Category>> {
        let mut query_builder = self.db.query(query);

        if let Some(parent_id) = parent_id {
            query_builder = query_builder.bind(("parent_id", parent_id.to_string()));
        }

        let mut response = query_builder.await.context("Failed to query categories")?;
        let records: Vec<SurrealCategory> = response
            .take(0)
            .context("Failed to extract categories from response")?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl CategoryStore for SurrealStore {
    async fn insert_category(&self, category: Category) -> Result<Category> {
        category.validate()?;

        self.db
            .query("CREATE type::thing($table, $id) CONTENT $record;")
            .bind(("table", TABLE))
            .bind(("id", category.id.clone()))
            .bind(("record", SurrealCategory::from(&category)))
            .await
            .context("Failed to create category")?
            .check()
            .with_context(|| format!("Failed to create category {}", category.id))?;

        // Return what a later read would see (timestamps at stored precision)
        Ok(SurrealCategory::from(&category).into())
    }

    async fn get_category(&self, id: &str) -> Result<Option<Category>> {
        let mut response = self
            .db
            .query("SELECT * FROM categories WHERE uuid = $uuid LIMIT 1;")
            .bind(("uuid", id.to_string()))
            .await
            .context("Failed to query category by UUID")?;

        let records: Vec<SurrealCategory> = response
            .take(0)
            .context("Failed to extract query results")?;

        Ok(records.into_iter().map(Into::into).next())
    }

    async fn update_category(&self, category: Category) -> Result<Category> {
        if self.get_category(&category.id).await?.is_none() {
            return Err(anyhow::anyhow!("Category not found: {}", category.id));
        }

        self.db
            .query("UPDATE categories CONTENT $record WHERE uuid = $uuid;")
            .bind(("uuid", category.id.clone()))
            .bind(("record", SurrealCategory::from(&category)))
            .await
            .context("Failed to update category")?
            .check()
            .with_context(|| format!("Failed to update category {}", category.id))?;

        self.get_category(&category.id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Category not found after update: {}", category.id))
    }

    async fn delete_category(&self, id: &str) -> Result<DeleteResult> {
        if self.get_category(id).await?.is_none() {
            return Ok(DeleteResult { existed: false });
        }

        self.db
            .query("DELETE FROM categories WHERE uuid = $uuid;")
            .bind(("uuid", id.to_string()))
            .await
            .context("Failed to delete category")?
            .check()
            .with_context(|| format!("Failed to delete category {}", id))?;

        Ok(DeleteResult { existed: true })
    }

    async fn get_children(&self, parent_id: Option<&str>) -> Result<Vec<Category>> {
        match parent_id {
            Some(parent_id) => {
                self.select(
                    "SELECT * FROM categories WHERE parent_id = $parent_id ORDER BY created_at ASC;",
                    Some(parent_id),
                )
                .await
            }
            // Absent field and explicit null both mark a root
            None => {
                self.select(
                    "SELECT * FROM categories WHERE parent_id IS NONE OR parent_id IS NULL ORDER BY created_at ASC;",
                    None,
                )
                .await
            }
        }
    }

    async fn get_all_categories(&self) -> Result<Vec<Category>> {
        self.select("SELECT * FROM categories ORDER BY created_at ASC;", None)
            .await
    }
}
