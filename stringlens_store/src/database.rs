//! Database-backed record store.
//!
//! The identifier is the table's primary key, so the database enforces
//! insert-if-absent even when two requests race past the existence check.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ColumnTrait, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Schema, SqlErr,
};
use stringlens_core::store::Predicate;
use stringlens_core::{Analysis, AnalyzedRecord, Error, RecordStore, Result};
use stringlens_entities::analyzed_strings;
use tracing::info;

use crate::convert;

fn storage(err: DbErr) -> Error {
    Error::Storage(err.into())
}

pub struct DatabaseStore {
    db: DatabaseConnection,
}

impl DatabaseStore {
    /// Connect to `database_url` and make sure the table exists.
    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        info!("Connecting to database for DatabaseStore");
        let db = Database::connect(database_url).await?;
        Self::with_connection(db).await
    }

    /// Wrap an existing connection, creating the table if needed.
    pub async fn with_connection(db: DatabaseConnection) -> anyhow::Result<Self> {
        let backend = db.get_database_backend();
        let schema = Schema::new(backend);
        let mut stmt = schema.create_table_from_entity(analyzed_strings::Entity);
        stmt.if_not_exists();
        db.execute_unprepared(&backend.build(&stmt).to_string()).await?;

        info!("DatabaseStore initialized");
        Ok(Self { db })
    }

    #[must_use]
    pub const fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    async fn find_by_value(&self, value: &str) -> Result<Option<analyzed_strings::Model>> {
        analyzed_strings::Entity::find()
            .filter(analyzed_strings::Column::Value.eq(value))
            .one(&self.db)
            .await
            .map_err(storage)
    }
}

#[async_trait]
impl RecordStore for DatabaseStore {
    async fn insert_if_absent(&self, analysis: Analysis) -> Result<AnalyzedRecord> {
        let existing = analyzed_strings::Entity::find_by_id(analysis.id.clone())
            .one(&self.db)
            .await
            .map_err(storage)?;
        if existing.is_some() {
            return Err(Error::Duplicate);
        }

        let record = AnalyzedRecord::new(analysis, Utc::now());
        let model = convert::active_model_from_record(&record)?;

        match analyzed_strings::Entity::insert(model)
            .exec_without_returning(&self.db)
            .await
        {
            Ok(_) => {}
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                return Err(Error::Duplicate);
            }
            Err(e) => return Err(storage(e)),
        }

        info!("Stored string: {}", record.id);
        Ok(record)
    }

    async fn get_by_value(&self, value: &str) -> Result<AnalyzedRecord> {
        let model = self.find_by_value(value).await?.ok_or(Error::NotFound)?;
        Ok(convert::record_from_model(model)?)
    }

    async fn delete_by_value(&self, value: &str) -> Result<()> {
        let result = analyzed_strings::Entity::delete_many()
            .filter(analyzed_strings::Column::Value.eq(value))
            .exec(&self.db)
            .await
            .map_err(storage)?;
        if result.rows_affected == 0 {
            return Err(Error::NotFound);
        }

        info!("Deleted string: {}", value);
        Ok(())
    }

    async fn scan(&self, predicate: Predicate<'_>) -> Result<Vec<AnalyzedRecord>> {
        let models = analyzed_strings::Entity::find()
            .order_by_asc(analyzed_strings::Column::CreatedAt)
            .order_by_asc(analyzed_strings::Column::Id)
            .all(&self.db)
            .await
            .map_err(storage)?;

        let mut records = Vec::with_capacity(models.len());
        for model in models {
            let record = convert::record_from_model(model)?;
            if predicate(&record) {
                records.push(record);
            }
        }
        Ok(records)
    }

    async fn count(&self) -> Result<usize> {
        let count = analyzed_strings::Entity::find()
            .count(&self.db)
            .await
            .map_err(storage)?;
        Ok(usize::try_from(count).map_err(anyhow::Error::from)?)
    }
}
