mod conversions;
pub mod entity;
mod seed;

use anyhow::Result;
use carlot_api_types::{SaleRecord, SaleRecordForm};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectOptions, ConnectionTrait, Database,
    DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Schema,
};
use thiserror::Error;
use tracing::info;

use crate::entity::sale;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("sale record {0} not found")]
    RecordNotFound(i32),
    #[error("db error {0}")]
    Db(#[from] DbErr),
}

#[derive(Clone, Debug)]
pub struct SalesDb {
    db: DatabaseConnection,
}

impl SalesDb {
    /// Connects and creates the schema when it does not exist yet.
    pub async fn connect(url: &str) -> Result<Self> {
        let mut opt = ConnectOptions::new(url.to_string());
        // sqlite allows one writer at a time; a single pooled connection also
        // keeps in-memory databases coherent across calls
        opt.max_connections(1);
        let db = Database::connect(opt).await?;
        let this = Self { db };
        this.create_schema().await?;
        info!("sales db connected");
        Ok(this)
    }

    async fn create_schema(&self) -> Result<(), DbError> {
        let backend = self.db.get_database_backend();
        let schema = Schema::new(backend);
        let mut table = schema.create_table_from_entity(sale::Entity);
        table.if_not_exists();
        self.db.execute(backend.build(&table)).await?;
        Ok(())
    }

    pub async fn insert_sale(&self, form: SaleRecordForm) -> Result<SaleRecord, DbError> {
        let model = conversions::form_to_active_model(form)
            .insert(&self.db)
            .await?;
        Ok(model.into())
    }

    pub async fn get_sale(&self, id: i32) -> Result<SaleRecord, DbError> {
        let model = sale::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DbError::RecordNotFound(id))?;
        Ok(model.into())
    }

    /// Replaces every field of the stored record with the form's values.
    pub async fn update_sale(&self, id: i32, form: SaleRecordForm) -> Result<SaleRecord, DbError> {
        let mut active = conversions::form_to_active_model(form);
        active.id = Set(id);
        match active.update(&self.db).await {
            Ok(model) => Ok(model.into()),
            Err(DbErr::RecordNotUpdated) => Err(DbError::RecordNotFound(id)),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn delete_sale(&self, id: i32) -> Result<(), DbError> {
        let result = sale::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(DbError::RecordNotFound(id));
        }
        Ok(())
    }

    /// Full unfiltered scan. Reports always aggregate over the complete
    /// dataset at call time; this is a snapshot read and concurrent writes
    /// may or may not be reflected.
    pub async fn all_sales(&self) -> Result<Vec<SaleRecord>, DbError> {
        let rows = sale::Entity::find().all(&self.db).await?;
        Ok(rows.into_iter().map(SaleRecord::from).collect())
    }

    pub async fn sale_count(&self) -> Result<u64, DbError> {
        Ok(sale::Entity::find().count(&self.db).await?)
    }
}
