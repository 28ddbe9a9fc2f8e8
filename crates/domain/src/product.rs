use async_trait::async_trait;
use sea_query::{Expr, Iden, Order, PostgresQueryBuilder, Query};
use sea_query_binder::{SqlxBinder, SqlxValues};
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

use crate::DomainError;

/// Schema definition for the products table
#[derive(Iden)]
pub enum Products {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

/// Product entity as stored
#[derive(Debug, Clone, FromRow, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Product as returned to clients
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProductDto {
    pub id: String,
    pub name: String,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        ProductDto {
            id: product.id,
            name: product.name,
        }
    }
}

/// Data access for products
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn create(&self, name: &str) -> Result<String, DomainError>;
    async fn list(&self) -> Result<Vec<ProductDto>, DomainError>;
    async fn update(&self, id: &str, name: &str) -> Result<(), DomainError>;
    async fn delete(&self, id: &str) -> Result<(), DomainError>;
}

/// PostgreSQL-backed product store
#[derive(Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run an update or delete keyed on `id`, reporting zero affected rows as `NotFound`
    async fn execute_by_id(
        &self,
        sql: &str,
        values: SqlxValues,
        id: &str,
    ) -> Result<(), DomainError> {
        let result = sqlx::query_with(sql, values).execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("product {id}")));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductStore for ProductRepository {
    async fn create(&self, name: &str) -> Result<String, DomainError> {
        let now = OffsetDateTime::now_utc();

        let (sql, values) = Query::insert()
            .into_table(Products::Table)
            .columns([Products::Name, Products::CreatedAt, Products::UpdatedAt])
            .values_panic([name.into(), now.into(), now.into()])
            .returning_col(Products::Id)
            .build_sqlx(PostgresQueryBuilder);

        sqlx::query_scalar_with::<_, String, _>(&sql, values)
            .fetch_one(&self.pool)
            .await
            .map_err(|err| DomainError::from_insert(err, || format!("product {name:?}")))
    }

    async fn list(&self) -> Result<Vec<ProductDto>, DomainError> {
        let (sql, values) = Query::select()
            .columns([
                Products::Id,
                Products::Name,
                Products::CreatedAt,
                Products::UpdatedAt,
            ])
            .from(Products::Table)
            .order_by(Products::CreatedAt, Order::Asc)
            .order_by(Products::Name, Order::Asc)
            .build_sqlx(PostgresQueryBuilder);

        let rows = sqlx::query_as_with::<_, Product, _>(&sql, values)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: &str, name: &str) -> Result<(), DomainError> {
        let now = OffsetDateTime::now_utc();

        let (sql, values) = Query::update()
            .table(Products::Table)
            .values([
                (Products::Name, name.into()),
                (Products::UpdatedAt, now.into()),
            ])
            .and_where(Expr::col(Products::Id).eq(id))
            .build_sqlx(PostgresQueryBuilder);

        self.execute_by_id(&sql, values, id).await
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let (sql, values) = Query::delete()
            .from_table(Products::Table)
            .and_where(Expr::col(Products::Id).eq(id))
            .build_sqlx(PostgresQueryBuilder);

        self.execute_by_id(&sql, values, id).await
    }
}
