use async_trait::async_trait;
use sea_query::{Expr, Iden, Order, PostgresQueryBuilder, Query};
use sea_query_binder::SqlxBinder;
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

use crate::DomainError;

/// Schema definition for the categories table
#[derive(Iden)]
pub enum Categories {
    Table,
    Id,
    Name,
    ProductId,
    CreatedAt,
    UpdatedAt,
}

/// Category entity as stored
#[derive(Debug, Clone, FromRow, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub product_id: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Category as returned to clients
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: String,
    pub name: String,
    pub product_id: String,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        CategoryDto {
            id: category.id,
            name: category.name,
            product_id: category.product_id,
        }
    }
}

/// Data access for categories
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// Insert a category and return its generated id
    async fn create(&self, name: &str, product_id: &str) -> Result<String, DomainError>;

    async fn list(&self) -> Result<Vec<CategoryDto>, DomainError>;

    /// Rename a category; `NotFound` when no row has `id`
    async fn update(&self, id: &str, name: &str) -> Result<(), DomainError>;

    /// Remove a category; `NotFound` when no row has `id`
    async fn delete(&self, id: &str) -> Result<(), DomainError>;
}

/// PostgreSQL-backed category store
#[derive(Clone)]
pub struct CategoryRepository {
    pool: PgPool,
}

impl CategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryStore for CategoryRepository {
    async fn create(&self, name: &str, product_id: &str) -> Result<String, DomainError> {
        let now = OffsetDateTime::now_utc();

        let (sql, values) = Query::insert()
            .into_table(Categories::Table)
            .columns([
                Categories::Name,
                Categories::ProductId,
                Categories::CreatedAt,
                Categories::UpdatedAt,
            ])
            .values_panic([name.into(), product_id.into(), now.into(), now.into()])
            .returning_col(Categories::Id)
            .build_sqlx(PostgresQueryBuilder);

        sqlx::query_scalar_with::<_, String, _>(&sql, values)
            .fetch_one(&self.pool)
            .await
            .map_err(|err| DomainError::from_insert(err, || format!("category {name:?}")))
    }

    async fn list(&self) -> Result<Vec<CategoryDto>, DomainError> {
        let (sql, values) = Query::select()
            .columns([
                Categories::Id,
                Categories::Name,
                Categories::ProductId,
                Categories::CreatedAt,
                Categories::UpdatedAt,
            ])
            .from(Categories::Table)
            .order_by(Categories::CreatedAt, Order::Asc)
            .order_by(Categories::Name, Order::Asc)
            .build_sqlx(PostgresQueryBuilder);

        let rows = sqlx::query_as_with::<_, Category, _>(&sql, values)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: &str, name: &str) -> Result<(), DomainError> {
        let now = OffsetDateTime::now_utc();

        let (sql, values) = Query::update()
            .table(Categories::Table)
            .values([
                (Categories::Name, name.into()),
                (Categories::UpdatedAt, now.into()),
            ])
            .and_where(Expr::col(Categories::Id).eq(id))
            .build_sqlx(PostgresQueryBuilder);

        let result = sqlx::query_with(&sql, values).execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("category {id}")));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let (sql, values) = Query::delete()
            .from_table(Categories::Table)
            .and_where(Expr::col(Categories::Id).eq(id))
            .build_sqlx(PostgresQueryBuilder);

        let result = sqlx::query_with(&sql, values).execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("category {id}")));
        }
        Ok(())
    }
}
