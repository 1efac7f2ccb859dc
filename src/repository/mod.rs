//! Repository layer for database operations
//!
//! Every record type goes through the same [`Table`] implementation; a record
//! only describes its table and how its create/update payloads map to columns.

/// Columns of a partial update: one entry per field of `$changes` that is `Some`
macro_rules! changed_columns {
    ($changes:expr; $($field:ident => $variant:ident),+ $(,)?) => {{
        let mut columns = $crate::repository::Columns::new();
        $(
            if let Some(ref val) = $changes.$field {
                columns.push((
                    stringify!($field),
                    $crate::repository::Value::$variant(Some(val.clone())),
                ));
            }
        )+
        columns
    }};
}

pub mod books;
pub mod borrowings;
pub mod members;
pub mod records;
pub mod staff;

use std::marker::PhantomData;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{postgres::PgRow, FromRow, Pool, Postgres, QueryBuilder};

use crate::{
    error::{AppError, AppResult},
    models::{Book, BorrowersRecord, BorrowersRecordDetail, LibraryStaff, Member},
};

/// A column value bound into a generated statement
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(Option<i32>),
    Text(Option<String>),
    Decimal(Option<Decimal>),
    Date(Option<NaiveDate>),
}

impl Value {
    fn push_bind(self, builder: &mut QueryBuilder<'_, Postgres>) {
        match self {
            Value::Int(v) => builder.push_bind(v),
            Value::Text(v) => builder.push_bind(v),
            Value::Decimal(v) => builder.push_bind(v),
            Value::Date(v) => builder.push_bind(v),
        };
    }
}

/// Column/value pairs of a write
pub type Columns = Vec<(&'static str, Value)>;

/// A persisted record type
pub trait Record: for<'r> FromRow<'r, PgRow> + Send + Unpin + 'static {
    /// Table name
    const TABLE: &'static str;
    /// Integer primary key column
    const ID_COLUMN: &'static str;
    /// Name used in error messages
    const NAME: &'static str;

    /// Creation payload
    type New: Send + Sync;
    /// Partial update payload
    type Changes: Send + Sync;

    fn insert_columns(new: &Self::New) -> Columns;

    /// Only the columns that are set in `changes`
    fn update_columns(changes: &Self::Changes) -> Columns;
}

/// Generic CRUD access to the table of a record type
pub struct Table<R> {
    pool: Pool<Postgres>,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for Table<R> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _record: PhantomData,
        }
    }
}

impl<R: Record> Table<R> {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            pool,
            _record: PhantomData,
        }
    }

    fn not_found(id: i32) -> AppError {
        AppError::NotFound(format!("{} {} not found", R::NAME, id))
    }

    /// All records, ascending by id
    pub async fn list(&self) -> AppResult<Vec<R>> {
        let query = format!("SELECT * FROM {} ORDER BY {}", R::TABLE, R::ID_COLUMN);
        let rows = sqlx::query_as::<_, R>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn get(&self, id: i32) -> AppResult<R> {
        let query = format!("SELECT * FROM {} WHERE {} = $1", R::TABLE, R::ID_COLUMN);
        sqlx::query_as::<_, R>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    pub async fn count(&self) -> AppResult<i64> {
        let query = format!("SELECT COUNT(*) FROM {}", R::TABLE);
        let count: i64 = sqlx::query_scalar(&query).fetch_one(&self.pool).await?;
        Ok(count)
    }

    /// Insert and commit, returning the stored row
    pub async fn insert(&self, new: &R::New) -> AppResult<R> {
        let columns = R::insert_columns(new);

        let mut builder = QueryBuilder::<Postgres>::new("INSERT INTO ");
        builder.push(R::TABLE).push(" (");
        for (i, (column, _)) in columns.iter().enumerate() {
            if i > 0 {
                builder.push(", ");
            }
            builder.push(*column);
        }
        builder.push(") VALUES (");
        for (i, (_, value)) in columns.into_iter().enumerate() {
            if i > 0 {
                builder.push(", ");
            }
            value.push_bind(&mut builder);
        }
        builder.push(") RETURNING *");

        let mut tx = self.pool.begin().await?;
        let row = builder.build_query_as::<R>().fetch_one(&mut *tx).await?;
        tx.commit().await?;
        Ok(row)
    }

    /// Write the set columns of `changes` and commit; unset columns keep their value
    pub async fn update(&self, id: i32, changes: &R::Changes) -> AppResult<R> {
        let columns = R::update_columns(changes);
        if columns.is_empty() {
            return self.get(id).await;
        }

        let mut builder = QueryBuilder::<Postgres>::new("UPDATE ");
        builder.push(R::TABLE).push(" SET ");
        for (i, (column, value)) in columns.into_iter().enumerate() {
            if i > 0 {
                builder.push(", ");
            }
            builder.push(column).push(" = ");
            value.push_bind(&mut builder);
        }
        builder
            .push(" WHERE ")
            .push(R::ID_COLUMN)
            .push(" = ")
            .push_bind(id)
            .push(" RETURNING *");

        let mut tx = self.pool.begin().await?;
        let row = builder
            .build_query_as::<R>()
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| Self::not_found(id))?;
        tx.commit().await?;
        Ok(row)
    }

    /// Delete and commit
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let query = format!("DELETE FROM {} WHERE {} = $1", R::TABLE, R::ID_COLUMN);

        let mut tx = self.pool.begin().await?;
        let result = sqlx::query(&query).bind(id).execute(&mut *tx).await?;
        if result.rows_affected() == 0 {
            return Err(Self::not_found(id));
        }
        tx.commit().await?;
        Ok(())
    }
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub books: Table<Book>,
    pub staff: Table<LibraryStaff>,
    pub members: Table<Member>,
    pub records: Table<BorrowersRecord>,
    pub details: Table<BorrowersRecordDetail>,
    pub borrowings: borrowings::BorrowingsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            books: Table::new(pool.clone()),
            staff: Table::new(pool.clone()),
            members: Table::new(pool.clone()),
            records: Table::new(pool.clone()),
            details: Table::new(pool.clone()),
            borrowings: borrowings::BorrowingsRepository::new(pool.clone()),
            pool,
        }
    }

    /// Round trip to the database
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
