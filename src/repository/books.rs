//! Books table

use sqlx::{Postgres, QueryBuilder};

use super::{Columns, Record, Table, Value};
use crate::{
    error::AppResult,
    models::book::{Book, BookQuery, CreateBook, UpdateBook},
};

impl Record for Book {
    const TABLE: &'static str = "books";
    const ID_COLUMN: &'static str = "book_id";
    const NAME: &'static str = "Book";

    type New = CreateBook;
    type Changes = UpdateBook;

    fn insert_columns(new: &CreateBook) -> Columns {
        vec![
            ("title", Value::Text(Some(new.title.clone()))),
            ("edition", Value::Text(new.edition.clone())),
            ("author", Value::Text(new.author.clone())),
            ("publisher", Value::Text(new.publisher.clone())),
            ("copies", Value::Int(Some(new.copies))),
            ("costs", Value::Decimal(Some(new.costs))),
            ("remarks", Value::Text(new.remarks.clone())),
        ]
    }

    fn update_columns(changes: &UpdateBook) -> Columns {
        changed_columns!(changes;
            title => Text,
            edition => Text,
            author => Text,
            publisher => Text,
            copies => Int,
            costs => Decimal,
            remarks => Text,
        )
    }
}

impl Table<Book> {
    /// Books matching the optional author/publisher filters, ascending by id
    pub async fn search(&self, query: &BookQuery) -> AppResult<Vec<Book>> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT * FROM books WHERE TRUE");

        if let Some(ref author) = query.author {
            builder.push(" AND author = ").push_bind(author.clone());
        }
        if let Some(ref publisher) = query.publisher {
            builder.push(" AND publisher = ").push_bind(publisher.clone());
        }
        builder.push(" ORDER BY book_id");

        let rows = builder.build_query_as::<Book>().fetch_all(&self.pool).await?;
        Ok(rows)
    }
}
