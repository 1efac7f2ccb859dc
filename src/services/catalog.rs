//! Catalog service for books

use rust_decimal::Decimal;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookQuery, CreateBook, UpdateBook},
    pagination::{page_number, paginate, BOOKS_PER_PAGE},
    repository::Repository,
};

/// One page of a book listing
#[derive(Debug)]
pub struct BookPage {
    pub books: Vec<Book>,
    /// Number of books matching the filters, all pages included
    pub total: usize,
    pub page: u32,
    pub per_page: usize,
}

fn check_costs(costs: Decimal) -> AppResult<()> {
    if costs < Decimal::ZERO {
        return Err(AppError::Validation("costs: Costs cannot be negative".to_string()));
    }
    Ok(())
}

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Books matching the query filters, cut to the requested page
    pub async fn list_books(&self, query: &BookQuery) -> AppResult<BookPage> {
        let page = page_number(query.page)?;
        let matching = self.repository.books.search(query).await?;
        let total = matching.len();
        let books = paginate(matching, page, BOOKS_PER_PAGE);

        tracing::debug!("Book listing page {}: {} of {} books", page, books.len(), total);

        Ok(BookPage {
            books,
            total,
            page,
            per_page: BOOKS_PER_PAGE,
        })
    }

    pub async fn get_book(&self, id: i32) -> AppResult<Book> {
        self.repository.books.get(id).await
    }

    pub async fn create_book(&self, data: &CreateBook) -> AppResult<Book> {
        data.validate()?;
        check_costs(data.costs)?;

        let book = self.repository.books.insert(data).await?;
        tracing::info!("Created book {} ({})", book.book_id, book.title);
        Ok(book)
    }

    pub async fn update_book(&self, id: i32, data: &UpdateBook) -> AppResult<Book> {
        data.validate()?;
        if let Some(costs) = data.costs {
            check_costs(costs)?;
        }

        let book = self.repository.books.update(id, data).await?;
        tracing::info!("Updated book {}", id);
        Ok(book)
    }

    /// Fails with a constraint violation while borrowing records reference the book
    pub async fn delete_book(&self, id: i32) -> AppResult<()> {
        self.repository.books.delete(id).await?;
        tracing::info!("Deleted book {}", id);
        Ok(())
    }

    pub async fn count_books(&self) -> AppResult<i64> {
        self.repository.books.count().await
    }
}
