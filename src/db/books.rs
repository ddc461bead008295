//! Book catalog queries
//!
//! Read-only access to the `book2018` table. Every fetch returns the
//! full record; callers project the fields they present.

use serde::Serialize;
use sqlx::MySqlPool;

use crate::error::{AppError, Result};

/// A catalog record.
///
/// `authors` and `genres` are pipe-delimited as stored; the presentation
/// layer decides whether to normalize them.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Book {
    pub book_id: String,
    pub title: String,
    pub authors: String,
    pub pages: i32,
    pub rating: f64,
    pub rating_count: i64,
    pub genres: String,
    pub description: String,
    pub image_url: String,
}

/// One window of the letter-filtered listing
#[derive(Debug, Clone)]
pub struct BookPage {
    pub books: Vec<Book>,
    pub total: i64,
}

/// Read-only repository over the catalog table
pub struct BookRepository<'a> {
    pool: &'a MySqlPool,
}

impl<'a> BookRepository<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// List books whose title starts with `letter`, in ascending title
    /// order, together with the total number of matches.
    ///
    /// The letter is matched as a literal prefix (LIKE wildcards in it
    /// are escaped); an empty letter matches every title. An offset past
    /// the last match yields an empty page, not an error. Both queries
    /// run sequentially on one checked-out connection, returned to the
    /// pool on every exit path.
    pub async fn list_by_letter(&self, letter: &str, limit: i64, offset: i64) -> Result<BookPage> {
        let pattern = format!("{}%", escape_like(letter));

        let mut conn = self.pool.acquire().await?;

        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT book_id, title, authors, pages, rating, rating_count,
                   genres, description, image_url
            FROM book2018
            WHERE title LIKE ?
            ORDER BY title ASC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(&pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *conn)
        .await?;

        let (total,): (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*)
            FROM book2018
            WHERE title LIKE ?
            "#,
        )
        .bind(&pattern)
        .fetch_one(&mut *conn)
        .await?;

        Ok(BookPage { books, total })
    }

    /// Fetch a single book with every column
    pub async fn get_by_id(&self, book_id: &str) -> Result<Book> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            SELECT book_id, title, authors, pages, rating, rating_count,
                   genres, description, image_url
            FROM book2018
            WHERE book_id = ?
            "#,
        )
        .bind(book_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No book with id: {}", book_id)))?;

        Ok(book)
    }
}

/// Escape LIKE wildcards so a caller-supplied prefix matches literally
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_plain_prefix() {
        assert_eq!(escape_like("A"), "A");
        assert_eq!(escape_like("Le"), "Le");
        assert_eq!(escape_like(""), "");
    }

    #[test]
    fn test_escape_like_wildcards() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }
}
