use crate::domain::model::{Book, RecordKind};
use crate::utils::error::{LibraryError, Result};
use crate::utils::validation::check_book_id;

/// 館藏：依加入順序保存的圖書清單，可依編號重新排序
#[derive(Debug, Default, Clone)]
pub struct BookCatalog {
    books: Vec<Book>,
}

impl BookCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 驗證編號後加到尾端。格式錯誤時不做任何變更。
    pub fn add(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        id: impl Into<String>,
    ) -> Result<&Book> {
        let id = id.into();
        if let Err(e) = check_book_id(&id) {
            tracing::warn!("Rejected book with malformed ID '{}'", id);
            return Err(e);
        }

        self.books.push(Book::new(title, author, id));
        tracing::debug!("Catalog now holds {} books", self.books.len());
        Ok(&self.books[self.books.len() - 1])
    }

    /// 刪除所有編號相符的圖書 (不只第一筆)，回傳刪除數量。
    pub fn remove(&mut self, id: &str) -> usize {
        let before = self.books.len();
        self.books.retain(|book| book.id != id);
        let removed = before - self.books.len();
        tracing::debug!("Removed {} book(s) with ID '{}'", removed, id);
        removed
    }

    pub fn find(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// 依編號遞增排序；穩定排序，同編號維持原相對順序
    pub fn sort_by_id(&mut self) {
        self.books.sort_by(|a, b| a.id.cmp(&b.id));
    }

    pub fn list(&self) -> Result<&[Book]> {
        if self.books.is_empty() {
            return Err(LibraryError::EmptyCollection {
                kind: RecordKind::Book,
            });
        }
        Ok(&self.books)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
