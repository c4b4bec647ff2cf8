use crate::domain::model::{Borrower, RecordKind};
use crate::utils::error::{LibraryError, Result};
use std::collections::vec_deque::{Iter, VecDeque};

/// 借閱者名冊：新加入者排在最前面
#[derive(Debug, Default, Clone)]
pub struct BorrowerRegistry {
    borrowers: VecDeque<Borrower>,
}

impl BorrowerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入到最前面。借閱編號不檢查格式，也不比對館藏。
    pub fn add(&mut self, name: impl Into<String>, borrowed_book_ids: Vec<String>) -> &Borrower {
        self.borrowers.push_front(Borrower::new(name, borrowed_book_ids));
        tracing::debug!("Registry now holds {} borrowers", self.borrowers.len());
        &self.borrowers[0]
    }

    /// 刪除所有同名借閱者 (不只第一位)，回傳刪除數量。
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.borrowers.len();
        self.borrowers.retain(|borrower| borrower.name != name);
        let removed = before - self.borrowers.len();
        tracing::debug!("Removed {} borrower(s) named '{}'", removed, name);
        removed
    }

    pub fn find(&self, name: &str) -> Option<&Borrower> {
        self.borrowers.iter().find(|borrower| borrower.name == name)
    }

    pub fn list(&self) -> Result<Iter<'_, Borrower>> {
        if self.borrowers.is_empty() {
            return Err(LibraryError::EmptyCollection {
                kind: RecordKind::Borrower,
            });
        }
        Ok(self.borrowers.iter())
    }

    pub fn len(&self) -> usize {
        self.borrowers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.borrowers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn books(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    fn names(registry: &BorrowerRegistry) -> Vec<String> {
        registry
            .list()
            .map(|iter| iter.map(|b| b.name.clone()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_add_inserts_at_head() {
        let mut registry = BorrowerRegistry::new();
        registry.add("Ann", books(&["A1234"]));
        registry.add("Bob", vec![]);

        assert_eq!(names(&registry), vec!["Bob", "Ann"]);
    }

    #[test]
    fn test_add_keeps_unchecked_book_ids() {
        let mut registry = BorrowerRegistry::new();
        let borrower = registry.add("Ann", books(&["not-an-id", "A1234"]));

        assert_eq!(borrower.borrowed_books, books(&["not-an-id", "A1234"]));
    }

    #[test]
    fn test_find_returns_newest_match() {
        let mut registry = BorrowerRegistry::new();
        registry.add("Ann", books(&["A0001"]));
        registry.add("Ann", books(&["B0002"]));

        let found = registry.find("Ann").unwrap();
        assert_eq!(found.borrowed_books, books(&["B0002"]));
        assert!(registry.find("Nobody").is_none());
    }

    #[test]
    fn test_remove_deletes_every_match() {
        let mut registry = BorrowerRegistry::new();
        registry.add("Ann", vec![]);
        registry.add("Bob", vec![]);
        registry.add("Ann", vec![]);

        assert_eq!(registry.remove("Ann"), 2);
        assert_eq!(names(&registry), vec!["Bob"]);
        assert_eq!(registry.remove("Ann"), 0);
    }

    #[test]
    fn test_list_empty_signal() {
        let mut registry = BorrowerRegistry::new();
        assert!(matches!(
            registry.list(),
            Err(LibraryError::EmptyCollection { .. })
        ));

        registry.add("Ann", vec![]);
        registry.remove("Ann");
        assert!(registry.is_empty());
        assert!(registry.list().is_err());
    }
}
