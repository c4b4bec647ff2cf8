use std::fmt;

/// 記錄種類，用於錯誤訊息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Book,
    Borrower,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Book => f.write_str("book"),
            Self::Borrower => f.write_str("borrower"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: String,
    /// 一個英文字母 + 四位數字，不保證唯一
    pub id: String,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            id: id.into(),
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} (ID: {})", self.title, self.author, self.id)
    }
}

/// 借閱者；`borrowed_books` 只存原始編號字串，不回查館藏
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Borrower {
    pub name: String,
    pub borrowed_books: Vec<String>,
}

impl Borrower {
    pub fn new(name: impl Into<String>, borrowed_books: Vec<String>) -> Self {
        Self {
            name: name.into(),
            borrowed_books,
        }
    }

    /// 以空白分隔的借閱編號
    pub fn borrowed_ids(&self) -> String {
        self.borrowed_books.join(" ")
    }
}
