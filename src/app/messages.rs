use crate::domain::model::{Book, Borrower};
use serde::{Deserialize, Serialize};

/// 介面語言，預設為繁體中文
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Language {
    #[default]
    #[serde(rename = "zh-TW")]
    #[cfg_attr(feature = "cli", value(name = "zh-TW"))]
    ZhTw,
    #[serde(rename = "en")]
    #[cfg_attr(feature = "cli", value(name = "en"))]
    En,
}

/// 所有使用者可見的文字
#[derive(Debug, Clone, Copy, Default)]
pub struct Messages {
    language: Language,
}

impl Messages {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn menu(&self) -> &'static str {
        match self.language {
            Language::ZhTw => {
                "\n========== 圖書館管理系統 ==========\n\
                 1. 添加新圖書\n\
                 2. 刪除圖書\n\
                 3. 搜尋圖書\n\
                 4. 排序並列出所有圖書\n\
                 5. 添加新借閱者\n\
                 6. 刪除借閱者\n\
                 7. 搜尋借閱者\n\
                 8. 列出所有借閱者及其借閱的圖書\n\
                 9. 離開"
            }
            Language::En => {
                "\n========== Library Management System ==========\n\
                 1. Add a book\n\
                 2. Delete a book\n\
                 3. Search for a book\n\
                 4. Sort and list all books\n\
                 5. Add a borrower\n\
                 6. Delete a borrower\n\
                 7. Search for a borrower\n\
                 8. List all borrowers and their books\n\
                 9. Exit"
            }
        }
    }

    pub fn choose(&self) -> &'static str {
        self.pick("請選擇功能: ", "Choose an option: ")
    }

    pub fn invalid_choice(&self) -> &'static str {
        self.pick("無效選擇，請重新選擇。", "Invalid choice, please try again.")
    }

    pub fn goodbye(&self) -> &'static str {
        self.pick("系統結束。", "Goodbye.")
    }

    // 圖書

    pub fn prompt_title(&self) -> &'static str {
        self.pick("輸入書名: ", "Title: ")
    }

    pub fn prompt_author(&self) -> &'static str {
        self.pick("輸入作者: ", "Author: ")
    }

    pub fn prompt_book_id(&self) -> &'static str {
        self.pick("輸入圖書編號 (格式: A1234): ", "Book ID (format: A1234): ")
    }

    pub fn book_added(&self, book: &Book) -> String {
        match self.language {
            Language::ZhTw => format!("圖書已添加: {} ({})", book.title, book.id),
            Language::En => format!("Book added: {} ({})", book.title, book.id),
        }
    }

    pub fn invalid_book_id(&self) -> &'static str {
        self.pick(
            "圖書編號不符合規範！請重新輸入。",
            "Book ID does not match the required format!",
        )
    }

    pub fn prompt_delete_book(&self) -> &'static str {
        self.pick("輸入要刪除的圖書編號: ", "Book ID to delete: ")
    }

    pub fn book_deleted(&self, id: &str) -> String {
        match self.language {
            Language::ZhTw => format!("圖書編號 {} 已刪除。", id),
            Language::En => format!("Book ID {} deleted.", id),
        }
    }

    pub fn prompt_search_book(&self) -> &'static str {
        self.pick("輸入要搜尋的圖書編號: ", "Book ID to search for: ")
    }

    pub fn book_found(&self, book: &Book) -> String {
        match self.language {
            Language::ZhTw => format!("找到圖書: {}", book),
            Language::En => format!("Found book: {}", book),
        }
    }

    pub fn book_not_found(&self, id: &str) -> String {
        match self.language {
            Language::ZhTw => format!("未找到圖書編號 {} 的圖書。", id),
            Language::En => format!("No book with ID {} was found.", id),
        }
    }

    pub fn books_sorted(&self) -> &'static str {
        self.pick("圖書已依圖書編號排序。", "Books sorted by ID.")
    }

    pub fn no_books(&self) -> &'static str {
        self.pick("目前沒有圖書。", "There are no books.")
    }

    // 借閱者

    pub fn prompt_borrower_name(&self) -> &'static str {
        self.pick("輸入借閱者姓名: ", "Borrower name: ")
    }

    pub fn prompt_book_count(&self) -> &'static str {
        self.pick("輸入借閱的圖書數量: ", "Number of borrowed books: ")
    }

    pub fn invalid_book_count(&self, value: &str) -> String {
        match self.language {
            Language::ZhTw => format!("圖書數量 '{}' 無效，借閱者未添加。", value),
            Language::En => format!("Invalid book count '{}', borrower not added.", value),
        }
    }

    pub fn borrower_added(&self, borrower: &Borrower) -> String {
        match self.language {
            Language::ZhTw => format!("借閱者 {} 已添加。", borrower.name),
            Language::En => format!("Borrower {} added.", borrower.name),
        }
    }

    pub fn prompt_delete_borrower(&self) -> &'static str {
        self.pick("輸入要刪除的借閱者姓名: ", "Borrower name to delete: ")
    }

    pub fn borrower_deleted(&self, name: &str) -> String {
        match self.language {
            Language::ZhTw => format!("借閱者 {} 已刪除。", name),
            Language::En => format!("Borrower {} deleted.", name),
        }
    }

    pub fn prompt_search_borrower(&self) -> &'static str {
        self.pick("輸入要搜尋的借閱者姓名: ", "Borrower name to search for: ")
    }

    pub fn borrower_found(&self, borrower: &Borrower) -> String {
        match self.language {
            Language::ZhTw => format!(
                "找到借閱者: {}\n借閱圖書: {}",
                borrower.name,
                borrower.borrowed_ids()
            ),
            Language::En => format!(
                "Found borrower: {}\nBorrowed books: {}",
                borrower.name,
                borrower.borrowed_ids()
            ),
        }
    }

    pub fn borrower_not_found(&self, name: &str) -> String {
        match self.language {
            Language::ZhTw => format!("未找到借閱者 {}。", name),
            Language::En => format!("No borrower named {} was found.", name),
        }
    }

    pub fn borrower_line(&self, borrower: &Borrower) -> String {
        match self.language {
            Language::ZhTw => format!("{} 借閱的圖書: {}", borrower.name, borrower.borrowed_ids()),
            Language::En => format!("{} borrowed: {}", borrower.name, borrower.borrowed_ids()),
        }
    }

    pub fn no_borrowers(&self) -> &'static str {
        self.pick("目前沒有借閱者。", "There are no borrowers.")
    }

    fn pick(&self, zh_tw: &'static str, en: &'static str) -> &'static str {
        match self.language {
            Language::ZhTw => zh_tw,
            Language::En => en,
        }
    }
}
