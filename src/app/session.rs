use crate::app::console::Console;
use crate::app::menu::MenuChoice;
use crate::app::messages::Messages;
use crate::core::catalog::BookCatalog;
use crate::core::registry::BorrowerRegistry;
use crate::domain::model::RecordKind;
use crate::utils::error::{LibraryError, Result};
use crate::utils::validation::validate_book_id;
use std::io::{BufRead, Write};

/// 主選單迴圈。每次只對館藏或名冊其中之一執行一個操作。
pub struct Session<R, W> {
    console: Console<R, W>,
    messages: Messages,
    catalog: BookCatalog,
    registry: BorrowerRegistry,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, messages: Messages) -> Self {
        Self {
            console: Console::new(input, output),
            messages,
            catalog: BookCatalog::new(),
            registry: BorrowerRegistry::new(),
        }
    }

    /// 執行到使用者選擇離開或輸入結束為止
    pub fn run(&mut self) -> Result<()> {
        tracing::info!("Session started ({:?})", self.messages.language());

        loop {
            match self.step() {
                Ok(true) => {}
                Ok(false) => break,
                Err(LibraryError::InputClosed) => {
                    tracing::info!("Input closed, ending session");
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        tracing::info!(
            "Session finished with {} books and {} borrowers",
            self.catalog.len(),
            self.registry.len()
        );
        Ok(())
    }

    /// 顯示選單並處理一次選擇；回傳 false 代表離開
    fn step(&mut self) -> Result<bool> {
        self.console.say(self.messages.menu())?;
        let answer = self.console.prompt(self.messages.choose())?;

        let Some(choice) = MenuChoice::parse(&answer) else {
            tracing::warn!("Invalid menu choice '{}'", answer);
            self.console.say(self.messages.invalid_choice())?;
            return Ok(true);
        };
        tracing::debug!("Menu choice: {:?}", choice);

        let outcome = match choice {
            MenuChoice::AddBook => self.add_book(),
            MenuChoice::DeleteBook => self.delete_book(),
            MenuChoice::SearchBook => self.search_book(),
            MenuChoice::SortAndListBooks => self.sort_and_list_books(),
            MenuChoice::AddBorrower => self.add_borrower(),
            MenuChoice::DeleteBorrower => self.delete_borrower(),
            MenuChoice::SearchBorrower => self.search_borrower(),
            MenuChoice::ListBorrowers => self.list_borrowers(),
            MenuChoice::Exit => {
                self.console.say(self.messages.goodbye())?;
                return Ok(false);
            }
        };

        match outcome {
            Err(e) if e.is_recoverable() => self.report(e)?,
            other => other?,
        }
        Ok(true)
    }

    /// 把可恢復的錯誤轉成使用者訊息
    fn report(&mut self, err: LibraryError) -> Result<()> {
        tracing::debug!("Recovered: {} ({})", err, err.recovery_suggestion());

        let text = match err {
            LibraryError::InvalidFormat { .. } => self.messages.invalid_book_id().to_string(),
            LibraryError::NotFound {
                kind: RecordKind::Book,
                key,
            } => self.messages.book_not_found(&key),
            LibraryError::NotFound {
                kind: RecordKind::Borrower,
                key,
            } => self.messages.borrower_not_found(&key),
            LibraryError::EmptyCollection {
                kind: RecordKind::Book,
            } => self.messages.no_books().to_string(),
            LibraryError::EmptyCollection {
                kind: RecordKind::Borrower,
            } => self.messages.no_borrowers().to_string(),
            LibraryError::InvalidInput { value, .. } => self.messages.invalid_book_count(&value),
            other => return Err(other),
        };
        self.console.say(&text)
    }

    fn add_book(&mut self) -> Result<()> {
        let title = self.console.prompt(self.messages.prompt_title())?;
        let author = self.console.prompt(self.messages.prompt_author())?;
        let id = self.console.prompt(self.messages.prompt_book_id())?;

        let book = self.catalog.add(title, author, id)?;
        let line = self.messages.book_added(book);
        self.console.say(&line)
    }

    fn delete_book(&mut self) -> Result<()> {
        let id = self.console.prompt(self.messages.prompt_delete_book())?;
        self.catalog.remove(&id);
        // 無論是否有相符的圖書都回報完成
        self.console.say(&self.messages.book_deleted(&id))
    }

    fn search_book(&mut self) -> Result<()> {
        let id = self.console.prompt(self.messages.prompt_search_book())?;
        let book = self
            .catalog
            .find(&id)
            .ok_or_else(|| LibraryError::NotFound {
                kind: RecordKind::Book,
                key: id.clone(),
            })?;
        let line = self.messages.book_found(book);
        self.console.say(&line)
    }

    fn sort_and_list_books(&mut self) -> Result<()> {
        self.catalog.sort_by_id();
        self.console.say(self.messages.books_sorted())?;

        for book in self.catalog.list()? {
            self.console.say(&book.to_string())?;
        }
        Ok(())
    }

    fn add_borrower(&mut self) -> Result<()> {
        let name = self.console.prompt(self.messages.prompt_borrower_name())?;
        let raw_count = self.console.prompt(self.messages.prompt_book_count())?;
        let count = parse_book_count(&raw_count)?;

        let mut borrowed = Vec::new();
        for _ in 0..count {
            let id = self.console.prompt(self.messages.prompt_book_id())?;
            if !validate_book_id(&id) {
                tracing::debug!("Borrower '{}' recorded unchecked book ID '{}'", name, id);
            }
            borrowed.push(id);
        }

        let borrower = self.registry.add(name, borrowed);
        let line = self.messages.borrower_added(borrower);
        self.console.say(&line)
    }

    fn delete_borrower(&mut self) -> Result<()> {
        let name = self.console.prompt(self.messages.prompt_delete_borrower())?;
        self.registry.remove(&name);
        self.console.say(&self.messages.borrower_deleted(&name))
    }

    fn search_borrower(&mut self) -> Result<()> {
        let name = self.console.prompt(self.messages.prompt_search_borrower())?;
        let borrower = self
            .registry
            .find(&name)
            .ok_or_else(|| LibraryError::NotFound {
                kind: RecordKind::Borrower,
                key: name.clone(),
            })?;
        let text = self.messages.borrower_found(borrower);
        self.console.say(&text)
    }

    fn list_borrowers(&mut self) -> Result<()> {
        for borrower in self.registry.list()? {
            self.console.say(&self.messages.borrower_line(borrower))?;
        }
        Ok(())
    }

    pub fn catalog(&self) -> &BookCatalog {
        &self.catalog
    }

    pub fn registry(&self) -> &BorrowerRegistry {
        &self.registry
    }

    pub fn into_output(self) -> W {
        self.console.into_output()
    }
}

/// 借閱數量必須是整數；零或負數視為沒有借閱任何圖書
fn parse_book_count(raw: &str) -> Result<usize> {
    let count = raw.parse::<i64>().map_err(|e| LibraryError::InvalidInput {
        field: "book count".to_string(),
        value: raw.to_string(),
        reason: e.to_string(),
    })?;
    Ok(usize::try_from(count).unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_book_count_means_none() {
        assert_eq!(parse_book_count("-1").unwrap(), 0);
        assert_eq!(parse_book_count("-300").unwrap(), 0);
    }

    #[test]
    fn test_parse_book_count() {
        assert_eq!(parse_book_count("0").unwrap(), 0);
        assert_eq!(parse_book_count("3").unwrap(), 3);
        assert!(matches!(
            parse_book_count("two"),
            Err(LibraryError::InvalidInput { .. })
        ));
        assert!(parse_book_count("").is_err());
    }
}
