use crate::utils::error::{LibraryError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 圖書編號長度: 一個英文字母 + 四位數字
pub const BOOK_ID_LEN: usize = 5;

/// 檢查圖書編號格式 (例如 `A1234`)。
///
/// 以位元組判斷，不做大小寫轉換；非 ASCII 字元一律不合格。
pub fn validate_book_id(id: &str) -> bool {
    match id.as_bytes() {
        [first, rest @ ..] if rest.len() == BOOK_ID_LEN - 1 => {
            first.is_ascii_alphabetic() && rest.iter().all(u8::is_ascii_digit)
        }
        _ => false,
    }
}

pub fn check_book_id(id: &str) -> Result<()> {
    if validate_book_id(id) {
        Ok(())
    } else {
        Err(LibraryError::InvalidFormat { id: id.to_string() })
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(LibraryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(LibraryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(LibraryError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Allowed values: {}", allowed.join(", ")),
    })
}
