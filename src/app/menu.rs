/// 主選單的九個選項
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddBook,
    DeleteBook,
    SearchBook,
    SortAndListBooks,
    AddBorrower,
    DeleteBorrower,
    SearchBorrower,
    ListBorrowers,
    Exit,
}

impl MenuChoice {
    /// 只接受 1 到 9 的整數，其他輸入皆視為無效
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u32>().ok()? {
            1 => Some(Self::AddBook),
            2 => Some(Self::DeleteBook),
            3 => Some(Self::SearchBook),
            4 => Some(Self::SortAndListBooks),
            5 => Some(Self::AddBorrower),
            6 => Some(Self::DeleteBorrower),
            7 => Some(Self::SearchBorrower),
            8 => Some(Self::ListBorrowers),
            9 => Some(Self::Exit),
            _ => None,
        }
    }
}
