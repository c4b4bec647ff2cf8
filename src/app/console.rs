use crate::utils::error::{LibraryError, Result};
use std::io::{BufRead, Write};

/// 逐行的提示/輸入介面，可接 stdin/stdout 或記憶體緩衝區
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// 印出提示並讀取一行，去除前後空白。輸入結束時回傳 `InputClosed`。
    ///
    /// 非 UTF-8 位元組 (例如 Big5 終端機) 以替代字元解碼，不中斷操作。
    pub fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(LibraryError::InputClosed);
        }
        let decoded = String::from_utf8_lossy(&line);
        if let std::borrow::Cow::Owned(_) = decoded {
            tracing::warn!("Input line was not valid UTF-8, decoded lossily");
        }
        Ok(decoded.trim().to_string())
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
