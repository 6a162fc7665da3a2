use crate::core::Storage;
use crate::utils::error::{Result, RomanError};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Storage for LocalStorage {
    async fn read_lines(&self, path: &str) -> Result<Vec<String>> {
        let full_path = self.base_path.join(path);
        let data = tokio::fs::read(&full_path)
            .await
            .map_err(|source| RomanError::SourceUnavailable {
                path: full_path.display().to_string(),
                source,
            })?;

        // 無效的 UTF-8 位元組變成 U+FFFD，由解碼器以未知符號回報該行
        Ok(split_lines(&String::from_utf8_lossy(&data)))
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.base_path.join(path);

        if let Some(parent) = full_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{0085}' | '\u{2028}' | '\u{2029}')
}

/// 以 "\r\n"、"\n"、"\r"、U+0085、U+2028、U+2029 分行；結尾的換行不產生空行
pub(crate) fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let Some(idx) = rest.find(is_line_terminator) else {
            lines.push(rest.to_string());
            break;
        };
        lines.push(rest[..idx].to_string());

        let tail = &rest[idx..];
        let skip = if tail.starts_with("\r\n") {
            2
        } else {
            tail.chars().next().map_or(1, char::len_utf8)
        };
        rest = &tail[skip..];
    }

    lines
}
