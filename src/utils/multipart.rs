//! multipart 表单读取
//!
//! 文本字段收集到内存，唯一的文件字段边读边写入临时文件，
//! 首个分块校验魔术字节，累计大小超限立即中止。

use actix_multipart::Multipart;
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::utils::validate_magic_bytes;

const MAX_TEXT_FIELD_SIZE: usize = 64 * 1024;

/// 文件字段的校验规则
pub struct UploadRules<'a> {
    pub field: &'a str,
    pub allowed_types: &'a [String],
    pub max_size: usize,
}

#[derive(Debug, PartialEq)]
pub enum UploadError {
    MultipleFiles,
    TypeNotAllowed,
    ContentMismatch,
    TooLarge,
    Malformed(String),
    Io(String),
}

impl UploadError {
    /// 面向客户端的说明
    pub fn message(&self, field: &str) -> String {
        match self {
            UploadError::MultipleFiles => format!("Only one {field} file can be uploaded."),
            UploadError::TypeNotAllowed => format!("The {field} must be a file of an allowed type."),
            UploadError::ContentMismatch => {
                format!("The {field} content does not match its extension.")
            }
            UploadError::TooLarge => format!("The {field} exceeds the maximum allowed size."),
            UploadError::Malformed(e) => format!("Malformed multipart body: {e}"),
            UploadError::Io(e) => format!("File storage failed: {e}"),
        }
    }

    /// 是否属于客户端输入问题
    pub fn is_client_error(&self) -> bool {
        !matches!(self, UploadError::Io(_))
    }
}

/// 已写入临时目录、尚未落地的文件；未 persist 时在 drop 中删除
#[derive(Debug)]
pub struct StagedFile {
    pub extension: String, // 小写，含点号
    pub size: usize,
    path: PathBuf,
}

impl StagedFile {
    /// 移动到 `{upload_dir}/{relative}`
    pub fn persist(self, upload_dir: &str, relative: &str) -> std::io::Result<()> {
        let target = Path::new(upload_dir).join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::rename(&self.path, &target)
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if self.path.exists() {
            let _ = fs::remove_file(&self.path);
        }
    }
}

#[derive(Debug, Default)]
pub struct MultipartForm {
    pub fields: HashMap<String, String>,
    pub file: Option<StagedFile>,
}

impl MultipartForm {
    /// 取文本字段，空白视为缺失
    pub fn text(&self, name: &str) -> Option<String> {
        self.fields
            .get(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

/// 提取小写扩展名（含点号）
pub fn file_extension(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .unwrap_or_default()
}

/// 文件名片段中只保留字母数字与连字符
pub fn safe_file_stem(value: &str) -> String {
    let stem: String = value
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    if stem.is_empty() { "file".to_string() } else { stem }
}

pub async fn read_multipart(
    mut payload: Multipart,
    upload_dir: &str,
    rules: UploadRules<'_>,
) -> Result<MultipartForm, UploadError> {
    let mut form = MultipartForm::default();

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| UploadError::Malformed(e.to_string()))?
    {
        let content_disposition = field.content_disposition();
        let name = content_disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();
        let filename = content_disposition
            .and_then(|cd| cd.get_filename())
            .map(|s| s.to_string());

        if name != rules.field {
            let mut buf = Vec::new();
            while let Some(chunk) = field.next().await {
                let data = chunk.map_err(|e| UploadError::Malformed(e.to_string()))?;
                if buf.len() + data.len() > MAX_TEXT_FIELD_SIZE {
                    return Err(UploadError::Malformed(format!("field {name} is too large")));
                }
                buf.extend_from_slice(&data);
            }
            form.fields
                .insert(name, String::from_utf8_lossy(&buf).into_owned());
            continue;
        }

        // 空文件名的文件字段视为未上传
        let Some(filename) = filename.filter(|f| !f.is_empty()) else {
            continue;
        };
        if form.file.is_some() {
            return Err(UploadError::MultipleFiles);
        }

        let extension = file_extension(&filename);
        if !rules
            .allowed_types
            .iter()
            .any(|t| t.to_lowercase() == extension)
        {
            return Err(UploadError::TypeNotAllowed);
        }

        let staging_dir = Path::new(upload_dir).join("tmp");
        fs::create_dir_all(&staging_dir).map_err(|e| UploadError::Io(e.to_string()))?;

        let mut staged = StagedFile {
            extension: extension.clone(),
            size: 0,
            path: staging_dir.join(format!("{}.part", Uuid::new_v4())),
        };
        let mut f = File::create(&staged.path).map_err(|e| UploadError::Io(e.to_string()))?;

        let mut first_chunk = true;
        while let Some(chunk) = field.next().await {
            let data = chunk.map_err(|e| UploadError::Malformed(e.to_string()))?;

            // 第一个 chunk 时验证魔术字节
            if first_chunk {
                first_chunk = false;
                if !validate_magic_bytes(&data, &extension) {
                    return Err(UploadError::ContentMismatch);
                }
            }

            staged.size += data.len();
            if staged.size > rules.max_size {
                return Err(UploadError::TooLarge);
            }
            f.write_all(&data)
                .map_err(|e| UploadError::Io(e.to_string()))?;
        }

        if staged.size == 0 {
            return Err(UploadError::ContentMismatch);
        }
        form.file = Some(staged);
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_file_stem() {
        assert_eq!(safe_file_stem("Dela Cruz"), "Dela_Cruz");
        assert_eq!(safe_file_stem("../etc"), "___etc");
        assert_eq!(safe_file_stem("  "), "file");
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("receipt.PDF"), ".pdf");
        assert_eq!(file_extension("photo.final.jpeg"), ".jpeg");
        assert_eq!(file_extension("noext"), "");
    }

    #[test]
    fn test_form_text_trims_and_skips_blank() {
        let mut form = MultipartForm::default();
        form.fields.insert("LRN".into(), " 123 ".into());
        form.fields.insert("description".into(), "   ".into());
        assert_eq!(form.text("LRN").as_deref(), Some("123"));
        assert_eq!(form.text("description"), None);
        assert_eq!(form.text("missing"), None);
    }

    #[test]
    fn test_staged_file_removed_when_dropped() {
        let dir = std::env::temp_dir().join(format!("portal-test-{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("a.part");
        fs::write(&path, b"%PDF").unwrap();

        drop(StagedFile {
            extension: ".pdf".into(),
            size: 4,
            path: path.clone(),
        });
        assert!(!path.exists());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_staged_file_persist_moves_into_place() {
        let dir = std::env::temp_dir().join(format!("portal-test-{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("b.part");
        fs::write(&path, b"%PDF").unwrap();

        let staged = StagedFile {
            extension: ".pdf".into(),
            size: 4,
            path: path.clone(),
        };
        staged
            .persist(dir.to_str().unwrap(), "payments/x.pdf")
            .unwrap();
        assert!(dir.join("payments/x.pdf").exists());
        assert!(!path.exists());
        let _ = fs::remove_dir_all(&dir);
    }
}
