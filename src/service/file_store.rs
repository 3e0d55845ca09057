use std::path::{Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

use crate::error::SiteError;

const ALLOWED_EXTENSION: &str = "pdf";

/// Directory holding uploaded documents, shared by notices and results.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, SiteError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `body` under `name`, replacing any file already there.
    /// `name` must come from [`secure_filename`].
    pub async fn save(&self, name: &str, body: &[u8]) -> Result<PathBuf, SiteError> {
        let path = self.dir.join(name);
        tokio::fs::write(&path, body).await?;
        Ok(path)
    }
}

/// True when the text after the last `.` is `pdf`, ignoring case.
pub fn is_allowed(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case(ALLOWED_EXTENSION))
}

/// Reduce a client supplied filename to a flat, ASCII-only name that cannot
/// leave the upload directory. Returns `None` when nothing usable remains.
///
/// Compatibility decomposition runs first, so accented letters keep their
/// base letter (`é` -> `e`).
pub fn secure_filename(filename: &str) -> Option<String> {
    let flat: String = filename
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();
    let joined = flat.split_whitespace().collect::<Vec<_>>().join("_");
    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();
    let trimmed = kept.trim_matches(|c| c == '.' || c == '_');
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_pdf_extension_is_allowed() {
        assert!(is_allowed("result1.pdf"));
        assert!(is_allowed("RESULT1.PDF"));
        assert!(is_allowed("archive.tar.pdf"));
        assert!(!is_allowed("virus.exe"));
        assert!(!is_allowed("report.pdf.exe"));
        assert!(!is_allowed("pdf"));
        assert!(!is_allowed("notes.pdfx"));
        assert!(!is_allowed(""));
    }

    #[test]
    fn traversal_components_are_flattened() {
        assert_eq!(secure_filename("../../etc/passwd").as_deref(), Some("etc_passwd"));
        assert_eq!(
            secure_filename("..\\..\\boot.pdf").as_deref(),
            Some("boot.pdf")
        );
        assert_eq!(secure_filename("/abs/path/n.pdf").as_deref(), Some("abs_path_n.pdf"));
    }

    #[test]
    fn spaces_and_symbols_are_normalised() {
        assert_eq!(
            secure_filename("My Result (1).pdf").as_deref(),
            Some("My_Result_1.pdf")
        );
        assert_eq!(secure_filename("  term  one .pdf").as_deref(), Some("term_one_.pdf"));
    }

    #[test]
    fn accented_and_compatibility_forms_fold_to_ascii() {
        assert_eq!(secure_filename("résumé.pdf").as_deref(), Some("resume.pdf"));
        assert_eq!(secure_filename("Ｒｅｓｕｌｔ ①.pdf").as_deref(), Some("Result_1.pdf"));
    }

    #[test]
    fn nothing_left_yields_none() {
        assert_eq!(secure_filename("../.."), None);
        assert_eq!(secure_filename("日本語"), None);
        assert_eq!(secure_filename(""), None);
    }

    #[tokio::test]
    async fn save_writes_into_the_store_directory() {
        let mut dir = std::env::temp_dir();
        dir.push(format!("noticeboard-file-store-{}", std::process::id()));
        let store = FileStore::open(&dir).await.unwrap();

        let path = store.save("doc.pdf", b"%PDF-1.4").await.unwrap();
        assert_eq!(path, dir.join("doc.pdf"));
        assert_eq!(tokio::fs::read(&path).await.unwrap(), b"%PDF-1.4");

        let _ = tokio::fs::remove_dir_all(&dir).await;
    }
}
