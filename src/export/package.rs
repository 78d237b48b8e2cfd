//! 生成済みドキュメントを1つのZIPにまとめる

use crate::error::{ReportError, Result};
use std::io::{Cursor, Write};
use std::path::Path;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// フォルダ以下の全ファイルをメモリ上のZIPに書き込む
///
/// エントリ名はファイル名のみ（フォルダ構成は捨てる）。
/// 途中で失敗した場合は部分的なZIPを返さない。
pub fn package_directory(dir: &Path) -> Result<Vec<u8>> {
    if !dir.is_dir() {
        return Err(ReportError::FolderNotFound(dir.display().to_string()));
    }

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        zip.start_file(name.as_str(), options)
            .map_err(|e| ReportError::Packaging(format!("{}: {}", name, e)))?;
        let data = std::fs::read(entry.path())?;
        zip.write_all(&data)?;
    }

    let cursor = zip
        .finish()
        .map_err(|e| ReportError::Packaging(e.to_string()))?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::tempdir;
    use zip::ZipArchive;

    #[test]
    fn test_package_flattens_directories() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("P-T1-1A.docx"), b"one").unwrap();
        std::fs::write(dir.path().join("nested").join("Q.docx"), b"two").unwrap();

        let bytes = package_directory(dir.path()).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 2);

        let mut content = String::new();
        archive.by_name("Q.docx").unwrap().read_to_string(&mut content).unwrap();
        assert_eq!(content, "two");
        assert!(archive.by_name("P-T1-1A.docx").is_ok());
    }

    #[test]
    fn test_package_empty_directory() {
        let dir = tempdir().unwrap();
        let bytes = package_directory(dir.path()).unwrap();
        let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 0);
    }

    #[test]
    fn test_package_missing_directory() {
        let result = package_directory(Path::new("/nonexistent/output_docs"));
        assert!(matches!(result, Err(ReportError::FolderNotFound(_))));
    }
}
