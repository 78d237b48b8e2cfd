//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use inspection_report::error::ReportError;
use inspection_report::scanner;
use inspection_report::session::Session;
use inspection_report_common::{ParsePolicy, RecordId, RecordTable};
use std::io::Write;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないフォルダをスキャンした場合
#[test]
fn test_scan_nonexistent_folder() {
    let result = scanner::scan_images(Path::new("/nonexistent/path/12345"));
    assert!(matches!(result.unwrap_err(), ReportError::FolderNotFound(_)));
}

/// 空のフォルダをスキャンした場合
#[test]
fn test_scan_empty_folder() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = scanner::scan_images(dir.path());

    // 空フォルダはエラーではなく空のVecを返す
    assert!(result.unwrap().is_empty());
}

/// 画像を含まないZIP → 生成前にエラー
#[test]
fn test_session_without_images() {
    let dir = tempdir().expect("Failed to create temp dir");
    let archive = dir.path().join("docs.zip");
    {
        let file = std::fs::File::create(&archive).unwrap();
        let mut zip = zip::ZipWriter::new(file);
        zip.start_file("readme.txt", zip::write::SimpleFileOptions::default()).unwrap();
        zip.write_all(b"no photos here").unwrap();
        zip.start_file("photo.gif", zip::write::SimpleFileOptions::default()).unwrap();
        zip.write_all(b"GIF89a").unwrap();
        zip.finish().unwrap();
    }

    let result = Session::open(&archive, ParsePolicy::Placeholder);
    assert!(matches!(result, Err(ReportError::NoImagesFound(_))));
}

/// 存在しないZIP
#[test]
fn test_session_missing_archive() {
    let result = Session::open(Path::new("/nonexistent/photos.zip"), ParsePolicy::Placeholder);
    assert!(matches!(result, Err(ReportError::FileNotFound(_))));
}

/// ReportErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        ReportError::Config("テスト設定エラー".to_string()),
        ReportError::FileNotFound("photos.zip".to_string()),
        ReportError::FolderNotFound("/path/to/folder".to_string()),
        ReportError::ImageLoad("a.jpg".to_string()),
        ReportError::NoImagesFound("photos.zip".to_string()),
        ReportError::DocxGeneration("docx生成エラー".to_string()),
        ReportError::Packaging("ZIP作成エラー".to_string()),
        ReportError::Interaction("入力エラー".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: ReportError = io_err.into();

    assert!(matches!(err, ReportError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: ReportError = json_err.into();

    assert!(matches!(err, ReportError::JsonParse(_)));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_conversion() {
    let mut table = RecordTable::default();
    let common_err = table.remove(RecordId(7)).unwrap_err();
    let err: ReportError = common_err.into();

    assert!(matches!(err, ReportError::Common(_)));
    assert_eq!(format!("{}", err), "Record not found: #7");
}
