use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("画像読み込みエラー: {0}")]
    ImageLoad(String),

    #[error("画像が見つかりません: {0}")]
    NoImagesFound(String),

    #[error("ZIPエラー: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("XML生成エラー: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("docx生成エラー: {0}")]
    DocxGeneration(String),

    #[error("ZIP作成エラー: {0}")]
    Packaging(String),

    #[error("入力エラー: {0}")]
    Interaction(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("フォルダ走査エラー: {0}")]
    Walk(#[from] walkdir::Error),

    #[error(transparent)]
    Common(#[from] inspection_report_common::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
