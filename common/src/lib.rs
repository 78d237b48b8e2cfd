//! Inspection Report Common Library
//!
//! ファイル名解析・レコード表・グルーピングなど、出力形式に依存しない部分

pub mod types;
pub mod layout;
pub mod error;
pub mod parser;
pub mod table;
pub mod grouping;
pub mod naming;

pub use types::{FilenameRecord, Group, ImageInfo, LocationKey, RecordField, RecordFields, RecordId};
pub use error::{Error, Result};
pub use parser::{parse_filename, ParsePolicy};
pub use table::RecordTable;
pub use grouping::group_records;
pub use naming::{dedupe_file_name, location_label, report_file_name};
