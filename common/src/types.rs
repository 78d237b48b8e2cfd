//! 点検レコードの型定義
//!
//! - ImageInfo: 展開済み画像（カタログ）
//! - FilenameRecord: ファイル名を解析した1行（レビューで編集される）
//! - Group: 同一住戸（project/tower/flat）にまとめた画像群

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// グループキー表示用の区切り文字
pub const KEY_SEPARATOR: &str = "-";

/// 展開済み画像
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageInfo {
    pub path: PathBuf,
    pub file_name: String,
}

impl ImageInfo {
    pub fn new(path: PathBuf) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Self { path, file_name }
    }
}

/// レコードID（セッション内で一意、再利用しない）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u32);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// ファイル名から取り出した編集可能フィールド
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecordFields {
    pub project: String,
    pub tower: String,
    pub flat: String,
    pub inspector: String,
    pub date: String,
}

impl RecordFields {
    pub fn get(&self, field: RecordField) -> &str {
        match field {
            RecordField::Project => &self.project,
            RecordField::Tower => &self.tower,
            RecordField::Flat => &self.flat,
            RecordField::Inspector => &self.inspector,
            RecordField::Date => &self.date,
        }
    }

    pub fn set(&mut self, field: RecordField, value: impl Into<String>) {
        let slot = match field {
            RecordField::Project => &mut self.project,
            RecordField::Tower => &mut self.tower,
            RecordField::Flat => &mut self.flat,
            RecordField::Inspector => &mut self.inspector,
            RecordField::Date => &mut self.date,
        };
        *slot = value.into();
    }
}

/// 編集対象の列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    Project,
    Tower,
    Flat,
    Inspector,
    Date,
}

impl RecordField {
    /// 表の列順
    pub const ALL: [RecordField; 5] = [
        RecordField::Project,
        RecordField::Tower,
        RecordField::Flat,
        RecordField::Inspector,
        RecordField::Date,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RecordField::Project => "Project",
            RecordField::Tower => "Tower",
            RecordField::Flat => "Flat",
            RecordField::Inspector => "Inspector",
            RecordField::Date => "Date",
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for RecordField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "project" => Ok(RecordField::Project),
            "tower" => Ok(RecordField::Tower),
            "flat" => Ok(RecordField::Flat),
            "inspector" => Ok(RecordField::Inspector),
            "date" => Ok(RecordField::Date),
            _ => Err(Error::InvalidField(s.to_string())),
        }
    }
}

/// 1画像 = 1レコード
///
/// `filename` と `full_path` は生成時に一度だけ設定され、以後変更されない。
/// 行の削除・並べ替えをしても画像との対応は崩れない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilenameRecord {
    id: RecordId,
    filename: String,
    full_path: PathBuf,
    #[serde(flatten)]
    pub fields: RecordFields,
}

impl FilenameRecord {
    pub fn new(id: RecordId, image: &ImageInfo, fields: RecordFields) -> Self {
        Self {
            id,
            filename: image.file_name.clone(),
            full_path: image.path.clone(),
            fields,
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn full_path(&self) -> &std::path::Path {
        &self.full_path
    }
}

/// 正規化済みの住戸キー（trim済み project/tower/flat）
///
/// 同一性は `-` で連結した文字列で判定する。
/// `A-B`/`C` と `A`/`B-C` は同じ住戸になる。
#[derive(Debug, Clone, Serialize)]
pub struct LocationKey {
    pub project: String,
    pub tower: String,
    pub flat: String,
}

impl LocationKey {
    pub fn from_fields(fields: &RecordFields) -> Self {
        Self {
            project: fields.project.trim().to_string(),
            tower: fields.tower.trim().to_string(),
            flat: fields.flat.trim().to_string(),
        }
    }
}

impl PartialEq for LocationKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for LocationKey {}

impl std::hash::Hash for LocationKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl fmt::Display for LocationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}",
            self.project,
            self.tower,
            self.flat,
            sep = KEY_SEPARATOR
        )
    }
}

/// 1住戸分の出力単位
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub key: LocationKey,
    pub project: String,
    pub tower: String,
    pub flat: String,
    pub inspector: String,
    pub date: String,
    pub images: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_fields_default() {
        let fields = RecordFields::default();
        assert_eq!(fields.project, "");
        assert_eq!(fields.tower, "");
        assert_eq!(fields.date, "");
    }

    #[test]
    fn test_record_fields_get_set() {
        let mut fields = RecordFields::default();
        fields.set(RecordField::Flat, "1A");
        fields.set(RecordField::Inspector, "Chan");
        assert_eq!(fields.get(RecordField::Flat), "1A");
        assert_eq!(fields.get(RecordField::Inspector), "Chan");
        assert_eq!(fields.get(RecordField::Tower), "");
    }

    #[test]
    fn test_record_field_from_str() {
        assert_eq!("Project".parse::<RecordField>().unwrap(), RecordField::Project);
        assert_eq!(" flat ".parse::<RecordField>().unwrap(), RecordField::Flat);
        assert!(matches!("room".parse::<RecordField>(), Err(Error::InvalidField(_))));
    }

    #[test]
    fn test_image_info_new() {
        let info = ImageInfo::new(PathBuf::from("/tmp/x/ProjA-T1-1A-Chan-1-1-2025.jpg"));
        assert_eq!(info.file_name, "ProjA-T1-1A-Chan-1-1-2025.jpg");
    }

    #[test]
    fn test_location_key_trims() {
        let fields = RecordFields {
            project: " ProjA ".into(),
            tower: "T1 ".into(),
            flat: "".into(),
            inspector: " Chan ".into(),
            date: "".into(),
        };
        let key = LocationKey::from_fields(&fields);
        assert_eq!(key.project, "ProjA");
        assert_eq!(key.tower, "T1");
        assert_eq!(key.to_string(), "ProjA-T1-");
    }

    #[test]
    fn test_location_key_joined_equality() {
        let a = LocationKey { project: "A-B".into(), tower: "C".into(), flat: "".into() };
        let b = LocationKey { project: "A".into(), tower: "B-C".into(), flat: "".into() };
        let c = LocationKey { project: "A".into(), tower: "B".into(), flat: "C".into() };
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: std::collections::HashSet<LocationKey> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_filename_record_serialize() {
        let image = ImageInfo::new(PathBuf::from("photos/P-T-F-I-D.jpg"));
        let record = FilenameRecord::new(
            RecordId(3),
            &image,
            RecordFields { project: "P".into(), ..Default::default() },
        );
        let json = serde_json::to_string(&record).expect("シリアライズ失敗");
        assert!(json.contains("\"id\":3"));
        assert!(json.contains("\"filename\":\"P-T-F-I-D.jpg\""));
        assert!(json.contains("\"project\":\"P\""));
    }
}
