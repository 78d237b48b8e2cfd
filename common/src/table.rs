//! レコード表（レビュー画面で編集される表）
//!
//! 行はIDで参照する。位置インデックスでは参照しない。

use crate::error::{Error, Result};
use crate::parser::{parse_filename, ParsePolicy};
use crate::types::{FilenameRecord, ImageInfo, RecordField, RecordId};

/// 編集可能なレコード表
#[derive(Debug, Clone, Default)]
pub struct RecordTable {
    records: Vec<FilenameRecord>,
    next_id: u32,
}

impl RecordTable {
    /// 展開済み画像から表を作成（ID は 1 から順に採番）
    pub fn from_images(images: &[ImageInfo], policy: ParsePolicy) -> Self {
        let mut table = Self::default();
        for image in images {
            table.add_row(image, policy);
        }
        table
    }

    pub fn records(&self) -> &[FilenameRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&FilenameRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    fn get_mut(&mut self, id: RecordId) -> Result<&mut FilenameRecord> {
        self.records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(Error::RecordNotFound(id))
    }

    /// 1フィールドを書き換え
    pub fn set_field(&mut self, id: RecordId, field: RecordField, value: impl Into<String>) -> Result<()> {
        self.get_mut(id)?.fields.set(field, value);
        Ok(())
    }

    /// 行を削除
    pub fn remove(&mut self, id: RecordId) -> Result<FilenameRecord> {
        let pos = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(Error::RecordNotFound(id))?;
        Ok(self.records.remove(pos))
    }

    /// 行を追加
    ///
    /// 追加行は必ずカタログ上の画像を参照するので、画像パスが解決できない行は作れない。
    pub fn add_row(&mut self, image: &ImageInfo, policy: ParsePolicy) -> RecordId {
        self.next_id += 1;
        let id = RecordId(self.next_id);
        let fields = parse_filename(&image.file_name, policy);
        self.records.push(FilenameRecord::new(id, image, fields));
        id
    }

    /// 現在の表をJSONに
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }
}
