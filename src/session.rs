//! 1回の処理（アップロード → レビュー → 生成）の状態
//!
//! 作業フォルダは TempDir で持ち、Session を破棄すると消える。
//! セッション間で共有する状態はない。

use crate::error::{ReportError, Result};
use crate::export::docx::ReportTemplate;
use crate::export::{self, package, GenerationOutcome};
use crate::scanner;
use inspection_report_common::{group_records, Group, ImageInfo, ParsePolicy, RecordTable};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const INPUT_DIR: &str = "input_images";
const OUTPUT_DIR: &str = "output_docs";

pub struct Session {
    work_dir: TempDir,
    policy: ParsePolicy,
    catalog: Vec<ImageInfo>,
    table: RecordTable,
}

impl Session {
    /// ZIPを展開して表を作る
    ///
    /// 対象拡張子の画像が1枚もなければエラー。
    pub fn open(archive: &Path, policy: ParsePolicy) -> Result<Self> {
        let work_dir = tempfile::Builder::new()
            .prefix("inspection-report-")
            .tempdir()?;
        let extract_dir = work_dir.path().join(INPUT_DIR);

        scanner::extract_archive(archive, &extract_dir)?;
        let catalog = scanner::scan_images(&extract_dir)?;
        if catalog.is_empty() {
            return Err(ReportError::NoImagesFound(archive.display().to_string()));
        }

        let table = RecordTable::from_images(&catalog, policy);
        tracing::info!(images = catalog.len(), %policy, "session opened");

        Ok(Self {
            work_dir,
            policy,
            catalog,
            table,
        })
    }

    pub fn policy(&self) -> ParsePolicy {
        self.policy
    }

    /// 展開済み画像（追加行の参照先）
    pub fn catalog(&self) -> &[ImageInfo] {
        &self.catalog
    }

    pub fn table(&self) -> &RecordTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut RecordTable {
        &mut self.table
    }

    pub fn output_dir(&self) -> PathBuf {
        self.work_dir.path().join(OUTPUT_DIR)
    }

    /// 現在の表（編集後）からグループを作る
    pub fn groups(&self) -> Vec<Group> {
        group_records(self.table.records())
    }

    /// 全グループの docx を出力フォルダに書き出す
    ///
    /// 前回の出力は消してから生成する。
    pub fn generate<F>(&self, template: &ReportTemplate, on_progress: F) -> Result<GenerationOutcome>
    where
        F: FnMut(usize, usize),
    {
        let output_dir = self.output_dir();
        if output_dir.exists() {
            std::fs::remove_dir_all(&output_dir)?;
        }
        export::generate_reports(&self.groups(), template, &output_dir, on_progress)
    }

    /// 出力フォルダをZIPにまとめる
    pub fn package(&self) -> Result<Vec<u8>> {
        package::package_directory(&self.output_dir())
    }
}
