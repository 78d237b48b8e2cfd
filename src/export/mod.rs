pub mod docx;
pub mod package;
mod xml;

use crate::error::Result;
use docx::{build_report, ImageWarning, ReportTemplate};
use inspection_report_common::{dedupe_file_name, report_file_name, Group};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// 1グループ分の生成失敗
#[derive(Debug, Clone)]
pub struct GroupFailure {
    pub group: String,
    pub reason: String,
}

/// 生成結果
#[derive(Debug, Clone, Default)]
pub struct GenerationOutcome {
    pub written: Vec<PathBuf>,
    pub warnings: Vec<ImageWarning>,
    pub failures: Vec<GroupFailure>,
}

/// グループごとに docx を書き出す
///
/// 1グループの失敗は記録して次へ進む（他グループは巻き戻さない）。
/// `on_progress(done, total)` は各グループの処理後に呼ばれる。
pub fn generate_reports<F>(
    groups: &[Group],
    template: &ReportTemplate,
    output_dir: &Path,
    mut on_progress: F,
) -> Result<GenerationOutcome>
where
    F: FnMut(usize, usize),
{
    std::fs::create_dir_all(output_dir)?;

    let mut outcome = GenerationOutcome::default();
    let mut used_names = HashSet::new();
    let total = groups.len();

    for (i, group) in groups.iter().enumerate() {
        let (doc, warnings) = build_report(group, template);
        for warning in &warnings {
            tracing::warn!(group = %warning.group, image = %warning.image.display(), "{}", warning.reason);
        }
        outcome.warnings.extend(warnings);

        let name = report_file_name(&group.project, &group.tower, &group.flat);
        let name = dedupe_file_name(&name, &mut used_names);
        let path = output_dir.join(&name);

        match doc.save(&path) {
            Ok(()) => {
                tracing::debug!(group = %group.key, file = %name, images = group.images.len(), "report written");
                outcome.written.push(path);
            }
            Err(e) => {
                tracing::error!(group = %group.key, "report failed: {}", e);
                outcome.failures.push(GroupFailure {
                    group: group.key.to_string(),
                    reason: e.to_string(),
                });
            }
        }

        on_progress(i + 1, total);
    }

    Ok(outcome)
}
