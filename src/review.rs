//! 対話式レビューモジュール
//!
//! 解析結果の表を確認し、行の編集・追加・削除を行ってから生成に進む。

use crate::error::{ReportError, Result};
use crate::session::Session;
use dialoguer::{Confirm, Input, Select};
use inspection_report_common::{
    group_records, FilenameRecord, RecordField, RecordId, RecordTable,
};

/// メニュー操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
    /// 行を編集
    Edit,
    /// 行を追加
    Add,
    /// 行を削除
    Delete,
    /// グループ一覧を表示
    ShowGroups,
    /// 生成へ進む
    Finish,
    /// 中止
    Abort,
}

impl ReviewAction {
    pub const MENU: [ReviewAction; 6] = [
        ReviewAction::Edit,
        ReviewAction::Add,
        ReviewAction::Delete,
        ReviewAction::ShowGroups,
        ReviewAction::Finish,
        ReviewAction::Abort,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReviewAction::Edit => "行を編集",
            ReviewAction::Add => "行を追加",
            ReviewAction::Delete => "行を削除",
            ReviewAction::ShowGroups => "グループを確認",
            ReviewAction::Finish => "生成へ進む",
            ReviewAction::Abort => "中止",
        }
    }
}

/// レビュー結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewOutcome {
    Proceed,
    Abort,
}

/// 1行の表示
pub fn format_row(record: &FilenameRecord) -> String {
    let fields: Vec<String> = RecordField::ALL
        .iter()
        .map(|f| format!("{}={}", f, record.fields.get(*f)))
        .collect();
    format!("#{:<3} {}  [{}]", record.id(), fields.join(" | "), record.filename())
}

/// 現在の表から作られるグループの一覧
pub fn group_preview(table: &RecordTable) -> Vec<String> {
    group_records(table.records())
        .iter()
        .map(|g| format!("{} ({}枚)", g.key, g.images.len()))
        .collect()
}

/// 複数フィールドをまとめて反映、変更したフィールド数を返す
pub fn apply_edit(table: &mut RecordTable, id: RecordId, edits: &[(RecordField, String)]) -> Result<usize> {
    let record = table
        .get(id)
        .ok_or(inspection_report_common::Error::RecordNotFound(id))?;
    let changed: Vec<(RecordField, String)> = edits
        .iter()
        .filter(|(field, value)| record.fields.get(*field) != value.as_str())
        .cloned()
        .collect();

    for (field, value) in &changed {
        table.set_field(id, *field, value.clone())?;
    }
    Ok(changed.len())
}

fn interaction_err(e: dialoguer::Error) -> ReportError {
    ReportError::Interaction(e.to_string())
}

fn print_table(table: &RecordTable) {
    println!("\n📋 レコード: {}件", table.len());
    for record in table.records() {
        println!("  {}", format_row(record));
    }
    println!();
}

fn select_row(table: &RecordTable, prompt: &str) -> Result<Option<RecordId>> {
    if table.is_empty() {
        println!("⚠ 行がありません");
        return Ok(None);
    }
    let items: Vec<String> = table.records().iter().map(format_row).collect();
    let index = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(interaction_err)?;
    Ok(index.map(|i| table.records()[i].id()))
}

fn prompt_fields(record: &FilenameRecord) -> Result<Vec<(RecordField, String)>> {
    let mut edits = Vec::new();
    for field in RecordField::ALL {
        let value: String = Input::new()
            .with_prompt(field.label())
            .with_initial_text(record.fields.get(field))
            .allow_empty(true)
            .interact_text()
            .map_err(interaction_err)?;
        edits.push((field, value));
    }
    Ok(edits)
}

/// 対話式でレビュー
pub fn run_interactive_review(session: &mut Session) -> Result<ReviewOutcome> {
    println!("操作: 行の編集・追加・削除のあと「生成へ進む」を選択");
    println!("---");

    loop {
        print_table(session.table());

        let labels: Vec<&str> = ReviewAction::MENU.iter().map(|a| a.label()).collect();
        let choice = Select::new()
            .with_prompt("操作を選択")
            .items(&labels)
            .default(0)
            .interact()
            .map_err(interaction_err)?;

        match ReviewAction::MENU[choice] {
            ReviewAction::Edit => {
                let Some(id) = select_row(session.table(), "編集する行")? else {
                    continue;
                };
                let Some(record) = session.table().get(id).cloned() else {
                    continue;
                };
                let edits = prompt_fields(&record)?;
                let changed = apply_edit(session.table_mut(), id, &edits)?;
                println!("  → #{}: {}項目を変更\n", id, changed);
            }
            ReviewAction::Add => {
                let items: Vec<String> = session
                    .catalog()
                    .iter()
                    .map(|img| img.path.display().to_string())
                    .collect();
                let index = Select::new()
                    .with_prompt("追加する画像")
                    .items(&items)
                    .default(0)
                    .interact_opt()
                    .map_err(interaction_err)?;
                let Some(index) = index else {
                    continue;
                };
                let image = session.catalog()[index].clone();
                let policy = session.policy();
                let id = session.table_mut().add_row(&image, policy);

                if let Some(record) = session.table().get(id).cloned() {
                    let edits = prompt_fields(&record)?;
                    apply_edit(session.table_mut(), id, &edits)?;
                }
                println!("  → #{} を追加\n", id);
            }
            ReviewAction::Delete => {
                let Some(id) = select_row(session.table(), "削除する行")? else {
                    continue;
                };
                let confirmed = Confirm::new()
                    .with_prompt(format!("#{} を削除しますか?", id))
                    .default(false)
                    .interact()
                    .map_err(interaction_err)?;
                if confirmed {
                    session.table_mut().remove(id)?;
                    println!("  → #{} を削除\n", id);
                }
            }
            ReviewAction::ShowGroups => {
                let preview = group_preview(session.table());
                println!("\n📍 グループ: {}件", preview.len());
                for line in preview {
                    println!("  {}", line);
                }
            }
            ReviewAction::Finish => {
                if session.table().is_empty() {
                    println!("⚠ 行がすべて削除されています");
                    continue;
                }
                return Ok(ReviewOutcome::Proceed);
            }
            ReviewAction::Abort => return Ok(ReviewOutcome::Abort),
        }
    }
}
