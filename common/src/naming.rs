//! 表示ラベルと出力ファイル名の規則

use crate::types::KEY_SEPARATOR;
use std::collections::HashSet;

/// 出力ドキュメントの拡張子
pub const REPORT_EXTENSION: &str = "docx";

fn non_empty<'a>(values: &[&'a str]) -> Vec<&'a str> {
    values.iter().copied().filter(|v| !v.is_empty()).collect()
}

/// メタデータ表「Flat」欄: tower と flat の空でない方をスペース区切り
pub fn location_label(tower: &str, flat: &str) -> String {
    non_empty(&[tower, flat]).join(" ")
}

/// 出力ファイル名: project/tower/flat の空でない値を `-` で連結
///
/// パス区切り文字はサブディレクトリと解釈されないよう `_` に置換する。
/// 3つとも空なら拡張子だけの名前 (`.docx`) になる。
pub fn report_file_name(project: &str, tower: &str, flat: &str) -> String {
    let stem = non_empty(&[project, tower, flat]).join(KEY_SEPARATOR);
    format!("{}.{}", stem, REPORT_EXTENSION).replace(['/', '\\'], "_")
}

/// 同一実行内で名前が重複したら " (2)", " (3)" ... を付ける
pub fn dedupe_file_name(name: &str, used: &mut HashSet<String>) -> String {
    if used.insert(name.to_string()) {
        return name.to_string();
    }

    let (stem, ext) = match name.rfind('.') {
        Some(pos) => (&name[..pos], &name[pos..]),
        None => (name, ""),
    };
    let mut n = 2;
    loop {
        let candidate = format!("{} ({}){}", stem, n, ext);
        if used.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_label() {
        assert_eq!(location_label("T1", "1A"), "T1 1A");
        assert_eq!(location_label("", "1A"), "1A");
        assert_eq!(location_label("T1", ""), "T1");
        assert_eq!(location_label("", ""), "");
    }

    #[test]
    fn test_report_file_name() {
        assert_eq!(report_file_name("P", "T1", "1A"), "P-T1-1A.docx");
        assert_eq!(report_file_name("P", "", "1A"), "P-1A.docx");
        assert_eq!(report_file_name("P", "", ""), "P.docx");
    }

    #[test]
    fn test_report_file_name_replaces_separators() {
        assert_eq!(report_file_name("A/B", "T1", "1\\2"), "A_B-T1-1_2.docx");
    }

    #[test]
    fn test_report_file_name_all_empty() {
        assert_eq!(report_file_name("", "", ""), ".docx");
    }

    #[test]
    fn test_dedupe_extension_only_name() {
        let mut used = HashSet::new();
        assert_eq!(dedupe_file_name(".docx", &mut used), ".docx");
        assert_eq!(dedupe_file_name(".docx", &mut used), " (2).docx");
    }

    #[test]
    fn test_dedupe_file_name() {
        let mut used = HashSet::new();
        assert_eq!(dedupe_file_name("P-T1.docx", &mut used), "P-T1.docx");
        assert_eq!(dedupe_file_name("P-T1.docx", &mut used), "P-T1 (2).docx");
        assert_eq!(dedupe_file_name("P-T1.docx", &mut used), "P-T1 (3).docx");
        assert_eq!(dedupe_file_name("Q.docx", &mut used), "Q.docx");
    }
}
