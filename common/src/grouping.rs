//! 住戸ごとのグルーピング
//!
//! 編集後の表を project-tower-flat の連結キーで束ねる。最初に現れた行が
//! グループの inspector/date を決め、以降の行は画像だけを追加する。

use crate::types::{FilenameRecord, Group, LocationKey};
use std::collections::HashMap;

/// レコードをグループ化（出現順、各グループの画像はパス順）
pub fn group_records(records: &[FilenameRecord]) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    let mut index: HashMap<LocationKey, usize> = HashMap::new();

    for record in records {
        let key = LocationKey::from_fields(&record.fields);
        let slot = match index.get(&key) {
            Some(&i) => i,
            None => {
                groups.push(Group {
                    project: key.project.clone(),
                    tower: key.tower.clone(),
                    flat: key.flat.clone(),
                    inspector: record.fields.inspector.clone(),
                    date: record.fields.date.clone(),
                    images: Vec::new(),
                    key: key.clone(),
                });
                index.insert(key, groups.len() - 1);
                groups.len() - 1
            }
        };
        groups[slot].images.push(record.full_path().to_path_buf());
    }

    for group in &mut groups {
        group.images.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParsePolicy;
    use crate::table::RecordTable;
    use crate::types::{ImageInfo, RecordField, RecordId};
    use std::collections::HashSet;
    use std::path::PathBuf;

    fn table(names: &[&str]) -> RecordTable {
        let images: Vec<ImageInfo> = names
            .iter()
            .map(|n| ImageInfo::new(PathBuf::from("/in").join(n)))
            .collect();
        RecordTable::from_images(&images, ParsePolicy::Placeholder)
    }

    #[test]
    fn test_group_count_equals_distinct_keys() {
        let t = table(&[
            "P-T1-1A-Chan-1-1-2025 (2).jpg",
            "P-T1-1A-Chan-1-1-2025.jpg",
            "P-T1-1B-Chan-1-1-2025.jpg",
            "P-0-1B-Chan-1-1-2025.jpg",
            "Q-T1-1A-Lee-2-1-2025.jpg",
        ]);
        let groups = group_records(t.records());
        let distinct: HashSet<LocationKey> = t
            .records()
            .iter()
            .map(|r| LocationKey::from_fields(&r.fields))
            .collect();
        assert_eq!(groups.len(), distinct.len());
        assert_eq!(groups.len(), 4);
    }

    #[test]
    fn test_images_sorted_within_group() {
        let t = table(&[
            "P-T1-1A-Chan-1-1-2025 (2).jpg",
            "P-T1-1A-Chan-1-1-2025.jpg",
            "P-T1-1A-Chan-1-1-2025 (1).jpg",
        ]);
        let groups = group_records(t.records());
        assert_eq!(groups.len(), 1);
        let names: Vec<String> = groups[0]
            .images
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "P-T1-1A-Chan-1-1-2025 (1).jpg",
                "P-T1-1A-Chan-1-1-2025 (2).jpg",
                "P-T1-1A-Chan-1-1-2025.jpg",
            ]
        );
    }

    #[test]
    fn test_first_record_seeds_metadata() {
        let t = table(&["P-T1-1A-Chan-1-1-2025.jpg", "P-T1-1A-Lee-9-9-2025.jpg"]);
        let groups = group_records(t.records());
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].inspector, "Chan");
        assert_eq!(groups[0].date, "1-1-2025");
        assert_eq!(groups[0].images.len(), 2);
    }

    #[test]
    fn test_key_uses_trimmed_edits() {
        let mut t = table(&["P-T1-1A-Chan-1-1-2025.jpg", "P-T1-1B-Chan-1-1-2025.jpg"]);
        t.set_field(RecordId(2), RecordField::Flat, "  1A ").unwrap();
        t.set_field(RecordId(2), RecordField::Inspector, " Lee ").unwrap();

        let groups = group_records(t.records());
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].flat, "1A");
        assert_eq!(groups[0].images.len(), 2);
    }

    #[test]
    fn test_metadata_not_normalized() {
        let mut t = table(&["P-T1-1A-Chan-1-1-2025.jpg"]);
        t.set_field(RecordId(1), RecordField::Inspector, " Chan Tai Man ").unwrap();
        let groups = group_records(t.records());
        assert_eq!(groups[0].inspector, " Chan Tai Man ");
    }

    #[test]
    fn test_deleted_rows_contribute_nothing() {
        let mut t = table(&["P-T1-1A-Chan-1-1-2025.jpg", "Q-T1-1A-Chan-1-1-2025.jpg"]);
        t.remove(RecordId(1)).unwrap();
        let groups = group_records(t.records());
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].project, "Q");
        assert_eq!(groups[0].images, vec![PathBuf::from("/in/Q-T1-1A-Chan-1-1-2025.jpg")]);
    }

    #[test]
    fn test_group_order_is_first_seen() {
        let t = table(&["B-T-F-I-D.jpg", "A-T-F-I-D.jpg", "B-T-F-I-E.jpg"]);
        let groups = group_records(t.records());
        assert_eq!(groups[0].project, "B");
        assert_eq!(groups[1].project, "A");
    }

    #[test]
    fn test_rows_with_same_joined_key_merge() {
        let mut t = table(&["A-B-C-X-1.jpg", "A-B-C-Y-2.jpg"]);
        for (id, project, tower) in [(RecordId(1), "A-B", "C"), (RecordId(2), "A", "B-C")] {
            t.set_field(id, RecordField::Project, project).unwrap();
            t.set_field(id, RecordField::Tower, tower).unwrap();
            t.set_field(id, RecordField::Flat, "").unwrap();
        }

        let groups = group_records(t.records());
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].key.to_string(), "A-B-C-");
        // 最初の行の値がグループの値になる
        assert_eq!(groups[0].project, "A-B");
        assert_eq!(groups[0].tower, "C");
        assert_eq!(groups[0].inspector, "X");
        assert_eq!(groups[0].images.len(), 2);
    }

    #[test]
    fn test_empty_records() {
        assert!(group_records(&[]).is_empty());
    }
}
