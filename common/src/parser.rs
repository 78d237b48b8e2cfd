//! ファイル名パーサー
//!
//! `Project-Tower-Flat-Inspector-Date.jpg` 形式のファイル名を
//! RecordFields に分解する。
//!
//! 運用中に3種類の解析ルールが存在したため、ParsePolicy で1つを選ぶ。

use crate::types::RecordFields;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// 「棟なし」「住戸なし」を表すプレースホルダ
pub const PLACEHOLDER: &str = "0";

/// フィールド区切り
pub const FIELD_SEPARATOR: char = '-';

lazy_static! {
    /// 展開時に付く重複カウンタ 例: "name (2)"
    static ref DUPLICATE_SUFFIX: Regex = Regex::new(r"\s\(\d+\)$").unwrap();
}

/// ファイル名の解析ルール
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParsePolicy {
    /// 5要素以上のみ構造化
    Basic,
    /// 5要素に加えて 4要素（棟なし）・3要素（棟・住戸なし）を許容
    ShortForms,
    /// 5要素で tower/flat の "0" を空欄扱い（デフォルト）
    #[default]
    Placeholder,
}

impl std::str::FromStr for ParsePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "basic" => Ok(ParsePolicy::Basic),
            "short-forms" | "short" => Ok(ParsePolicy::ShortForms),
            "placeholder" | "zeros" => Ok(ParsePolicy::Placeholder),
            _ => Err(format!(
                "Unknown policy: {}. Use basic, short-forms, or placeholder",
                s
            )),
        }
    }
}

impl std::fmt::Display for ParsePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParsePolicy::Basic => write!(f, "basic"),
            ParsePolicy::ShortForms => write!(f, "short-forms"),
            ParsePolicy::Placeholder => write!(f, "placeholder"),
        }
    }
}

/// 拡張子を除去（先頭のドットは拡張子とみなさない）
///
/// ```
/// use inspection_report_common::parser::strip_extension;
///
/// assert_eq!(strip_extension("a-b.jpg"), "a-b");
/// assert_eq!(strip_extension("archive.tar.gz"), "archive.tar");
/// assert_eq!(strip_extension(".hidden"), ".hidden");
/// ```
pub fn strip_extension(file_name: &str) -> &str {
    let leading = file_name.len() - file_name.trim_start_matches('.').len();
    match file_name[leading..].rfind('.') {
        Some(pos) => &file_name[..leading + pos],
        None => file_name,
    }
}

/// 末尾の重複カウンタ " (n)" を除去
pub fn strip_duplicate_suffix(stem: &str) -> &str {
    match DUPLICATE_SUFFIX.find(stem) {
        Some(m) => &stem[..m.start()],
        None => stem,
    }
}

/// プレースホルダなら空文字に
fn elide_placeholder(value: &str) -> String {
    if value == PLACEHOLDER {
        String::new()
    } else {
        value.to_string()
    }
}

/// ファイル名を解析
///
/// 解析できない形でもエラーにはせず、先頭要素を project に入れて返す。
///
/// # Examples
/// ```
/// use inspection_report_common::{parse_filename, ParsePolicy};
///
/// let fields = parse_filename("ProjectB-0-0-InspectorB-21-01-2025.jpg", ParsePolicy::Placeholder);
/// assert_eq!(fields.project, "ProjectB");
/// assert_eq!(fields.tower, "");
/// assert_eq!(fields.date, "21-01-2025");
/// ```
pub fn parse_filename(file_name: &str, policy: ParsePolicy) -> RecordFields {
    let stem = strip_duplicate_suffix(strip_extension(file_name));
    let parts: Vec<&str> = stem.split(FIELD_SEPARATOR).collect();

    match (parts.len(), policy) {
        (n, _) if n >= 5 => {
            let (tower, flat) = if policy == ParsePolicy::Placeholder {
                (elide_placeholder(parts[1]), elide_placeholder(parts[2]))
            } else {
                (parts[1].to_string(), parts[2].to_string())
            };
            RecordFields {
                project: parts[0].to_string(),
                tower,
                flat,
                inspector: parts[3].to_string(),
                date: parts[4..].join("-"),
            }
        }
        (4, ParsePolicy::ShortForms) => RecordFields {
            project: parts[0].to_string(),
            flat: parts[1].to_string(),
            inspector: parts[2].to_string(),
            date: parts[3].to_string(),
            ..Default::default()
        },
        (3, ParsePolicy::ShortForms) => RecordFields {
            project: parts[0].to_string(),
            inspector: parts[1].to_string(),
            date: parts[2].to_string(),
            ..Default::default()
        },
        _ => RecordFields {
            project: parts.first().map(|p| p.to_string()).unwrap_or_default(),
            ..Default::default()
        },
    }
}
