use crate::error::{ReportError, Result};
use inspection_report_common::layout::{IMAGE_WIDTH_INCHES, REPORT_TITLE};
use inspection_report_common::ParsePolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 出力ZIPの既定ファイル名
pub const DEFAULT_OUTPUT_NAME: &str = "Inspection_Reports.zip";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parse_policy: ParsePolicy,
    pub report_title: String,
    pub image_width_inches: f32,
    pub output_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            parse_policy: ParsePolicy::default(),
            report_title: REPORT_TITLE.into(),
            image_width_inches: IMAGE_WIDTH_INCHES,
            output_name: DEFAULT_OUTPUT_NAME.into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// ファイルがなければデフォルト
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// 壊れた設定ファイルでも起動できるように読み込む（`config` サブコマンド用）
    ///
    /// 読めなければ警告を出してデフォルトを返す。保存すれば上書きされる。
    pub fn load_or_default() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_from_or_default(&path),
            Err(e) => {
                tracing::warn!("設定ファイルの場所を特定できません: {}", e);
                Self::default()
            }
        }
    }

    pub fn load_from_or_default(config_path: &Path) -> Self {
        Self::load_from(config_path).unwrap_or_else(|e| {
            tracing::warn!(path = %config_path.display(), "設定を読み込めないためデフォルトを使用: {}", e);
            Self::default()
        })
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ReportError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("inspection-report").join("config.json"))
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.image_width_inches > 0.0) {
            return Err(ReportError::Config(format!(
                "image_width_inches は正の値が必要です: {}",
                self.image_width_inches
            )));
        }
        if self.output_name.trim().is_empty() {
            return Err(ReportError::Config("output_name が空です".into()));
        }
        Ok(())
    }

    pub fn set_parse_policy(&mut self, policy: ParsePolicy) -> Result<()> {
        self.parse_policy = policy;
        self.save()
    }
}
