//! ZIP展開と画像の収集

use crate::error::{ReportError, Result};
use inspection_report_common::ImageInfo;
use std::fs::File;
use std::path::Path;
use walkdir::WalkDir;
use zip::ZipArchive;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// macOS のZIPに混入するリソースフォーク用フォルダ
const RESOURCE_FORK_DIR: &str = "__MACOSX";

/// ZIPを展開
pub fn extract_archive(archive_path: &Path, dest: &Path) -> Result<()> {
    if !archive_path.is_file() {
        return Err(ReportError::FileNotFound(archive_path.display().to_string()));
    }

    let file = File::open(archive_path)?;
    let mut archive = ZipArchive::new(file)?;
    std::fs::create_dir_all(dest)?;
    // enclosed_name で親ディレクトリ外への展開は弾かれる
    archive.extract(dest)?;

    tracing::debug!(entries = archive.len(), dest = %dest.display(), "archive extracted");
    Ok(())
}

fn is_image_extension(ext: &str) -> bool {
    let ext = ext.to_lowercase();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}

fn is_archive_artifact(entry: &walkdir::DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    name == RESOURCE_FORK_DIR || name.starts_with("._")
}

/// フォルダ以下（サブフォルダ含む）の画像を収集
pub fn scan_images(folder: &Path) -> Result<Vec<ImageInfo>> {
    if !folder.is_dir() {
        return Err(ReportError::FolderNotFound(folder.display().to_string()));
    }

    let mut images = Vec::new();

    for entry in WalkDir::new(folder)
        .into_iter()
        .filter_entry(|e| !is_archive_artifact(e))
    {
        let entry = entry?;
        let path = entry.path();

        if !entry.file_type().is_file() {
            continue;
        }

        let matches = path
            .extension()
            .map(|ext| is_image_extension(&ext.to_string_lossy()))
            .unwrap_or(false);
        if matches {
            images.push(ImageInfo::new(path.to_path_buf()));
        }
    }

    // パスでソート
    images.sort_by(|a, b| a.path.as_os_str().cmp(b.path.as_os_str()));

    Ok(images)
}
