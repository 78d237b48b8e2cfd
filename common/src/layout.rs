//! レポートのレイアウト定義
//!
//! 寸法は inch / pt 基準で持ち、docx 出力時に EMU / twip へ変換する。

// ============================================
// 固定文言
// ============================================

/// 表題
pub const REPORT_TITLE: &str = "Gas Water Heater Inspection Record";

/// メタデータ表のラベル（行順固定）
pub const METADATA_LABELS: [&str; 4] = [
    "Project Name/Location",
    "Flat",
    "Name of Inspector",
    "Inspection Date",
];

/// メタデータ表の列数（ラベル + 値）
pub const METADATA_COLUMNS: usize = 2;

// ============================================
// 写真配置
// ============================================

/// 写真の表示幅（inch）
pub const IMAGE_WIDTH_INCHES: f32 = 2.5;

/// 写真の後ろに入れる区切り
pub const IMAGE_SEPARATOR: &str = "        ";

/// 写真段落の前後余白（pt）
pub const IMAGE_PARAGRAPH_SPACING_PT: f32 = 12.0;

/// 写真段落の行間（倍率）
pub const IMAGE_LINE_SPACING: f32 = 1.2;

// ============================================
// 変換係数
// ============================================

/// 1inch = 914400 EMU
pub const EMU_PER_INCH: f32 = 914_400.0;

/// 1pt = 20 twip
pub const TWIPS_PER_PT: f32 = 20.0;

/// 行間 1.0 = 240
pub const LINE_UNITS: f32 = 240.0;

/// inch → EMU 変換
#[inline]
pub fn inches_to_emu(inches: f32) -> u64 {
    (inches * EMU_PER_INCH).round() as u64
}

/// pt → twip 変換
#[inline]
pub fn pt_to_twips(pt: f32) -> u32 {
    (pt * TWIPS_PER_PT).round() as u32
}

/// 固定幅に合わせた高さ（EMU）
pub fn scaled_extent_emu(width_inches: f32, pixel_width: u32, pixel_height: u32) -> (u64, u64) {
    let cx = inches_to_emu(width_inches);
    if pixel_width == 0 {
        return (cx, 0);
    }
    let cy = (cx as f64 * pixel_height as f64 / pixel_width as f64).round() as u64;
    (cx, cy)
}
