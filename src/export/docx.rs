//! 点検記録 (.docx) 生成
//!
//! WordprocessingML を直接書き出す。構成:
//! - 表題（中央寄せ）
//! - 4行×2列のメタデータ表（ラベル列は太字）
//! - 写真を並べた段落（固定幅、写真ごとに空白で区切る）

use super::xml::XmlBuilder;
use crate::error::{ReportError, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use image::{ImageFormat, ImageReader};
use inspection_report_common::layout::{
    pt_to_twips, scaled_extent_emu, IMAGE_LINE_SPACING, IMAGE_PARAGRAPH_SPACING_PT,
    IMAGE_SEPARATOR, IMAGE_WIDTH_INCHES, LINE_UNITS, METADATA_COLUMNS, METADATA_LABELS,
    REPORT_TITLE,
};
use inspection_report_common::{location_label, Group};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fmt;
use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// パッケージ内のパス
mod parts {
    pub const CONTENT_TYPES: &str = "[Content_Types].xml";
    pub const ROOT_RELS: &str = "_rels/.rels";
    pub const DOCUMENT: &str = "word/document.xml";
    pub const DOCUMENT_RELS: &str = "word/_rels/document.xml.rels";
    pub const STYLES: &str = "word/styles.xml";
    pub const CORE: &str = "docProps/core.xml";
    pub const MEDIA_DIR: &str = "word/media/";
}

mod ns {
    pub const W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
    pub const R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
    pub const WP: &str = "http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing";
    pub const A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
    pub const PIC: &str = "http://schemas.openxmlformats.org/drawingml/2006/picture";
    pub const CONTENT_TYPES: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
    pub const PACKAGE_RELS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
    pub const REL_DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    pub const REL_CORE: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
    pub const REL_STYLES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
    pub const REL_IMAGE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";
    pub const CORE_PROPS: &str =
        "http://schemas.openxmlformats.org/package/2006/metadata/core-properties";
}

/// Letter 縦、左右 1.25inch 余白（twip）
const PAGE_WIDTH_TWIPS: u32 = 12240;
const PAGE_HEIGHT_TWIPS: u32 = 15840;
const MARGIN_TOP_TWIPS: u32 = 1440;
const MARGIN_SIDE_TWIPS: u32 = 1800;
const CELL_WIDTH_TWIPS: u32 = (PAGE_WIDTH_TWIPS - MARGIN_SIDE_TWIPS * 2) / METADATA_COLUMNS as u32;

/// 埋め込める画像形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PictureFormat {
    Png,
    Jpeg,
}

impl PictureFormat {
    fn extension(&self) -> &'static str {
        match self {
            PictureFormat::Png => "png",
            PictureFormat::Jpeg => "jpeg",
        }
    }
}

#[derive(Debug, Clone)]
struct EmbeddedImage {
    source: PathBuf,
    format: PictureFormat,
    data: Vec<u8>,
    cx: u64,
    cy: u64,
}

/// メタデータ表の1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRow {
    pub label: String,
    pub value: String,
}

/// 画像の埋め込み失敗（生成は続行）
#[derive(Debug, Clone)]
pub struct ImageWarning {
    pub group: String,
    pub image: PathBuf,
    pub reason: String,
}

impl fmt::Display for ImageWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self
            .image
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.image.display().to_string());
        write!(f, "画像を追加できません: {} ({})", name, self.reason)
    }
}

/// 固定テンプレート
#[derive(Debug, Clone)]
pub struct ReportTemplate {
    pub title: String,
    pub image_width_inches: f32,
}

impl Default for ReportTemplate {
    fn default() -> Self {
        Self::embedded()
    }
}

impl ReportTemplate {
    /// 組み込みテンプレート
    pub fn embedded() -> Self {
        Self::new(REPORT_TITLE, IMAGE_WIDTH_INCHES)
    }

    pub fn new(title: impl Into<String>, image_width_inches: f32) -> Self {
        Self {
            title: title.into(),
            image_width_inches,
        }
    }

    /// ラベルだけ入った空のドキュメントを作る
    pub fn instantiate(&self) -> ReportDocument {
        ReportDocument {
            title: self.title.clone(),
            image_width_inches: self.image_width_inches,
            metadata: METADATA_LABELS
                .iter()
                .map(|label| MetadataRow {
                    label: label.to_string(),
                    value: String::new(),
                })
                .collect(),
            images: Vec::new(),
            created: Utc::now(),
        }
    }

    /// 空テンプレートを書き出し
    pub fn save_blank(&self, path: &Path) -> Result<()> {
        self.instantiate().save(path)
    }
}

/// 1住戸分の点検記録
#[derive(Debug, Clone)]
pub struct ReportDocument {
    title: String,
    image_width_inches: f32,
    metadata: Vec<MetadataRow>,
    images: Vec<EmbeddedImage>,
    created: DateTime<Utc>,
}

impl ReportDocument {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn metadata_rows(&self) -> &[MetadataRow] {
        &self.metadata
    }

    pub fn column_count(&self) -> usize {
        METADATA_COLUMNS
    }

    /// 埋め込み済み画像の元パス（挿入順）
    pub fn image_sources(&self) -> Vec<&Path> {
        self.images.iter().map(|i| i.source.as_path()).collect()
    }

    /// メタデータ表の値列を埋める
    pub fn fill_metadata(&mut self, group: &Group) {
        let values = [
            group.project.clone(),
            location_label(&group.tower, &group.flat),
            group.inspector.clone(),
            group.date.clone(),
        ];
        for (row, value) in self.metadata.iter_mut().zip(values) {
            row.value = value;
        }
    }

    /// 写真を追加
    ///
    /// 読み込めない場合はドキュメントを変更せずにエラーを返す。
    pub fn add_image(&mut self, path: &Path) -> Result<()> {
        let load_err = |e: &dyn fmt::Display| ReportError::ImageLoad(format!("{}: {}", path.display(), e));

        let data = std::fs::read(path).map_err(|e| load_err(&e))?;
        let reader = ImageReader::new(Cursor::new(data.as_slice()))
            .with_guessed_format()
            .map_err(|e| load_err(&e))?;

        let format = match reader.format() {
            Some(ImageFormat::Png) => PictureFormat::Png,
            Some(ImageFormat::Jpeg) => PictureFormat::Jpeg,
            Some(other) => return Err(load_err(&format!("未対応の画像形式 {:?}", other))),
            None => return Err(load_err(&"画像形式を判別できません")),
        };
        let (width, height) = reader.into_dimensions().map_err(|e| load_err(&e))?;
        let (cx, cy) = scaled_extent_emu(self.image_width_inches, width, height);

        self.images.push(EmbeddedImage {
            source: path.to_path_buf(),
            format,
            data,
            cx,
            cy,
        });
        Ok(())
    }

    /// docx のバイト列を生成
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default());

        let mut entries: Vec<(String, Vec<u8>)> = vec![
            (parts::CONTENT_TYPES.into(), content_types_xml()?),
            (parts::ROOT_RELS.into(), root_rels_xml()?),
            (parts::DOCUMENT.into(), self.document_xml()?),
            (parts::DOCUMENT_RELS.into(), self.document_rels_xml()?),
            (parts::STYLES.into(), styles_xml()?),
            (parts::CORE.into(), self.core_xml()?),
        ];
        for (i, image) in self.images.iter().enumerate() {
            entries.push((media_name(i, image), image.data.clone()));
        }

        for (name, data) in entries {
            zip.start_file(name, options)?;
            zip.write_all(&data)?;
        }

        Ok(zip.finish()?.into_inner())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    fn document_xml(&self) -> Result<Vec<u8>> {
        let mut xml = XmlBuilder::new()?;
        xml.start(
            "w:document",
            &[
                ("xmlns:w", ns::W),
                ("xmlns:r", ns::R),
                ("xmlns:wp", ns::WP),
                ("xmlns:a", ns::A),
                ("xmlns:pic", ns::PIC),
            ],
        )?;
        xml.start("w:body", &[])?;

        // 表題
        xml.start("w:p", &[])?;
        xml.start("w:pPr", &[])?;
        xml.empty("w:pStyle", &[("w:val", "Title")])?;
        xml.empty("w:jc", &[("w:val", "center")])?;
        xml.end("w:pPr")?;
        xml.start("w:r", &[])?;
        xml.text_element("w:t", &[], &self.title)?;
        xml.end("w:r")?;
        xml.end("w:p")?;

        self.write_metadata_table(&mut xml)?;
        self.write_image_paragraph(&mut xml)?;

        let width = PAGE_WIDTH_TWIPS.to_string();
        let height = PAGE_HEIGHT_TWIPS.to_string();
        let top = MARGIN_TOP_TWIPS.to_string();
        let side = MARGIN_SIDE_TWIPS.to_string();
        xml.start("w:sectPr", &[])?;
        xml.empty("w:pgSz", &[("w:w", width.as_str()), ("w:h", height.as_str())])?;
        xml.empty(
            "w:pgMar",
            &[
                ("w:top", top.as_str()),
                ("w:right", side.as_str()),
                ("w:bottom", top.as_str()),
                ("w:left", side.as_str()),
                ("w:header", "720"),
                ("w:footer", "720"),
                ("w:gutter", "0"),
            ],
        )?;
        xml.end("w:sectPr")?;

        xml.end("w:body")?;
        xml.end("w:document")?;
        Ok(xml.finish())
    }

    fn write_metadata_table(&self, xml: &mut XmlBuilder) -> Result<()> {
        let cell_width = CELL_WIDTH_TWIPS.to_string();

        xml.start("w:tbl", &[])?;
        xml.start("w:tblPr", &[])?;
        xml.empty("w:tblStyle", &[("w:val", "TableGrid")])?;
        xml.empty("w:tblW", &[("w:w", "0"), ("w:type", "auto")])?;
        xml.empty("w:tblLook", &[("w:val", "04A0")])?;
        xml.end("w:tblPr")?;

        xml.start("w:tblGrid", &[])?;
        for _ in 0..METADATA_COLUMNS {
            xml.empty("w:gridCol", &[("w:w", cell_width.as_str())])?;
        }
        xml.end("w:tblGrid")?;

        for row in &self.metadata {
            xml.start("w:tr", &[])?;
            for (text, bold) in [(&row.label, true), (&row.value, false)] {
                xml.start("w:tc", &[])?;
                xml.start("w:tcPr", &[])?;
                xml.empty("w:tcW", &[("w:w", cell_width.as_str()), ("w:type", "dxa")])?;
                xml.end("w:tcPr")?;
                xml.start("w:p", &[])?;
                xml.start("w:r", &[])?;
                if bold {
                    xml.start("w:rPr", &[])?;
                    xml.empty("w:b", &[])?;
                    xml.end("w:rPr")?;
                }
                xml.text_element("w:t", &[("xml:space", "preserve")], text)?;
                xml.end("w:r")?;
                xml.end("w:p")?;
                xml.end("w:tc")?;
            }
            xml.end("w:tr")?;
        }

        xml.end("w:tbl")
    }

    fn write_image_paragraph(&self, xml: &mut XmlBuilder) -> Result<()> {
        let spacing = pt_to_twips(IMAGE_PARAGRAPH_SPACING_PT).to_string();
        let line = ((IMAGE_LINE_SPACING * LINE_UNITS).round() as u32).to_string();

        xml.start("w:p", &[])?;
        xml.start("w:pPr", &[])?;
        xml.empty(
            "w:spacing",
            &[
                ("w:before", spacing.as_str()),
                ("w:after", spacing.as_str()),
                ("w:line", line.as_str()),
                ("w:lineRule", "auto"),
            ],
        )?;
        xml.end("w:pPr")?;

        for (i, image) in self.images.iter().enumerate() {
            write_inline_picture(xml, i, image)?;
            xml.start("w:r", &[])?;
            xml.text_element("w:t", &[("xml:space", "preserve")], IMAGE_SEPARATOR)?;
            xml.end("w:r")?;
        }

        xml.end("w:p")
    }

    fn document_rels_xml(&self) -> Result<Vec<u8>> {
        let mut xml = XmlBuilder::new()?;
        xml.start("Relationships", &[("xmlns", ns::PACKAGE_RELS)])?;
        xml.empty(
            "Relationship",
            &[("Id", "rId1"), ("Type", ns::REL_STYLES), ("Target", "styles.xml")],
        )?;
        for (i, image) in self.images.iter().enumerate() {
            let id = image_rel_id(i);
            let target = media_name(i, image);
            let target = target.trim_start_matches("word/");
            xml.empty(
                "Relationship",
                &[("Id", id.as_str()), ("Type", ns::REL_IMAGE), ("Target", target)],
            )?;
        }
        xml.end("Relationships")?;
        Ok(xml.finish())
    }

    fn core_xml(&self) -> Result<Vec<u8>> {
        let created = self.created.to_rfc3339_opts(SecondsFormat::Secs, true);
        let mut xml = XmlBuilder::new()?;
        xml.start(
            "cp:coreProperties",
            &[
                ("xmlns:cp", ns::CORE_PROPS),
                ("xmlns:dc", "http://purl.org/dc/elements/1.1/"),
                ("xmlns:dcterms", "http://purl.org/dc/terms/"),
                ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
            ],
        )?;
        xml.text_element("dc:title", &[], &self.title)?;
        xml.text_element("dc:creator", &[], env!("CARGO_PKG_NAME"))?;
        xml.text_element("dcterms:created", &[("xsi:type", "dcterms:W3CDTF")], created.as_str())?;
        xml.end("cp:coreProperties")?;
        Ok(xml.finish())
    }
}

fn image_rel_id(index: usize) -> String {
    // rId1 は styles
    format!("rId{}", index + 2)
}

fn media_name(index: usize, image: &EmbeddedImage) -> String {
    format!("{}image{}.{}", parts::MEDIA_DIR, index + 1, image.format.extension())
}

fn write_inline_picture(xml: &mut XmlBuilder, index: usize, image: &EmbeddedImage) -> Result<()> {
    let cx = image.cx.to_string();
    let cy = image.cy.to_string();
    let doc_pr_id = (index + 1).to_string();
    let name = format!("Picture {}", index + 1);
    let rel_id = image_rel_id(index);
    let file_name = image
        .source
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    xml.start("w:r", &[])?;
    xml.start("w:drawing", &[])?;
    xml.start(
        "wp:inline",
        &[("distT", "0"), ("distB", "0"), ("distL", "0"), ("distR", "0")],
    )?;
    xml.empty("wp:extent", &[("cx", cx.as_str()), ("cy", cy.as_str())])?;
    xml.empty("wp:docPr", &[("id", doc_pr_id.as_str()), ("name", name.as_str())])?;
    xml.start("wp:cNvGraphicFramePr", &[])?;
    xml.empty("a:graphicFrameLocks", &[("noChangeAspect", "1")])?;
    xml.end("wp:cNvGraphicFramePr")?;

    xml.start("a:graphic", &[])?;
    xml.start("a:graphicData", &[("uri", ns::PIC)])?;
    xml.start("pic:pic", &[])?;

    xml.start("pic:nvPicPr", &[])?;
    xml.empty("pic:cNvPr", &[("id", "0"), ("name", file_name.as_str())])?;
    xml.empty("pic:cNvPicPr", &[])?;
    xml.end("pic:nvPicPr")?;

    xml.start("pic:blipFill", &[])?;
    xml.empty("a:blip", &[("r:embed", rel_id.as_str())])?;
    xml.start("a:stretch", &[])?;
    xml.empty("a:fillRect", &[])?;
    xml.end("a:stretch")?;
    xml.end("pic:blipFill")?;

    xml.start("pic:spPr", &[])?;
    xml.start("a:xfrm", &[])?;
    xml.empty("a:off", &[("x", "0"), ("y", "0")])?;
    xml.empty("a:ext", &[("cx", cx.as_str()), ("cy", cy.as_str())])?;
    xml.end("a:xfrm")?;
    xml.start("a:prstGeom", &[("prst", "rect")])?;
    xml.empty("a:avLst", &[])?;
    xml.end("a:prstGeom")?;
    xml.end("pic:spPr")?;

    xml.end("pic:pic")?;
    xml.end("a:graphicData")?;
    xml.end("a:graphic")?;
    xml.end("wp:inline")?;
    xml.end("w:drawing")?;
    xml.end("w:r")
}

fn content_types_xml() -> Result<Vec<u8>> {
    let mut xml = XmlBuilder::new()?;
    xml.start("Types", &[("xmlns", ns::CONTENT_TYPES)])?;
    for (ext, content_type) in [
        ("rels", "application/vnd.openxmlformats-package.relationships+xml"),
        ("xml", "application/xml"),
        ("png", "image/png"),
        ("jpeg", "image/jpeg"),
    ] {
        xml.empty("Default", &[("Extension", ext), ("ContentType", content_type)])?;
    }
    for (part, content_type) in [
        (
            parts::DOCUMENT,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml",
        ),
        (
            parts::STYLES,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml",
        ),
        (parts::CORE, "application/vnd.openxmlformats-package.core-properties+xml"),
    ] {
        let part_name = format!("/{}", part);
        xml.empty("Override", &[("PartName", part_name.as_str()), ("ContentType", content_type)])?;
    }
    xml.end("Types")?;
    Ok(xml.finish())
}

fn root_rels_xml() -> Result<Vec<u8>> {
    let mut xml = XmlBuilder::new()?;
    xml.start("Relationships", &[("xmlns", ns::PACKAGE_RELS)])?;
    xml.empty(
        "Relationship",
        &[("Id", "rId1"), ("Type", ns::REL_DOCUMENT), ("Target", parts::DOCUMENT)],
    )?;
    xml.empty(
        "Relationship",
        &[("Id", "rId2"), ("Type", ns::REL_CORE), ("Target", parts::CORE)],
    )?;
    xml.end("Relationships")?;
    Ok(xml.finish())
}

fn styles_xml() -> Result<Vec<u8>> {
    let mut xml = XmlBuilder::new()?;
    xml.start("w:styles", &[("xmlns:w", ns::W)])?;

    xml.start("w:docDefaults", &[])?;
    xml.start("w:rPrDefault", &[])?;
    xml.start("w:rPr", &[])?;
    xml.empty(
        "w:rFonts",
        &[("w:ascii", "Calibri"), ("w:hAnsi", "Calibri"), ("w:eastAsia", "Calibri"), ("w:cs", "Calibri")],
    )?;
    xml.empty("w:sz", &[("w:val", "22")])?;
    xml.end("w:rPr")?;
    xml.end("w:rPrDefault")?;
    xml.end("w:docDefaults")?;

    xml.start("w:style", &[("w:type", "paragraph"), ("w:default", "1"), ("w:styleId", "Normal")])?;
    xml.empty("w:name", &[("w:val", "Normal")])?;
    xml.empty("w:qFormat", &[])?;
    xml.end("w:style")?;

    xml.start("w:style", &[("w:type", "paragraph"), ("w:styleId", "Title")])?;
    xml.empty("w:name", &[("w:val", "Title")])?;
    xml.empty("w:basedOn", &[("w:val", "Normal")])?;
    xml.empty("w:next", &[("w:val", "Normal")])?;
    xml.empty("w:qFormat", &[])?;
    xml.start("w:pPr", &[])?;
    xml.empty("w:spacing", &[("w:after", "240")])?;
    xml.end("w:pPr")?;
    xml.start("w:rPr", &[])?;
    xml.empty("w:sz", &[("w:val", "56")])?;
    xml.end("w:rPr")?;
    xml.end("w:style")?;

    xml.start("w:style", &[("w:type", "table"), ("w:default", "1"), ("w:styleId", "TableNormal")])?;
    xml.empty("w:name", &[("w:val", "Normal Table")])?;
    xml.start("w:tblPr", &[])?;
    xml.start("w:tblCellMar", &[])?;
    for (side, width) in [("w:top", "0"), ("w:left", "108"), ("w:bottom", "0"), ("w:right", "108")] {
        xml.empty(side, &[("w:w", width), ("w:type", "dxa")])?;
    }
    xml.end("w:tblCellMar")?;
    xml.end("w:tblPr")?;
    xml.end("w:style")?;

    xml.start("w:style", &[("w:type", "table"), ("w:styleId", "TableGrid")])?;
    xml.empty("w:name", &[("w:val", "Table Grid")])?;
    xml.empty("w:basedOn", &[("w:val", "TableNormal")])?;
    xml.start("w:tblPr", &[])?;
    xml.start("w:tblBorders", &[])?;
    for side in ["w:top", "w:left", "w:bottom", "w:right", "w:insideH", "w:insideV"] {
        xml.empty(
            side,
            &[("w:val", "single"), ("w:sz", "4"), ("w:space", "0"), ("w:color", "auto")],
        )?;
    }
    xml.end("w:tblBorders")?;
    xml.end("w:tblPr")?;
    xml.end("w:style")?;

    xml.end("w:styles")?;
    Ok(xml.finish())
}

/// グループから点検記録を組み立てる
///
/// 画像ごとの失敗は警告として返し、残りの画像の処理は続ける。
pub fn build_report(group: &Group, template: &ReportTemplate) -> (ReportDocument, Vec<ImageWarning>) {
    let mut doc = template.instantiate();
    doc.fill_metadata(group);

    let mut warnings = Vec::new();
    for path in &group.images {
        if let Err(e) = doc.add_image(path) {
            warnings.push(ImageWarning {
                group: group.key.to_string(),
                image: path.clone(),
                reason: e.to_string(),
            });
        }
    }

    (doc, warnings)
}

/// docx の最初の表をセル文字列として読み出す
pub fn read_metadata_table(docx: &[u8]) -> Result<Vec<Vec<String>>> {
    let mut archive = ZipArchive::new(Cursor::new(docx))?;
    let mut content = String::new();
    archive
        .by_name(parts::DOCUMENT)
        .map_err(|_| ReportError::DocxGeneration(format!("{} がありません", parts::DOCUMENT)))?
        .read_to_string(&mut content)?;

    let mut reader = Reader::from_str(&content);
    let mut rows = Vec::new();
    let mut row: Option<Vec<String>> = None;
    let mut cell: Option<String> = None;
    let mut in_table = false;
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:tbl" => in_table = true,
                b"w:tr" if in_table => row = Some(Vec::new()),
                b"w:tc" if in_table => cell = Some(String::new()),
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::Text(t) if in_text => {
                if let Some(c) = cell.as_mut() {
                    c.push_str(&t.unescape()?);
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:tc" => {
                    if let (Some(r), Some(c)) = (row.as_mut(), cell.take()) {
                        r.push(c);
                    }
                }
                b"w:tr" => {
                    if let Some(r) = row.take() {
                        rows.push(r);
                    }
                }
                b"w:tbl" => break,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(rows)
}
