//! Workbooks generated for the integration tests.
//!
//! The sample sheet is laid out around the week of 2024-03-11 .. 2024-03-17
//! (serial 45362 is Monday 2024-03-11 in the 1900 date system).
#![allow(dead_code)]

use std::io::Cursor;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

pub const REFERENCE: &str = "2024-03-13T10:00:00";

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
<Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>
</Types>"#;

const WORKBOOK: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
<sheets><sheet name="DBA Review" sheetId="1" r:id="rId1"/></sheets>
</workbook>"#;

const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
<Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/sharedStrings" Target="sharedStrings.xml"/>
</Relationships>"#;

/// Style 1 uses built-in format 22 (`m/d/yy h:mm`), style 2 a custom date format.
const STYLES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
<numFmts count="1"><numFmt numFmtId="164" formatCode="yyyy\-mm\-dd"/></numFmts>
<cellXfs count="3"><xf numFmtId="0" fontId="0"/><xf numFmtId="22" fontId="0" applyNumberFormat="1"/><xf numFmtId="164" fontId="0" applyNumberFormat="1"/></cellXfs>
</styleSheet>"#;

const SHARED_STRINGS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" count="6" uniqueCount="6">
<si><t>Card Link</t></si>
<si><t>Request Time</t></si>
<si><t>Reviewer</t></si>
<si><t>https://board.example.com/c/1</t></si>
<si><t>Ana</t></si>
<si><r><t>https://board.example.com/c/</t></r><r><t>5</t></r></si>
</sst>"#;

/// | Card Link | Request Time        | Review Done Time | Reviewer |
/// | c/1       | Sun 03-10 12:00     | Tue 03-12 06:00  | Ana      |
/// | c/2       | Tue 03-12 12:00     | Wed 03-13 09:36  |          |
/// | c/3       | Thu 03-14 (date)    |                  |          |
/// | c/4       | 03-17T23:59:59 (d)  | Mon 03-18 00:00  | Bo       |
/// | c/5       | "2024-03-12" (text) | Mon 03-11 00:00  | Cy       |
const SHEET: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
<dimension ref="A1:D6"/>
<sheetData>
<row r="1"><c r="A1" t="s"><v>0</v></c><c r="B1" t="s"><v>1</v></c><c r="C1" t="inlineStr"><is><t>Review Done Time</t></is></c><c r="D1" t="s"><v>2</v></c></row>
<row r="2"><c r="A2" t="s"><v>3</v></c><c r="B2" s="1"><v>45361.5</v></c><c r="C2" s="1"><v>45363.25</v></c><c r="D2" t="s"><v>4</v></c></row>
<row r="3"><c r="A3" t="inlineStr"><is><t>https://board.example.com/c/2</t></is></c><c r="B3" s="1"><v>45363.5</v></c><c r="C3" s="1"><v>45364.4</v></c><c r="D3" t="inlineStr"><is><t></t></is></c></row>
<row r="4"><c r="A4" t="str"><v>https://board.example.com/c/3</v></c><c r="B4" s="2"><v>45365</v></c></row>
<row r="5"><c r="A5" t="inlineStr"><is><t>https://board.example.com/c/4</t></is></c><c r="B5" t="d"><v>2024-03-17T23:59:59</v></c><c r="C5" s="1"><v>45369</v></c><c r="D5" t="inlineStr"><is><t>Bo</t></is></c></row>
<row r="6"><c r="A6" t="s"><v>5</v></c><c r="B6" t="inlineStr"><is><t>2024-03-12</t></is></c><c r="C6" s="1"><v>45362</v></c><c r="D6" t="inlineStr"><is><t>Cy</t></is></c></row>
</sheetData>
</worksheet>"#;

/// Packs `(name, content)` parts into xlsx bytes.
pub fn build_xlsx(parts: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in parts {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .expect("start zip entry");
        writer.write_all(content.as_bytes()).expect("write zip entry");
    }
    writer.finish().expect("finish zip").into_inner()
}

/// The sample review workbook with `sheet` as its only worksheet.
pub fn workbook_with_sheet(sheet: &str) -> Vec<u8> {
    build_xlsx(&[
        ("[Content_Types].xml", CONTENT_TYPES),
        ("xl/workbook.xml", WORKBOOK),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS),
        ("xl/styles.xml", STYLES),
        ("xl/sharedStrings.xml", SHARED_STRINGS),
        ("xl/worksheets/sheet1.xml", sheet),
    ])
}

pub fn review_workbook() -> Vec<u8> {
    workbook_with_sheet(SHEET)
}

/// Same rows, but the review column is named `Closed`.
pub fn workbook_without_review_column() -> Vec<u8> {
    let sheet = SHEET.replace("<t>Review Done Time</t>", "<t>Closed</t>");
    workbook_with_sheet(&sheet)
}

/// Writes `bytes` to `requests.xlsx` in a fresh temporary directory.
pub fn write_temp(bytes: &[u8]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("requests.xlsx");
    std::fs::write(&path, bytes).expect("write workbook");
    (dir, path)
}

pub const NEW_REQUESTS: [&str; 3] = [
    "https://board.example.com/c/2",
    "https://board.example.com/c/3",
    "https://board.example.com/c/4",
];

pub const REVIEWED_REQUESTS: [&str; 2] = [
    "https://board.example.com/c/1",
    "https://board.example.com/c/5",
];
