// A .docx file is a ZIP archive of XML parts. docx-rs parses it into a
// typed tree:
//
//   Document
//     └── children: Vec<DocumentChild>
//           ├── Paragraph → Run → Text
//           └── Table → TableRow → TableCell → Paragraph | Table
//
// Résumé templates put a lot of content in layout tables, so tables are
// walked as well as top-level paragraphs. Each non-empty paragraph becomes
// one line of the extracted text.

use std::path::Path;

use docx_rs::{
    DocumentChild, Paragraph, ParagraphChild, RunChild, Table, TableCellContent, TableChild,
    TableRowChild,
};

use super::{RawDocument, TextExtractor};
use crate::errors::ScrapeError;

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn format(&self) -> &'static str {
        "DOCX"
    }

    fn extract(&self, path: &Path) -> Result<RawDocument, ScrapeError> {
        let bytes = std::fs::read(path)?;
        let text = extract_text_from_docx(&bytes)?;
        Ok(RawDocument::from_text(text))
    }
}

/// Parse DOCX bytes and return paragraph text joined with newlines.
pub fn extract_text_from_docx(bytes: &[u8]) -> Result<String, ScrapeError> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| ScrapeError::Extraction {
        format: "DOCX",
        reason: e.to_string(),
    })?;

    let mut paragraphs: Vec<String> = Vec::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(para) => push_paragraph(para, &mut paragraphs),
            DocumentChild::Table(table) => collect_table(table, &mut paragraphs),
            _ => {}
        }
    }

    Ok(paragraphs.join("\n"))
}

fn push_paragraph(para: &Paragraph, out: &mut Vec<String>) {
    let mut text = String::new();
    collect_runs(&para.children, &mut text);
    // Skip empty paragraphs (spacing, section breaks).
    if !text.trim().is_empty() {
        out.push(text);
    }
}

fn collect_table(table: &Table, out: &mut Vec<String>) {
    for TableChild::TableRow(row) in &table.rows {
        for TableRowChild::TableCell(cell) in &row.cells {
            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(para) => push_paragraph(para, out),
                    TableCellContent::Table(inner) => collect_table(inner, out),
                    _ => {}
                }
            }
        }
    }
}

/// Runs within a paragraph are fragments of the same line and are
/// concatenated without a separator. Hyperlinks carry their own runs.
fn collect_runs(children: &[ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for rc in &run.children {
                    match rc {
                        RunChild::Text(t) => text.push_str(&t.text),
                        RunChild::Tab(_) => text.push('\t'),
                        RunChild::Break(_) => text.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => collect_runs(&link.children, text),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Run, TableCell, TableRow};

    fn para(text: &str) -> Paragraph {
        Paragraph::new().add_run(Run::new().add_text(text))
    }

    fn write_docx(docx: Docx) -> tempfile::NamedTempFile {
        let file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        docx.build().pack(file.as_file()).unwrap();
        file
    }

    #[test]
    fn test_paragraphs_become_lines() {
        let file = write_docx(
            Docx::new()
                .add_paragraph(para("Jane Doe"))
                .add_paragraph(Paragraph::new())
                .add_paragraph(para("EXPERIENCE"))
                .add_paragraph(
                    Paragraph::new()
                        .add_run(Run::new().add_text("Acme"))
                        .add_run(Run::new().add_text("-2019")),
                ),
        );

        let doc = DocxExtractor.extract(file.path()).unwrap();
        assert_eq!(doc.lines, vec!["Jane Doe", "EXPERIENCE", "Acme-2019"]);
    }

    #[test]
    fn test_table_cells_are_extracted() {
        let table = Table::new(vec![TableRow::new(vec![
            TableCell::new().add_paragraph(para("EDUCATION")),
            TableCell::new().add_paragraph(para("MIT 2015")),
        ])]);
        let file = write_docx(Docx::new().add_paragraph(para("Jane Doe")).add_table(table));

        let doc = DocxExtractor.extract(file.path()).unwrap();
        assert_eq!(doc.lines, vec!["Jane Doe", "EDUCATION", "MIT 2015"]);
    }

    #[test]
    fn test_corrupt_docx_is_an_extraction_error() {
        let err = extract_text_from_docx(b"PK\x03\x04 truncated").unwrap_err();
        assert_eq!(err.code(), "EXTRACTION_FAILURE");
    }
}
