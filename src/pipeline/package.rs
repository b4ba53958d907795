//! OOXML packaging: WordprocessingML generation and ZIP container assembly.
//!
//! ## Hyperlinks in WordprocessingML
//!
//! A clickable external link needs two cooperating pieces:
//!
//! 1. A relationship in `word/_rels/document.xml.rels` with the standard
//!    hyperlink relationship type, `TargetMode="External"`, and the target
//!    URL.
//! 2. A `<w:hyperlink r:id="…">` element in `word/document.xml` wrapping the
//!    visible run, which carries the fixed visual style (colour `0563C1`,
//!    single underline) inline.
//!
//! Relationship ids are assigned in document order starting at `rId2`
//! (`rId1` is the styles part). The package is assembled entirely in memory
//! so callers can hand the bytes to a download response or write them to
//! disk themselves.

use crate::document::{HyperlinkedDocument, Run};
use crate::error::ComposeError;
use std::io::{Cursor, Write};
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Fixed name offered for the produced artifact.
pub const DOCX_FILENAME: &str = "communication_template.docx";

/// MIME type of the produced artifact.
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Hyperlink run colour (hex RGB, Word's default link blue).
const HYPERLINK_COLOR: &str = "0563C1";

const HYPERLINK_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink";

/// Assemble the complete .docx package in memory.
pub fn package_docx(doc: &HyperlinkedDocument) -> Result<Vec<u8>, ComposeError> {
    let (document, urls) = document_xml(doc);
    let document_rels = document_rels_xml(&urls);

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let opt = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let parts: [(&str, &str); 5] = [
        ("[Content_Types].xml", CONTENT_TYPES_XML),
        ("_rels/.rels", PACKAGE_RELS_XML),
        ("word/document.xml", document.as_str()),
        ("word/_rels/document.xml.rels", document_rels.as_str()),
        ("word/styles.xml", STYLES_XML),
    ];

    for (name, content) in parts {
        zip.start_file(name, opt)
            .map_err(|e| ComposeError::PackagingFailed(format!("{name}: {e}")))?;
        zip.write_all(content.as_bytes())
            .map_err(|e| ComposeError::PackagingFailed(format!("{name}: {e}")))?;
    }

    let cursor = zip
        .finish()
        .map_err(|e| ComposeError::PackagingFailed(e.to_string()))?;

    let bytes = cursor.into_inner();
    debug!("Packaged .docx: {} bytes, {} hyperlinks", bytes.len(), urls.len());
    Ok(bytes)
}

/// Render `word/document.xml` plus the hyperlink target URLs in the order
/// their relationship ids were assigned (`rId2`, `rId3`, …).
fn document_xml(doc: &HyperlinkedDocument) -> (String, Vec<String>) {
    let mut body = String::new();
    let mut urls: Vec<String> = Vec::new();

    for paragraph in &doc.paragraphs {
        body.push_str("<w:p>");
        for run in &paragraph.runs {
            match run {
                Run::Text(text) => {
                    if text.is_empty() {
                        continue;
                    }
                    body.push_str(r#"<w:r><w:t xml:space="preserve">"#);
                    body.push_str(&xml_escape(text));
                    body.push_str("</w:t></w:r>");
                }
                Run::Hyperlink { text, url } => {
                    let rid = format!("rId{}", urls.len() + 2);
                    urls.push(url.clone());
                    body.push_str(&format!(
                        r#"<w:hyperlink r:id="{rid}"><w:r><w:rPr><w:color w:val="{HYPERLINK_COLOR}"/><w:u w:val="single"/></w:rPr><w:t xml:space="preserve">{}</w:t></w:r></w:hyperlink>"#,
                        xml_escape(text)
                    ));
                }
            }
        }
        body.push_str("</w:p>");
    }

    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"
 xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    {body}
    <w:sectPr>
      <w:pgSz w:w="12240" w:h="15840"/>
      <w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="708" w:footer="708" w:gutter="0"/>
    </w:sectPr>
  </w:body>
</w:document>"#
    );

    (xml, urls)
}

/// Render `word/_rels/document.xml.rels`: the styles part plus one external
/// relationship per hyperlink, ids matching [`document_xml`]'s assignment.
fn document_rels_xml(urls: &[String]) -> String {
    let mut rels = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
"#,
    );
    for (i, url) in urls.iter().enumerate() {
        rels.push_str(&format!(
            "  <Relationship Id=\"rId{}\" Type=\"{}\" Target=\"{}\" TargetMode=\"External\"/>\n",
            i + 2,
            HYPERLINK_REL_TYPE,
            xml_escape(url)
        ));
    }
    rels.push_str("</Relationships>");
    rels
}

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
  <Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
</Types>"#;

const PACKAGE_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#;

const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:style w:type="paragraph" w:default="1" w:styleId="Normal">
    <w:name w:val="Normal"/>
    <w:qFormat/>
  </w:style>
</w:styles>"#;

fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Paragraph, Run};
    use std::io::Read;

    fn sample_doc() -> HyperlinkedDocument {
        HyperlinkedDocument {
            paragraphs: vec![
                Paragraph {
                    runs: vec![Run::Text("Hi!".into())],
                },
                Paragraph { runs: vec![] },
                Paragraph {
                    runs: vec![
                        Run::Text("Visit: ".into()),
                        Run::Hyperlink {
                            text: "Instructions Brief".into(),
                            url: "http://x/?a=1&b=2".into(),
                        },
                        Run::Text("".into()),
                    ],
                },
            ],
        }
    }

    #[test]
    fn xml_escape_all_five() {
        assert_eq!(
            xml_escape(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&apos;"
        );
    }

    #[test]
    fn document_xml_one_w_p_per_paragraph() {
        let (xml, _) = document_xml(&sample_doc());
        assert_eq!(xml.matches("<w:p>").count(), 3);
        assert_eq!(xml.matches("</w:p>").count(), 3);
        // Empty paragraph still present, just with no runs.
        assert!(xml.contains("<w:p></w:p>"));
    }

    #[test]
    fn hyperlink_run_is_styled_and_rel_referenced() {
        let (xml, urls) = document_xml(&sample_doc());
        assert!(xml.contains(r#"<w:hyperlink r:id="rId2">"#));
        assert!(xml.contains(r#"<w:color w:val="0563C1"/>"#));
        assert!(xml.contains(r#"<w:u w:val="single"/>"#));
        assert_eq!(urls, vec!["http://x/?a=1&b=2".to_string()]);
    }

    #[test]
    fn rels_are_external_and_url_escaped() {
        let rels = document_rels_xml(&["http://x/?a=1&b=2".to_string()]);
        assert!(rels.contains(r#"Id="rId2""#));
        assert!(rels.contains(r#"TargetMode="External""#));
        assert!(rels.contains("http://x/?a=1&amp;b=2"));
    }

    #[test]
    fn package_is_a_readable_zip_with_all_parts() {
        let bytes = package_docx(&sample_doc()).unwrap();
        // PK magic
        assert_eq!(&bytes[..2], b"PK");

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        for name in [
            "[Content_Types].xml",
            "_rels/.rels",
            "word/document.xml",
            "word/_rels/document.xml.rels",
            "word/styles.xml",
        ] {
            let mut part = archive.by_name(name).unwrap_or_else(|_| panic!("missing {name}"));
            let mut content = String::new();
            part.read_to_string(&mut content).unwrap();
            assert!(!content.is_empty(), "{name} empty");
        }
    }

    #[test]
    fn packaged_document_text_survives() {
        let bytes = package_docx(&sample_doc()).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut document = String::new();
        archive
            .by_name("word/document.xml")
            .unwrap()
            .read_to_string(&mut document)
            .unwrap();
        assert!(document.contains("Visit: "));
        assert!(document.contains("Instructions Brief"));
    }
}
