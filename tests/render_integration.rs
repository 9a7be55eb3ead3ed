//! Integration tests for PDF output

use lopdf::{Document, Object};

use cv_press::{render, render_with_config, CvData, PdfConfig, RenderConfig};

fn sample() -> CvData {
    CvData::from_json_str(
        r#"{
            "personal": {
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "website": "ada.dev"
            },
            "experience": [
                {
                    "title": "Engineer",
                    "startDate": "2020",
                    "endDate": "2023",
                    "location": "London",
                    "description": "- Built **X**\n- Shipped [Y](https://y.example)"
                }
            ],
            "skills": "Rust, PDF"
        }"#,
    )
    .expect("Should parse")
}

fn uncompressed() -> RenderConfig {
    RenderConfig::new().with_pdf(PdfConfig::new().with_compress(false))
}

fn link_uris(doc: &Document) -> Vec<String> {
    let mut uris = Vec::new();
    for page_id in doc.get_pages().values() {
        let Ok(page) = doc.get_dictionary(*page_id) else {
            continue;
        };
        let Ok(annots) = page.get(b"Annots").and_then(Object::as_array) else {
            continue;
        };
        for annot in annots {
            let Ok(annot) = annot.as_reference().and_then(|id| doc.get_dictionary(id)) else {
                continue;
            };
            let uri = annot
                .get(b"A")
                .and_then(Object::as_dict)
                .and_then(|action| action.get(b"URI"))
                .and_then(Object::as_str);
            if let Ok(uri) = uri {
                uris.push(String::from_utf8_lossy(uri).into_owned());
            }
        }
    }
    uris
}

#[test]
fn test_render_writes_valid_pdf() {
    let rendered = render(&sample()).expect("Should render");
    assert!(rendered.bytes.starts_with(b"%PDF"));
    assert!(rendered.file_name.starts_with("CV_Ada_Lovelace_"));
    assert!(rendered.file_name.ends_with(".pdf"));

    let doc = Document::load_mem(&rendered.bytes).expect("Should reload");
    assert_eq!(doc.get_pages().len(), 1);
}

#[test]
fn test_links_become_annotations() {
    let rendered = render_with_config(&sample(), &uncompressed()).expect("Should render");
    let doc = Document::load_mem(&rendered.bytes).expect("Should reload");
    assert_eq!(
        link_uris(&doc),
        vec!["https://ada.dev".to_string(), "https://y.example".to_string()]
    );
}

#[test]
fn test_page_count_matches_layout() {
    let mut cv = sample();
    cv.interests = (0..90)
        .map(|i| format!("- Interest {}", i))
        .collect::<Vec<_>>()
        .join("\n");
    let rendered = render_with_config(&cv, &uncompressed()).expect("Should render");
    let doc = Document::load_mem(&rendered.bytes).expect("Should reload");
    assert!(rendered.page_count >= 2);
    assert_eq!(doc.get_pages().len(), rendered.page_count);
}

#[test]
fn test_blank_name_gets_document_file_name() {
    let rendered = render(&CvData::default()).expect("Should render");
    assert!(rendered.file_name.starts_with("CV_document_"));
    assert_eq!(rendered.page_count, 1);
}
