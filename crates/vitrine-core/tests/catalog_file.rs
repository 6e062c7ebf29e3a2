//! Loading the catalog from an external resource file.

use std::io::Write;

use vitrine_core::{Catalog, VitrineError};

#[test]
fn load_reads_a_catalog_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"[
            {{"id": "demo", "title": "Demo", "category": "motion",
              "images": ["a.png", "b.png"]}}
        ]"#
    )
    .expect("write catalog");

    let catalog = Catalog::load(file.path()).expect("load catalog");
    assert_eq!(catalog.len(), 1);
    let demo = catalog.get("demo").expect("demo project");
    assert_eq!(demo.images, vec!["a.png", "b.png"]);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = Catalog::load(std::path::Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(matches!(err, VitrineError::Io(_)));
}

#[test]
fn invalid_content_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"[{{"id": "demo", "title": "Demo", "category": "social", "images": []}}]"#
    )
    .expect("write catalog");

    let err = Catalog::load(file.path()).unwrap_err();
    assert!(matches!(err, VitrineError::CatalogInvalid(_)));
}
