use std::fs;

use recipe_extractors::{extract_file, process_directory, ExtractError, RecipeRecord, SiteExtractor};
use tempfile::TempDir;

const PAGE: &str = r#"
<html><head>
<script type="application/ld+json">
{"@type": "Recipe", "name": "Šaltibarščiai", "recipeIngredient": ["500 g kefyro"]}
</script>
</head><body></body></html>
"#;

#[test]
fn test_extract_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saltibarsciai.html");
    fs::write(&path, PAGE).unwrap();

    let record = extract_file("vmgonline_lt", &path).unwrap();
    assert_eq!(record.dish_name.as_deref(), Some("Šaltibarščiai"));
    assert_eq!(record.ingredients.unwrap()[0].unit.as_deref(), Some("g"));
}

#[test]
fn test_extract_file_errors() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.html");

    assert!(matches!(
        extract_file("vmgonline_lt", &missing),
        Err(ExtractError::Io { .. })
    ));
    assert!(matches!(
        extract_file("nowhere_com", &missing),
        Err(ExtractError::UnknownSite(_))
    ));
}

#[test]
fn test_process_directory_into_output_dir() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let records = output.path().join("records");
    fs::write(input.path().join("b.html"), PAGE).unwrap();
    fs::write(input.path().join("a.html"), "<html></html>").unwrap();
    fs::write(input.path().join("notes.txt"), "skip me").unwrap();

    let extractor = SiteExtractor::for_site("vmgonline_lt").unwrap();
    let summary = process_directory(&extractor, input.path(), Some(&records)).unwrap();

    assert_eq!(summary.processed(), 2);
    assert!(summary.failed.is_empty());
    assert_eq!(
        summary.written,
        vec![records.join("a_extracted.json"), records.join("b_extracted.json")]
    );

    let empty: RecipeRecord =
        serde_json::from_str(&fs::read_to_string(records.join("a_extracted.json")).unwrap()).unwrap();
    assert_eq!(empty, RecipeRecord::default());

    let written = fs::read_to_string(records.join("b_extracted.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(json["dish_name"], "Šaltibarščiai");
    assert_eq!(json["ingredients"][0]["amount"], 500);
    assert_eq!(json["ingredients"][0]["units"], "g");
    assert!(json["notes"].is_null());
}

#[test]
fn test_process_directory_next_to_inputs() {
    let input = TempDir::new().unwrap();
    fs::write(input.path().join("page.html"), PAGE).unwrap();

    let extractor = SiteExtractor::for_site("vmgonline_lt").unwrap();
    let summary = process_directory(&extractor, input.path(), None).unwrap();

    assert_eq!(summary.written, vec![input.path().join("page_extracted.json")]);
    assert!(input.path().join("page_extracted.json").is_file());
}
