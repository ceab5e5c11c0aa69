use serde_json::{json, Value};
use std::path::{Path, PathBuf};

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("CLI crate should be inside workspace")
        .to_path_buf()
}

fn load_fixture(name: &str) -> Value {
    let path = workspace_root().join("tmdb_api/tests/fixtures").join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read fixture {}: {}", path.display(), e));
    serde_json::from_str(&text).expect("fixture is valid JSON")
}

fn load_schema(name: &str) -> Value {
    let path = workspace_root().join("schema").join(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read schema {}: {}", path.display(), e));
    serde_json::from_str(&text).expect("schema is valid JSON")
}

fn extract_results(fixture: &Value) -> Value {
    fixture["results"].clone()
}

// ---------------------------------------------------------------------------
// Positive validation: fixtures conform to their schemas
// ---------------------------------------------------------------------------

#[test]
fn test_favorites_fixture_conforms_to_movie_schema() {
    let fixture = load_fixture("favorite_movies.json");
    let schema = load_schema("movie.schema.json");
    let data = extract_results(&fixture);

    let validator = jsonschema::draft202012::new(&schema).expect("movie schema compiles");
    let result = validator.validate(&data);
    if let Err(e) = &result {
        panic!("favorites fixture failed validation: {e}");
    }
}

#[test]
fn test_second_page_fixture_conforms_to_movie_schema() {
    let fixture = load_fixture("favorite_movies_page2.json");
    let schema = load_schema("movie.schema.json");
    let data = extract_results(&fixture);

    let validator = jsonschema::draft202012::new(&schema).expect("movie schema compiles");
    assert!(validator.is_valid(&data));
}

#[test]
fn test_result_document_conforms_to_schema() {
    let fixture = load_fixture("favorite_movies.json");
    let schema = load_schema("favorites_result.schema.json");
    let doc = json!({ "changed": false, "favorites": extract_results(&fixture) });

    let validator = jsonschema::draft202012::new(&schema).expect("result schema compiles");
    let result = validator.validate(&doc);
    if let Err(e) = &result {
        panic!("result document failed validation: {e}");
    }
}

#[test]
fn test_empty_favorites_result_is_valid() {
    let schema = load_schema("favorites_result.schema.json");
    let validator = jsonschema::draft202012::new(&schema).expect("result schema compiles");
    assert!(validator.is_valid(&json!({ "changed": true, "favorites": [] })));
}

// ---------------------------------------------------------------------------
// Negative validation: schemas reject invalid data
// ---------------------------------------------------------------------------

#[test]
fn test_movie_schema_rejects_missing_id() {
    let fixture = load_fixture("favorite_movies.json");
    let schema = load_schema("movie.schema.json");
    let mut data = extract_results(&fixture);
    data[0].as_object_mut().unwrap().remove("id");

    let validator = jsonschema::draft202012::new(&schema).expect("movie schema compiles");
    assert!(!validator.is_valid(&data));
}

#[test]
fn test_movie_schema_rejects_out_of_range_rating() {
    let fixture = load_fixture("favorite_movies.json");
    let schema = load_schema("movie.schema.json");
    let mut data = extract_results(&fixture);
    data[0]["vote_average"] = json!(11.5);

    let validator = jsonschema::draft202012::new(&schema).expect("movie schema compiles");
    assert!(!validator.is_valid(&data));
}

#[test]
fn test_result_schema_rejects_missing_changed() {
    let fixture = load_fixture("favorite_movies.json");
    let schema = load_schema("favorites_result.schema.json");
    let doc = json!({ "favorites": extract_results(&fixture) });

    let validator = jsonschema::draft202012::new(&schema).expect("result schema compiles");
    assert!(!validator.is_valid(&doc));
}

#[test]
fn test_failure_schema_requires_message() {
    let schema = load_schema("failure.schema.json");
    let validator = jsonschema::draft202012::new(&schema).expect("failure schema compiles");

    assert!(validator.is_valid(&json!({ "failed": true, "msg": "Account not found: 7" })));
    assert!(!validator.is_valid(&json!({ "failed": true, "msg": "" })));
    assert!(!validator.is_valid(&json!({ "failed": false, "msg": "x" })));
    assert!(!validator.is_valid(&json!({ "failed": true })));
}
