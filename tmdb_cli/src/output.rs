use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tmdb_lib::types::Movie;
use tmdb_lib::FavoriteOutcome;

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Json,
    Table,
    Markdown,
}

impl OutputFormat {
    /// Maps the `--output` flag; unknown values fall back to JSON.
    pub fn from_flag(flag: &str) -> Self {
        match flag {
            "table" => OutputFormat::Table,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Json,
        }
    }
}

/// Success document, shaped like an automation module result.
#[derive(Serialize)]
pub struct ModuleResult<'a> {
    pub changed: bool,
    pub favorites: &'a [Movie],
}

/// Failure document.
#[derive(Serialize)]
pub struct ModuleFailure<'a> {
    pub failed: bool,
    pub msg: &'a str,
}

/// Result of a raw `api` call.
#[derive(Serialize)]
pub struct ApiCallResult {
    pub status: u16,
    pub body: serde_json::Value,
}

#[derive(Tabled, Serialize)]
struct MovieRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Year")]
    #[serde(rename = "Year")]
    year: String,
    #[tabled(rename = "Rating")]
    #[serde(rename = "Rating")]
    rating: String,
    #[tabled(rename = "Votes")]
    #[serde(rename = "Votes")]
    votes: i64,
}

// -- Row builders --

fn build_movie_rows(movies: &[Movie]) -> Vec<MovieRow> {
    movies
        .iter()
        .map(|m| MovieRow {
            id: m.id,
            title: m.title.clone(),
            year: m.release_year().unwrap_or("-").to_string(),
            rating: format_rating(m.vote_average),
            votes: m.vote_count,
        })
        .collect()
}

// -- Table output --

pub fn print_movies_table(movies: &[Movie]) {
    println!("{}", Table::new(build_movie_rows(movies)));
}

// -- Markdown output --

pub fn print_movies_markdown(movies: &[Movie]) {
    let mut table = Table::new(build_movie_rows(movies));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// Prints the outcome of a favorites operation in the requested format.
/// Table formats note the change on stderr so stdout holds only the table.
pub fn print_outcome(outcome: &FavoriteOutcome, format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&ModuleResult {
            changed: outcome.changed,
            favorites: &outcome.favorites,
        }),
        OutputFormat::Table => {
            eprintln!("changed: {}", outcome.changed);
            print_movies_table(&outcome.favorites);
        }
        OutputFormat::Markdown => {
            eprintln!("changed: {}", outcome.changed);
            print_movies_markdown(&outcome.favorites);
        }
    }
}

/// Reports a failure: a JSON document on stdout, or a plain line on stderr.
pub fn print_failure(msg: &str, format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&ModuleFailure { failed: true, msg }),
        _ => eprintln!("Error: {}", msg),
    }
}

/// Decodes a response body as JSON, falling back to a string.
pub fn body_value(body: &[u8]) -> serde_json::Value {
    serde_json::from_slice(body)
        .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(body).into_owned()))
}

fn format_rating(vote_average: f64) -> String {
    format!("{:.1}", vote_average)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_movies_fixture() -> Vec<Movie> {
        let json_str = include_str!("../../tmdb_api/tests/fixtures/favorite_movies.json");
        let resp: serde_json::Value = serde_json::from_str(json_str).unwrap();
        serde_json::from_value(resp["results"].clone()).unwrap()
    }

    fn load_schema(name: &str) -> serde_json::Value {
        let path = format!("{}/../schema/{}", env!("CARGO_MANIFEST_DIR"), name);
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    }

    // -- format flag --

    #[test]
    fn test_output_flag_mapping() {
        assert_eq!(OutputFormat::from_flag("table"), OutputFormat::Table);
        assert_eq!(OutputFormat::from_flag("md"), OutputFormat::Markdown);
        assert_eq!(OutputFormat::from_flag("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_flag("yaml"), OutputFormat::Json);
    }

    // -- format_rating tests --

    #[test]
    fn test_format_rating_rounds_to_one_decimal() {
        assert_eq!(format_rating(8.14), "8.1");
        assert_eq!(format_rating(0.0), "0.0");
    }

    // -- Row builder tests --

    #[test]
    fn test_build_movie_rows_mapping() {
        let movies = load_movies_fixture();
        let rows = build_movie_rows(&movies);
        assert_eq!(rows.len(), 2);

        let row = &rows[0];
        assert_eq!(row.id, 872585);
        assert_eq!(row.title, "Oppenheimer");
        assert_eq!(row.year, "2023");
        assert_eq!(row.rating, "8.1");
        assert_eq!(row.votes, 6610);
    }

    #[test]
    fn test_unknown_release_year_renders_dash() {
        let movie: Movie =
            serde_json::from_value(serde_json::json!({"id": 1, "title": "TBA", "release_date": ""}))
                .unwrap();
        let rows = build_movie_rows(&[movie]);
        assert_eq!(rows[0].year, "-");
    }

    #[test]
    fn test_markdown_table_has_headers() {
        let mut table = Table::new(build_movie_rows(&load_movies_fixture()));
        table.with(Style::markdown());
        let md = table.to_string();
        let first = md.lines().next().unwrap();
        assert!(first.contains("Title"));
        assert!(md.contains("| Fight Club"));
    }

    // -- JSON documents --

    #[test]
    fn test_module_result_conforms_to_schema() {
        let movies = load_movies_fixture();
        let doc = serde_json::to_value(ModuleResult {
            changed: true,
            favorites: &movies,
        })
        .unwrap();
        let schema = load_schema("favorites_result.schema.json");
        let validator = jsonschema::draft202012::new(&schema).expect("result schema compiles");
        if let Err(e) = validator.validate(&doc) {
            panic!("module result failed validation: {e}");
        }
    }

    #[test]
    fn test_module_failure_conforms_to_schema() {
        let doc = serde_json::to_value(ModuleFailure {
            failed: true,
            msg: "Unexpected response from TMDB API - 500 oops",
        })
        .unwrap();
        let schema = load_schema("failure.schema.json");
        let validator = jsonschema::draft202012::new(&schema).expect("failure schema compiles");
        assert!(validator.is_valid(&doc));
    }

    #[test]
    fn test_body_value_falls_back_to_string() {
        assert_eq!(body_value(br#"{"id":1}"#), serde_json::json!({"id": 1}));
        assert_eq!(body_value(b"plain"), serde_json::json!("plain"));
        assert_eq!(body_value(b""), serde_json::json!(""));
    }
}
