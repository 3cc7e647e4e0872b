//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use facet_query::{Entity, FacetToken, SearchType};
use serde::Serialize;

/// JSON output for `facet parse`.
#[derive(Serialize)]
pub struct JsonParse<'a> {
    /// The query as given.
    pub query: &'a str,
    /// Tokens in display order.
    pub tokens: &'a [FacetToken],
    /// Tokens serialized back into a query.
    pub serialized: String,
    /// Classification of the query.
    pub search_type: SearchType,
    /// Non-facet prefixes the grammar recognized.
    pub entities: &'a [Entity],
}

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize output: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Renders tokens as a table of position, category, value and serialized form.
pub fn token_table(tokens: &[FacetToken]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["#", "Category", "Value", "Serialized"]);
    for (index, token) in tokens.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index),
            Cell::new(token.category()),
            Cell::new(token.value()),
            Cell::new(token.serialize()),
        ]);
    }
    table
}
