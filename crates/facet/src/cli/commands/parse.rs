//! Implementation of `facet parse`.

use std::process::ExitCode;

use facet_query::{Grammar, PrefixGrammar, parse, serialize};

use crate::cli::{
    args::ParseCommand,
    output::{JsonParse, print_json, token_table},
};

/// Prints the tokens a query parses into.
pub fn run(cmd: &ParseCommand) -> ExitCode {
    let grammar = PrefixGrammar::new();
    let tokens = parse(&grammar, &cmd.query);
    let serialized = serialize(&tokens);

    if cmd.json {
        let entities = grammar.entities(&cmd.query);
        return print_json(&JsonParse {
            query: &cmd.query,
            tokens: &tokens,
            serialized,
            search_type: grammar.search_type(&cmd.query),
            entities: &entities,
        });
    }

    if tokens.is_empty() {
        println!("(no tokens)");
        return ExitCode::SUCCESS;
    }
    println!("{}", token_table(&tokens));
    println!("{serialized}");
    ExitCode::SUCCESS
}
