//! Implementation of `facet classify`.

use std::process::ExitCode;

use facet_box::entitle;
use facet_query::{Grammar, PrefixGrammar};

use crate::cli::{args::ClassifyCommand, context::CommandContext};

/// Prints how the search box would present a query.
pub fn run(ctx: &CommandContext, cmd: &ClassifyCommand) -> ExitCode {
    let grammar = PrefixGrammar::new();
    let search_type = grammar.search_type(&cmd.query);
    let messages = ctx.empty_messages();

    println!("type:  {search_type}");
    println!("title: {}", entitle(&grammar, &cmd.query));
    println!("empty: {}", messages.get(search_type));
    ExitCode::SUCCESS
}
