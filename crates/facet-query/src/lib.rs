//! Facet tokens and the query codec for faceted search boxes.
//!
//! A query mixes typed facets with free text:
//!
//! - **Facets**: `project:Acme`, `account:jdoe`, `group:newsroom`, `filter:published`
//! - **Quoted values**: `project:"Acme Corp"`
//! - **Free text**: everything the grammar does not claim
//!
//! # Example
//!
//! ```
//! use facet_query::{Category, PrefixGrammar, parse, serialize};
//!
//! let tokens = parse(&PrefixGrammar, "project:Acme budget");
//! assert_eq!(tokens[0].category(), Category::Project);
//! assert_eq!(serialize(&tokens), "project:Acme budget");
//! ```

#![warn(missing_docs)]

mod category;
mod codec;
mod error;
mod grammar;
mod lexer;
mod token;

pub use category::Category;
pub use codec::{Facets, extract_facets, pare_query, parse, serialize};
pub use error::CategoryError;
pub use grammar::{Entity, Grammar, PrefixGrammar, SearchType};
pub use lexer::{PrefixMatch, scan};
pub use token::FacetToken;
