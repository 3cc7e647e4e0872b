//! facet: a headless driver for faceted search boxes.
//!
//! Parses queries into facet tokens, classifies them, and replays scripted key sessions
//! against the search box controller so its behaviour can be inspected from a terminal.

#![warn(missing_docs)]

pub mod cli;
