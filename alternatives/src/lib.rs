//! Operator-curated alternatives for cluster scaling decisions.
//!
//! The expansion pipeline picks a best scaling option; this crate answers
//! which other candidates an operator declared interchangeable with it. The
//! mapping lives in a named config object as a small piece of structured
//! text (group id to ordered list of group ids) and is fetched and parsed
//! again on every query, so callers always observe the latest operator edit.

pub mod config_store;
pub mod events;
pub mod metrics_defs;
pub mod parser;
pub mod selector;
pub mod testutils;

pub use selector::Selector;
