//! # The `prepfex` library in Rust
//! Preposition Feature Extraction
//! Data structures and pipelines for harvesting context-window features
//! around preposition occurrences in plain-text sentence corpora.

#![deny(
  missing_docs,
  trivial_casts,
  trivial_numeric_casts,
  unused_import_braces,
  unused_qualifications
)]

extern crate csv;
#[macro_use]
extern crate lazy_static;
extern crate rayon;
extern crate regex;
extern crate serde;
extern crate serde_json;
extern crate unidecode;
extern crate whatlang;

pub mod annotation;
pub mod features;
pub mod parallel;
pub mod pipeline;
pub mod pos;
pub mod scan;
pub mod tokenizer;
pub mod triggers;
