//! markwell-core — Response evaluation, attempt aggregation, and scoring.
//!
//! This crate defines the data model, the grading rules for each question
//! type, and the score/grade arithmetic that the markwell CLI builds on.

pub mod distance;
pub mod engine;
pub mod error;
pub mod evaluate;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod report;
pub mod score;
pub mod statistics;

pub use error::Error;
