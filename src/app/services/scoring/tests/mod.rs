//! Tests for the scoring engine

pub mod scoring_tests;
