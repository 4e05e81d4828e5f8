//! Tests for ranking and catalog output
