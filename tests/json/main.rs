//! Integration tests for Layer 1: JSON
//!
//! Tests the recovering parser and the structural checkers over
//! realistic documents.
