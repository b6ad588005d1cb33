//! Integration tests for Layer 1: Grammar trees
//!
//! Tests grammar loading from JSON dumps, tree navigation, and
//! redirect resolution.

mod redirects;
