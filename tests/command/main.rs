//! Integration tests for Layer 2: Command dispatch
//!
//! Tests dispatch over dump-loaded grammars, the built-in and custom
//! argument parsers, and permission gating.

mod dispatch;
mod permissions;
