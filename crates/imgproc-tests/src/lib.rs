//! Integration tests for imgproc crates.
//!
//! End-to-end checks that go through the codec, the registry and the
//! operation catalog together.
