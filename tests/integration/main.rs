//! Integration tests for the harvester
//!
//! These tests use wiremock to stand in for the catalog service and drive
//! the crawl, detail, and aggregation stages end-to-end.

mod common;
mod crawl_tests;
