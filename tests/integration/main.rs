//! Integration tests against a live PostgreSQL server

mod store_tests;
