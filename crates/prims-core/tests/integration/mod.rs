//! Integration tests for the primitive library and its dispatch table

mod classify_tests;
mod numeric_tests;
mod probe_tests;
mod table_tests;
mod text_tests;
