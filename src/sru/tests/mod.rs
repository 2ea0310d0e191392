//! Unit and scenario tests for the SRU module.

mod domain_tests;
mod engine_tests;
mod helpers;
