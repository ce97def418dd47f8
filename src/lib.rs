// Declare the modules that form the library's public API.
// The crate is a library only: tracing subscriber setup, task orchestration
// and metric computation live in the embedding runner, not here.
pub mod config;
pub mod data_model;
pub mod ensemble;
pub mod error;
pub mod filters;
