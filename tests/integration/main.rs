//! Integration tests for the SimpleLib HTTP API

mod authors;
mod common;
mod health;
