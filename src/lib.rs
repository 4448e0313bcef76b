//! Tidmat marketplace library
//!
//! Typed access to the Tidmat data-marketplace contract on Aptos, the
//! request-state adapter built on top of it, and the HTTP API that serves both.

pub mod app_state;
pub mod catalog;
pub mod chain;
pub mod config;
pub mod error;
pub mod handlers;
pub mod hook;
pub mod models;
pub mod routes;
pub mod sdk;
pub mod wallet;

#[cfg(test)]
pub(crate) mod testing;
