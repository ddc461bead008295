//! Estante Server Library
//!
//! Exposes the catalog, query, and rendering modules so integration
//! tests can assemble the router. The server binary is in main.rs.
//!
//! # Modules
//!
//! - `db`: connection pool and the read-only book repository
//! - `catalog`: pure pagination and display-normalization rules
//! - `negotiate`: Accept-header resolution for the detail endpoint
//! - `reviews`: client for the external review API
//! - `html`: typed view data rendered to complete documents
//! - `routes`: one module per route group

pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod html;
pub mod negotiate;
pub mod reviews;
pub mod routes;
pub mod state;
