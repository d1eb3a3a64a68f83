//! REST API layer for HTTP request/response handling.
//!
//! Handlers validate camelCase JSON bodies, call the hierarchy services
//! directly and map `None`/`false` results to 404.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - JWT authentication, CORS, rate limiting and tracing
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
