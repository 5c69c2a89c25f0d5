//! Core library exports for the Celebs Booking service.
//!
//! This crate exposes the domain model, persistence layer, forms, services and
//! routes used by the booking web application, together with the HTTP store
//! client and favorites controller consumed by frontends.

#[cfg(feature = "client")]
pub mod client;
#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "server")]
pub mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "server")]
pub mod notifier;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "server")]
pub mod services;

/// Header carrying the operator token for back-office endpoints.
pub const OPERATOR_TOKEN_HEADER: &str = "X-Operator-Token";
