#![doc = include_str!("../README.md")]

/// Handles all app configuration.
pub mod config;

/// Errors that abort the process before it starts serving.
pub mod error;

/// Defines the handlers for the two stub routes.
pub mod routes;

/// Handles the server startup, such as binding, route configuration and middleware.
pub mod startup;

/// Handles logs and tracing.
pub mod telemetry;
