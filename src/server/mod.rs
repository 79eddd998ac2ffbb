//! Server-side API backend.
//!
//! This module contains the complete backend implementation: HTTP endpoints, kill
//! aggregation, data access, and infrastructure. The backend uses Axum as the web
//! framework and SeaORM for database reads.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, parameter parsing, and DTO conversion
//! - **Service Layer** (`service/`) - Mode validation, orchestration, and derived totals
//! - **Data Layer** (`data/`) - Database queries and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, `Mode`, and aggregate rows
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool)
//! - **Startup** (`startup`) - Database connection with retry
//! - **Router** (`router`) - Axum route configuration and CORS
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** parses path and query parameters, calls the service
//! 3. **Service** validates the mode and calls one or more repositories
//! 4. **Data** queries the database, converts rows to domain models
//! 5. **Controller** converts domain models to DTOs and returns JSON

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
