//! Configuration modules for the Campushub API.
//!
//! Each submodule handles a specific aspect of configuration, typically
//! loaded from environment variables.
//!
//! # Modules
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`database`]: PostgreSQL database connection pool initialization
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `ALLOWED_ORIGINS`: comma-separated CORS origins

pub mod cors;
pub mod database;
