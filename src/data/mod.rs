//! Data repositories for database operations.
//!
//! Each repository wraps a database connection reference and converts entity
//! models to domain models at this boundary. Repositories contain no business
//! rules; eligibility and lifecycle decisions live in the service layer.

pub mod application;
pub mod gate;
pub mod user;
