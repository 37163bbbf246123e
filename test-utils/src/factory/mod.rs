//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let application = factory::application::create_application(&db, user_steam_id).await?;
//!
//!     // Create a user together with a pending application
//!     let (user, application) = factory::helpers::create_user_with_application(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Using builder pattern for customization
//! let user = factory::user::UserFactory::new(&db)
//!     .steam_id(76561198000000001)
//!     .name("CustomUser")
//!     .role("ADMIN")
//!     .build()
//!     .await?;
//!
//! // Using convenience functions with custom values
//! let application =
//!     factory::create_application_with_status(&db, steam_id, "police", "GODKENDT").await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `application` - Create application entities
//! - `application_field` - Create narrative answer rows for applications
//! - `category_gate` - Create category gate entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod application;
pub mod application_field;
pub mod category_gate;
pub mod helpers;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use application::{create_application, create_application_with_status};
pub use application_field::{create_field, create_fields};
pub use category_gate::create_gate;
pub use user::{create_admin, create_user, create_user_with_steam_id};
