//! Domain models, parameter types, and API DTOs.
//!
//! Domain models represent business entities with typed enums and numeric ids;
//! they are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter structs carry
//! validated inputs into repositories. DTOs are the serialized API surface.

pub mod api;
pub mod application;
pub mod gate;
pub mod user;
