//! HTTP request handlers, access control, and DTO conversion.
//!
//! Each handler resolves the caller through `AuthGuard`, converts the
//! request DTOs to service parameters, and maps the domain result back to a
//! response. Access control lives here, at the edge; services assume their
//! caller was already authorized.

pub mod application;
pub mod auth;
pub mod gate;
pub mod user;
