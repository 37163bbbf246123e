//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and external services
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Side Effects**: Handing external notifications off to the async dispatcher

pub mod application;
pub mod auth;
pub mod designation;
pub mod discord;
pub mod eligibility;
pub mod gate;
pub mod lifecycle;
pub mod notification;
pub mod user;
