pub mod application;
pub mod application_field;
pub mod category_gate;
pub mod user;

pub mod prelude {
    pub use super::application::Entity as Application;
    pub use super::application_field::Entity as ApplicationField;
    pub use super::category_gate::Entity as CategoryGate;
    pub use super::user::Entity as User;
}
