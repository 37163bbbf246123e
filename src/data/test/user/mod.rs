use crate::{
    data::user::UserRepository,
    error::AppError,
    model::user::{Role, UpsertUserParam},
};
use test_utils::{builder::TestBuilder, factory};

mod set_role;
