use crate::{data::gate::CategoryGateRepository, error::AppError, model::application::Category};
use test_utils::{builder::TestBuilder, factory};

mod set_open;
