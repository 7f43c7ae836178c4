use super::memory_notifier;
use crate::server::{
    error::AppError,
    model::user::UpdateProfileParams,
    service::user::UserService,
};
use test_utils::{builder::TestBuilder, factory};

mod update_me;
