use crate::server::{data::interaction::InteractionRepository, model::business::InteractionKind};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod businesses_for_user;
mod insert;
