use crate::server::{
    data::business::BusinessRepository,
    model::business::{BusinessDetails, CreateBusinessParams, InteractionKind, UpdateBusinessParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod counters;
mod create;
mod get_active;
mod update;
