use crate::server::{data::school::SchoolRepository, model::school::UpsertSchoolParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::builder::TestBuilder;

mod upsert;
