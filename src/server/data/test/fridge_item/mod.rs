use crate::server::{
    data::{fridge_item::FridgeItemRepository, Repository},
    model::fridge_item::FridgeItem,
};
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod count;
mod delete_by_id;
mod find_all;
mod find_by_id;
mod save;
