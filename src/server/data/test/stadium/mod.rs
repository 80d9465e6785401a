use crate::server::{data::stadium::StadiumRepository, model::stadium::Address};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_paginated;
mod name_exists;
mod update;

fn paulista() -> Address {
    Address {
        postal_code: "01310100".to_string(),
        street: "Avenida Paulista".to_string(),
        complement: String::new(),
        district: "Bela Vista".to_string(),
        city: "São Paulo".to_string(),
        state: "SP".to_string(),
    }
}
