use crate::server::{
    error::AppError,
    model::stadium::{Address, CreateStadiumParams, UpdateStadiumParams},
    service::{address::AddressLookup, stadium::StadiumService},
};
use std::sync::atomic::{AtomicUsize, Ordering};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod update;

const PAULISTA: &str = "01310100";
const COPACABANA: &str = "22070002";

/// Resolves two known postal codes and counts every lookup.
#[derive(Default)]
struct StubLookup {
    calls: AtomicUsize,
}

impl StubLookup {
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AddressLookup for StubLookup {
    async fn resolve(&self, postal_code: &str) -> Result<Address, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let (street, district, city, state) = match postal_code {
            PAULISTA => ("Avenida Paulista", "Bela Vista", "São Paulo", "SP"),
            COPACABANA => ("Avenida Atlântica", "Copacabana", "Rio de Janeiro", "RJ"),
            _ => return Err(AppError::NotFound("postal code not found".to_string())),
        };

        Ok(Address {
            postal_code: postal_code.to_string(),
            street: street.to_string(),
            complement: String::new(),
            district: district.to_string(),
            city: city.to_string(),
            state: state.to_string(),
        })
    }
}
