use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct AddressDto {
    pub postal_code: String,
    pub street: String,
    pub complement: String,
    pub district: String,
    pub city: String,
    pub state: String,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct StadiumDto {
    pub id: i32,
    pub name: String,
    pub address: Option<AddressDto>,
    pub active: bool,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CreateStadiumDto {
    pub name: String,
    pub postal_code: String, // "99999-999" or "99999999"
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct UpdateStadiumDto {
    pub name: Option<String>,
    pub postal_code: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct PaginatedStadiumsDto {
    pub stadiums: Vec<StadiumDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
