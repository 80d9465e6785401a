//! Postal code resolution through an external address lookup.
//!
//! Stadium addresses are never typed in by hand; they are resolved from a postal code
//! when a stadium is created or moved. `AddressLookup` is the seam services depend on,
//! and `ViaCepClient` is the production implementation backed by the ViaCEP web service.

use serde::Deserialize;
use std::future::Future;
use url::Url;

use crate::server::{
    error::{internal::InternalError, AppError},
    model::stadium::Address,
};

/// Resolves a normalized 8-digit postal code into a full address.
pub trait AddressLookup {
    /// # Returns
    /// - `Ok(Address)` - The resolved address
    /// - `Err(AppError::NotFound)` - The postal code does not exist
    /// - `Err(AppError::ReqwestErr)` - The lookup service could not be reached
    fn resolve(&self, postal_code: &str) -> impl Future<Output = Result<Address, AppError>> + Send;
}

/// Response body of `GET {base}/{postal_code}/json/`.
///
/// Unknown postal codes come back as `200 OK` with only `"erro": true`.
#[derive(Deserialize, Debug)]
struct ViaCepResponse {
    cep: Option<String>,
    #[serde(default)]
    logradouro: String,
    #[serde(default)]
    complemento: String,
    #[serde(default)]
    bairro: String,
    #[serde(default)]
    localidade: String,
    #[serde(default)]
    uf: String,
    #[serde(default)]
    erro: Option<serde_json::Value>,
}

impl ViaCepResponse {
    fn into_address(self) -> Option<Address> {
        if self.erro.is_some() {
            return None;
        }

        let postal_code = self.cep?.replace('-', "");

        Some(Address {
            postal_code,
            street: self.logradouro,
            complement: self.complemento,
            district: self.bairro,
            city: self.localidade,
            state: self.uf,
        })
    }
}

/// ViaCEP HTTP client.
#[derive(Clone)]
pub struct ViaCepClient {
    http_client: reqwest::Client,
    base_url: Url,
}

impl ViaCepClient {
    pub fn new(http_client: reqwest::Client, base_url: Url) -> Self {
        Self {
            http_client,
            base_url,
        }
    }

    /// Builds `{base}/{postal_code}/json/` keeping any path already on the base URL.
    fn lookup_url(&self, postal_code: &str) -> Result<Url, AppError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| InternalError::InvalidLookupUrl {
                url: self.base_url.to_string(),
            })?
            .pop_if_empty()
            .extend([postal_code, "json", ""]);

        Ok(url)
    }
}

impl AddressLookup for ViaCepClient {
    async fn resolve(&self, postal_code: &str) -> Result<Address, AppError> {
        let url = self.lookup_url(postal_code)?;

        let response = self.http_client.get(url).send().await?;

        // ViaCEP answers 400 for codes it considers malformed
        if !response.status().is_success() {
            tracing::debug!(
                "Address lookup for {} returned {}",
                postal_code,
                response.status()
            );
            return Err(AppError::NotFound("postal code not found".to_string()));
        }

        let body: ViaCepResponse = response.json().await?;

        body.into_address()
            .ok_or_else(|| AppError::NotFound("postal code not found".to_string()))
    }
}
