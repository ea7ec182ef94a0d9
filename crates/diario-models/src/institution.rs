//! The signed-in school's own registration data and address.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// School registration ("minha escola").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SchoolProfile {
    #[serde(rename = "nome_escola", default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "telefone", default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub inep: Option<String>,
    #[serde(default)]
    pub cnpj: Option<String>,
    #[serde(rename = "endereco", default)]
    pub address: Option<Address>,
}

/// Editable subset of the school registration.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct SchoolProfileDto {
    #[validate(email)]
    pub email: String,
    #[serde(rename = "telefone")]
    #[validate(length(max = 20))]
    pub phone: String,
    /// 8-digit INEP school census code.
    #[validate(length(max = 8))]
    pub inep: String,
    #[validate(length(max = 18))]
    pub cnpj: String,
}

impl SchoolProfileDto {
    /// Starts an edit from the current registration, blanks for missing fields.
    pub fn from_profile(profile: &SchoolProfile) -> Self {
        Self {
            email: profile.email.clone().unwrap_or_default(),
            phone: profile.phone.clone().unwrap_or_default(),
            inep: profile.inep.clone().unwrap_or_default(),
            cnpj: profile.cnpj.clone().unwrap_or_default(),
        }
    }
}

/// Postal address; also the update payload for the school's address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Address {
    #[serde(rename = "rua", default, deserialize_with = "crate::null_as_empty")]
    #[validate(length(min = 1, max = 200))]
    pub street: String,
    #[serde(rename = "numero", default, deserialize_with = "crate::null_as_empty")]
    #[validate(length(max = 20))]
    pub number: String,
    #[serde(rename = "complemento", default, deserialize_with = "crate::null_as_empty")]
    pub complement: String,
    #[serde(rename = "bairro", default, deserialize_with = "crate::null_as_empty")]
    pub district: String,
    #[serde(rename = "cep", default, deserialize_with = "crate::null_as_empty")]
    #[validate(length(max = 9))]
    pub postal_code: String,
    #[serde(rename = "cidade", default, deserialize_with = "crate::null_as_empty")]
    #[validate(length(min = 1, max = 100))]
    pub city: String,
    /// Two-letter state code, e.g. `SP`.
    #[serde(rename = "estado", default, deserialize_with = "crate::null_as_empty")]
    #[validate(length(max = 2))]
    pub state: String,
}
