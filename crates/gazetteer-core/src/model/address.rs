// crates/gazetteer-core/src/model/address.rs
use serde::{Deserialize, Serialize};

/// Standard names of a resolved address.
///
/// Levels below the most specific resolved one stay `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub province: String,
    pub city: Option<String>,
    pub district: Option<String>,
}

/// Codes of a unit and its ancestors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressCodes {
    pub province_code: String,
    pub city_code: Option<String>,
    pub district_code: Option<String>,
}

impl AddressCodes {
    /// Builds the codes from an ancestor chain (most specific first).
    ///
    /// Only chains of length 1 to 3 describe a unit; anything else yields `None`.
    pub fn from_chain(chain: &[&str]) -> Option<Self> {
        match chain {
            [province] => Some(Self {
                province_code: province.to_string(),
                city_code: None,
                district_code: None,
            }),
            [city, province] => Some(Self {
                province_code: province.to_string(),
                city_code: Some(city.to_string()),
                district_code: None,
            }),
            [district, city, province] => Some(Self {
                province_code: province.to_string(),
                city_code: Some(city.to_string()),
                district_code: Some(district.to_string()),
            }),
            _ => None,
        }
    }

    /// The most specific code present.
    pub fn most_specific(&self) -> &str {
        self.district_code
            .as_deref()
            .or(self.city_code.as_deref())
            .unwrap_or(&self.province_code)
    }
}
