// crates/gazetteer-core/src/export.rs

//! Flat string forms for callers across a language boundary.
//!
//! Lists become one TAB-joined string and absent values become `""`. Note that
//! `""` is then indistinguishable from a legitimately empty result; the typed
//! API keeps using `Option` for that reason.

use crate::model::{Address, AddressCodes};

pub const DELIMITER: &str = "\t";

pub fn join_list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| item.as_ref().to_owned())
        .collect::<Vec<_>>()
        .join(DELIMITER)
}

#[inline]
pub fn or_empty(value: Option<&str>) -> &str {
    value.unwrap_or_default()
}

/// `province \t city \t district`, empty fields for unresolved levels.
pub fn join_address(address: &Address) -> String {
    join_list([
        address.province.as_str(),
        or_empty(address.city.as_deref()),
        or_empty(address.district.as_deref()),
    ])
}

pub fn join_codes(codes: &AddressCodes) -> String {
    join_list([
        codes.province_code.as_str(),
        or_empty(codes.city_code.as_deref()),
        or_empty(codes.district_code.as_deref()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_are_tab_joined() {
        assert_eq!(join_list(["a", "b", "c"]), "a\tb\tc");
        assert_eq!(join_list(vec!["浙江省".to_string()]), "浙江省");
        assert_eq!(join_list(Vec::<String>::new()), "");
    }

    #[test]
    fn absent_levels_are_empty_fields() {
        let address = Address {
            province: "浙江省".to_string(),
            city: Some("杭州市".to_string()),
            district: None,
        };
        assert_eq!(join_address(&address), "浙江省\t杭州市\t");

        let codes = AddressCodes {
            province_code: "CN033000000".to_string(),
            city_code: None,
            district_code: None,
        };
        assert_eq!(join_codes(&codes), "CN033000000\t\t");
    }
}
