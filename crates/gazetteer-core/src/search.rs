// crates/gazetteer-core/src/search.rs

use crate::common::{MAINLAND_EXCLUDED, ROOT_CODE};
use crate::error::{GazetteerError, Result};
use crate::index::{Scope, MIN_PREFIX_LEN};
use crate::model::{Address, AddressCodes, Gazetteer};
use crate::traits::GazetteerSearch;

impl Gazetteer {
    fn names_of<'a>(&'a self, codes: Vec<&'a str>) -> Vec<&'a str> {
        codes
            .into_iter()
            .map(|code| self.store.name_of(code).unwrap_or_default())
            .collect()
    }

    /// Standard names along the ancestor chain of `code`.
    fn address_of(&self, code: &str) -> Option<Address> {
        let codes = AddressCodes::from_chain(&self.store.ancestor_chain(code))?;
        let name = |code: &str| self.store.name_of(code).map(str::to_owned);
        Some(Address {
            province: name(codes.province_code.as_str())?,
            city: codes.city_code.as_deref().and_then(name),
            district: codes.district_code.as_deref().and_then(name),
        })
    }
}

impl GazetteerSearch for Gazetteer {
    fn province_codes(&self, mainland_only: bool) -> Vec<&str> {
        let mut codes = self.store.children_of(ROOT_CODE);
        if mainland_only {
            codes.retain(|code| !MAINLAND_EXCLUDED.contains(code));
        }
        codes
    }

    fn city_codes(&self, province_code: &str) -> Vec<&str> {
        self.store.children_of(province_code)
    }

    fn district_codes(&self, city_code: &str) -> Vec<&str> {
        self.store.children_of(city_code)
    }

    fn name_of(&self, code: &str) -> Option<&str> {
        self.store.name_of(code)
    }

    fn provinces(&self, mainland_only: bool) -> Vec<&str> {
        self.names_of(self.province_codes(mainland_only))
    }

    fn cities(&self, province_name: &str) -> Vec<&str> {
        match self.code_of_province_name(province_name) {
            Some(code) => self.names_of(self.city_codes(code)),
            None => Vec::new(),
        }
    }

    fn districts(&self, city_name: &str) -> Vec<&str> {
        match self.code_of_city_name(city_name) {
            Some(code) => self.names_of(self.district_codes(code)),
            None => Vec::new(),
        }
    }

    fn code_of_province_name(&self, name: &str) -> Option<&str> {
        // province prefixes never collide, two characters always suffice
        self.index.get(&Scope::Province, name, MIN_PREFIX_LEN)
    }

    fn code_of_city_name(&self, name: &str) -> Option<&str> {
        self.index.probe(&Scope::City, name)
    }

    fn code_of_district_name(&self, city_name: &str, district_name: &str) -> Option<&str> {
        let city_code = self.code_of_city_name(city_name)?;
        self.index.probe(&Scope::district(city_code), district_name)
    }

    fn resolve_code(&self, province: &str, city: &str, district: &str) -> Option<&str> {
        if !city.is_empty() && !district.is_empty() {
            if let Some(code) = self.code_of_district_name(city, district) {
                return Some(code);
            }
        }
        if !city.is_empty() {
            if let Some(code) = self.code_of_city_name(city) {
                return Some(code);
            }
        }
        if !province.is_empty() {
            return self.code_of_province_name(province);
        }
        None
    }

    fn parse_code(&self, code: &str) -> Result<AddressCodes> {
        AddressCodes::from_chain(&self.store.ancestor_chain(code))
            .ok_or_else(|| GazetteerError::InvalidCode(code.to_owned()))
    }

    fn parse_address(&self, province: &str, city: &str, district: &str) -> Result<Address> {
        self.resolve_code(province, city, district)
            .and_then(|code| self.address_of(code))
            .ok_or_else(|| GazetteerError::NotFound {
                province: province.to_owned(),
                city: city.to_owned(),
                district: district.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::Row;

    fn sample() -> Gazetteer {
        Gazetteer::from_rows([
            Row::province("CN002000000", "澳门特别行政区"),
            Row::province("CN003000000", "北京市"),
            Row::province("CN027000000", "台湾省"),
            Row::province("CN029000000", "香港特别行政区"),
            Row::province("CN033000000", "浙江省"),
            Row::city("CN003000000", "CN003001000", "北京市"),
            Row::city("CN033000000", "CN033001000", "杭州市"),
            Row::city("CN033000000", "CN033002000", "宁波市"),
            Row::district("CN033001000", "CN033001012", "西湖区"),
            Row::district("CN033002000", "CN033002002", "江北区"),
        ])
        .unwrap()
    }

    #[test]
    fn mainland_filter_keeps_order() {
        let gz = sample();
        assert_eq!(gz.province_codes(false).len(), 5);
        assert_eq!(
            gz.province_codes(true),
            vec!["CN003000000", "CN033000000"]
        );
        assert_eq!(gz.provinces(true), vec!["北京市", "浙江省"]);
    }

    #[test]
    fn province_lookup_uses_two_characters_only() {
        let gz = sample();
        assert_eq!(gz.code_of_province_name("浙江"), Some("CN033000000"));
        assert_eq!(gz.code_of_province_name("浙江省"), Some("CN033000000"));
        assert_eq!(gz.code_of_province_name("浙"), None);
        assert_eq!(gz.code_of_province_name(""), None);
    }

    #[test]
    fn district_needs_resolvable_city() {
        let gz = sample();
        assert_eq!(gz.code_of_district_name("杭州", "西湖"), Some("CN033001012"));
        assert_eq!(gz.code_of_district_name("宁波", "西湖"), None);
        assert_eq!(gz.code_of_district_name("温州", "西湖"), None);
    }

    #[test]
    fn resolve_falls_through_levels() {
        let gz = sample();
        assert_eq!(gz.resolve_code("浙江", "杭州", ""), Some("CN033001000"));
        assert_eq!(gz.resolve_code("浙江", "温州", "西湖"), Some("CN033000000"));
        assert_eq!(gz.resolve_code("", "", "西湖"), None);
        assert_eq!(gz.resolve_code("foo", "bar", ""), None);
    }

    #[test]
    fn parse_address_walks_up_from_most_specific() {
        let gz = sample();
        let address = gz.parse_address("", "杭州", "西湖").unwrap();
        assert_eq!(address.province, "浙江省");
        assert_eq!(address.city.as_deref(), Some("杭州市"));
        assert_eq!(address.district.as_deref(), Some("西湖区"));

        let address = gz.parse_address("浙江", "", "").unwrap();
        assert_eq!(address.city, None);

        assert!(matches!(
            gz.parse_address("foo", "bar", ""),
            Err(GazetteerError::NotFound { .. })
        ));
    }

    #[test]
    fn parse_code_rejects_unknown_and_root() {
        let gz = sample();
        assert!(matches!(
            gz.parse_code("foo"),
            Err(GazetteerError::InvalidCode(_))
        ));
        assert!(gz.parse_code(ROOT_CODE).is_err());
    }
}
