// crates/gazetteer-core/src/traits.rs
use crate::error::Result;
use crate::model::{Address, AddressCodes};

/// Query surface over a built snapshot.
///
/// Single-field lookups return `None` or an empty list when nothing matches;
/// only the composite resolvers [`GazetteerSearch::parse_code`] and
/// [`GazetteerSearch::parse_address`] report errors.
///
/// Name lookups match literal prefixes: the supplied name must start with the
/// shortest unambiguous prefix (at least two characters) of the standard name.
pub trait GazetteerSearch {
    /// Province codes in input order, optionally without Hong Kong, Macau and Taiwan.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gazetteer_core::{Gazetteer, GazetteerSearch};
    ///
    /// let gz = Gazetteer::load().unwrap();
    /// let all = gz.province_codes(false);
    /// let mainland = gz.province_codes(true);
    /// assert_eq!(all.len(), mainland.len() + 3);
    /// ```
    fn province_codes(&self, mainland_only: bool) -> Vec<&str>;

    /// City codes of a province; empty for an unknown code.
    fn city_codes(&self, province_code: &str) -> Vec<&str>;

    /// District codes of a city; empty for an unknown code.
    fn district_codes(&self, city_code: &str) -> Vec<&str>;

    /// Standard name of any unit.
    fn name_of(&self, code: &str) -> Option<&str>;

    fn provinces(&self, mainland_only: bool) -> Vec<&str>;

    /// City names of the province called `province_name`.
    fn cities(&self, province_name: &str) -> Vec<&str>;

    /// District names of the city called `city_name`.
    fn districts(&self, city_name: &str) -> Vec<&str>;

    /// Province code by its two-character prefix.
    fn code_of_province_name(&self, name: &str) -> Option<&str>;

    /// City code by name; cities are disambiguated nationwide.
    fn code_of_city_name(&self, name: &str) -> Option<&str>;

    /// District code by city name and district name.
    fn code_of_district_name(&self, city_name: &str, district_name: &str) -> Option<&str>;

    /// Most specific code resolvable from the given names.
    ///
    /// Priority is district > city > province. A district is only tried when
    /// both city and district names are given; an unresolvable city makes the
    /// district attempt miss silently and resolution falls through.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gazetteer_core::{Gazetteer, GazetteerSearch};
    ///
    /// let gz = Gazetteer::load().unwrap();
    /// assert_eq!(gz.resolve_code("浙江", "杭州", ""), Some("CN033001000"));
    /// assert_eq!(gz.resolve_code("", "杭州", "西湖"), Some("CN033001012"));
    /// ```
    fn resolve_code(&self, province: &str, city: &str, district: &str) -> Option<&str>;

    /// Splits a code into the codes of its province, city and district.
    fn parse_code(&self, code: &str) -> Result<AddressCodes>;

    /// Standard names for the most specific unit resolvable from the given names.
    fn parse_address(&self, province: &str, city: &str, district: &str) -> Result<Address>;
}
