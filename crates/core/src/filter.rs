//! Equality filters for record listings.

/// Optional equality constraints applied when listing records.
///
/// Each field is independently present or absent. A present field restricts
/// the listing to rows whose column equals the value exactly; absent fields
/// place no constraint. `age: Some(0)` is a real filter and matches nothing,
/// since stored ages are always at least 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub name: Option<String>,
    pub species: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
}

impl RecordFilter {
    /// Build a filter from raw query values, treating empty strings as absent.
    pub fn new(
        name: Option<String>,
        species: Option<String>,
        age: Option<i32>,
        gender: Option<String>,
    ) -> Self {
        Self {
            name: non_empty(name),
            species: non_empty(species),
            age,
            gender: non_empty(gender),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.species.is_none()
            && self.age.is_none()
            && self.gender.is_none()
    }

    /// Whether a record with the given fields satisfies every present constraint.
    pub fn matches(&self, name: &str, species: &str, age: i32, gender: Option<&str>) -> bool {
        self.name.as_deref().map_or(true, |n| n == name)
            && self.species.as_deref().map_or(true, |s| s == species)
            && self.age.map_or(true, |a| a == age)
            && self.gender.as_deref().map_or(true, |g| Some(g) == gender)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(name: Option<&str>, age: Option<i32>) -> RecordFilter {
        RecordFilter::new(name.map(String::from), None, age, None)
    }

    #[test]
    fn empty_strings_are_absent() {
        let f = RecordFilter::new(
            Some(String::new()),
            Some(String::new()),
            None,
            Some(String::new()),
        );
        assert!(f.is_empty());
    }

    #[test]
    fn no_filter_matches_everything() {
        let f = RecordFilter::default();
        assert!(f.matches("Rex", "Canine", 3, None));
        assert!(f.matches("Tom", "Feline", 12, Some("M")));
    }

    #[test]
    fn each_present_field_must_match() {
        let f = filter(Some("Rex"), Some(3));
        assert!(f.matches("Rex", "Canine", 3, Some("M")));
        assert!(!f.matches("Rex", "Canine", 4, Some("M")));
        assert!(!f.matches("Max", "Canine", 3, Some("M")));
    }

    #[test]
    fn zero_age_is_a_real_constraint() {
        let f = filter(None, Some(0));
        assert!(!f.is_empty());
        assert!(!f.matches("Rex", "Canine", 3, None));
    }

    #[test]
    fn gender_filter_excludes_records_without_gender() {
        let f = RecordFilter::new(None, None, None, Some("F".into()));
        assert!(f.matches("Luna", "Feline", 2, Some("F")));
        assert!(!f.matches("Luna", "Feline", 2, None));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let f = filter(Some("rex"), None);
        assert!(!f.matches("Rex", "Canine", 3, None));
    }
}
