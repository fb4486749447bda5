//! Record kinds and the operations each kind exposes.
//!
//! The three kinds share one record shape and one CRUD contract. What differs
//! per kind is the table, the permitted age range, whether gender length is
//! enforced, and which operations are offered over HTTP.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a record name, in characters.
pub const MAX_NAME_LENGTH: u64 = 20;

/// Maximum length of a species, in characters.
pub const MAX_SPECIES_LENGTH: u64 = 50;

/// Maximum length of a gender for kinds that enforce it.
pub const MAX_GENDER_LENGTH: u64 = 20;

/// Age range accepted for generic animals.
pub const ANIMAL_AGE_RANGE: RangeInclusive<i32> = 1..=200;

/// Age range accepted for cats and dogs.
pub const PET_AGE_RANGE: RangeInclusive<i32> = 1..=30;

// ---------------------------------------------------------------------------
// RecordKind
// ---------------------------------------------------------------------------

/// One of the record tables managed by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Animal,
    Cat,
    Dog,
}

impl RecordKind {
    pub const ALL: [RecordKind; 3] = [RecordKind::Animal, RecordKind::Cat, RecordKind::Dog];

    /// Human-readable entity name used in errors and logs.
    pub fn entity_name(self) -> &'static str {
        match self {
            Self::Animal => "Animal",
            Self::Cat => "Cat",
            Self::Dog => "Dog",
        }
    }

    /// Table name. Doubles as the URL path segment (`/api/{table}`).
    pub fn table(self) -> &'static str {
        match self {
            Self::Animal => "animals",
            Self::Cat => "cats",
            Self::Dog => "dogs",
        }
    }

    pub fn age_range(self) -> RangeInclusive<i32> {
        match self {
            Self::Animal => ANIMAL_AGE_RANGE,
            Self::Cat | Self::Dog => PET_AGE_RANGE,
        }
    }

    /// Gender length limit, or `None` when the kind leaves gender unconstrained.
    pub fn max_gender_length(self) -> Option<u64> {
        match self {
            Self::Animal => None,
            Self::Cat | Self::Dog => Some(MAX_GENDER_LENGTH),
        }
    }

    /// Operations offered when configuration does not override them.
    pub fn default_operations(self) -> OperationSet {
        match self {
            Self::Animal => OperationSet::empty()
                .with(Operation::List)
                .with(Operation::Get),
            Self::Cat => OperationSet::empty()
                .with(Operation::List)
                .with(Operation::Get)
                .with(Operation::Create)
                .with(Operation::Replace),
            Self::Dog => OperationSet::all(),
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.entity_name())
    }
}

// ---------------------------------------------------------------------------
// Operation / OperationSet
// ---------------------------------------------------------------------------

/// A single record operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Get,
    Create,
    Replace,
    Delete,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::List,
        Operation::Get,
        Operation::Create,
        Operation::Replace,
        Operation::Delete,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Get => "get",
            Self::Create => "create",
            Self::Replace => "replace",
            Self::Delete => "delete",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl FromStr for Operation {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == name)
            .ok_or_else(|| CoreError::Configuration(format!("Unknown record operation '{s}'")))
    }
}

/// The subset of operations a kind exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OperationSet {
    bits: u8,
}

impl OperationSet {
    pub fn empty() -> Self {
        Self { bits: 0 }
    }

    pub fn all() -> Self {
        Operation::ALL
            .into_iter()
            .fold(Self::empty(), |set, op| set.with(op))
    }

    #[must_use]
    pub fn with(self, op: Operation) -> Self {
        Self {
            bits: self.bits | op.bit(),
        }
    }

    pub fn contains(self, op: Operation) -> bool {
        self.bits & op.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Parse a comma-separated list such as `list,get,create`.
    ///
    /// `all` selects every operation; an empty string selects none.
    pub fn parse(csv: &str) -> Result<Self, CoreError> {
        if csv.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::all());
        }
        csv.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .try_fold(Self::empty(), |set, name| Ok(set.with(name.parse()?)))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn tables_are_distinct_per_kind() {
        assert_eq!(RecordKind::Animal.table(), "animals");
        assert_eq!(RecordKind::Cat.table(), "cats");
        assert_eq!(RecordKind::Dog.table(), "dogs");
    }

    #[test]
    fn pets_have_narrower_age_range() {
        assert_eq!(RecordKind::Animal.age_range(), 1..=200);
        assert_eq!(RecordKind::Cat.age_range(), 1..=30);
        assert_eq!(RecordKind::Dog.age_range(), 1..=30);
    }

    #[test]
    fn only_pets_limit_gender() {
        assert_eq!(RecordKind::Animal.max_gender_length(), None);
        assert_eq!(RecordKind::Cat.max_gender_length(), Some(20));
        assert_eq!(RecordKind::Dog.max_gender_length(), Some(20));
    }

    #[test]
    fn default_operations_follow_kind() {
        let animal = RecordKind::Animal.default_operations();
        assert!(animal.contains(Operation::List));
        assert!(animal.contains(Operation::Get));
        assert!(!animal.contains(Operation::Create));

        let cat = RecordKind::Cat.default_operations();
        assert!(cat.contains(Operation::Replace));
        assert!(!cat.contains(Operation::Delete));

        assert_eq!(RecordKind::Dog.default_operations(), OperationSet::all());
    }

    #[test]
    fn parse_operation_names() {
        let set = OperationSet::parse(" List, get ,DELETE").unwrap();
        assert!(set.contains(Operation::List));
        assert!(set.contains(Operation::Get));
        assert!(set.contains(Operation::Delete));
        assert!(!set.contains(Operation::Create));
    }

    #[test]
    fn parse_all_and_empty() {
        assert_eq!(OperationSet::parse("all").unwrap(), OperationSet::all());
        assert!(OperationSet::parse("").unwrap().is_empty());
        assert!(OperationSet::parse(" , ").unwrap().is_empty());
    }

    #[test]
    fn parse_rejects_unknown_operation() {
        assert_matches!(
            OperationSet::parse("list,patch"),
            Err(CoreError::Configuration(msg)) if msg.contains("patch")
        );
    }
}
