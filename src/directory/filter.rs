//! Filtering of the directory into the visible subset
//!
//! Four independent predicates compose with logical AND. Each predicate is a
//! no-op at its default value, and filtering always starts from the full
//! collection so criteria never compound on a stale subset.

use crate::directory::entity::{Entity, EntityKind};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind constraint offered by the filter surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindFilter {
    #[default]
    All,
    Professional,
    Company,
}

impl KindFilter {
    pub const ALL: [KindFilter; 3] = [KindFilter::All, KindFilter::Professional, KindFilter::Company];

    pub fn matches(&self, kind: EntityKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Professional => kind == EntityKind::Professional,
            KindFilter::Company => kind == EntityKind::Company,
        }
    }

    /// Option label shown in the kind selector
    pub fn label(&self) -> &'static str {
        match self {
            KindFilter::All => "Todos",
            KindFilter::Professional => "Solo Profesionales",
            KindFilter::Company => "Solo Empresas",
        }
    }
}

impl fmt::Display for KindFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KindFilter::All => write!(f, "all"),
            KindFilter::Professional => write!(f, "professional"),
            KindFilter::Company => write!(f, "company"),
        }
    }
}

impl FromStr for KindFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" => Ok(KindFilter::All),
            "professional" => Ok(KindFilter::Professional),
            "company" => Ok(KindFilter::Company),
            other => Err(Error::InvalidCriteria(format!("unknown kind filter '{other}'"))),
        }
    }
}

impl From<EntityKind> for KindFilter {
    fn from(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Professional => KindFilter::Professional,
            EntityKind::Company => KindFilter::Company,
        }
    }
}

/// Active filter criteria. `Default` matches every entity.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterCriteria {
    pub name_query: String,
    pub location_query: String,
    pub kind_filter: KindFilter,
    /// Exact specialty label; empty means no constraint
    pub specialty_filter: String,
}

/// A single criterion change emitted by the filter surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CriteriaField {
    Name(String),
    Location(String),
    Kind(KindFilter),
    Specialty(String),
}

impl FilterCriteria {
    pub fn with_name(mut self, query: impl Into<String>) -> Self {
        self.name_query = query.into();
        self
    }

    pub fn with_location(mut self, query: impl Into<String>) -> Self {
        self.location_query = query.into();
        self
    }

    pub fn with_kind(mut self, kind: KindFilter) -> Self {
        self.kind_filter = kind;
        self
    }

    pub fn with_specialty(mut self, label: impl Into<String>) -> Self {
        self.specialty_filter = label.into();
        self
    }

    /// Updates the field named by `change`, leaving the others untouched
    pub fn apply(&mut self, change: CriteriaField) {
        match change {
            CriteriaField::Name(query) => self.name_query = query,
            CriteriaField::Location(query) => self.location_query = query,
            CriteriaField::Kind(kind) => self.kind_filter = kind,
            CriteriaField::Specialty(label) => self.specialty_filter = label,
        }
    }

    /// True when no criterion constrains the result
    pub fn is_default(&self) -> bool {
        self.name_query.is_empty()
            && self.location_query.is_empty()
            && self.kind_filter == KindFilter::All
            && self.specialty_filter.is_empty()
    }

    pub fn matches(&self, entity: &Entity) -> bool {
        matches_name(entity, &self.name_query)
            && matches_location(entity, &self.location_query)
            && self.kind_filter.matches(entity.kind)
            && matches_specialty(entity, &self.specialty_filter)
    }
}

fn contains_case_insensitive(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

pub fn matches_name(entity: &Entity, query: &str) -> bool {
    contains_case_insensitive(&entity.name, query)
}

pub fn matches_location(entity: &Entity, query: &str) -> bool {
    contains_case_insensitive(&entity.location, query)
}

pub fn matches_kind(entity: &Entity, filter: KindFilter) -> bool {
    filter.matches(entity.kind)
}

pub fn matches_specialty(entity: &Entity, label: &str) -> bool {
    label.is_empty() || entity.has_specialty(label)
}

/// Positions in `all` of the entities passing `criteria`, in input order
pub fn visible_indices(all: &[Entity], criteria: &FilterCriteria) -> Vec<usize> {
    all.iter()
        .enumerate()
        .filter(|(_, entity)| criteria.matches(entity))
        .map(|(index, _)| index)
        .collect()
}

/// Selects the entities of `all` passing every active criterion.
///
/// Relative order of the input is preserved and nothing is cloned.
pub fn compute_visible<'a>(all: &'a [Entity], criteria: &FilterCriteria) -> Vec<&'a Entity> {
    all.iter().filter(|entity| criteria.matches(entity)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLng;

    fn sample() -> Vec<Entity> {
        vec![
            Entity::new(
                "1",
                "Carlos Rodríguez",
                "Madrid, España",
                LatLng::new(40.4168, -3.7038),
                EntityKind::Professional,
                4.8,
            )
            .with_specialties(["Sacabollos sin pintura (PDR)", "Servicio móvil"]),
            Entity::new(
                "2",
                "Granizo Norte S.L.",
                "Bilbao, España",
                LatLng::new(43.263, -2.935),
                EntityKind::Company,
                4.5,
            )
            .with_specialties(["Daños por granizo", "Seguros"]),
            Entity::new(
                "3",
                "Lucía Martín",
                "Madrid, España",
                LatLng::new(40.45, -3.69),
                EntityKind::Professional,
                4.2,
            ),
        ]
    }

    fn ids(visible: &[&Entity]) -> Vec<String> {
        visible.iter().map(|e| e.id.to_string()).collect()
    }

    #[test]
    fn test_default_criteria_is_identity() {
        let all = sample();
        let visible = compute_visible(&all, &FilterCriteria::default());
        assert_eq!(ids(&visible), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_name_is_case_insensitive() {
        let all = sample();
        let visible = compute_visible(&all, &FilterCriteria::default().with_name("CARLOS"));
        assert_eq!(ids(&visible), vec!["1"]);
    }

    #[test]
    fn test_location_substring() {
        let all = sample();
        let visible = compute_visible(&all, &FilterCriteria::default().with_location("madrid"));
        assert_eq!(ids(&visible), vec!["1", "3"]);
    }

    #[test]
    fn test_kind_filter() {
        let all = sample();
        let companies = compute_visible(&all, &FilterCriteria::default().with_kind(KindFilter::Company));
        assert_eq!(ids(&companies), vec!["2"]);
        assert!(matches_kind(&all[1], KindFilter::Company));
        assert!(!matches_kind(&all[0], KindFilter::Company));
    }

    #[test]
    fn test_criteria_compose_with_and() {
        let all = sample();
        let criteria = FilterCriteria::default()
            .with_name("carlos")
            .with_kind(KindFilter::Company);
        assert!(compute_visible(&all, &criteria).is_empty());
    }

    #[test]
    fn test_empty_specialties_never_match_a_label() {
        let all = sample();
        for label in ["Seguros", "Servicio móvil", "anything"] {
            let visible = compute_visible(&all, &FilterCriteria::default().with_specialty(label));
            assert!(visible.iter().all(|e| e.id.as_str() != "3"));
        }
    }

    #[test]
    fn test_specialty_is_exact_label() {
        let all = sample();
        let visible =
            compute_visible(&all, &FilterCriteria::default().with_specialty("servicio móvil"));
        assert!(visible.is_empty());
    }

    #[test]
    fn test_apply_replaces_single_field() {
        let mut criteria = FilterCriteria::default().with_location("madrid");
        criteria.apply(CriteriaField::Name("lucía".into()));
        assert_eq!(criteria.location_query, "madrid");
        assert_eq!(criteria.name_query, "lucía");

        criteria.apply(CriteriaField::Location(String::new()));
        assert!(!criteria.is_default());
        criteria.apply(CriteriaField::Name(String::new()));
        assert!(criteria.is_default());
    }

    #[test]
    fn test_visible_indices_follow_input_order() {
        let all = sample();
        let criteria = FilterCriteria::default().with_kind(KindFilter::Professional);
        assert_eq!(visible_indices(&all, &criteria), vec![0, 2]);
    }

    #[test]
    fn test_kind_filter_from_str() {
        assert_eq!("company".parse::<KindFilter>().unwrap(), KindFilter::Company);
        assert!(matches!(
            "robots".parse::<KindFilter>(),
            Err(Error::InvalidCriteria(_))
        ));
    }
}
