//! Static directory data and loading
//!
//! The collection is loaded once at startup, validated, and never mutated
//! afterwards.

use crate::core::geo::LatLng;
use crate::directory::entity::{Entity, EntityKind};
use crate::prelude::{HashMap, HashSet};
use crate::{Error, Result};
use once_cell::sync::Lazy;
use std::path::Path;

/// Specialty labels offered by the filter surface
pub const SPECIALTY_CATALOG: [&str; 6] = [
    "Sacabollos sin pintura (PDR)",
    "Reparación tradicional",
    "Daños por granizo",
    "Restauración clásicos",
    "Seguros",
    "Servicio móvil",
];

pub fn specialty_catalog() -> &'static [&'static str] {
    &SPECIALTY_CATALOG
}

static MOCK_ENTITIES: Lazy<Vec<Entity>> = Lazy::new(|| {
    vec![
        Entity::new(
            "1",
            "Carlos Rodríguez",
            "Madrid, España",
            LatLng::new(40.4168, -3.7038),
            EntityKind::Professional,
            4.8,
        )
        .with_specialties(["Sacabollos sin pintura (PDR)", "Servicio móvil"])
        .with_phone("+34 600 123 456")
        .with_email("carlos@example.com")
        .with_description("15 años de experiencia en reparación de abollones sin pintura.")
        .with_price_range("50-150€ por trabajo"),
        Entity::new(
            "2",
            "Granizo Pro Levante S.L.",
            "Valencia, España",
            LatLng::new(39.4699, -0.3763),
            EntityKind::Company,
            4.6,
        )
        .with_specialties([
            "Daños por granizo",
            "Seguros",
            "Sacabollos sin pintura (PDR)",
            "Servicio móvil",
        ])
        .with_phone("+34 961 234 567")
        .with_email("info@granizopro.example.com")
        .with_description("Equipo especializado en campañas de granizo y peritaciones.")
        .with_experience("Más de 2.000 vehículos reparados")
        .with_price_range("Presupuesto según peritación"),
        Entity::new(
            "3",
            "Lucía Fernández",
            "Barcelona, España",
            LatLng::new(41.3874, 2.1686),
            EntityKind::Professional,
            4.9,
        )
        .with_specialties(["Restauración clásicos", "Reparación tradicional"])
        .with_email("lucia@example.com")
        .with_experience("10 años"),
        Entity::new(
            "4",
            "Chapa y Pintura Norte",
            "Bilbao, España",
            LatLng::new(43.2630, -2.9350),
            EntityKind::Company,
            4.2,
        )
        .with_specialties(["Reparación tradicional", "Seguros"])
        .with_phone("+34 944 000 111")
        .with_price_range("80-300€ por trabajo"),
        Entity::new(
            "5",
            "Miguel Ángel Torres",
            "Sevilla, España",
            LatLng::new(37.3891, -5.9845),
            EntityKind::Professional,
            4.5,
        )
        .with_specialties(["Sacabollos sin pintura (PDR)"])
        .with_phone("+34 655 987 321"),
        Entity::new(
            "6",
            "DentWorks Lisboa",
            "Lisboa, Portugal",
            LatLng::new(38.7223, -9.1393),
            EntityKind::Company,
            4.4,
        )
        .with_specialties(["Sacabollos sin pintura (PDR)", "Daños por granizo"])
        .with_email("ola@dentworks.example.com")
        .with_description("Reparação de amolgadelas sem pintura."),
        Entity::new(
            "7",
            "Jean Dupont",
            "Toulouse, Francia",
            LatLng::new(43.6047, 1.4442),
            EntityKind::Professional,
            3.9,
        ),
    ]
});

/// The full, immutable entity collection of a session
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    entities: Vec<Entity>,
}

impl Dataset {
    /// Builds a dataset after checking id uniqueness and names
    pub fn new(entities: Vec<Entity>) -> Result<Self> {
        validate(&entities)?;
        Ok(Self { entities })
    }

    /// The built-in demo collection
    pub fn mock() -> Self {
        Self {
            entities: MOCK_ENTITIES.clone(),
        }
    }

    /// Parses a JSON array of entities
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entities: Vec<Entity> = serde_json::from_str(json)?;
        Self::new(entities)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let dataset = Self::from_json_str(&json)?;
        log::info!(
            "loaded {} entities from {}",
            dataset.len(),
            path.as_ref().display()
        );
        Ok(dataset)
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn into_entities(self) -> Vec<Entity> {
        self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Every specialty label present in the data, in first-seen order
    pub fn specialties(&self) -> Vec<&str> {
        let mut seen = HashSet::default();
        self.entities
            .iter()
            .flat_map(|e| e.specialties.iter())
            .filter(|label| seen.insert(label.as_str()))
            .map(String::as_str)
            .collect()
    }
}

fn validate(entities: &[Entity]) -> Result<()> {
    let mut ids: HashMap<&str, usize> = HashMap::default();

    for (index, entity) in entities.iter().enumerate() {
        if ids.insert(entity.id.as_str(), index).is_some() {
            return Err(Error::DuplicateId(entity.id.to_string()));
        }
        if entity.name.trim().is_empty() {
            return Err(Error::EmptyName(entity.id.to_string()));
        }
        if !entity.is_placeable() {
            log::warn!(
                "entity {} has coordinates ({}, {}) outside the map; it will only be listed",
                entity.id,
                entity.lat,
                entity.lng
            );
        }
        for label in &entity.specialties {
            if !SPECIALTY_CATALOG.contains(&label.as_str()) {
                log::warn!(
                    "entity {} lists specialty '{}' which the filter does not offer",
                    entity.id,
                    label
                );
            }
        }
    }

    Ok(())
}
