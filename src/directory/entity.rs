use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a directory listing
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// The two kinds of listing; they share every field and differ only in styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Professional,
    Company,
}

impl EntityKind {
    /// Badge label shown on cards and popups
    pub fn badge_label(&self) -> &'static str {
        match self {
            EntityKind::Professional => "Profesional",
            EntityKind::Company => "Empresa",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Professional => write!(f, "professional"),
            EntityKind::Company => write!(f, "company"),
        }
    }
}

/// A directory listing: a professional or a company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    /// Free-text label such as "Madrid, España"
    pub location: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "type", alias = "kind")]
    pub kind: EntityKind,
    /// Expected within 0..=5, not enforced here
    pub rating: f64,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
}

impl Entity {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
        position: LatLng,
        kind: EntityKind,
        rating: f64,
    ) -> Self {
        Self {
            id: EntityId::new(id),
            name: name.into(),
            location: location.into(),
            lat: position.lat,
            lng: position.lng,
            kind,
            rating,
            specialties: Vec::new(),
            phone: None,
            email: None,
            description: None,
            experience: None,
            price_range: None,
        }
    }

    pub fn with_specialties<I, S>(mut self, specialties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.specialties = specialties.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_experience(mut self, experience: impl Into<String>) -> Self {
        self.experience = Some(experience.into());
        self
    }

    pub fn with_price_range(mut self, price_range: impl Into<String>) -> Self {
        self.price_range = Some(price_range.into());
        self
    }

    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }

    /// Whether the entity can be drawn on the map. Entities failing this
    /// still appear in the list view.
    pub fn is_placeable(&self) -> bool {
        self.position().is_valid()
    }

    pub fn has_specialty(&self, label: &str) -> bool {
        self.specialties.iter().any(|s| s == label)
    }
}
