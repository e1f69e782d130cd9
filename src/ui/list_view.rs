//! List view of the visible subset as cards

use crate::core::constants::CARD_SPECIALTY_PREVIEW;
use crate::directory::entity::{Entity, EntityId, EntityKind};
use crate::ui::popup::{call_action, format_rating, EntityAction};

/// One card in the list view. Optional attributes that are absent simply
/// produce no field or action.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCard {
    pub id: EntityId,
    pub title: String,
    pub location: String,
    pub rating: String,
    pub kind: EntityKind,
    pub badge: &'static str,
    pub description: Option<String>,
    pub specialties: Vec<String>,
    /// "+N más" when specialties were truncated
    pub more_specialties: Option<String>,
    pub price_range: Option<String>,
    pub actions: Vec<EntityAction>,
}

impl EntityCard {
    pub fn from_entity(entity: &Entity) -> Self {
        let shown = entity.specialties.len().min(CARD_SPECIALTY_PREVIEW);
        let hidden = entity.specialties.len() - shown;

        let mut actions = vec![
            EntityAction::ViewProfile(entity.id.clone()),
            EntityAction::Contact(entity.id.clone()),
        ];
        actions.extend(call_action(entity));

        Self {
            id: entity.id.clone(),
            title: entity.name.clone(),
            location: entity.location.clone(),
            rating: format_rating(entity.rating),
            kind: entity.kind,
            badge: entity.kind.badge_label(),
            description: entity.description.clone(),
            specialties: entity.specialties[..shown].to_vec(),
            more_specialties: (hidden > 0).then(|| format!("+{hidden} más")),
            price_range: entity.price_range.clone(),
            actions,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListView {
    cards: Vec<EntityCard>,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds one card per visible entity, including unplaceable ones
    pub fn sync<'a, I>(&mut self, visible: I)
    where
        I: IntoIterator<Item = &'a Entity>,
    {
        self.cards = visible.into_iter().map(EntityCard::from_entity).collect();
    }

    pub fn cards(&self) -> &[EntityCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLng;

    fn company() -> Entity {
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
    }

    #[test]
    fn test_card_truncates_specialties() {
        let card = EntityCard::from_entity(&company());
        assert_eq!(card.specialties.len(), 3);
        assert_eq!(card.more_specialties.as_deref(), Some("+1 más"));
        assert_eq!(card.badge, "Empresa");
    }

    #[test]
    fn test_card_omits_missing_optionals() {
        let card = EntityCard::from_entity(&company());
        assert!(card.description.is_none());
        assert!(card.price_range.is_none());
        assert_eq!(
            card.actions,
            vec![
                EntityAction::ViewProfile("2".into()),
                EntityAction::Contact("2".into()),
            ]
        );
    }

    #[test]
    fn test_list_includes_unplaceable_entities() {
        let mut lost = company();
        lost.lat = f64::NAN;

        let mut list = ListView::new();
        list.sync([&lost]);
        assert_eq!(list.len(), 1);
        assert_eq!(list.cards()[0].title, "Granizo Pro Levante S.L.");
    }
}
