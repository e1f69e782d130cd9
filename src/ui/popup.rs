use crate::directory::entity::{Entity, EntityId, EntityKind};

/// Actions offered by a popup or card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityAction {
    /// "Ver Perfil": select the entity
    ViewProfile(EntityId),
    /// "Contactar": raise a contact request
    Contact(EntityId),
    /// "Llamar": dial link, only offered when a phone exists
    Call { href: String },
}

impl EntityAction {
    pub fn label(&self) -> &'static str {
        match self {
            EntityAction::ViewProfile(_) => "Ver Perfil",
            EntityAction::Contact(_) => "Contactar",
            EntityAction::Call { .. } => "Llamar",
        }
    }
}

pub(crate) fn call_action(entity: &Entity) -> Option<EntityAction> {
    entity.phone.as_ref().map(|phone| EntityAction::Call {
        href: format!("tel:{phone}"),
    })
}

pub(crate) fn format_rating(rating: f64) -> String {
    format!("{rating}/5")
}

/// Content of the popup opened from a marker
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPopup {
    pub id: EntityId,
    pub title: String,
    pub kind: EntityKind,
    pub badge: &'static str,
    pub location: String,
    pub rating: String,
    /// Every specialty, unlike cards which truncate
    pub specialties: Vec<String>,
    pub actions: Vec<EntityAction>,
}

impl MarkerPopup {
    pub fn from_entity(entity: &Entity) -> Self {
        let mut actions = vec![EntityAction::ViewProfile(entity.id.clone())];
        actions.extend(call_action(entity));

        Self {
            id: entity.id.clone(),
            title: entity.name.clone(),
            kind: entity.kind,
            badge: entity.kind.badge_label(),
            location: entity.location.clone(),
            rating: format_rating(entity.rating),
            specialties: entity.specialties.clone(),
            actions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLng;

    #[test]
    fn test_popup_without_phone_has_no_call() {
        let entity = Entity::new(
            "3",
            "Lucía Fernández",
            "Barcelona, España",
            LatLng::new(41.3874, 2.1686),
            EntityKind::Professional,
            4.9,
        );
        let popup = MarkerPopup::from_entity(&entity);

        assert_eq!(popup.badge, "Profesional");
        assert_eq!(popup.rating, "4.9/5");
        assert_eq!(popup.actions, vec![EntityAction::ViewProfile("3".into())]);
    }

    #[test]
    fn test_popup_with_phone_offers_call() {
        let entity = Entity::new(
            "4",
            "Chapa y Pintura Norte",
            "Bilbao, España",
            LatLng::new(43.263, -2.935),
            EntityKind::Company,
            4.2,
        )
        .with_phone("+34 944 000 111");
        let popup = MarkerPopup::from_entity(&entity);

        assert_eq!(popup.badge, "Empresa");
        assert_eq!(
            popup.actions.last(),
            Some(&EntityAction::Call {
                href: "tel:+34 944 000 111".into()
            })
        );
        assert_eq!(popup.actions.last().map(EntityAction::label), Some("Llamar"));
    }
}
