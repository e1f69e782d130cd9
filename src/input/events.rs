use crate::core::{coordinator::ContactRequest, geo::Point};
use crate::directory::{entity::EntityId, filter::CriteriaField};
use serde::{Deserialize, Serialize};

/// Which view of the visible subset is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Map,
    List,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Map => "Mapa",
            ViewMode::List => "Lista",
        }
    }
}

/// Events emitted by the filter surface and the two views, as plain data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// One filter field changed
    CriteriaChanged(CriteriaField),
    /// Map/list toggle
    ViewModeToggled(ViewMode),
    /// A marker was activated on the map
    MarkerActivated { id: EntityId },
    /// Click on the map surface, resolved to a marker if one is hit
    MapClick { position: Point },
    /// "Ver Perfil" on a card or popup
    ProfileRequested { id: EntityId },
    /// "Contactar" on a card
    ContactRequested { id: EntityId },
    /// The map surface changed size
    MapResized { size: Point },
}

/// Whether an event was handled
#[derive(Debug, Clone, PartialEq)]
pub enum EventHandled {
    Handled,
    NotHandled,
    /// Handled, carrying the details to surface to the user
    Contact(ContactRequest),
}

impl InputEvent {
    /// Gets the screen position associated with this event, if any
    pub fn position(&self) -> Option<Point> {
        match self {
            InputEvent::MapClick { position } => Some(*position),
            _ => None,
        }
    }

    /// The entity this event targets, if any
    pub fn entity_id(&self) -> Option<&EntityId> {
        match self {
            InputEvent::MarkerActivated { id }
            | InputEvent::ProfileRequested { id }
            | InputEvent::ContactRequested { id } => Some(id),
            _ => None,
        }
    }

    /// Checks if this event can change the visible subset
    pub fn is_filter_event(&self) -> bool {
        matches!(self, InputEvent::CriteriaChanged(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_event_position() {
        let click = InputEvent::MapClick {
            position: Point::new(100.0, 200.0),
        };
        assert_eq!(click.position(), Some(Point::new(100.0, 200.0)));
        assert_eq!(InputEvent::ViewModeToggled(ViewMode::List).position(), None);
    }

    #[test]
    fn test_entity_targets() {
        let contact = InputEvent::ContactRequested { id: "3".into() };
        assert_eq!(contact.entity_id(), Some(&EntityId::new("3")));
        assert!(!contact.is_filter_event());

        let filter = InputEvent::CriteriaChanged(CriteriaField::Name("carlos".into()));
        assert!(filter.entity_id().is_none());
        assert!(filter.is_filter_event());
    }

    #[test]
    fn test_view_mode_defaults_to_map() {
        assert_eq!(ViewMode::default(), ViewMode::Map);
        assert_eq!(ViewMode::List.label(), "Lista");
    }
}
