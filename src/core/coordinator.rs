//! Central state of a directory session
//!
//! The coordinator owns the full collection, the active criteria, the visible
//! subset derived from them, the view mode and the selection. Every criteria
//! write is followed by a synchronous recomputation of the visible subset, and
//! the result is pushed into whichever view is active.

use crate::core::config::DirectoryConfig;
use crate::core::geo::Point;
use crate::data::dataset::Dataset;
use crate::directory::{
    entity::{Entity, EntityId},
    filter::{visible_indices, CriteriaField, FilterCriteria},
};
use crate::input::events::{EventHandled, InputEvent, ViewMode};
use crate::prelude::HashMap;
use crate::ui::{list_view::ListView, map_view::MapView, popup::MarkerPopup};
use crate::{Error, Result};

/// Contact details surfaced when a user asks to contact an entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    pub id: EntityId,
    pub name: String,
    pub message: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl ContactRequest {
    fn for_entity(entity: &Entity) -> Self {
        Self {
            id: entity.id.clone(),
            name: entity.name.clone(),
            message: format!("Contactando con {}", entity.name),
            phone: entity.phone.clone(),
            email: entity.email.clone(),
        }
    }
}

pub struct ViewCoordinator {
    entities: Vec<Entity>,
    index: HashMap<EntityId, usize>,
    criteria: FilterCriteria,
    /// Positions into `entities`, in collection order
    visible: Vec<usize>,
    view_mode: ViewMode,
    selected: Option<usize>,
    map_view: MapView,
    list_view: ListView,
}

impl ViewCoordinator {
    /// Starts a session with no filters, map mode and nothing selected.
    ///
    /// Fails with [`Error::InvalidConfig`] when `config` does not validate.
    pub fn new(dataset: Dataset, config: &DirectoryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(dataset, config))
    }

    pub fn with_mock_data() -> Self {
        Self::from_parts(Dataset::mock(), &DirectoryConfig::default())
    }

    fn from_parts(dataset: Dataset, config: &DirectoryConfig) -> Self {
        let entities = dataset.into_entities();
        let index = entities
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id.clone(), i))
            .collect();

        let mut coordinator = Self {
            visible: (0..entities.len()).collect(),
            entities,
            index,
            criteria: FilterCriteria::default(),
            view_mode: ViewMode::Map,
            selected: None,
            map_view: MapView::new(config.map.clone()),
            list_view: ListView::new(),
        };
        coordinator.refresh_active_view();
        coordinator
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn map_view(&self) -> &MapView {
        &self.map_view
    }

    pub fn list_view(&self) -> &ListView {
        &self.list_view
    }

    /// The visible subset, in collection order
    pub fn visible(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.visible.iter().map(move |&i| &self.entities[i])
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn selected(&self) -> Option<&Entity> {
        self.selected.map(|i| &self.entities[i])
    }

    pub fn entity(&self, id: &EntityId) -> Option<&Entity> {
        self.index.get(id).map(|&i| &self.entities[i])
    }

    /// Updates one criterion and recomputes the visible subset from the full
    /// collection. The only path that changes the visible subset.
    pub fn on_criteria_field_changed(&mut self, change: CriteriaField) {
        self.criteria.apply(change);
        self.visible = visible_indices(&self.entities, &self.criteria);
        log::debug!(
            "criteria {:?} -> {}/{} visible",
            self.criteria,
            self.visible.len(),
            self.entities.len()
        );
        self.refresh_active_view();
    }

    /// Switches views. Visibility and selection are untouched; the newly
    /// active view is brought up to date with the current subset.
    pub fn on_view_mode_toggled(&mut self, mode: ViewMode) {
        if self.view_mode == mode {
            return;
        }
        self.view_mode = mode;
        self.refresh_active_view();
    }

    /// Selects any entity of the full collection, visible or not
    pub fn on_entity_selected(&mut self, id: &EntityId) -> Result<&Entity> {
        let index = *self
            .index
            .get(id)
            .ok_or_else(|| Error::UnknownEntity(id.to_string()))?;
        self.selected = Some(index);
        log::info!("selected entity {}", id);
        Ok(&self.entities[index])
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Builds the contact notification for an entity; no state changes
    pub fn on_contact_requested(&self, id: &EntityId) -> Result<ContactRequest> {
        let entity = self
            .entity(id)
            .ok_or_else(|| Error::UnknownEntity(id.to_string()))?;
        let request = ContactRequest::for_entity(entity);
        log::info!("{}", request.message);
        Ok(request)
    }

    /// Popup content for a marker, `None` for unknown ids
    pub fn popup_for(&self, id: &EntityId) -> Option<MarkerPopup> {
        self.entity(id).map(MarkerPopup::from_entity)
    }

    pub fn on_map_resized(&mut self, size: Point) {
        self.map_view.resize(size);
    }

    /// Dispatches an event from the filter surface or one of the views.
    ///
    /// Contact requests come back as [`EventHandled::Contact`].
    pub fn handle_event(&mut self, event: InputEvent) -> Result<EventHandled> {
        match event {
            InputEvent::CriteriaChanged(change) => self.on_criteria_field_changed(change),
            InputEvent::ViewModeToggled(mode) => self.on_view_mode_toggled(mode),
            InputEvent::MarkerActivated { id } | InputEvent::ProfileRequested { id } => {
                self.on_entity_selected(&id)?;
            }
            InputEvent::MapClick { position } => {
                if self.view_mode != ViewMode::Map {
                    return Ok(EventHandled::NotHandled);
                }
                let Some(id) = self.map_view.marker_at(&position).map(|m| m.id.clone()) else {
                    return Ok(EventHandled::NotHandled);
                };
                self.on_entity_selected(&id)?;
            }
            InputEvent::ContactRequested { id } => {
                return self.on_contact_requested(&id).map(EventHandled::Contact);
            }
            InputEvent::MapResized { size } => self.on_map_resized(size),
        }
        Ok(EventHandled::Handled)
    }

    fn refresh_active_view(&mut self) {
        let entities = &self.entities;
        let visible = self.visible.iter().map(|&i| &entities[i]);
        match self.view_mode {
            ViewMode::Map => {
                let outcome = self.map_view.sync(visible);
                log::debug!("map view synced: {:?}", outcome);
            }
            ViewMode::List => self.list_view.sync(visible),
        }
    }
}

impl Default for ViewCoordinator {
    fn default() -> Self {
        Self::with_mock_data()
    }
}
