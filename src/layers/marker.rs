use crate::core::{
    constants::{MARKER_ICON_ANCHOR, MARKER_ICON_SIZE, MARKER_POPUP_ANCHOR},
    geo::{LatLng, LatLngBounds, Point},
    viewport::Viewport,
};
use crate::directory::entity::{Entity, EntityId, EntityKind};

/// Visual style of a marker, picked from the entity kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    /// Icon fill as RGB
    pub color: (u8, u8, u8),
    pub icon_size: (u32, u32),
    /// Hot-spot inside the icon, in icon pixels from the top-left corner
    pub icon_anchor: (u32, u32),
    pub popup_anchor: (i32, i32),
}

impl MarkerStyle {
    pub fn for_kind(kind: EntityKind) -> Self {
        let color = match kind {
            EntityKind::Professional => (59, 130, 246),
            EntityKind::Company => (239, 68, 68),
        };
        Self {
            color,
            icon_size: MARKER_ICON_SIZE,
            icon_anchor: MARKER_ICON_ANCHOR,
            popup_anchor: MARKER_POPUP_ANCHOR,
        }
    }

    pub fn color_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.color.0, self.color.1, self.color.2)
    }
}

/// One marker per placeable entity
#[derive(Debug, Clone, PartialEq)]
pub struct EntityMarker {
    pub id: EntityId,
    pub position: LatLng,
    pub kind: EntityKind,
    pub style: MarkerStyle,
}

impl EntityMarker {
    /// Returns `None` for entities whose coordinates cannot be placed
    pub fn from_entity(entity: &Entity) -> Option<Self> {
        if !entity.is_placeable() {
            return None;
        }
        Some(Self {
            id: entity.id.clone(),
            position: entity.position(),
            kind: entity.kind,
            style: MarkerStyle::for_kind(entity.kind),
        })
    }

    /// Screen rectangle covered by the icon as `(min, max)`
    pub fn icon_rect(&self, viewport: &Viewport) -> (Point, Point) {
        let anchor = viewport.lat_lng_to_pixel(&self.position);
        let min = Point::new(
            anchor.x - self.style.icon_anchor.0 as f64,
            anchor.y - self.style.icon_anchor.1 as f64,
        );
        let max = Point::new(
            min.x + self.style.icon_size.0 as f64,
            min.y + self.style.icon_size.1 as f64,
        );
        (min, max)
    }

    pub fn hit(&self, viewport: &Viewport, point: &Point) -> bool {
        let (min, max) = self.icon_rect(viewport);
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    /// Where the popup tip sits on screen
    pub fn popup_point(&self, viewport: &Viewport) -> Point {
        let anchor = viewport.lat_lng_to_pixel(&self.position);
        Point::new(
            anchor.x + self.style.popup_anchor.0 as f64,
            anchor.y + self.style.popup_anchor.1 as f64,
        )
    }
}

/// The set of markers currently drawn, in visible-subset order
#[derive(Debug, Clone, Default)]
pub struct MarkerLayer {
    markers: Vec<EntityMarker>,
}

impl MarkerLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the markers with those of `entities`, skipping unplaceable ones
    pub fn set_entities<'a, I>(&mut self, entities: I)
    where
        I: IntoIterator<Item = &'a Entity>,
    {
        self.markers.clear();
        for entity in entities {
            match EntityMarker::from_entity(entity) {
                Some(marker) => self.markers.push(marker),
                None => log::warn!("entity {} has no placeable position, not drawn", entity.id),
            }
        }
    }

    pub fn markers(&self) -> &[EntityMarker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn get(&self, id: &EntityId) -> Option<&EntityMarker> {
        self.markers.iter().find(|m| &m.id == id)
    }

    /// `(id, lat, lng, kind)` tuples handed to a map renderer
    pub fn tuples(&self) -> impl Iterator<Item = (&EntityId, f64, f64, EntityKind)> + '_ {
        self.markers
            .iter()
            .map(|m| (&m.id, m.position.lat, m.position.lng, m.kind))
    }

    /// Minimal box covering every marker
    pub fn bounds(&self) -> Option<LatLngBounds> {
        LatLngBounds::from_points(self.markers.iter().map(|m| &m.position))
    }

    /// Topmost marker under `point`. Later markers draw above earlier ones.
    pub fn hit_test(&self, viewport: &Viewport, point: &Point) -> Option<&EntityMarker> {
        self.markers.iter().rev().find(|m| m.hit(viewport, point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(id: &str, lat: f64, lng: f64, kind: EntityKind) -> Entity {
        Entity::new(id, format!("Entity {id}"), "Somewhere", LatLng::new(lat, lng), kind, 4.0)
    }

    #[test]
    fn test_style_by_kind() {
        assert_eq!(MarkerStyle::for_kind(EntityKind::Professional).color_hex(), "#3b82f6");
        assert_eq!(MarkerStyle::for_kind(EntityKind::Company).color_hex(), "#ef4444");
        assert_eq!(MarkerStyle::for_kind(EntityKind::Company).icon_size, (25, 41));
    }

    #[test]
    fn test_unplaceable_entities_are_skipped() {
        let entities = vec![
            entity("a", 40.0, -3.0, EntityKind::Professional),
            entity("b", f64::NAN, -3.0, EntityKind::Company),
            entity("c", 41.0, 2.0, EntityKind::Company),
        ];
        let mut layer = MarkerLayer::new();
        layer.set_entities(&entities);

        let ids: Vec<&str> = layer.tuples().map(|(id, _, _, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(layer.bounds(), Some(LatLngBounds::from_coords(40.0, -3.0, 41.0, 2.0)));
    }

    #[test]
    fn test_hit_test_uses_icon_box() {
        let entities = vec![entity("a", 40.4168, -3.7038, EntityKind::Professional)];
        let mut layer = MarkerLayer::new();
        layer.set_entities(&entities);

        let viewport = Viewport::default();
        let anchor = viewport.lat_lng_to_pixel(&LatLng::new(40.4168, -3.7038));

        // Icon body sits above its anchor
        let inside = Point::new(anchor.x, anchor.y - 20.0);
        let below = Point::new(anchor.x, anchor.y + 5.0);
        assert_eq!(layer.hit_test(&viewport, &inside).map(|m| m.id.as_str()), Some("a"));
        assert!(layer.hit_test(&viewport, &below).is_none());
    }

    #[test]
    fn test_hit_test_prefers_topmost() {
        let entities = vec![
            entity("under", 40.4168, -3.7038, EntityKind::Professional),
            entity("over", 40.4168, -3.7038, EntityKind::Company),
        ];
        let mut layer = MarkerLayer::new();
        layer.set_entities(&entities);

        let viewport = Viewport::default();
        let anchor = viewport.lat_lng_to_pixel(&LatLng::new(40.4168, -3.7038));
        let hit = layer.hit_test(&viewport, &Point::new(anchor.x, anchor.y - 10.0));
        assert_eq!(hit.map(|m| m.id.as_str()), Some("over"));
    }
}
