//! egui rendering of a directory session
//!
//! The widget only collects events while drawing and dispatches them to the
//! coordinator once the frame's layout is done.

use crate::core::coordinator::{ContactRequest, ViewCoordinator};
use crate::core::geo::Point;
use crate::data::dataset::specialty_catalog;
use crate::directory::filter::{CriteriaField, KindFilter};
use crate::input::events::{EventHandled, InputEvent, ViewMode};
use crate::layers::marker::MarkerStyle;
use crate::ui::{
    list_view::EntityCard,
    popup::{EntityAction, MarkerPopup},
};
use egui::{Align2, Color32, FontId, Pos2, Sense, Stroke, Ui, Vec2};

const MAP_BACKGROUND: Color32 = Color32::from_rgb(230, 230, 230);
const MARKER_RADIUS: f32 = 7.0;

#[derive(Debug, Default)]
pub struct DirectoryWidget {
    name_query: String,
    location_query: String,
    last_contact: Option<ContactRequest>,
}

impl DirectoryWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_contact(&self) -> Option<&ContactRequest> {
        self.last_contact.as_ref()
    }

    pub fn show(&mut self, ui: &mut Ui, coordinator: &mut ViewCoordinator) {
        let mut events = Vec::new();

        self.filters(ui, coordinator, &mut events);
        ui.separator();
        view_toggle(ui, coordinator.view_mode(), &mut events);
        ui.separator();

        match coordinator.view_mode() {
            ViewMode::Map => map_panel(ui, coordinator, &mut events),
            ViewMode::List => list_panel(ui, coordinator, &mut events),
        }

        if let Some(selected) = coordinator.selected() {
            ui.separator();
            ui.label(format!("Perfil: {} ({})", selected.name, selected.location));
        }
        if let Some(contact) = &self.last_contact {
            ui.label(&contact.message);
        }

        for event in events {
            self.dispatch(coordinator, event);
        }
    }

    fn dispatch(&mut self, coordinator: &mut ViewCoordinator, event: InputEvent) {
        match coordinator.handle_event(event) {
            Ok(EventHandled::Contact(request)) => self.last_contact = Some(request),
            Ok(_) => {}
            Err(err) => log::warn!("event dropped: {}", err),
        }
    }

    fn filters(&mut self, ui: &mut Ui, coordinator: &ViewCoordinator, events: &mut Vec<InputEvent>) {
        ui.heading("Buscar Profesionales");
        ui.horizontal_wrapped(|ui| {
            let name = ui.add(
                egui::TextEdit::singleline(&mut self.name_query).hint_text("Buscar por nombre..."),
            );
            if name.changed() {
                events.push(InputEvent::CriteriaChanged(CriteriaField::Name(
                    self.name_query.clone(),
                )));
            }

            let location = ui.add(
                egui::TextEdit::singleline(&mut self.location_query)
                    .hint_text("Ciudad, provincia..."),
            );
            if location.changed() {
                events.push(InputEvent::CriteriaChanged(CriteriaField::Location(
                    self.location_query.clone(),
                )));
            }

            let current_kind = coordinator.criteria().kind_filter;
            let mut kind = current_kind;
            egui::ComboBox::from_id_source("kind_filter")
                .selected_text(kind.label())
                .show_ui(ui, |ui| {
                    for option in KindFilter::ALL {
                        ui.selectable_value(&mut kind, option, option.label());
                    }
                });
            if kind != current_kind {
                events.push(InputEvent::CriteriaChanged(CriteriaField::Kind(kind)));
            }

            let current_specialty = coordinator.criteria().specialty_filter.clone();
            let mut specialty = current_specialty.clone();
            let shown = if specialty.is_empty() {
                "Todas las especialidades".to_string()
            } else {
                specialty.clone()
            };
            egui::ComboBox::from_id_source("specialty_filter")
                .selected_text(shown)
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut specialty, String::new(), "Todas las especialidades");
                    for label in specialty_catalog() {
                        ui.selectable_value(&mut specialty, label.to_string(), *label);
                    }
                });
            if specialty != current_specialty {
                events.push(InputEvent::CriteriaChanged(CriteriaField::Specialty(specialty)));
            }
        });
    }
}

fn view_toggle(ui: &mut Ui, current: ViewMode, events: &mut Vec<InputEvent>) {
    ui.horizontal(|ui| {
        for mode in [ViewMode::Map, ViewMode::List] {
            if ui.selectable_label(current == mode, mode.label()).clicked() && current != mode {
                events.push(InputEvent::ViewModeToggled(mode));
            }
        }
    });
}

fn to_color(rgb: (u8, u8, u8)) -> Color32 {
    Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

fn map_panel(ui: &mut Ui, coordinator: &ViewCoordinator, events: &mut Vec<InputEvent>) {
    let size = ui.available_size().max(Vec2::new(200.0, 200.0));
    let (response, painter) = ui.allocate_painter(size, Sense::click());
    let rect = response.rect;

    let map_view = coordinator.map_view();
    let viewport = map_view.viewport();
    let wanted = Point::new(rect.width() as f64, rect.height() as f64);
    if (viewport.size.x - wanted.x).abs() > 0.5 || (viewport.size.y - wanted.y).abs() > 0.5 {
        events.push(InputEvent::MapResized { size: wanted });
    }

    painter.rect_filled(rect, 4.0, MAP_BACKGROUND);

    let selected = coordinator.selected().map(|e| e.id.clone());
    for marker in map_view.markers().markers() {
        let anchor = viewport.lat_lng_to_pixel(&marker.position);
        let tip = rect.min + Vec2::new(anchor.x as f32, anchor.y as f32);
        let head = tip - Vec2::new(0.0, marker.style.icon_size.1 as f32 / 2.0);

        painter.line_segment([head, tip], Stroke::new(2.0, to_color(marker.style.color)));
        painter.circle_filled(head, MARKER_RADIUS, to_color(marker.style.color));
        if selected.as_ref() == Some(&marker.id) {
            painter.circle_stroke(head, MARKER_RADIUS + 2.0, Stroke::new(2.0, Color32::BLACK));
        }
    }

    painter.text(
        rect.right_bottom() - Vec2::new(4.0, 4.0),
        Align2::RIGHT_BOTTOM,
        "© OpenStreetMap contributors",
        FontId::proportional(10.0),
        Color32::DARK_GRAY,
    );

    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            let local = pos - rect.min;
            events.push(InputEvent::MapClick {
                position: Point::new(local.x as f64, local.y as f64),
            });
        }
    }

    let popup = selected.as_ref().and_then(|id| {
        let marker = map_view.markers().get(id)?;
        Some((coordinator.popup_for(id)?, marker.popup_point(viewport)))
    });
    if let Some((popup, tip)) = popup {
        let tip = rect.min + Vec2::new(tip.x as f32, tip.y as f32);
        if rect.contains(tip) {
            popup_ui(ui, tip, &popup, events);
        }
    }
}

/// Draws the selected marker's popup with its tip at `tip`
fn popup_ui(ui: &Ui, tip: Pos2, popup: &MarkerPopup, events: &mut Vec<InputEvent>) {
    egui::Area::new(egui::Id::new(("marker_popup", popup.id.as_str())))
        .order(egui::Order::Foreground)
        .fixed_pos(tip)
        .pivot(Align2::CENTER_BOTTOM)
        .constrain(true)
        .show(ui.ctx(), |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_max_width(220.0);
                ui.horizontal(|ui| {
                    ui.strong(&popup.title);
                    ui.colored_label(to_color(MarkerStyle::for_kind(popup.kind).color), popup.badge);
                });
                ui.label(format!("📍 {}", popup.location));
                ui.label(format!("⭐ {}", popup.rating));
                ui.horizontal_wrapped(|ui| {
                    for specialty in &popup.specialties {
                        ui.small(specialty);
                    }
                });
                ui.horizontal(|ui| {
                    for action in &popup.actions {
                        action_ui(ui, action, events);
                    }
                });
            });
        });
}

fn action_ui(ui: &mut Ui, action: &EntityAction, events: &mut Vec<InputEvent>) {
    match action {
        EntityAction::ViewProfile(id) => {
            if ui.button(action.label()).clicked() {
                events.push(InputEvent::ProfileRequested { id: id.clone() });
            }
        }
        EntityAction::Contact(id) => {
            if ui.button(action.label()).clicked() {
                events.push(InputEvent::ContactRequested { id: id.clone() });
            }
        }
        EntityAction::Call { href } => {
            ui.hyperlink_to(action.label(), href);
        }
    }
}

fn list_panel(ui: &mut Ui, coordinator: &ViewCoordinator, events: &mut Vec<InputEvent>) {
    egui::ScrollArea::vertical().max_height(600.0).show(ui, |ui| {
        for card in coordinator.list_view().cards() {
            card_ui(ui, card, events);
        }
    });
}

fn card_ui(ui: &mut Ui, card: &EntityCard, events: &mut Vec<InputEvent>) {
    ui.group(|ui| {
        ui.horizontal(|ui| {
            ui.heading(&card.title);
            ui.colored_label(
                to_color(MarkerStyle::for_kind(card.kind).color),
                card.badge,
            );
        });
        ui.label(format!("📍 {}", card.location));
        ui.label(format!("⭐ {}", card.rating));

        if let Some(description) = &card.description {
            ui.label(description);
        }

        ui.horizontal_wrapped(|ui| {
            ui.small("Especialidades:");
            for specialty in &card.specialties {
                ui.small(specialty);
            }
            if let Some(more) = &card.more_specialties {
                ui.small(more);
            }
        });

        if let Some(price) = &card.price_range {
            ui.colored_label(Color32::from_rgb(22, 163, 74), price);
        }

        ui.horizontal(|ui| {
            for action in &card.actions {
                action_ui(ui, action, events);
            }
        });
    });
}
