use sacabollos::prelude::*;

/// Drives a directory session without any UI
fn main() -> sacabollos::Result<()> {
    sacabollos::init_logging();

    println!("SacaBollos headless session");
    println!("===========================");

    let mut coordinator = ViewCoordinator::new(Dataset::mock(), &DirectoryConfig::default())?;
    print_state("initial", &coordinator);

    let steps = [
        CriteriaField::Location("españa".into()),
        CriteriaField::Kind(KindFilter::Professional),
        CriteriaField::Specialty("Sacabollos sin pintura (PDR)".into()),
        CriteriaField::Location(String::new()),
        CriteriaField::Name("zzz".into()),
    ];

    for step in steps {
        println!("\n-> {:?}", step);
        coordinator.handle_event(InputEvent::CriteriaChanged(step))?;
        print_state("after change", &coordinator);
    }

    coordinator.handle_event(InputEvent::ViewModeToggled(ViewMode::List))?;
    coordinator.handle_event(InputEvent::CriteriaChanged(CriteriaField::Name(String::new())))?;
    println!("\nList view:");
    for card in coordinator.list_view().cards() {
        println!(
            "  [{}] {} - {} ({}) {}",
            card.badge,
            card.title,
            card.location,
            card.rating,
            card.more_specialties.as_deref().unwrap_or("")
        );
    }

    let contact = coordinator.on_contact_requested(&EntityId::new("1"))?;
    println!("\n{}", contact.message);

    Ok(())
}

fn print_state(label: &str, coordinator: &ViewCoordinator) {
    let viewport = coordinator.map_view().viewport();
    println!(
        "{label}: {} visible, camera ({:.4}, {:.4}) zoom {}",
        coordinator.visible_count(),
        viewport.center.lat,
        viewport.center.lng,
        viewport.zoom
    );
    for entity in coordinator.visible() {
        println!("  - {} ({})", entity.name, entity.kind);
    }
}
