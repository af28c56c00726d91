use crate::controller::ControllerRegistry;

/// The animals pages.
pub mod animals;
/// The landing page.
pub mod home;

/// Creates a registry holding every controller of the application.
pub fn registry() -> ControllerRegistry {
    let mut registry = ControllerRegistry::new();
    home::register(&mut registry);
    animals::register(&mut registry);
    registry
}
