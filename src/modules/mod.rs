pub mod books;
pub mod ui;

use bookshelf_kernel::ModuleRegistry;

use crate::session::SharedSession;

/// Register all project-specific modules with the registry
pub fn register_all(registry: &mut ModuleRegistry, session: &SharedSession) {
    registry.register_core(ui::create_module(session.clone()));
    registry.register_custom(books::create_module(session.clone()));
}
