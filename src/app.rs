//! Application bootstrap shared by the server binary and the CLI.

use std::sync::Arc;

use anyhow::Context;
use bookshelf_kernel::{settings::Settings, InitCtx, ModuleRegistry};

use crate::modules::{self, books::catalog::Catalog};
use crate::session::{Session, SharedSession};

/// Load the catalog named by the settings, or the bundled one.
pub fn load_catalog(settings: &Settings) -> anyhow::Result<Arc<Catalog>> {
    let catalog = Catalog::load(settings.catalog.data_path.as_deref())
        .with_context(|| "failed to load book catalog")?;
    Ok(Arc::new(catalog))
}

/// A registry with every module registered against one shared session.
pub fn build_registry(settings: &Settings) -> anyhow::Result<(ModuleRegistry, SharedSession)> {
    let catalog = load_catalog(settings)?;
    let session = Session::new(catalog, settings)?.shared();

    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry, &session);
    Ok((registry, session))
}

/// Boot all modules and serve HTTP until Ctrl-C.
pub async fn run(settings: Settings) -> anyhow::Result<()> {
    let (registry, _session) = build_registry(&settings)?;
    let ctx = InitCtx {
        settings: &settings,
    };

    registry
        .boot(&ctx)
        .await
        .with_context(|| "failed to boot modules")?;

    let served = bookshelf_http::start_server(&registry, &settings).await;

    registry
        .shutdown()
        .await
        .with_context(|| "failed to stop modules")?;
    served
}
