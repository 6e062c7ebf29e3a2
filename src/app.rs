use dioxus::prelude::*;
use vitrine_core::Catalog;

use crate::context::ToastCenter;
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Loads the catalog (command-line override or the embedded default),
/// provides it and the toast center as context, injects global styles,
/// and renders the single page.
#[component]
pub fn App() -> Element {
    let catalog: Signal<Catalog> = use_signal(load_catalog);
    use_context_provider(|| catalog);
    ToastCenter::provide();

    rsx! {
        style { {GLOBAL_STYLES} }
        Home {}
    }
}

/// Catalog resolution: `--catalog <path>` wins, falling back to the
/// embedded resource if the file is missing or invalid.
fn load_catalog() -> Catalog {
    if let Some(path) = crate::catalog_override() {
        match Catalog::load(&path) {
            Ok(catalog) => return catalog,
            Err(err) => {
                tracing::error!(path = %path.display(), error = %err, "failed to load catalog, using embedded");
            }
        }
    }
    Catalog::embedded().unwrap_or_else(|err| {
        tracing::error!(error = %err, "embedded catalog invalid");
        Catalog::default()
    })
}
