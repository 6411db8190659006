use crate::app::state::AppState;
use melona_core::Catalog;
use yew::prelude::*;

/// Parse the embedded ticket catalog. Falls back to an empty catalog on a
/// malformed data file, which renders as the empty-state message rather
/// than a crash.
#[must_use]
pub fn load_catalog() -> Catalog {
    match Catalog::from_json(include_str!("../../static/assets/data/tickets.json")) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("Failed to load ticket catalog: {e}");
            Catalog::default()
        }
    }
}

#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let catalog = app_state.catalog.clone();
    use_effect_with((), move |_| {
        catalog.set(load_catalog());
        || {}
    });

    // Opens on every deck entry until dismissed once, including a reload
    // that restores a live session.
    let show_welcome = app_state.show_welcome.clone();
    use_effect_with(*app_state.phase, move |phase| {
        if crate::app::phase::welcome_due(*phase) {
            show_welcome.set(true);
        }
    });
}
