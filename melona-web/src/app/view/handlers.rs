use crate::app::phase::Phase;
use crate::app::state::AppState;
use melona_core::Filter;
use yew::prelude::*;

/// Delay between completing the collection and the celebration overlay.
const CELEBRATION_DELAY_MS: i32 = 1500;

/// Callback bundle wired from the app state, rebuilt per render.
#[derive(Clone)]
pub struct AppHandlers {
    pub authenticated: Callback<()>,
    pub filter_toggle: Callback<MouseEvent>,
    pub filter_change: Callback<Filter>,
    pub next: Callback<MouseEvent>,
    pub previous: Callback<MouseEvent>,
    pub reveal: Callback<String>,
    pub restart: Callback<()>,
    pub welcome_dismiss: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            authenticated: build_authenticated(state),
            filter_toggle: build_filter_toggle(state),
            filter_change: build_filter_change(state),
            next: build_next(state),
            previous: build_previous(state),
            reveal: build_reveal(state),
            restart: build_restart(state),
            welcome_dismiss: build_welcome_dismiss(state),
        }
    }
}

fn build_authenticated(state: &AppState) -> Callback<()> {
    let phase = state.phase.clone();
    Callback::from(move |()| {
        crate::storage::store_last_auth(crate::time::now_ms());
        // The welcome modal is handled on deck entry, not here.
        phase.set(Phase::Deck);
    })
}

fn build_filter_toggle(state: &AppState) -> Callback<MouseEvent> {
    let show_filter_menu = state.show_filter_menu.clone();
    Callback::from(move |_| {
        show_filter_menu.set(!*show_filter_menu);
    })
}

fn build_filter_change(state: &AppState) -> Callback<Filter> {
    let filter = state.filter.clone();
    let carousel = state.carousel.clone();
    let show_filter_menu = state.show_filter_menu.clone();
    Callback::from(move |next: Filter| {
        filter.set(next);
        let mut c = *carousel;
        c.reset();
        carousel.set(c);
        show_filter_menu.set(false);
        crate::a11y::set_status(&format!("Filtro: {}", next.label()));
    })
}

fn build_next(state: &AppState) -> Callback<MouseEvent> {
    let carousel = state.carousel.clone();
    let catalog = state.catalog.clone();
    let filter = state.filter.clone();
    Callback::from(move |_| {
        let len = catalog.filtered_positions(*filter).len();
        let mut c = *carousel;
        c.next(len);
        carousel.set(c);
    })
}

fn build_previous(state: &AppState) -> Callback<MouseEvent> {
    let carousel = state.carousel.clone();
    let catalog = state.catalog.clone();
    let filter = state.filter.clone();
    Callback::from(move |_| {
        let len = catalog.filtered_positions(*filter).len();
        let mut c = *carousel;
        c.previous(len);
        carousel.set(c);
    })
}

fn build_reveal(state: &AppState) -> Callback<String> {
    let collection_handle = state.collection.clone();
    let catalog = state.catalog.clone();
    let celebration_fired = state.celebration_fired.clone();
    let show_celebration = state.show_celebration.clone();
    Callback::from(move |id: String| {
        let mut collection = (*collection_handle).clone();
        if !collection.mark_revealed(&id) {
            return;
        }
        crate::a11y::set_status(&format!(
            "{} de {} completadas",
            collection.revealed_count(),
            catalog.len()
        ));
        let completed = collection.is_complete(&catalog);
        collection_handle.set(collection);
        if completed && !*celebration_fired {
            celebration_fired.set(true);
            schedule_celebration(show_celebration.clone());
        }
    })
}

fn build_restart(state: &AppState) -> Callback<()> {
    let collection_handle = state.collection.clone();
    let show_celebration = state.show_celebration.clone();
    let celebration_fired = state.celebration_fired.clone();
    let carousel = state.carousel.clone();
    Callback::from(move |()| {
        let mut collection = (*collection_handle).clone();
        collection.reset();
        collection_handle.set(collection);
        show_celebration.set(false);
        celebration_fired.set(false);
        let mut c = *carousel;
        c.reset();
        carousel.set(c);
    })
}

fn build_welcome_dismiss(state: &AppState) -> Callback<()> {
    let show_welcome = state.show_welcome.clone();
    Callback::from(move |()| {
        crate::storage::mark_welcome_seen();
        show_welcome.set(false);
    })
}

/// The celebration appears a beat after the final reveal, not instantly.
fn schedule_celebration(show_celebration: yew::UseStateHandle<bool>) {
    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            let _ = crate::dom::sleep_ms(CELEBRATION_DELAY_MS).await;
            show_celebration.set(true);
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = CELEBRATION_DELAY_MS;
        show_celebration.set(true);
    }
}
