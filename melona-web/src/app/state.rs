use crate::app::phase::{Phase, initial_phase};
use melona_core::{Carousel, Catalog, Collection, Filter, SessionConfig, UnlockCalendar};
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub phase: UseStateHandle<Phase>,
    pub session_config: UseStateHandle<SessionConfig>,
    pub catalog: UseStateHandle<Catalog>,
    pub calendar: UseStateHandle<UnlockCalendar>,
    pub filter: UseStateHandle<Filter>,
    pub carousel: UseStateHandle<Carousel>,
    pub collection: UseStateHandle<Collection>,
    pub show_filter_menu: UseStateHandle<bool>,
    pub show_welcome: UseStateHandle<bool>,
    pub show_celebration: UseStateHandle<bool>,
    /// One-shot guard so completing the deck schedules the celebration
    /// exactly once per completion.
    pub celebration_fired: UseStateHandle<bool>,
}

#[hook]
pub fn use_app_state() -> AppState {
    let session_config = use_state(SessionConfig::default);
    let phase = {
        let config = (*session_config).clone();
        use_state(move || initial_phase(&config))
    };
    AppState {
        phase,
        session_config,
        catalog: use_state(Catalog::default),
        calendar: use_state(|| {
            UnlockCalendar::new(crate::time::today(), &crate::config::unlock_config())
        }),
        filter: use_state(Filter::default),
        carousel: use_state(Carousel::new),
        collection: use_state(Collection::new),
        show_filter_menu: use_state(|| false),
        show_welcome: use_state(|| false),
        show_celebration: use_state(|| false),
        celebration_fired: use_state(|| false),
    }
}

impl AppState {
    /// Catalog positions visible under the active filter, in catalog order.
    #[must_use]
    pub fn visible_positions(&self) -> Vec<usize> {
        self.catalog.filtered_positions(*self.filter)
    }
}
