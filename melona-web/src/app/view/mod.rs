mod deck;
pub mod handlers;

pub use handlers::AppHandlers;

use crate::app::phase::Phase;
use crate::app::state::AppState;
use crate::components::password_lock::PasswordLock;
use yew::prelude::*;

pub fn render_app(state: &AppState) -> Html {
    let handlers = AppHandlers::new(state);
    let screen = match *state.phase {
        Phase::Gate => html! {
            <PasswordLock
                config={(*state.session_config).clone()}
                on_success={handlers.authenticated.clone()}
            />
        },
        Phase::Deck => deck::render_deck(state, &handlers),
    };

    html! {
        <main id="main" role="main" class="melona-app">
            <style>{ crate::a11y::visible_focus_css() }</style>
            { screen }
        </main>
    }
}
