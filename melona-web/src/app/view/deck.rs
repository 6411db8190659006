use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::components::celebration::Celebration;
use crate::components::date_card::DateCard;
use crate::components::filter_menu::FilterMenu;
use crate::components::progress::ProgressBar;
use crate::components::welcome::Welcome;
use melona_core::spanish_date;
use yew::prelude::*;

pub fn render_deck(state: &AppState, handlers: &AppHandlers) -> Html {
    let positions = state.visible_positions();
    let carousel = *state.carousel;

    html! {
        <div class="deck">
            <header class="deck__header">
                <h1 class="deck__title">{ "Para mi Melona " }<span aria-hidden="true">{ "🍉" }</span></h1>
                <ProgressBar
                    revealed={state.collection.revealed_count()}
                    total={state.catalog.len()}
                />
                <FilterMenu
                    open={*state.show_filter_menu}
                    active={*state.filter}
                    on_toggle={handlers.filter_toggle.clone()}
                    on_change={handlers.filter_change.clone()}
                />
            </header>

            <section class="deck-carousel" aria-label="Cartas">
                <button
                    class="deck-carousel__nav deck-carousel__nav--prev"
                    aria-label="Carta anterior"
                    onclick={handlers.previous.clone()}
                >{ "‹" }</button>
                { render_current_card(state, handlers, &positions) }
                <button
                    class="deck-carousel__nav deck-carousel__nav--next"
                    aria-label="Carta siguiente"
                    onclick={handlers.next.clone()}
                >{ "›" }</button>
            </section>

            <p id="deck-helper" aria-live="polite" class="sr-only"></p>
            { render_lock_note(state, &positions, carousel.index()) }

            <Welcome open={*state.show_welcome} on_dismiss={handlers.welcome_dismiss.clone()} />
            <Celebration open={*state.show_celebration} on_restart={handlers.restart.clone()} />
        </div>
    }
}

fn render_current_card(state: &AppState, handlers: &AppHandlers, positions: &[usize]) -> Html {
    if positions.is_empty() {
        return html! {
            <div class="deck-carousel__empty">
                <p aria-hidden="true">{ "💔" }</p>
                <p>{ "No hay cartas de este tipo." }</p>
            </div>
        };
    }

    let index = state.carousel.index().min(positions.len() - 1);
    let position = positions[index];
    let Some(ticket) = state.catalog.get(position).cloned() else {
        return Html::default();
    };

    let status = state.calendar.status(position, crate::time::today());
    let collected = state.collection.is_revealed(&ticket.id);
    let on_reveal = {
        let reveal = handlers.reveal.clone();
        let id = ticket.id.clone();
        Callback::from(move |()| reveal.emit(id.clone()))
    };

    html! {
        <div class={classes!("deck-carousel__stage", state.carousel.direction().class())}>
            <DateCard
                key={ticket.id.clone()}
                ticket={ticket.clone()}
                {collected}
                locked={status.locked}
                unlock_text={spanish_date(status.unlock_date)}
                {on_reveal}
            />
        </div>
    }
}

fn render_lock_note(state: &AppState, positions: &[usize], index: usize) -> Html {
    let Some(&position) = positions.get(index.min(positions.len().saturating_sub(1))) else {
        return Html::default();
    };
    let status = state.calendar.status(position, crate::time::today());
    if !status.locked {
        return Html::default();
    }
    html! {
        <p class="deck__lock-note">
            { format!("Disponible el {}", spanish_date(status.unlock_date)) }
        </p>
    }
}
