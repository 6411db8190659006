//! The flippable date ticket card.
//!
//! The front face is always visible; tapping flips to the back, which shows
//! either the locked notice, the reveal button, or the revealed plan.

use melona_core::Ticket;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub ticket: Ticket,
    /// Ticket already in the collection.
    pub collected: bool,
    pub locked: bool,
    /// Display string for the unlock date ("17 de febrero").
    pub unlock_text: AttrValue,
    pub on_reveal: Callback<()>,
}

#[function_component(DateCard)]
pub fn date_card(p: &Props) -> Html {
    let flipped = use_state(|| false);
    // Whether the plan is shown on this visit; collected cards still ask
    // for a tap ("¡Ver de nuevo!") after navigating away and back.
    let opened = use_state(|| false);

    {
        let flipped = flipped.clone();
        let opened = opened.clone();
        use_effect_with(p.ticket.id.clone(), move |_| {
            flipped.set(false);
            opened.set(false);
        });
    }

    let flip = {
        let flipped = flipped.clone();
        Callback::from(move |_: MouseEvent| {
            if !*flipped {
                flipped.set(true);
            }
        })
    };

    let reveal = {
        let opened = opened.clone();
        let locked = p.locked;
        let on_reveal = p.on_reveal.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if locked {
                return;
            }
            on_reveal.emit(());
            opened.set(true);
        })
    };

    let card_class = classes!(
        "ticket",
        format!("ticket--{}", p.ticket.category.slug()),
        flipped.then_some("ticket--flipped"),
    );

    html! {
        <div class={card_class} onclick={flip}>
            <div class="ticket__face ticket__face--front">
                <div class="ticket__indicators">
                    if p.collected {
                        <span class="ticket__badge ticket__badge--collected" title="¡Ya descubierto!">{ "✔" }</span>
                    }
                    if p.locked && !p.collected {
                        <span class="ticket__badge ticket__badge--locked" title="Bloqueado">{ "🔒" }</span>
                    }
                </div>
                <div class="ticket__art">
                    if p.ticket.image.is_empty() {
                        <span class="ticket__emoji" aria-hidden="true">{ &p.ticket.emoji }</span>
                    } else {
                        <img src={p.ticket.image.clone()} alt={p.ticket.title.clone()} />
                    }
                </div>
                <h3 class="ticket__label">{ p.ticket.front_label() }</h3>
                <p class="ticket__flip-hint">{ "Tap to Flip" }</p>
            </div>
            <div class="ticket__face ticket__face--back">
                { render_back(p, *opened, &reveal) }
            </div>
        </div>
    }
}

fn render_back(p: &Props, opened: bool, reveal: &Callback<MouseEvent>) -> Html {
    if p.locked {
        return html! {
            <div class="ticket__locked">
                <span aria-hidden="true">{ "🔒" }</span>
                <h3>{ "Paciencia..." }</h3>
                <p>{ "Esta carta estará disponible el:" }</p>
                <p class="ticket__unlock-date">{ p.unlock_text.clone() }</p>
            </div>
        };
    }

    if !opened {
        let prompt = if p.collected { "¡Ver de nuevo!" } else { "¡Ábrelo!" };
        return html! {
            <button class="ticket__gift" onclick={reveal.clone()}>
                <span class="ticket__gift-icon" aria-hidden="true">{ "🎁" }</span>
                <span class="ticket__gift-label">{ format!("{prompt} 🎁") }</span>
            </button>
        };
    }

    html! {
        <div class="ticket__plan">
            <span class="ticket__plan-emoji" aria-hidden="true">{ &p.ticket.emoji }</span>
            <h3 class="ticket__plan-title">{ &p.ticket.title }</h3>
            <p class="ticket__plan-desc">{ &p.ticket.description }</p>
            <footer class="ticket__plan-footer">
                <span class="ticket__id">{ format!("#{}", p.ticket.id) }</span>
                <span class={classes!("ticket__category", format!("ticket__category--{}", p.ticket.category.slug()))}>
                    { p.ticket.category.label() }
                </span>
            </footer>
        </div>
    }
}
