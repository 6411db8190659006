//! The passphrase gate: a row of letter slots fed by a hidden input.

use melona_core::{PassphraseOutcome, SessionConfig};
use once_cell::sync::Lazy;
use regex::Regex;
use web_sys::HtmlInputElement;
use yew::prelude::*;

static NON_LETTERS: Lazy<Regex> =
    Lazy::new(|| Regex::new("[^A-Za-z]").expect("letter pattern is valid"));

/// Strip non-letters and cap the phrase at the slot count.
fn sanitize(raw: &str, max_len: usize) -> String {
    NON_LETTERS.replace_all(raw, "").chars().take(max_len).collect()
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub config: SessionConfig,
    pub on_success: Callback<()>,
}

#[function_component(PasswordLock)]
pub fn password_lock(p: &Props) -> Html {
    let input = use_state(String::new);
    let egg_open = use_state(|| false);
    let slots = p.config.max_input_len();

    let oninput = {
        let input = input.clone();
        let egg_open = egg_open.clone();
        let config = p.config.clone();
        let on_success = p.on_success.clone();
        Callback::from(move |e: InputEvent| {
            let field: HtmlInputElement = e.target_unchecked_into();
            let next = sanitize(&field.value(), config.max_input_len());
            match config.check(&next) {
                PassphraseOutcome::Granted => on_success.emit(()),
                PassphraseOutcome::EasterEgg => egg_open.set(true),
                PassphraseOutcome::Denied => {}
            }
            input.set(next);
        })
    };

    let close_egg = {
        let input = input.clone();
        let egg_open = egg_open.clone();
        Callback::from(move |_: MouseEvent| {
            egg_open.set(false);
            input.set(String::new());
        })
    };

    let typed = input.chars().count();

    html! {
        <div class="gate" role="dialog" aria-labelledby="gate-title">
            if !*egg_open {
                <div class="gate__panel">
                    <span class="gate__lock-icon" aria-hidden="true">{ "🔒" }</span>
                    <h2 id="gate-title" class="gate__title">{ "Palabra Mágica" }</h2>
                    <p class="gate__hint">{ "Escribe la contraseña para entrar 🍉" }</p>
                    <label class="gate__slots">
                        <span class="sr-only">{ "Contraseña" }</span>
                        <input
                            class="gate__input"
                            type="text"
                            autocomplete="off"
                            value={(*input).clone()}
                            {oninput}
                        />
                        { for (0..slots).map(|i| {
                            let letter = input.chars().nth(i).map(String::from).unwrap_or_default();
                            let active = i == typed;
                            html! {
                                <span class={classes!("gate__slot", active.then_some("gate__slot--active"))}>
                                    { letter }
                                </span>
                            }
                        }) }
                    </label>
                </div>
            } else {
                <div class="gate__egg" role="alertdialog" aria-labelledby="egg-title">
                    <span aria-hidden="true">{ "💖" }</span>
                    <h3 id="egg-title">{ "¡Te quiero morogollón!" }</h3>
                    <p>{ "Eres la mejor 💖" }</p>
                    <button class="gate__egg-close" onclick={close_egg}>{ "Yo también 😍" }</button>
                </div>
            }
        </div>
    }
}
