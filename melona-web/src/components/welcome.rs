//! One-time welcome message, shown on the first authenticated visit.

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub on_dismiss: Callback<()>,
}

#[function_component(Welcome)]
pub fn welcome(p: &Props) -> Html {
    if !p.open {
        return Html::default();
    }

    let onclick = {
        let on_dismiss = p.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class="welcome" role="dialog" aria-labelledby="welcome-title">
            <div class="welcome__panel">
                <h2 id="welcome-title">{ "¡Bienvenida! 🍉" }</h2>
                <p>{ "Cada día se desbloquea una carta nueva. Gira la carta, ábrela y descubre el plan." }</p>
                <button class="welcome__dismiss" {onclick}>{ "¡Vamos!" }</button>
            </div>
        </div>
    }
}
