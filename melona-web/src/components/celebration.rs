//! Completion overlay, shown once the whole deck has been revealed.

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub on_restart: Callback<()>,
}

#[function_component(Celebration)]
pub fn celebration(p: &Props) -> Html {
    if !p.open {
        return Html::default();
    }

    let onclick = {
        let on_restart = p.on_restart.clone();
        Callback::from(move |_: MouseEvent| on_restart.emit(()))
    };

    html! {
        <div class="celebration" role="dialog" aria-labelledby="celebration-title">
            <div class="celebration__panel">
                <span class="celebration__burst" aria-hidden="true">{ "🎉💖🎉" }</span>
                <h2 id="celebration-title">{ "¡Lo habéis descubierto todo!" }</h2>
                <p>{ "Todas las cartas están completadas. Te quiero 🍉" }</p>
                <button class="celebration__restart" {onclick}>{ "Empezar de nuevo" }</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn renders_only_when_open() {
        let open = Props {
            open: true,
            on_restart: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<Celebration>::with_props(open).render());
        assert!(html.contains("Empezar de nuevo"));

        let closed = Props {
            open: false,
            on_restart: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<Celebration>::with_props(closed).render());
        assert!(!html.contains("Empezar de nuevo"));
    }
}
