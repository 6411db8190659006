//! Category filter toggle and its popover.

use melona_core::{Category, Filter};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub active: Filter,
    pub on_toggle: Callback<MouseEvent>,
    pub on_change: Callback<Filter>,
}

#[function_component(FilterMenu)]
pub fn filter_menu(p: &Props) -> Html {
    let toggle_label = match p.active {
        Filter::All => "Filtrar cartas".to_string(),
        Filter::Category(cat) => cat.label().to_string(),
    };

    let options = std::iter::once(Filter::All)
        .chain(Category::ALL.into_iter().map(Filter::Category));

    html! {
        <div class="filter">
            <button
                class={classes!("filter__toggle", (p.open || p.active != Filter::All).then_some("filter__toggle--engaged"))}
                aria-expanded={p.open.to_string()}
                aria-haspopup="menu"
                onclick={p.on_toggle.clone()}
            >
                { toggle_label }
            </button>
            if p.open {
                <ul class="filter__menu" role="menu" aria-label="Filtrar cartas">
                    { for options.map(|option| {
                        let selected = option == p.active;
                        let onclick = {
                            let on_change = p.on_change.clone();
                            Callback::from(move |_: MouseEvent| on_change.emit(option))
                        };
                        html! {
                            <li role="none">
                                <button
                                    role="menuitemradio"
                                    aria-checked={selected.to_string()}
                                    class={classes!("filter__option", selected.then_some("filter__option--selected"))}
                                    {onclick}
                                >
                                    { option.label() }
                                    if selected {
                                        <span aria-hidden="true">{ " ❤" }</span>
                                    }
                                </button>
                            </li>
                        }
                    }) }
                </ul>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(open: bool, active: Filter) -> String {
        let props = Props {
            open,
            active,
            on_toggle: Callback::noop(),
            on_change: Callback::noop(),
        };
        block_on(LocalServerRenderer::<FilterMenu>::with_props(props).render())
    }

    #[test]
    fn closed_menu_renders_only_the_toggle() {
        let html = render(false, Filter::All);
        assert!(html.contains("Filtrar cartas"));
        assert!(!html.contains("filter__menu"));
    }

    #[test]
    fn open_menu_lists_every_category_plus_todos() {
        let html = render(true, Filter::All);
        for label in ["Todos", "Romántico", "Aventura", "Picante", "Pareja"] {
            assert!(html.contains(label), "missing option {label}");
        }
        assert_eq!(html.matches("aria-checked=\"true\"").count(), 1);
    }

    #[test]
    fn active_category_becomes_the_toggle_label() {
        let html = render(false, Filter::Category(Category::Aventura));
        assert!(html.contains("Aventura"));
        assert!(html.contains("filter__toggle--engaged"));
    }
}
