use futures::executor::block_on;
use melona_core::{Category, Filter, SessionConfig, Ticket};
use melona_web::components::date_card::DateCard;
use melona_web::components::filter_menu::FilterMenu;
use melona_web::components::password_lock::PasswordLock;
use melona_web::components::progress::ProgressBar;
use yew::{AttrValue, Callback, LocalServerRenderer};

fn sample_ticket(category: Category) -> Ticket {
    Ticket {
        id: String::from("picnic"),
        emoji: String::from("🧺"),
        title: String::from("Picnic al atardecer"),
        description: String::from("Manta, queso y fresas en el parque."),
        category,
        image: String::new(),
        card_label: None,
    }
}

#[test]
fn password_lock_renders_gate_with_hidden_input() {
    let props = melona_web::components::password_lock::Props {
        config: SessionConfig::default(),
        on_success: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<PasswordLock>::with_props(props).render());
    assert!(html.contains("Palabra Mágica"));
    assert!(html.contains("gate__input"));
}

#[test]
fn locked_and_unlocked_cards_render_distinct_backs() {
    let locked = melona_web::components::date_card::Props {
        ticket: sample_ticket(Category::Romantico),
        collected: false,
        locked: true,
        unlock_text: AttrValue::from("20 de febrero"),
        on_reveal: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<DateCard>::with_props(locked).render());
    assert!(html.contains("Paciencia"));
    assert!(html.contains("20 de febrero"));

    let unlocked = melona_web::components::date_card::Props {
        ticket: sample_ticket(Category::Romantico),
        collected: false,
        locked: false,
        unlock_text: AttrValue::from("20 de febrero"),
        on_reveal: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<DateCard>::with_props(unlocked).render());
    assert!(html.contains("¡Ábrelo!"));
}

#[test]
fn filter_menu_marks_the_active_option() {
    let props = melona_web::components::filter_menu::Props {
        open: true,
        active: Filter::Category(Category::Picante),
        on_toggle: Callback::noop(),
        on_change: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<FilterMenu>::with_props(props).render());
    assert!(html.contains("filter__option--selected"));
    assert!(html.contains("Picante"));
}

#[test]
fn progress_bar_reflects_the_collection() {
    let props = melona_web::components::progress::Props {
        revealed: 6,
        total: 12,
    };
    let html = block_on(LocalServerRenderer::<ProgressBar>::with_props(props).render());
    assert!(html.contains("6 de 12 completadas"));
    assert!(html.contains("width:50%"));
}
