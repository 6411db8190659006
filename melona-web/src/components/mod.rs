pub mod celebration;
pub mod date_card;
pub mod filter_menu;
pub mod password_lock;
pub mod progress;
pub mod welcome;
