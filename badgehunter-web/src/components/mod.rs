pub mod badge_card;
pub mod chat_bubble;
pub mod navbar;
pub mod progress_card;
