//! Reusable render pieces for the product list screen

pub mod button;
pub mod card;
pub mod search;

pub use button::Button;
pub use card::Card;
pub use search::SearchBox;
