//! Custom widgets

pub mod card;

pub use card::CardView;
