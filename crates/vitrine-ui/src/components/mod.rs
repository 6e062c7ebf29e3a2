//! Reusable UI components for the portfolio page.

mod button;
mod input;
mod modal;
mod pills;
mod toast;
mod typing_text;

pub use button::*;
pub use input::*;
pub use modal::*;
pub use pills::*;
pub use toast::*;
pub use typing_text::*;
