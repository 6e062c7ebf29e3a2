//! Pages. The portfolio is a single page.

mod home;

pub use home::Home;
