//! Page components for the portfolio.

mod about;
mod contact;
mod gallery_modal;
mod hero;
mod mobile_nav;
mod nav_header;
mod portfolio;
mod scroll_top;
mod skills;
mod toast_host;

pub use about::About;
pub use contact::ContactSection;
pub use gallery_modal::GalleryModal;
pub use hero::Hero;
pub use mobile_nav::MobileNav;
pub use nav_header::{NavHeader, NavLocation};
pub use portfolio::Portfolio;
pub use scroll_top::ScrollTopButton;
pub use skills::Skills;
pub use toast_host::ToastHost;
