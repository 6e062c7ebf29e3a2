//! Vitrine Core Library
//!
//! Widget logic for the Vitrine portfolio app: the project catalog, form
//! validation, the notification queue, the portfolio filter, scroll math,
//! and the typing-text animator.
//!
//! ## Overview
//!
//! Every interactive behavior of the portfolio page lives here as plain
//! state and pure functions; the desktop crate only renders that state and
//! feeds events back in. Nothing in this crate touches the UI toolkit, so
//! all of it is testable with ordinary unit tests (and a paused tokio
//! clock for the timed flows).
//!
//! ## Quick Start
//!
//! ```ignore
//! use vitrine_core::{Catalog, ContactMessage, SimulatedTransport};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = Catalog::embedded()?;
//!     for project in catalog.projects() {
//!         println!("{} ({} images)", project.title, project.images.len());
//!     }
//!
//!     let outcome = vitrine_core::contact::submit(
//!         &SimulatedTransport::default(),
//!         &ContactMessage::default(),
//!         std::time::Duration::from_secs(10),
//!     )
//!     .await;
//!     println!("{outcome:?}");
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod contact;
pub mod error;
pub mod filter;
pub mod notify;
pub mod scroll;
pub mod typing;
pub mod validate;

// Re-exports
pub use catalog::{Catalog, Project, ProjectCategory};
pub use contact::{ContactField, ContactMessage, MessageTransport, SimulatedTransport, SubmitOutcome};
pub use error::{SendError, VitrineError};
pub use filter::Filter;
pub use notify::{Toast, ToastKind, ToastQueue};
pub use scroll::SectionPos;
pub use typing::TypingAnimator;
pub use validate::{validate_field, FieldError, FieldKind};
