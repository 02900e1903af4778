//! Browser-independent UI state for each page section.
//!
//! Components keep one of these per mounted instance inside a signal, so
//! nothing here is shared across sections.

mod about;
mod contact;
mod gallery;
mod hover;
mod menu;
mod reveal;

pub use about::{AboutState, AboutTab};
pub use contact::{ConsoleSink, ContactError, ContactForm, FormData, FormField, MessageSink};
pub use gallery::{ModalClick, ProjectGallery};
pub use hover::HoverIndex;
pub use menu::MenuState;
pub use reveal::RevealOnce;
