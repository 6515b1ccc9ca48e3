//! Reference terminal front end for the select widget.
//!
//! Pure rendering plus event translation: [`render`] draws from a
//! [`SelectSnapshot`](crate::select::SelectSnapshot) and records hit areas,
//! [`runtime`] maps pointer and key events through those areas back onto the
//! state machine.

mod render;
mod runtime;
mod theme;

pub use render::WidgetAreas;
pub use runtime::{SelectOutcome, run};
pub use theme::Theme;
