//! The explorer UI.
//!
//! The UI is a stack of views. The bottom of the stack is always the
//! [`CatalogView`](catalog::CatalogView), a searchable list of every loaded
//! Pokemon; opening an entry pushes a [`DetailView`](detail::DetailView) on
//! top, and going back pops it.
//!
//! Each view is a [`Component`](component::Component) supporting two
//! operations:
//! - Process input.
//! - Render.
//!
//! Input not captured by the [`App`](app::App) itself goes to the topmost
//! view only. Only the topmost view is rendered, once per frame.

pub mod app;
pub mod catalog;
pub mod component;
pub mod detail;
pub mod image;
pub mod tabs;
pub mod widgets;
