//! Data grid widgets for atelier terminal screens.
//!
//! Grids are plain element builders: the host owns every piece of state
//! (records, sort, pagination, search term), builds a grid from it each
//! frame, and gets [`GridAction`]s back from clicks and key presses. Those
//! actions are routed to the host's [`GridHandlers`].

pub mod action;
pub mod config;
pub mod error;
pub mod grid;
pub mod handlers;
pub mod infinite;
pub mod viewport;

pub use action::{action_at, GridAction, ACTION_KEY};
pub use config::{GridConfig, DEFAULT_PAGE_SIZES, MOBILE_BREAKPOINT};
pub use error::GridError;
pub use grid::*;
pub use handlers::GridHandlers;
pub use infinite::{sentinel_visible, InfiniteScroll};
pub use viewport::{Breakpoint, FixedViewport, ResizeViewport, ViewportClassifier};
