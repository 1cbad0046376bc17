//! Atelier: a terminal catalog browser for courses and products.
//!
//! Each catalog table is shown through a responsive data grid that switches
//! between a table and cards with the terminal width, and pages either with
//! numbered pages or by infinite scroll.

pub mod app;
pub mod catalog;
pub mod error;
pub mod paths;
pub mod screens;
pub mod settings;

pub use app::App;
pub use error::AppError;
