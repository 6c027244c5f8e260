//! # panelkit-app
//!
//! Application scaffolding around [`panelkit`] layouts.
//!
//! - [`StateManager`] - Stack of [`GameState`]s with enter/exit/obscure/reveal hooks
//! - [`MenuNavigator`] - Directional menu navigation with nested submenus
//! - [`Interpolator`] - Eased animation of numbers, points and colours

mod menu;
mod state;
pub mod interpolate;

pub use interpolate::{Interpolate, Interpolator};
pub use menu::*;
pub use state::*;
