//! Modularized state module.
//!
//! Public re-exports keep the API flat under `crate::state::*`.

pub mod app_state;
pub mod modal;
pub mod types;

pub use app_state::AppState;
pub use modal::Modal;
pub use types::{Focus, FormValues, RequiredField};
