//! Headless calculator core (state/action/effect).

pub mod action;
pub mod effect;
pub mod reducer;
pub mod state;
pub mod store;

pub use action::Action;
pub use effect::Effect;
pub use state::{CalcError, CalcState, Operation};
pub use store::{DispatchResult, Store};
