//! Listing profitability domain logic lives here.

pub mod app_state;
pub mod calculation;
pub mod entities;

#[allow(unused_imports)]
pub use app_state::{AppState, PersistedState};
#[allow(unused_imports)]
pub use calculation::{compute, CalculationResult};
#[allow(unused_imports)]
pub use entities::{CalculationInput, DraftInput, InputField};
