//! Train motion simulation
//!
//! Each route owns an independent state machine that alternates between
//! moving along a segment and dwelling at the station it arrived at. The
//! pure [`step`] function advances one tick; [`Fleet`] ticks every route and
//! [`use_train_simulation`] drives a fleet from a browser timer.

mod controller;
mod driver;
pub mod random;
mod state;
mod step;

pub use controller::{Fleet, RouteController, TickOutput};
pub use driver::{use_train_simulation, SimulationHandle};
pub use random::{seeded, RandomSource, RngSource};
pub use state::{Phase, SimulationState, TrainStatus};
pub use step::{step, MotionProfile};
