//! Player/Ball Arbitration
//!
//! Who owns the ball, who may tackle, which teammate the human controls,
//! and where the goalkeeper should stand.
//!
//! All inputs are plain numbers from the host (distances, positions,
//! timestamps); nothing here queries physics.

mod goalkeeper;
mod possession;
mod switch;
mod tackle;


pub use goalkeeper::{GoalkeeperGeometry, GoalkeeperPredictor};
pub(crate) use goalkeeper::constants as goalkeeper_constants;
pub use possession::{select_claimant, PossessionArbiter, PossessionChange};
pub use switch::{find_nearest, find_nearest_excluding, perform_switch, SwitchResult, SwitchSelector};
pub use tackle::{apply_dispossession, StunTimer, TackleResolver, TackleResult};
