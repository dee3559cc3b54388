//! Attempt-limited access gate.
//!
//! A shared demo code guards the portal. Three consecutive misses lock the
//! form for thirty seconds; a match persists a session flag that survives
//! reloads until logout. The code ships in the bundle and is printed on the
//! form, so this is a demo gate and not authentication.

mod controller;
mod countdown;
mod credential;
mod error;
mod lockout;
mod session;

pub use controller::Gate;
pub use countdown::Countdown;
pub use credential::{Credential, Verdict};
pub use error::GateError;
pub use lockout::{GateEvent, GatePhase, GateState, LockoutPolicy, Transition};
pub use session::{MemoryStore, SESSION_KEY, SessionStore};

#[cfg(feature = "web")]
pub use session::BrowserStore;

/// One-second lockout interval owner used by the browser build
#[cfg(feature = "web")]
pub type LockoutTimer = Countdown<gloo_timers::callback::Interval>;

/// The gate the browser build uses
#[cfg(feature = "web")]
pub type PortalGate = Gate<BrowserStore>;
