//! Session random state.
//!
//! A [`RandomState`] is the single generator a sharing session draws coefficients and
//! share abscissae from. It is an owned handle: callers create one per session, pass
//! it by `&mut`, and tear it down when the session ends. Nothing here is global, so
//! independent sessions can run on different threads without locking.

mod state;

pub use state::{RandomState, SEED_BITS};
