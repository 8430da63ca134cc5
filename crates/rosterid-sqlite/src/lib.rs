mod store;

pub use store::*;
// Public re-export so downstream crates can access `rosterid` via
// `rosterid_sqlite::rosterid`
pub use rosterid;
