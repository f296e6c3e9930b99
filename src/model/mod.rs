//! Plain records stored in the inventory snapshot, plus their creation drafts.
//!
//! Every record implements [`Record`](snapshot_framework::Record); ids come from the
//! collection that stores the record, never from the caller.

pub mod activity;
pub mod category;
pub mod item;
pub mod lenient;
pub mod numeric;
pub mod order;
pub mod snapshot;
pub mod supplier;
pub mod user;

pub use activity::*;
pub use category::*;
pub use item::*;
pub use order::*;
pub use snapshot::*;
pub use supplier::*;
pub use user::*;
