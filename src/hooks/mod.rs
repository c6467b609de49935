pub mod use_claim;
pub mod use_my_orders;
pub mod use_pending_packages;
pub mod use_session;

pub use use_claim::{use_claim, ClaimHandle, ClaimPhase};
pub use use_my_orders::{use_my_orders, MyOrdersHandle};
pub use use_pending_packages::{use_pending_packages, PendingPackagesHandle};
pub use use_session::{use_session, use_session_provider, SessionHandle};
