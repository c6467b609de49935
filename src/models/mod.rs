pub mod auth;
pub mod marker;
pub mod order;
pub mod package;
pub mod session;

pub use auth::{LoginData, LoginRequest, LoginResponse, User};
pub use marker::{project_markers, MarkerEntity};
pub use order::{orders_for_driver, Order, OrderPackage, OrderStatus};
pub use package::{parse_coord, Package, PackageStatus};
pub use session::StoredSession;
