pub mod app;
pub mod assignments;
pub mod contact_modal;
pub mod history;
pub mod login_screen;
pub mod map_view;
pub mod order_mini_map;
pub mod package_modal;
pub mod sidebar;

pub use app::App;
pub use assignments::AssignmentsView;
pub use contact_modal::ContactModal;
pub use history::HistoryView;
pub use login_screen::LoginScreen;
pub use map_view::MapView;
pub use order_mini_map::OrderMiniMap;
pub use package_modal::PackageModal;
pub use sidebar::Sidebar;
