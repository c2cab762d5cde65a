pub mod bottom_nav;
pub mod dashboard_layout;
pub mod sidebar;

pub use bottom_nav::BottomNav;
pub use dashboard_layout::DashboardLayout;
pub use sidebar::Sidebar;
