//! Application pages

pub mod dashboard;
pub mod login;
pub mod pos;
pub mod products;

pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use pos::PosPage;
pub use products::ProductsPage;
