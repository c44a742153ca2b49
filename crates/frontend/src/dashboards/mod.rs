pub mod d001_home;

pub use d001_home::ui::DashboardHome;
