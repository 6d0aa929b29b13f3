//! Shared UI crate for Driftlab: the comparison chart pipeline, its panels,
//! and the views both launchers route to.

pub mod chart;
pub mod comparison;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}
