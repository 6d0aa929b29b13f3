mod home;
pub use home::Home;

mod compare;
pub use compare::Compare;
