//! Domain types and plumbing shared by the chart pipeline and the views.

pub mod format;
pub mod sim;
pub mod storage;
