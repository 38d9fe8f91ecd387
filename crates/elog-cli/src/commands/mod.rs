pub mod dispatch;
pub mod entries;
pub mod logbooks;
