pub mod activity;
pub mod dashboard;
pub mod dispatch;
pub mod group;
pub mod init;
pub mod reset;
pub mod seed;
pub mod session;
pub mod shared;
pub mod word;
