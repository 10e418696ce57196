pub mod activate;
pub mod add;
pub mod connect;
pub mod edit;
pub mod list;
pub mod remove;
pub mod status;
