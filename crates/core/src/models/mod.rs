pub mod account;
pub mod analytics;
pub mod bill;
pub mod budget;
pub mod category;
pub mod debt;
pub mod investment;
pub mod liability;
pub mod projection;
pub mod settings;
pub mod snapshot;
pub mod spending;
pub mod summary;
pub mod transaction;
pub mod window;
