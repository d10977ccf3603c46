pub mod user;
pub mod category;
pub mod service;
pub mod service_record;
pub mod transaction;

pub use user::User;
pub use category::Category;
pub use service::Service;
pub use service_record::ServiceRecord;
pub use transaction::Transaction;
