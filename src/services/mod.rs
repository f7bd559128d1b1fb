pub mod api_client;
pub mod auth_service;
pub mod history_source;

pub use api_client::ApiClient;
pub use auth_service::{password_login, sms_login};
pub use history_source::{ApiHistorySource, HistoryDataSource, MockHistorySource};
