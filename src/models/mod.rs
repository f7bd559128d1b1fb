pub mod auth;
pub mod history;
pub mod user;

pub use auth::{LoginResponse, PasswordLoginRequest, SmsLoginRequest};
pub use history::{default_analysis_id, AnalysisStatus, ApiErrorBody, HistoryListResponse, HistoryRecord};
pub use user::{UserInfo, UserInfoResponse};
