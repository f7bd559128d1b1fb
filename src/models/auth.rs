use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PasswordLoginRequest {
    pub phone: String,
    #[serde(rename = "type")]
    pub login_type: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SmsLoginRequest {
    pub phone: String,
    #[serde(rename = "type")]
    pub login_type: String,
    pub sms_code: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}
