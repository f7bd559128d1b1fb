use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::models::{LoginResponse, PasswordLoginRequest, SmsLoginRequest};

/// Login con teléfono y contraseña; devuelve el JWT emitido por el backend
pub async fn password_login(phone: &str, password: &str) -> Result<String, String> {
    let url = format!("{}/password_login", CONFIG.api_base_url);
    let request_body = PasswordLoginRequest {
        phone: phone.to_string(),
        login_type: "password".to_string(),
        password: password.to_string(),
    };

    log::info!("🔐 Iniciando sesión para: {}", phone);

    let response = Request::post(&url)
        .json(&request_body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    let body = response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    if !response.ok() || !body.success {
        return Err(body
            .message
            .unwrap_or_else(|| "Error de autenticación".to_string()));
    }

    body.token
        .ok_or_else(|| "La respuesta no incluye token".to_string())
}

/// Login con código SMS; registro y recuperación de contraseña
/// comparten este flujo en el backend
pub async fn sms_login(phone: &str, sms_code: &str) -> Result<String, String> {
    let url = format!("{}/password_login", CONFIG.api_base_url);
    let request_body = SmsLoginRequest {
        phone: phone.to_string(),
        login_type: "sms".to_string(),
        sms_code: sms_code.to_string(),
    };

    let response = Request::post(&url)
        .json(&request_body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request error: {}", e))?;

    let body = response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    if !response.ok() || !body.success {
        return Err(body
            .message
            .unwrap_or_else(|| "Error de autenticación".to_string()));
    }

    body.token
        .ok_or_else(|| "La respuesta no incluye token".to_string())
}
