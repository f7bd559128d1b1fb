// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::models::{ApiErrorBody, HistoryListResponse, HistoryRecord, UserInfo, UserInfoResponse};

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.api_base_url.clone(),
        }
    }

    /// Obtener el perfil del usuario autenticado
    pub async fn get_user_info(&self, token: &str) -> Result<UserInfo, String> {
        let url = format!("{}/user-info", self.base_url);
        let response = Request::get(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        let body = response
            .json::<UserInfoResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        Ok(body.data)
    }

    /// Obtener el historial de análisis
    pub async fn get_history(&self, token: Option<&str>) -> Result<Vec<HistoryRecord>, String> {
        let url = format!("{}/history", self.base_url);
        let mut builder = Request::get(&url);
        if let Some(token) = token {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let response = builder
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            let body = response
                .json::<ApiErrorBody>()
                .await
                .map_err(|e| format!("Parse error: {}", e))?;
            return Err(body
                .message
                .unwrap_or_else(|| "No se pudo obtener el historial".to_string()));
        }

        let body = response
            .json::<HistoryListResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        log::info!("📋 Historial obtenido: {} registros", body.data.len());
        Ok(body.data)
    }

    /// Eliminar un análisis del historial
    pub async fn delete_history_item(&self, token: Option<&str>, id: i64) -> Result<(), String> {
        let url = format!("{}/history/{}", self.base_url, id);
        let mut builder = Request::delete(&url);
        if let Some(token) = token {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let response = builder
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            let message = match response.json::<ApiErrorBody>().await {
                Ok(body) => body
                    .message
                    .unwrap_or_else(|| "No se pudo eliminar el registro".to_string()),
                // Cuando el cuerpo no es JSON usamos el status HTTP
                Err(_) => format!("{} {}", response.status(), response.status_text()),
            };
            return Err(message);
        }

        log::info!("🗑️ Análisis {} eliminado en el backend", id);
        Ok(())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
