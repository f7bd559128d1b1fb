// ============================================================================
// SESSION STATE - Sesión del usuario (token JWT + perfil)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;

use crate::models::UserInfo;
use crate::services::ApiClient;
use crate::utils::storage;
use crate::utils::STORAGE_KEY_TOKEN;

/// Estado de sesión compartido. Invariante: `is_logged_in` equivale a
/// `token.is_some()`; tras un login válido existen token Y perfil, y
/// cualquier fallo devuelve la sesión completa al estado anónimo.
#[derive(Clone)]
pub struct SessionState {
    is_logged_in: Rc<RefCell<bool>>,
    token: Rc<RefCell<Option<String>>>,
    user_info: Rc<RefCell<Option<UserInfo>>>,
    client: ApiClient,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            is_logged_in: Rc::new(RefCell::new(false)),
            token: Rc::new(RefCell::new(None)),
            user_info: Rc::new(RefCell::new(None)),
            client: ApiClient::new(),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        *self.is_logged_in.borrow()
    }

    pub fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    pub fn user_info(&self) -> Option<UserInfo> {
        self.user_info.borrow().clone()
    }

    /// Restaura la sesión desde localStorage al arrancar.
    /// Sin red; idempotente.
    pub fn initialize(&self) {
        if let Some(saved_token) = storage::get_raw(STORAGE_KEY_TOKEN) {
            *self.token.borrow_mut() = Some(saved_token);
            *self.is_logged_in.borrow_mut() = true;
            log::info!("💾 Sesión restaurada desde localStorage");
        }
    }

    /// Login con un JWT ya emitido. Un token sin forma de JWT descarta
    /// cualquier sesión previa; el login solo queda válido cuando el
    /// perfil se obtiene con éxito, si no se revierte por completo.
    pub async fn login(&self, jwt: &str) {
        if !has_jwt_shape(jwt) {
            log::error!("❌ Formato de token inválido");
            self.logout();
            return;
        }

        *self.is_logged_in.borrow_mut() = true;
        *self.token.borrow_mut() = Some(jwt.to_string());
        if let Err(e) = storage::set_raw(STORAGE_KEY_TOKEN, jwt) {
            log::error!("❌ No se pudo persistir el token: {}", e);
        }

        if let Err(e) = self.try_fetch_user_info().await {
            log::error!("❌ Verificación tras login fallida: {}", e);
            self.logout();
        }
    }

    /// Vuelve al estado anónimo y borra el token persistido.
    /// Nunca falla; idempotente.
    pub fn logout(&self) {
        *self.is_logged_in.borrow_mut() = false;
        *self.token.borrow_mut() = None;
        *self.user_info.borrow_mut() = None;
        let _ = storage::remove_raw(STORAGE_KEY_TOKEN);
        log::info!("👋 Logout");
    }

    /// Obtiene el perfil del usuario autenticado. Cualquier fallo (HTTP,
    /// red o parseo) invalida la sesión; el error no llega al caller.
    pub async fn fetch_user_info(&self) {
        if let Err(e) = self.try_fetch_user_info().await {
            log::error!("❌ Obtención del perfil fallida: {}", e);
            self.logout();
        }
    }

    async fn try_fetch_user_info(&self) -> Result<(), String> {
        let token = self.token().ok_or("Sesión sin token")?;
        let info = self.client.get_user_info(&token).await?;
        let info = info.with_days(Utc::now());
        log::info!("✅ Perfil obtenido: {} días desde el registro", info.days);
        *self.user_info.borrow_mut() = Some(info);
        Ok(())
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Validación estructural del token: tres segmentos separados por punto.
/// No se verifica firma ni claims; eso es cosa del backend.
pub fn has_jwt_shape(token: &str) -> bool {
    token.split('.').count() == 3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn un_jwt_tiene_exactamente_tres_segmentos() {
        assert!(has_jwt_shape("header.payload.signature"));
        assert!(has_jwt_shape("a.b."));
    }

    #[test]
    fn otros_conteos_de_segmentos_se_rechazan() {
        assert!(!has_jwt_shape(""));
        assert!(!has_jwt_shape("abc"));
        assert!(!has_jwt_shape("a.b"));
        assert!(!has_jwt_shape("a.b.c.d"));
    }
}
