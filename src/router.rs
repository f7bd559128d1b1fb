use wasm_bindgen::JsValue;
use web_sys::window;

/// Rutas de la SPA, una vista por ruta
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Route {
    Welcome,
    Login,
    Register,
    ForgotPassword,
    Main,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Welcome => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::ForgotPassword => "/forgot-password",
            Route::Main => "/main",
        }
    }

    /// Rutas desconocidas caen en la pantalla de bienvenida
    pub fn from_path(path: &str) -> Route {
        match path {
            "/login" => Route::Login,
            "/register" => Route::Register,
            "/forgot-password" => Route::ForgotPassword,
            "/main" => Route::Main,
            _ => Route::Welcome,
        }
    }

    /// Ninguna ruta exige sesión todavía; se marcará Main cuando el
    /// backend empiece a exigirla
    pub fn requires_auth(&self) -> bool {
        false
    }
}

/// Resultado del guard previo a cada transición
#[derive(Clone, PartialEq, Debug)]
pub enum NavigationDecision {
    Allow,
    /// Ir a login conservando la ruta pedida en el parámetro `redirect`
    RedirectToLogin { redirect: String },
}

/// Guard de navegación: una ruta protegida sin sesión iniciada redirige
/// a login; el resto de transiciones pasan sin tocar.
pub fn check_navigation(target: Route, is_logged_in: bool) -> NavigationDecision {
    decide(target.requires_auth(), is_logged_in, target.path())
}

fn decide(requires_auth: bool, is_logged_in: bool, requested_path: &str) -> NavigationDecision {
    if requires_auth && !is_logged_in {
        return NavigationDecision::RedirectToLogin {
            redirect: requested_path.to_string(),
        };
    }
    NavigationDecision::Allow
}

/// Ruta actual según window.location
pub fn current_route() -> Route {
    let path = window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string());
    Route::from_path(&path)
}

/// Empuja la ruta (con query opcional) al historial del navegador
pub fn push_route(route: Route, query: Option<&str>) {
    let url = match query {
        Some(q) => format!("{}?{}", route.path(), q),
        None => route.path().to_string(),
    };
    if let Some(history) = window().and_then(|w| w.history().ok()) {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&url));
    }
}

/// Valor del parámetro ?redirect= de la URL actual
pub fn redirect_param() -> Option<String> {
    let search = window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get("redirect")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cada_ruta_conserva_su_path() {
        let routes = [
            Route::Welcome,
            Route::Login,
            Route::Register,
            Route::ForgotPassword,
            Route::Main,
        ];
        for route in routes {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn un_path_desconocido_cae_en_bienvenida() {
        assert_eq!(Route::from_path("/no-existe"), Route::Welcome);
        assert_eq!(Route::from_path(""), Route::Welcome);
    }

    #[test]
    fn ruta_protegida_sin_sesion_redirige_con_la_ruta_pedida() {
        assert_eq!(
            decide(true, false, "/main"),
            NavigationDecision::RedirectToLogin {
                redirect: "/main".to_string()
            }
        );
    }

    #[test]
    fn ruta_protegida_con_sesion_pasa() {
        assert_eq!(decide(true, true, "/main"), NavigationDecision::Allow);
    }

    #[test]
    fn ruta_sin_proteger_pasa_siempre() {
        assert_eq!(decide(false, false, "/login"), NavigationDecision::Allow);
        assert_eq!(decide(false, true, "/"), NavigationDecision::Allow);
    }

    #[test]
    fn hoy_ninguna_ruta_esta_protegida() {
        for route in [Route::Welcome, Route::Login, Route::Main] {
            assert_eq!(check_navigation(route, false), NavigationDecision::Allow);
        }
    }
}
