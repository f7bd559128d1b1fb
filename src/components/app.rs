use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::router::{
    check_navigation, current_route, push_route, redirect_param, NavigationDecision, Route,
};
use crate::services::{self, ApiHistorySource, HistoryDataSource, MockHistorySource};
use crate::state::{HistoryState, SessionState};

use super::{ForgotPasswordScreen, LoginScreen, MainScreen, RegisterScreen, WelcomeScreen};

#[function_component(App)]
pub fn app() -> Html {
    let route = use_state(current_route);
    let refresh = use_force_update();

    // Stores compartidos; el origen del historial se elige una sola vez
    let session = use_memo((), |_| SessionState::new());
    let history = {
        let session = session.clone();
        use_memo((), move |_| {
            let source: Rc<dyn HistoryDataSource> = if CONFIG.use_mock_history() {
                log::info!("🧪 Historial en modo simulado (entorno: {})", CONFIG.environment);
                Rc::new(MockHistorySource)
            } else {
                Rc::new(ApiHistorySource::new())
            };
            HistoryState::new((*session).clone(), source)
        })
    };

    // Restaurar sesión desde localStorage al montar
    {
        let session = session.clone();
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            session.initialize();
            refresh.force_update();
            || ()
        });
    }

    // Botón atrás/adelante del navegador: el guard corre igual
    {
        let route = route.clone();
        let session = session.clone();
        use_effect_with((), move |_| {
            let callback = Closure::wrap(Box::new(move |_: web_sys::Event| {
                let (final_route, query) = guarded_route(current_route(), session.is_logged_in());
                if let Some(q) = query {
                    push_route(final_route, Some(&q));
                }
                route.set(final_route);
            }) as Box<dyn FnMut(_)>);

            if let Some(win) = web_sys::window() {
                let _ = win.add_event_listener_with_callback(
                    "popstate",
                    callback.as_ref().unchecked_ref(),
                );
            }

            move || {
                callback.forget();
            }
        });
    }

    // Al entrar a Main: perfil (si falta) + historial
    {
        let session = session.clone();
        let history = history.clone();
        let refresh = refresh.clone();
        use_effect_with(*route, move |r| {
            if *r == Route::Main {
                let session = session.clone();
                let history = history.clone();
                let refresh = refresh.clone();
                spawn_local(async move {
                    if session.is_logged_in() && session.user_info().is_none() {
                        session.fetch_user_info().await;
                    }
                    history.fetch_history().await;
                    refresh.force_update();
                });
            }
            || ()
        });
    }

    // Navegación con guard
    let navigate = {
        let route = route.clone();
        let session = session.clone();
        Callback::from(move |target: Route| {
            let (final_route, query) = guarded_route(target, session.is_logged_in());
            push_route(final_route, query.as_deref());
            route.set(final_route);
        })
    };

    // Login con credenciales: el backend emite el token y la sesión lo valida
    let on_login = {
        let session = session.clone();
        let navigate = navigate.clone();
        let refresh = refresh.clone();
        Callback::from(move |(phone, password): (String, String)| {
            let session = session.clone();
            let navigate = navigate.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match services::password_login(&phone, &password).await {
                    Ok(token) => {
                        session.login(&token).await;
                        if session.is_logged_in() {
                            log::info!("✅ Login exitoso");
                            let target = redirect_param()
                                .map(|p| Route::from_path(&p))
                                .unwrap_or(Route::Main);
                            navigate.emit(target);
                        } else {
                            alert("No se pudo validar la sesión");
                        }
                    }
                    Err(e) => {
                        log::error!("❌ Error en login: {}", e);
                        alert(&format!("Error de login: {}", e));
                    }
                }
                refresh.force_update();
            });
        })
    };

    // Registro y recuperación comparten el flujo por SMS
    let on_sms_login = {
        let session = session.clone();
        let navigate = navigate.clone();
        let refresh = refresh.clone();
        Callback::from(move |(phone, sms_code): (String, String)| {
            let session = session.clone();
            let navigate = navigate.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match services::sms_login(&phone, &sms_code).await {
                    Ok(token) => {
                        session.login(&token).await;
                        if session.is_logged_in() {
                            navigate.emit(Route::Main);
                        } else {
                            alert("No se pudo validar la sesión");
                        }
                    }
                    Err(e) => {
                        log::error!("❌ Error en verificación SMS: {}", e);
                        alert(&format!("Error: {}", e));
                    }
                }
                refresh.force_update();
            });
        })
    };

    let on_logout = {
        let session = session.clone();
        let navigate = navigate.clone();
        Callback::from(move |_: MouseEvent| {
            session.logout();
            navigate.emit(Route::Welcome);
        })
    };

    let on_refresh_history = {
        let history = history.clone();
        let refresh = refresh.clone();
        Callback::from(move |_: MouseEvent| {
            let history = history.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                history.fetch_history().await;
                refresh.force_update();
            });
        })
    };

    let on_delete_item = {
        let history = history.clone();
        let refresh = refresh.clone();
        Callback::from(move |id: i64| {
            let history = history.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                history.delete_item(id).await;
                refresh.force_update();
            });
        })
    };

    let on_select_item = {
        let history = history.clone();
        let refresh = refresh.clone();
        Callback::from(move |id: i64| {
            history.set_current_analysis_id(Some(id));
            refresh.force_update();
        })
    };

    match *route {
        Route::Welcome => html! {
            <WelcomeScreen on_navigate={navigate.clone()} />
        },
        Route::Login => html! {
            <LoginScreen on_login={on_login} on_navigate={navigate.clone()} />
        },
        Route::Register => html! {
            <RegisterScreen on_submit={on_sms_login} on_navigate={navigate.clone()} />
        },
        Route::ForgotPassword => html! {
            <ForgotPasswordScreen on_submit={on_sms_login} on_navigate={navigate.clone()} />
        },
        Route::Main => html! {
            <MainScreen
                items={history.items()}
                current_analysis_id={history.current_analysis_id()}
                is_loading={history.is_loading()}
                error={history.error()}
                user_info={session.user_info()}
                on_refresh={on_refresh_history}
                on_select={on_select_item}
                on_delete={on_delete_item}
                on_logout={on_logout}
            />
        },
    }
}

/// Aplica el guard y devuelve la ruta final con su query string
fn guarded_route(target: Route, is_logged_in: bool) -> (Route, Option<String>) {
    match check_navigation(target, is_logged_in) {
        NavigationDecision::Allow => (target, None),
        NavigationDecision::RedirectToLogin { redirect } => {
            let encoded = String::from(js_sys::encode_uri_component(&redirect));
            (Route::Login, Some(format!("redirect={}", encoded)))
        }
    }
}

fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}
