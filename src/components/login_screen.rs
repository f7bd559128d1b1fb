use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub on_login: Callback<(String, String)>,
    pub on_navigate: Callback<Route>,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let phone_ref = use_node_ref();
    let password_ref = use_node_ref();

    let on_submit = {
        let phone_ref = phone_ref.clone();
        let password_ref = password_ref.clone();
        let on_login = props.on_login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(phone_input), Some(password_input)) = (
                phone_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                let phone = phone_input.value();
                let password = password_input.value();

                if phone.is_empty() || password.is_empty() {
                    web_sys::window()
                        .unwrap()
                        .alert_with_message("Por favor, completa todos los campos")
                        .ok();
                    return;
                }

                on_login.emit((phone, password));
            }
        })
    };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="login-logo">{"🎬"}</div>
                    <h1>{"Video Analyzer"}</h1>
                    <p>{"Accede a tus análisis"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="phone">{"Teléfono"}</label>
                        <input
                            type="tel"
                            id="phone"
                            name="phone"
                            placeholder="Ingresa tu teléfono"
                            ref={phone_ref}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Contraseña"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder="Ingresa tu contraseña"
                            ref={password_ref}
                            required=true
                        />
                    </div>

                    <button type="submit" class="btn-login">
                        <span class="btn-text">{"Iniciar Sesión"}</span>
                    </button>

                    <div class="login-footer">
                        <button
                            type="button"
                            class="btn-link"
                            onclick={props.on_navigate.reform(|_| Route::ForgotPassword)}
                        >
                            {"¿Olvidaste tu contraseña?"}
                        </button>
                        <button
                            type="button"
                            class="btn-link"
                            onclick={props.on_navigate.reform(|_| Route::Register)}
                        >
                            {"Crear una cuenta"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
