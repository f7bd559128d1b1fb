use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct RegisterScreenProps {
    /// (teléfono, código SMS)
    pub on_submit: Callback<(String, String)>,
    pub on_navigate: Callback<Route>,
}

#[function_component(RegisterScreen)]
pub fn register_screen(props: &RegisterScreenProps) -> Html {
    let phone_ref = use_node_ref();
    let code_ref = use_node_ref();

    let on_submit = {
        let phone_ref = phone_ref.clone();
        let code_ref = code_ref.clone();
        let on_submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(phone_input), Some(code_input)) = (
                phone_ref.cast::<HtmlInputElement>(),
                code_ref.cast::<HtmlInputElement>(),
            ) {
                let phone = phone_input.value();
                let code = code_input.value();

                if phone.is_empty() || code.is_empty() {
                    web_sys::window()
                        .unwrap()
                        .alert_with_message("Por favor, completa todos los campos")
                        .ok();
                    return;
                }

                on_submit.emit((phone, code));
            }
        })
    };

    html! {
        <div class="register-screen">
            <div class="register-container">
                <h1>{"Crear Cuenta"}</h1>
                <p>{"Verifica tu teléfono con el código SMS"}</p>

                <form class="register-form" onsubmit={on_submit}>
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
                        <label for="sms-code">{"Código SMS"}</label>
                        <input
                            type="text"
                            id="sms-code"
                            name="sms-code"
                            placeholder="Código de verificación"
                            ref={code_ref}
                            required=true
                        />
                    </div>

                    <button type="submit" class="btn-primary">
                        {"Registrarme"}
                    </button>

                    <button
                        type="button"
                        class="btn-link"
                        onclick={props.on_navigate.reform(|_| Route::Login)}
                    >
                        {"Ya tengo cuenta"}
                    </button>
                </form>
            </div>
        </div>
    }
}
