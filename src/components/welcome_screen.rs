use yew::prelude::*;

use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct WelcomeScreenProps {
    pub on_navigate: Callback<Route>,
}

#[function_component(WelcomeScreen)]
pub fn welcome_screen(props: &WelcomeScreenProps) -> Html {
    html! {
        <div class="welcome-screen">
            <div class="welcome-container">
                <div class="welcome-logo">{"🎬"}</div>
                <h1>{"Video Analyzer"}</h1>
                <p>{"Análisis inteligente de comportamiento en vídeo"}</p>

                <div class="welcome-actions">
                    <button
                        class="btn-primary"
                        onclick={props.on_navigate.reform(|_| Route::Login)}
                    >
                        {"Iniciar Sesión"}
                    </button>
                    <button
                        class="btn-secondary"
                        onclick={props.on_navigate.reform(|_| Route::Register)}
                    >
                        {"Crear Cuenta"}
                    </button>
                </div>
            </div>
        </div>
    }
}
