use web_sys::MouseEvent;
use yew::prelude::*;

use crate::models::{HistoryRecord, UserInfo};

#[derive(Properties, PartialEq)]
pub struct MainScreenProps {
    pub items: Vec<HistoryRecord>,
    pub current_analysis_id: Option<i64>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub user_info: Option<UserInfo>,
    pub on_refresh: Callback<MouseEvent>,
    pub on_select: Callback<i64>,
    pub on_delete: Callback<i64>,
    pub on_logout: Callback<MouseEvent>,
}

#[function_component(MainScreen)]
pub fn main_screen(props: &MainScreenProps) -> Html {
    let user_label = match &props.user_info {
        Some(info) => {
            let name = info.username.clone().unwrap_or_else(|| "Usuario".to_string());
            format!("{} · {} días con nosotros", name, info.days)
        }
        None => "Sesión anónima".to_string(),
    };

    html! {
        <div class="main-screen">
            <header class="app-header">
                <h1>{"Video Analyzer"}</h1>
                <div class="header-actions">
                    <span class="user-label">{user_label}</span>
                    <button class="btn-refresh" onclick={props.on_refresh.clone()}>
                        {"🔄 Actualizar"}
                    </button>
                    <button class="btn-logout" onclick={props.on_logout.clone()}>
                        {"Salir"}
                    </button>
                </div>
            </header>

            {
                if let Some(error) = &props.error {
                    html! { <div class="error-banner">{format!("⚠️ {}", error)}</div> }
                } else {
                    html! {}
                }
            }

            <section class="history-panel">
                <h2>{"Historial de análisis"}</h2>
                {
                    if props.is_loading {
                        html! { <p class="history-loading">{"Cargando historial..."}</p> }
                    } else if props.items.is_empty() {
                        html! { <p class="history-empty">{"Sin análisis todavía"}</p> }
                    } else {
                        html! {
                            <ul class="history-list">
                                { for props.items.iter().map(|item| {
                                    history_row(item, props.current_analysis_id,
                                                &props.on_select, &props.on_delete)
                                }) }
                            </ul>
                        }
                    }
                }
            </section>
        </div>
    }
}

fn history_row(
    item: &HistoryRecord,
    current_id: Option<i64>,
    on_select: &Callback<i64>,
    on_delete: &Callback<i64>,
) -> Html {
    let id = item.id;
    let selected = current_id == Some(id);
    let row_class = if selected {
        "history-item selected"
    } else {
        "history-item"
    };
    let status_class = format!("status-badge status-{}", item.status.as_str());

    let on_click = on_select.reform(move |_: MouseEvent| id);
    let on_delete = {
        let on_delete = on_delete.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_delete.emit(id);
        })
    };

    html! {
        <li key={id} class={row_class} onclick={on_click}>
            <div class="history-item-info">
                <span class="history-time">{&item.time}</span>
                <span class={status_class}>{item.status.label()}</span>
                <span class="history-expiry">{format!("Expira: {}", item.expiry)}</span>
            </div>
            <button class="btn-delete" onclick={on_delete}>{"🗑️"}</button>
        </li>
    }
}
