use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_session;
use crate::services::api_client::ApiClient;

#[function_component(LoginScreen)]
pub fn login_screen() -> Html {
    let session = use_session();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_submit = {
        let session = session.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let loading = loading.clone();
        let error = error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let email = email_input.value();
            let password = password_input.value();
            if email.is_empty() || password.is_empty() {
                error.set(Some("Completa email y contraseña".to_string()));
                return;
            }

            let session = session.clone();
            let loading = loading.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                loading.set(true);
                error.set(None);

                match ApiClient::new().login(&email, &password).await {
                    Ok(data) => {
                        session.login(data);
                    }
                    Err(e) => {
                        log::error!("❌ Login fallido: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="logo-icon">{"🚚"}</div>
                    <h1>{"Dispatch Driver"}</h1>
                    <p>{"Entrega de paquetes para conductores"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    {
                        if let Some(message) = &*error {
                            html! { <div class="login-error">{message.clone()}</div> }
                        } else {
                            html! {}
                        }
                    }

                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            placeholder="conductor@empresa.com"
                            ref={email_ref}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Contraseña"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder="••••••••"
                            ref={password_ref}
                            required=true
                        />
                    </div>

                    <button type="submit" class="btn-login" disabled={*loading}>
                        { if *loading { "Iniciando sesión..." } else { "Iniciar sesión" } }
                    </button>
                </form>
            </div>
        </div>
    }
}
