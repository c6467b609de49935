// ============================================================================
// HISTORY VIEW - Órdenes completadas del conductor (solo lectura)
// ============================================================================

use js_sys::Date;
use wasm_bindgen::JsValue;
use yew::prelude::*;

use super::OrderMiniMap;
use crate::hooks::{use_my_orders, use_session};
use crate::models::OrderStatus;

/// Timestamps del backend mostrados en el locale del navegador
fn format_timestamp(value: Option<&str>) -> String {
    match value {
        Some(raw) if !raw.is_empty() => Date::new(&JsValue::from_str(raw))
            .to_locale_string("default", &JsValue::UNDEFINED)
            .into(),
        _ => "—".to_string(),
    }
}

#[function_component(HistoryView)]
pub fn history_view() -> Html {
    let session = use_session();
    let orders = use_my_orders(session.driver_id(), OrderStatus::Done);

    if *orders.loading {
        return html! { <div class="view-empty">{"Cargando historial..."}</div> };
    }
    if orders.orders.is_empty() {
        return html! { <div class="view-empty">{"No hay órdenes completadas."}</div> };
    }

    html! {
        <div class="orders-grid">
            { for orders.orders.iter().map(|order| {
                let pkg = &order.package;
                html! {
                    <div class="order-card" key={order.id.clone()}>
                        <div class="order-field"><strong>{"Paquete: "}</strong>{&pkg.description}</div>

                        <div class="order-field">
                            <strong>{"De: "}</strong>{format!("{} ({})", pkg.sender_name, pkg.sender_phone)}
                            <br />
                            {&pkg.sender_address}
                        </div>

                        <div class="order-field">
                            <strong>{"Para: "}</strong>{format!("{} ({})", pkg.receiver_name, pkg.receiver_phone)}
                            <br />
                            {&pkg.receiver_address}
                        </div>

                        <div class="order-dates">
                            <div><strong>{"Inicio: "}</strong>{format_timestamp(order.started_at.as_deref())}</div>
                            <div><strong>{"Entrega: "}</strong>{format_timestamp(order.completed_at.as_deref())}</div>
                        </div>

                        if let Some((lat, lng)) = order.receiver_coords() {
                            <OrderMiniMap lat={lat} lng={lng} />
                        }
                    </div>
                }
            }) }
        </div>
    }
}
