// ============================================================================
// ASSIGNMENTS VIEW - Envíos activos del conductor
// ============================================================================
// Presentación pura sobre el gateway: status == shipping y driverId de la
// sesión. Expone contacto con remitente/destinatario y "marcar como
// completada" con eliminación optimista.
// ============================================================================

use yew::prelude::*;

use super::{ContactModal, OrderMiniMap};
use crate::hooks::{use_my_orders, use_session};
use crate::models::{Order, OrderStatus};

#[function_component(AssignmentsView)]
pub fn assignments_view() -> Html {
    let session = use_session();
    let orders = use_my_orders(session.driver_id(), OrderStatus::Shipping);
    let contact = use_state(|| None::<(String, String)>);

    let on_contact = {
        let contact = contact.clone();
        Callback::from(move |target: (String, String)| contact.set(Some(target)))
    };
    let on_close_contact = {
        let contact = contact.clone();
        Callback::from(move |_| contact.set(None))
    };

    let confirm_done = {
        let mark_done = orders.mark_done.clone();
        Callback::from(move |order_id: String| {
            let confirmed = web_sys::window()
                .map(|w| {
                    w.confirm_with_message("¿Marcar esta orden como completada?")
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if confirmed {
                mark_done.emit(order_id);
            }
        })
    };

    if *orders.loading {
        return html! { <div class="view-empty">{"Cargando asignaciones..."}</div> };
    }
    if orders.orders.is_empty() {
        return html! { <div class="view-empty">{"No hay envíos activos."}</div> };
    }

    html! {
        <>
            <div class="orders-grid">
                { for orders.orders.iter().map(|order| order_card(order, &on_contact, &confirm_done)) }
            </div>

            if let Some((name, phone)) = &*contact {
                <ContactModal
                    name={name.clone()}
                    phone={phone.clone()}
                    on_close={on_close_contact}
                />
            }
        </>
    }
}

fn order_card(
    order: &Order,
    on_contact: &Callback<(String, String)>,
    confirm_done: &Callback<String>,
) -> Html {
    let pkg = &order.package;

    let contact_sender = {
        let on_contact = on_contact.clone();
        let name = pkg.sender_name.clone();
        let phone = pkg.sender_phone.clone();
        Callback::from(move |_: MouseEvent| on_contact.emit((name.clone(), phone.clone())))
    };
    let contact_receiver = {
        let on_contact = on_contact.clone();
        let name = pkg.receiver_name.clone();
        let phone = pkg.receiver_phone.clone();
        Callback::from(move |_: MouseEvent| on_contact.emit((name.clone(), phone.clone())))
    };
    let on_done = {
        let confirm_done = confirm_done.clone();
        let order_id = order.id.clone();
        Callback::from(move |_: MouseEvent| confirm_done.emit(order_id.clone()))
    };

    html! {
        <div class="order-card" key={order.id.clone()}>
            <div class="order-field"><strong>{"Paquete: "}</strong>{&pkg.description}</div>

            <div class="order-field">
                <strong>{"De: "}</strong>{&pkg.sender_name}
                {" ("}
                <button class="phone-link" onclick={contact_sender}>{&pkg.sender_phone}</button>
                {")"}
                <br />
                {&pkg.sender_address}
            </div>

            <div class="order-field">
                <strong>{"Para: "}</strong>{&pkg.receiver_name}
                {" ("}
                <button class="phone-link" onclick={contact_receiver}>{&pkg.receiver_phone}</button>
                {")"}
                <br />
                {&pkg.receiver_address}
            </div>

            {
                if let Some((lat, lng)) = order.receiver_coords() {
                    html! {
                        <>
                            <OrderMiniMap lat={lat} lng={lng} />
                            <a
                                class="btn-navigate"
                                href={format!("https://www.google.com/maps/dir/?api=1&destination={},{}&travelmode=driving", lat, lng)}
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                {"🧭 Navegar con Google Maps"}
                            </a>
                        </>
                    }
                } else {
                    html! {
                        <div class="coords-unavailable">
                            {"Coordenadas de destino no disponibles o inválidas."}
                        </div>
                    }
                }
            }

            <button class="btn-primary" onclick={on_done}>{"Marcar como completada"}</button>
        </div>
    }
}
