// ============================================================================
// USE MY ORDERS HOOK - Órdenes del conductor (activas o completadas)
// ============================================================================

use yew::prelude::*;

use crate::models::{orders_for_driver, Order, OrderStatus};
use crate::services::api_client::ApiClient;

/// Eliminación optimista: la orden completada desaparece de la lista sin
/// refetch completo.
pub fn without_order(orders: &[Order], order_id: &str) -> Vec<Order> {
    orders
        .iter()
        .filter(|order| order.id != order_id)
        .cloned()
        .collect()
}

#[derive(Clone, PartialEq)]
pub struct MyOrdersHandle {
    pub orders: UseStateHandle<Vec<Order>>,
    pub loading: UseStateHandle<bool>,
    pub mark_done: Callback<String>,
}

#[hook]
pub fn use_my_orders(driver_id: Option<String>, status: OrderStatus) -> MyOrdersHandle {
    let orders = use_state(Vec::new);
    let loading = use_state(|| true);

    {
        let orders = orders.clone();
        let loading = loading.clone();
        let driver_id = driver_id.clone();

        use_effect_with((), move |_| {
            if let Some(driver_id) = driver_id {
                wasm_bindgen_futures::spawn_local(async move {
                    match ApiClient::new().get_orders().await {
                        Ok(all) => {
                            let mine = orders_for_driver(&all, &driver_id, status);
                            log::info!("📋 Órdenes {:?} del conductor: {}", status, mine.len());
                            orders.set(mine);
                        }
                        Err(e) => log::error!("❌ Error obteniendo órdenes: {}", e),
                    }
                    loading.set(false);
                });
            } else {
                // Sin sesión no se pide nada al backend
                loading.set(false);
            }
            || ()
        });
    }

    let mark_done = {
        let orders = orders.clone();
        Callback::from(move |order_id: String| {
            let Some(driver_id) = driver_id.clone() else {
                return;
            };
            let orders = orders.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new()
                    .update_order(&order_id, &driver_id, OrderStatus::Done)
                    .await
                {
                    Ok(_) => {
                        log::info!("✅ Orden {} completada", order_id);
                        orders.set(without_order(&orders, &order_id));
                    }
                    Err(e) => log::error!("❌ Error completando orden {}: {}", order_id, e),
                }
            });
        })
    };

    MyOrdersHandle {
        orders,
        loading,
        mark_done,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn la_orden_marcada_sale_de_la_lista() {
        let orders: Vec<Order> = serde_json::from_value(json!([
            { "id": "o1", "status": "shipping", "driverId": "d1" },
            { "id": "o2", "status": "shipping", "driverId": "d1" }
        ]))
        .unwrap();

        let remaining = without_order(&orders, "o1");
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, "o2");

        // Un id inexistente deja la lista intacta
        assert_eq!(without_order(&orders, "o9").len(), 2);
    }
}
