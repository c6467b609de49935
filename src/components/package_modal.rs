// ============================================================================
// PACKAGE MODAL COMPONENT
// ============================================================================
// Overlay de detalle al tocar un marcador: identidad, estado, descripción,
// ambas direcciones y el control de reclamo.
// ============================================================================

use yew::prelude::*;

use crate::models::{Package, PackageStatus};

#[derive(Properties, PartialEq)]
pub struct PackageModalProps {
    pub package: Package,
    pub claiming: bool,
    pub on_claim: Callback<Package>,
    pub on_close: Callback<()>,
}

pub struct PackageModal;

pub enum Msg {
    Close,
    Claim,
}

impl Component for PackageModal {
    type Message = Msg;
    type Properties = PackageModalProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Close => {
                ctx.props().on_close.emit(());
                false
            }
            Msg::Claim => {
                ctx.props().on_claim.emit(ctx.props().package.clone());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let package = &ctx.props().package;
        let claim_disabled = ctx.props().claiming || package.status != PackageStatus::Pending;

        html! {
            <div class="modal active">
                <div class="modal-overlay" onclick={ctx.link().callback(|_| Msg::Close)}></div>
                <div class="modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                    <div class="modal-header">
                        <h2>{format!("Paquete {}", package.id)}</h2>
                        <button class="btn-close" onclick={ctx.link().callback(|_| Msg::Close)}>
                            {"✕"}
                        </button>
                    </div>

                    <div class="modal-body">
                        <div class="detail-section">
                            <div class="detail-label">{"Estado"}</div>
                            <div class="detail-value">
                                <span class={format!("status {}", package.status.as_str())}>
                                    {package.status.as_str()}
                                </span>
                            </div>
                        </div>

                        <div class="detail-section">
                            <div class="detail-label">{"Descripción"}</div>
                            <div class="detail-value">{&package.description}</div>
                        </div>

                        <div class="detail-section">
                            <div class="detail-label">{"Dirección de origen"}</div>
                            <div class="detail-value">
                                {package.sender_address.clone().unwrap_or_else(|| "No disponible".to_string())}
                            </div>
                        </div>

                        <div class="detail-section">
                            <div class="detail-label">{"Dirección de destino"}</div>
                            <div class="detail-value">
                                {package.receiver_address.clone().unwrap_or_else(|| "No disponible".to_string())}
                            </div>
                        </div>
                    </div>

                    <div class="modal-footer">
                        <button class="btn-secondary" onclick={ctx.link().callback(|_| Msg::Close)}>
                            {"Cerrar"}
                        </button>
                        <button
                            class="btn-primary"
                            disabled={claim_disabled}
                            onclick={ctx.link().callback(|_| Msg::Claim)}
                        >
                            { if ctx.props().claiming { "⏳ Reclamando..." } else { "🚚 Reclamar paquete" } }
                        </button>
                    </div>
                </div>
            </div>
        }
    }
}
