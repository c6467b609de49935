use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ContactModalProps {
    pub name: String,
    pub phone: String,
    pub on_close: Callback<()>,
}

/// Solo dígitos para el enlace de WhatsApp
pub fn sanitize_phone(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[function_component(ContactModal)]
pub fn contact_modal(props: &ContactModalProps) -> Html {
    html! {
        <div class="modal active">
            <div class="modal-overlay" onclick={props.on_close.reform(|_| ())}></div>
            <div class="modal-content contact-modal" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <div class="modal-header">
                    <h2>{format!("Contactar a {}", props.name)}</h2>
                </div>
                <div class="contact-actions">
                    <a
                        class="contact-whatsapp"
                        href={format!("https://wa.me/{}", sanitize_phone(&props.phone))}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {"WhatsApp"}
                    </a>
                    <a class="contact-call" href={format!("tel:{}", props.phone)}>{"Llamar"}</a>
                    <a class="contact-sms" href={format!("sms:{}", props.phone)}>{"Mensaje"}</a>
                    <button class="btn-cancel" onclick={props.on_close.reform(|_| ())}>
                        {"Cancelar"}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn el_telefono_queda_solo_con_digitos() {
        assert_eq!(sanitize_phone("+62 812-3456-789"), "628123456789");
        assert_eq!(sanitize_phone("(031) 555 01 02"), "0315550102");
        assert_eq!(sanitize_phone("sin numero"), "");
    }
}
