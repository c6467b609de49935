use yew::prelude::*;

use super::app::ActiveView;
use crate::hooks::use_session;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub active: ActiveView,
    pub on_navigate: Callback<ActiveView>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let session = use_session();

    let (name, email, avatar) = match &session.session {
        Some(s) => (
            s.user.name.clone(),
            s.user.email.clone(),
            s.user.avatar.clone(),
        ),
        None => ("Invitado".to_string(), "Sin sesión".to_string(), None),
    };
    let initial = name.chars().next().unwrap_or('U').to_string();

    let nav_item = |view: ActiveView, icon: &'static str, label: &'static str| {
        let on_navigate = props.on_navigate.clone();
        let class = if props.active == view {
            "sidebar-item active"
        } else {
            "sidebar-item"
        };
        let onclick = Callback::from(move |_: MouseEvent| on_navigate.emit(view));
        html! {
            <button {class} {onclick}>
                <span>{icon}</span>
                <span>{label}</span>
            </button>
        }
    };

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| session.logout())
    };

    html! {
        <aside class="sidebar">
            <div class="sidebar-profile">
                <div class="sidebar-avatar">
                    {
                        if let Some(url) = avatar {
                            html! { <img src={url} alt="avatar" /> }
                        } else {
                            html! { <span>{initial}</span> }
                        }
                    }
                </div>
                <div>
                    <div class="sidebar-profile-name">{name}</div>
                    <div class="sidebar-profile-email">{email}</div>
                </div>
            </div>

            <nav class="sidebar-nav">
                { nav_item(ActiveView::Map, "🗺️", "Mapa") }
                { nav_item(ActiveView::Assignments, "📦", "Asignaciones") }
                { nav_item(ActiveView::History, "🗓️", "Historial") }
            </nav>

            <button class="btn-logout" onclick={on_logout}>{"Cerrar sesión"}</button>
        </aside>
    }
}
