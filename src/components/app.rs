use yew::prelude::*;

use super::{AssignmentsView, HistoryView, LoginScreen, MapView, Sidebar};
use crate::hooks::{use_session_provider, SessionHandle};

/// Vistas principales. Sin router: el guard de sesión y el selector de
/// vista viven en el estado del componente raíz.
#[derive(Clone, Copy, PartialEq)]
pub enum ActiveView {
    Map,
    Assignments,
    History,
}

#[function_component(App)]
pub fn app() -> Html {
    let session = use_session_provider();
    let active_view = use_state(|| ActiveView::Map);

    // Guard de navegación: sin sesión válida solo existe el login y no se
    // emite ninguna petición con identidad de conductor
    if session.session.is_none() {
        return html! {
            <ContextProvider<SessionHandle> context={session.clone()}>
                <LoginScreen />
            </ContextProvider<SessionHandle>>
        };
    }

    let on_navigate = {
        let active_view = active_view.clone();
        Callback::from(move |view: ActiveView| active_view.set(view))
    };

    let view = match *active_view {
        ActiveView::Map => html! { <MapView /> },
        ActiveView::Assignments => html! { <AssignmentsView /> },
        ActiveView::History => html! { <HistoryView /> },
    };

    html! {
        <ContextProvider<SessionHandle> context={session.clone()}>
            <div class="app-layout">
                <Sidebar active={*active_view} {on_navigate} />
                <main class="app-main">{view}</main>
            </div>
        </ContextProvider<SessionHandle>>
    }
}
