use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::identity::AuthSession;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub session: Option<AuthSession>,
    pub session_loading: bool,
    pub on_login: Callback<()>,
    pub on_logout: Callback<()>,
    pub on_new_project: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_login = {
        let on_login = props.on_login.clone();
        Callback::from(move |_: MouseEvent| on_login.emit(()))
    };

    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    let on_new_project = {
        let on_new_project = props.on_new_project.clone();
        Callback::from(move |_: MouseEvent| on_new_project.emit(()))
    };

    html! {
        <header class="header">
            <div class="container">
                <h1>{"FundVerse"}</h1>
                <div class="header-right">
                    <button class="btn btn-primary" onclick={on_new_project}>
                        {"+ New Project"}
                    </button>
                    {if props.session_loading {
                        html! { <span class="session-status">{"Checking session..."}</span> }
                    } else if let Some(session) = props.session.as_ref() {
                        html! {
                            <div class="session-info">
                                <span class="session-name">{&session.display_name}</span>
                                <button class="btn btn-secondary" onclick={on_logout}>
                                    {"Log out"}
                                </button>
                            </div>
                        }
                    } else {
                        html! {
                            <button class="btn btn-secondary" onclick={on_login}>
                                {"Log in"}
                            </button>
                        }
                    }}
                </div>
            </div>
        </header>
    }
}
