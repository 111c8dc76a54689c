mod components;
mod hooks;
mod services;
mod workflows;

use shared::CampaignCard;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use components::campaign_list::CampaignList;
use components::contribute_modal::ContributeModal;
use components::create_project_modal::CreateProjectModal;
use components::header::Header;
use hooks::use_campaigns::use_campaigns;
use services::backend::HttpBackend;
use services::config::AppConfig;
use services::identity::{AuthSession, IdentityClient};
use services::logging::Logger;

#[function_component(App)]
fn app() -> Html {
    let config = AppConfig::default();
    let backend = HttpBackend::new(&config);
    let identity = IdentityClient::new(&config);

    let session = use_state(|| Option::<AuthSession>::None);
    let session_loading = use_state(|| true);
    let show_create_modal = use_state(|| false);
    let contribute_target = use_state(|| Option::<CampaignCard>::None);

    let campaigns = use_campaigns(&backend);

    // Probe the identity provider once at startup.
    use_effect_with((), {
        let identity = identity.clone();
        let session = session.clone();
        let session_loading = session_loading.clone();
        move |_| {
            spawn_local(async move {
                match identity.current_session().await {
                    Ok(existing) => session.set(existing),
                    Err(err) => {
                        Logger::warn_with_component("app", &format!("No session: {err}"));
                    }
                }
                session_loading.set(false);
            });
            || ()
        }
    });

    let on_login = {
        let identity = identity.clone();
        let session = session.clone();
        let session_loading = session_loading.clone();
        Callback::from(move |_| {
            let identity = identity.clone();
            let session = session.clone();
            let session_loading = session_loading.clone();
            spawn_local(async move {
                session_loading.set(true);
                match identity.login().await {
                    Ok(authenticated) => session.set(Some(authenticated)),
                    Err(err) => {
                        Logger::error_with_component("app", &format!("Login failed: {err}"));
                    }
                }
                session_loading.set(false);
            });
        })
    };

    let on_logout = {
        let identity = identity.clone();
        let session = session.clone();
        Callback::from(move |_| {
            let identity = identity.clone();
            let session = session.clone();
            spawn_local(async move {
                if let Err(err) = identity.logout().await {
                    Logger::warn_with_component("app", &format!("Logout failed: {err}"));
                }
                // The local session is dropped either way; the provider is
                // the authority on the server side.
                session.set(None);
            });
        })
    };

    let on_new_project = {
        let show_create_modal = show_create_modal.clone();
        Callback::from(move |_| show_create_modal.set(true))
    };

    let on_contribute = {
        let contribute_target = contribute_target.clone();
        Callback::from(move |campaign: CampaignCard| contribute_target.set(Some(campaign)))
    };

    let on_project_created = {
        let replace = campaigns.actions.replace.clone();
        let show_create_modal = show_create_modal.clone();
        Callback::from(move |cards: Vec<CampaignCard>| {
            replace.emit(cards);
            show_create_modal.set(false);
        })
    };

    let on_contributed = {
        let replace = campaigns.actions.replace.clone();
        let contribute_target = contribute_target.clone();
        Callback::from(move |cards: Vec<CampaignCard>| {
            replace.emit(cards);
            contribute_target.set(None);
        })
    };

    let on_close_create = {
        let show_create_modal = show_create_modal.clone();
        Callback::from(move |_| show_create_modal.set(false))
    };

    let on_close_contribute = {
        let contribute_target = contribute_target.clone();
        Callback::from(move |_| contribute_target.set(None))
    };

    html! {
        <>
            <Header
                session={(*session).clone()}
                session_loading={*session_loading}
                on_login={on_login}
                on_logout={on_logout}
                on_new_project={on_new_project}
            />

            <main class="main">
                <div class="container">
                    <CampaignList
                        campaigns={campaigns.state.campaigns.clone()}
                        loading={campaigns.state.loading}
                        filter={campaigns.state.filter}
                        can_contribute={session.is_some()}
                        on_filter_change={campaigns.actions.set_filter.clone()}
                        on_refresh={campaigns.actions.refresh.clone()}
                        on_contribute={on_contribute}
                    />
                </div>
            </main>

            <CreateProjectModal
                is_open={*show_create_modal}
                backend={backend.clone()}
                active_filter={campaigns.state.filter}
                on_success={on_project_created}
                on_close={on_close_create}
            />

            {if let (Some(campaign), Some(authenticated)) =
                ((*contribute_target).clone(), (*session).clone())
            {
                html! {
                    <ContributeModal
                        campaign={campaign}
                        session={authenticated}
                        backend={backend.clone()}
                        payee={config.custody_principal.clone()}
                        active_filter={campaigns.state.filter}
                        on_success={on_contributed}
                        on_close={on_close_contribute}
                    />
                }
            } else {
                html! {}
            }}
        </>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
