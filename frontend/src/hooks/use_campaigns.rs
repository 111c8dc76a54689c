use shared::{CampaignCard, CampaignStatus};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::backend::HttpBackend;
use crate::services::logging::Logger;
use crate::workflows;

/// Campaign list held by the dashboard. This is the only quasi-durable
/// client-side state, and it is only ever mutated by full replacement.
#[derive(Clone, PartialEq)]
pub struct CampaignsState {
    pub campaigns: Vec<CampaignCard>,
    pub loading: bool,
    pub filter: Option<CampaignStatus>,
}

#[derive(Clone, PartialEq)]
pub struct UseCampaignsActions {
    /// Refetch the list from the actor, honoring the active filter.
    pub refresh: Callback<()>,
    /// Replace the list wholesale with one a workflow already fetched.
    pub replace: Callback<Vec<CampaignCard>>,
    pub set_filter: Callback<Option<CampaignStatus>>,
}

pub struct UseCampaignsResult {
    pub state: CampaignsState,
    pub actions: UseCampaignsActions,
}

#[hook]
pub fn use_campaigns(backend: &HttpBackend) -> UseCampaignsResult {
    let campaigns = use_state(Vec::<CampaignCard>::new);
    let loading = use_state(|| true);
    let filter = use_state(|| Option::<CampaignStatus>::None);

    let refresh = {
        let backend = backend.clone();
        let campaigns = campaigns.clone();
        let loading = loading.clone();

        use_callback(*filter, move |_: (), filter| {
            let backend = backend.clone();
            let campaigns = campaigns.clone();
            let loading = loading.clone();
            let filter = *filter;

            spawn_local(async move {
                loading.set(true);
                match workflows::refresh_campaigns(&backend, filter).await {
                    Ok(cards) => {
                        Logger::debug_with_component(
                            "use_campaigns",
                            &format!("loaded {} campaigns", cards.len()),
                        );
                        campaigns.set(cards);
                    }
                    Err(err) => {
                        Logger::error_with_component(
                            "use_campaigns",
                            &format!("Failed to refresh campaigns: {err}"),
                        );
                    }
                }
                loading.set(false);
            });
        })
    };

    let replace = {
        let campaigns = campaigns.clone();
        let loading = loading.clone();

        use_callback((), move |cards: Vec<CampaignCard>, _| {
            campaigns.set(cards);
            loading.set(false);
        })
    };

    let set_filter = {
        let backend = backend.clone();
        let campaigns = campaigns.clone();
        let loading = loading.clone();
        let filter = filter.clone();

        use_callback((), move |next: Option<CampaignStatus>, _| {
            filter.set(next);

            let backend = backend.clone();
            let campaigns = campaigns.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);
                match workflows::refresh_campaigns(&backend, next).await {
                    Ok(cards) => campaigns.set(cards),
                    Err(err) => {
                        Logger::error_with_component(
                            "use_campaigns",
                            &format!("Failed to refresh campaigns: {err}"),
                        );
                    }
                }
                loading.set(false);
            });
        })
    };

    // Initial load.
    use_effect_with((), {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    let state = CampaignsState {
        campaigns: (*campaigns).clone(),
        loading: *loading,
        filter: *filter,
    };

    UseCampaignsResult {
        state,
        actions: UseCampaignsActions {
            refresh,
            replace,
            set_filter,
        },
    }
}
