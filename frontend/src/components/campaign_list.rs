use shared::{CampaignCard, CampaignStatus};
use web_sys::MouseEvent;
use yew::prelude::*;

use super::campaign_card::CampaignCardView;

#[derive(Properties, PartialEq)]
pub struct CampaignListProps {
    pub campaigns: Vec<CampaignCard>,
    pub loading: bool,
    pub filter: Option<CampaignStatus>,
    pub can_contribute: bool,
    pub on_filter_change: Callback<Option<CampaignStatus>>,
    pub on_refresh: Callback<()>,
    pub on_contribute: Callback<CampaignCard>,
}

#[function_component(CampaignList)]
pub fn campaign_list(props: &CampaignListProps) -> Html {
    let filter_button = |label: &'static str, value: Option<CampaignStatus>| {
        let on_filter_change = props.on_filter_change.clone();
        let class = if props.filter == value {
            "filter-btn active"
        } else {
            "filter-btn"
        };
        let onclick = Callback::from(move |_: MouseEvent| on_filter_change.emit(value));
        html! { <button class={class} onclick={onclick}>{label}</button> }
    };

    html! {
        <section class="campaigns-section">
            <div class="campaigns-header">
                <h2>{"Campaigns"}</h2>
                <div class="campaign-filters">
                    {filter_button("All", None)}
                    {filter_button("Active", Some(CampaignStatus::Active))}
                    {filter_button("Ended", Some(CampaignStatus::Ended))}
                    <button
                        class="filter-btn refresh-btn"
                        onclick={{
                            let on_refresh = props.on_refresh.clone();
                            Callback::from(move |_: MouseEvent| on_refresh.emit(()))
                        }}
                        disabled={props.loading}
                    >
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {if props.loading {
                html! { <div class="loading">{"Loading campaigns..."}</div> }
            } else if props.campaigns.is_empty() {
                html! {
                    <div class="empty-state">
                        {"No campaigns yet. Create the first project!"}
                    </div>
                }
            } else {
                html! {
                    <div class="campaign-grid">
                        {for props.campaigns.iter().map(|campaign| html! {
                            <CampaignCardView
                                key={campaign.id}
                                campaign={campaign.clone()}
                                can_contribute={props.can_contribute}
                                on_contribute={props.on_contribute.clone()}
                            />
                        })}
                    </div>
                }
            }}
        </section>
    }
}
