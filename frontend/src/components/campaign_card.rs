use chrono::DateTime;
use shared::{format_base_units, CampaignCard};
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CampaignCardViewProps {
    pub campaign: CampaignCard,
    pub can_contribute: bool,
    pub on_contribute: Callback<CampaignCard>,
}

/// One dashboard card. Amounts arrive in base units and are converted for
/// display only; the raw integers are never touched client-side.
#[function_component(CampaignCardView)]
pub fn campaign_card_view(props: &CampaignCardViewProps) -> Html {
    let campaign = &props.campaign;

    let progress_percent = if campaign.goal == 0 {
        0
    } else {
        (campaign.amount_raised.saturating_mul(100) / campaign.goal).min(100)
    };

    let end_date = DateTime::from_timestamp(campaign.end_date as i64, 0)
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let days_left = if campaign.days_left < 0 {
        "Ended".to_string()
    } else if campaign.days_left == 1 {
        "1 day left".to_string()
    } else {
        format!("{} days left", campaign.days_left)
    };

    let on_contribute = {
        let on_contribute = props.on_contribute.clone();
        let campaign = campaign.clone();
        Callback::from(move |_: MouseEvent| on_contribute.emit(campaign.clone()))
    };

    html! {
        <div class="campaign-card">
            <div class="campaign-card-top">
                <span class="category-badge">{&campaign.category}</span>
                <span class="days-left">{days_left}</span>
            </div>
            <h3 class="campaign-title">{&campaign.title}</h3>
            <div class="progress-bar">
                <div class="progress-fill" style={format!("width: {}%", progress_percent)}></div>
            </div>
            <div class="campaign-amounts">
                <span class="amount-raised">{format_base_units(campaign.amount_raised)}</span>
                <span class="amount-goal">
                    {format!(" raised of {}", format_base_units(campaign.goal))}
                </span>
            </div>
            <div class="campaign-footer">
                <span class="end-date">{format!("Ends {}", end_date)}</span>
                <button
                    class="btn btn-primary contribute-btn"
                    onclick={on_contribute}
                    disabled={!props.can_contribute || campaign.days_left < 0}
                    title={if props.can_contribute { "" } else { "Log in to contribute" }}
                >
                    {"Contribute"}
                </button>
            </div>
        </div>
    }
}
