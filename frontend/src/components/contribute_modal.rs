use shared::{
    format_base_units, CampaignCard, CampaignStatus, ContributionForm, FieldErrors, Principal,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

use crate::services::backend::HttpBackend;
use crate::services::identity::AuthSession;
use crate::services::logging::Logger;
use crate::workflows;

#[derive(Properties, PartialEq)]
pub struct ContributeModalProps {
    pub campaign: CampaignCard,
    pub session: AuthSession,
    pub backend: HttpBackend,
    /// Custody identity the contribution is paid to.
    pub payee: Principal,
    pub active_filter: Option<CampaignStatus>,
    /// Fired with the freshly fetched campaign list after a confirmed
    /// contribution; the parent replaces its list and closes the dialog.
    pub on_success: Callback<Vec<CampaignCard>>,
    pub on_close: Callback<()>,
}

#[function_component(ContributeModal)]
pub fn contribute_modal(props: &ContributeModalProps) -> Html {
    let amount = use_state(String::new);
    let is_submitting = use_state(|| false);
    let field_errors = use_state(FieldErrors::new);
    let submit_error = use_state(|| Option::<String>::None);

    // Reset state when the target campaign changes.
    use_effect_with(props.campaign.id, {
        let amount = amount.clone();
        let is_submitting = is_submitting.clone();
        let field_errors = field_errors.clone();
        let submit_error = submit_error.clone();
        move |_| {
            amount.set(String::new());
            is_submitting.set(false);
            field_errors.set(FieldErrors::new());
            submit_error.set(None);
            || ()
        }
    });

    let on_amount_change = {
        let amount = amount.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
        })
    };

    let on_submit = {
        let amount = amount.clone();
        let is_submitting = is_submitting.clone();
        let field_errors = field_errors.clone();
        let submit_error = submit_error.clone();
        let backend = props.backend.clone();
        let session = props.session.clone();
        let payee = props.payee.clone();
        let campaign_id = props.campaign.id;
        let active_filter = props.active_filter;
        let on_success = props.on_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let form = ContributionForm {
                amount: (*amount).clone(),
            };

            // Validation failures never reach the network.
            let contribution = match form.validate() {
                Ok(contribution) => contribution,
                Err(errors) => {
                    field_errors.set(errors);
                    return;
                }
            };

            field_errors.set(FieldErrors::new());
            submit_error.set(None);
            is_submitting.set(true);

            let amount = amount.clone();
            let is_submitting = is_submitting.clone();
            let submit_error = submit_error.clone();
            let backend = backend.clone();
            let session = session.clone();
            let payee = payee.clone();
            let on_success = on_success.clone();

            spawn_local(async move {
                match workflows::contribution::submit_contribution(
                    &backend,
                    &session,
                    &payee,
                    campaign_id,
                    &contribution,
                    active_filter,
                )
                .await
                {
                    Ok(cards) => {
                        amount.set(String::new());
                        is_submitting.set(false);
                        on_success.emit(cards);
                    }
                    Err(err) => {
                        Logger::error_with_component(
                            "contribute_modal",
                            &format!("Contribution failed: {err}"),
                        );
                        submit_error.set(Some(format!("Contribution did not go through: {err}")));
                        is_submitting.set(false);
                    }
                }
            });
        })
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    let campaign = &props.campaign;

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal contribute-modal" onclick={on_modal_click}>
                <div class="modal-content">
                    <h3 class="modal-title">{format!("Back \"{}\"", campaign.title)}</h3>

                    <div class="campaign-summary">
                        <span>
                            {format!(
                                "{} raised of {}",
                                format_base_units(campaign.amount_raised),
                                format_base_units(campaign.goal),
                            )}
                        </span>
                        <span>
                            {if campaign.days_left < 0 {
                                "Ended".to_string()
                            } else {
                                format!("{} days left", campaign.days_left)
                            }}
                        </span>
                    </div>

                    {if let Some(error) = (*submit_error).clone() {
                        html! { <div class="form-message error">{error}</div> }
                    } else {
                        html! {}
                    }}

                    <form class="contribute-form" onsubmit={on_submit}>
                        <div class="form-group">
                            <label for="contribution-amount">{"Amount (tokens)"}</label>
                            <input
                                id="contribution-amount"
                                type="number"
                                step="0.00000001"
                                min="0"
                                placeholder="Up to 1000"
                                value={(*amount).clone()}
                                onchange={on_amount_change}
                                disabled={*is_submitting}
                                autofocus=true
                            />
                            {match field_errors.get("amount") {
                                Some(message) => html! {
                                    <div class="field-error">{message}</div>
                                },
                                None => html! {},
                            }}
                        </div>

                        <div class="modal-buttons">
                            <button
                                type="submit"
                                class="btn btn-primary"
                                disabled={*is_submitting}
                            >
                                {if *is_submitting { "Contributing..." } else { "Contribute" }}
                            </button>
                            <button
                                type="button"
                                class="btn btn-secondary"
                                onclick={on_cancel}
                                disabled={*is_submitting}
                            >
                                {"Cancel"}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
