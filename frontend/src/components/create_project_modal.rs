use shared::{CampaignCard, CampaignStatus, Category, FieldErrors, ProjectForm};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, MouseEvent};
use yew::prelude::*;

use crate::services::backend::HttpBackend;
use crate::services::logging::Logger;
use crate::workflows;

#[derive(Properties, PartialEq)]
pub struct CreateProjectModalProps {
    pub is_open: bool,
    pub backend: HttpBackend,
    pub active_filter: Option<CampaignStatus>,
    /// Fired with the freshly fetched campaign list after a successful
    /// creation; the parent replaces its list and closes the dialog.
    pub on_success: Callback<Vec<CampaignCard>>,
    pub on_close: Callback<()>,
}

fn field_error(errors: &FieldErrors, field: &str) -> Html {
    match errors.get(field) {
        Some(message) => html! { <div class="field-error">{message}</div> },
        None => html! {},
    }
}

#[function_component(CreateProjectModal)]
pub fn create_project_modal(props: &CreateProjectModalProps) -> Html {
    let title = use_state(String::new);
    let description = use_state(String::new);
    let funding_goal = use_state(String::new);
    let legal_entity = use_state(String::new);
    let contact_info = use_state(String::new);
    let category = use_state(String::new);
    let business_registration = use_state(String::new);
    let is_submitting = use_state(|| false);
    let field_errors = use_state(FieldErrors::new);
    let submit_error = use_state(|| Option::<String>::None);

    // Reset state when the modal opens.
    use_effect_with(props.is_open, {
        let title = title.clone();
        let description = description.clone();
        let funding_goal = funding_goal.clone();
        let legal_entity = legal_entity.clone();
        let contact_info = contact_info.clone();
        let category = category.clone();
        let business_registration = business_registration.clone();
        let is_submitting = is_submitting.clone();
        let field_errors = field_errors.clone();
        let submit_error = submit_error.clone();
        move |is_open| {
            if *is_open {
                title.set(String::new());
                description.set(String::new());
                funding_goal.set(String::new());
                legal_entity.set(String::new());
                contact_info.set(String::new());
                category.set(String::new());
                business_registration.set(String::new());
                is_submitting.set(false);
                field_errors.set(FieldErrors::new());
                submit_error.set(None);
            }
            || ()
        }
    });

    let on_title_change = {
        let title = title.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            title.set(input.value());
        })
    };

    let on_description_change = {
        let description = description.clone();
        Callback::from(move |e: Event| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            description.set(input.value());
        })
    };

    let on_funding_goal_change = {
        let funding_goal = funding_goal.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            funding_goal.set(input.value());
        })
    };

    let on_legal_entity_change = {
        let legal_entity = legal_entity.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            legal_entity.set(input.value());
        })
    };

    let on_contact_info_change = {
        let contact_info = contact_info.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            contact_info.set(input.value());
        })
    };

    let on_category_change = {
        let category = category.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            category.set(select.value());
        })
    };

    let on_business_registration_change = {
        let business_registration = business_registration.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            business_registration.set(input.value());
        })
    };

    let on_submit = {
        let title = title.clone();
        let description = description.clone();
        let funding_goal = funding_goal.clone();
        let legal_entity = legal_entity.clone();
        let contact_info = contact_info.clone();
        let category = category.clone();
        let business_registration = business_registration.clone();
        let is_submitting = is_submitting.clone();
        let field_errors = field_errors.clone();
        let submit_error = submit_error.clone();
        let backend = props.backend.clone();
        let active_filter = props.active_filter;
        let on_success = props.on_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let form = ProjectForm {
                title: (*title).clone(),
                description: (*description).clone(),
                funding_goal: (*funding_goal).clone(),
                legal_entity: (*legal_entity).clone(),
                contact_info: (*contact_info).clone(),
                category: (*category).clone(),
                business_registration: (*business_registration).clone(),
            };

            // Validation failures never reach the network.
            let project = match form.validate() {
                Ok(project) => project,
                Err(errors) => {
                    field_errors.set(errors);
                    return;
                }
            };

            field_errors.set(FieldErrors::new());
            submit_error.set(None);
            is_submitting.set(true);

            let title = title.clone();
            let description = description.clone();
            let funding_goal = funding_goal.clone();
            let legal_entity = legal_entity.clone();
            let contact_info = contact_info.clone();
            let category = category.clone();
            let business_registration = business_registration.clone();
            let is_submitting = is_submitting.clone();
            let submit_error = submit_error.clone();
            let backend = backend.clone();
            let on_success = on_success.clone();

            spawn_local(async move {
                match workflows::creation::submit_project(&backend, &project, active_filter).await
                {
                    Ok(cards) => {
                        title.set(String::new());
                        description.set(String::new());
                        funding_goal.set(String::new());
                        legal_entity.set(String::new());
                        contact_info.set(String::new());
                        category.set(String::new());
                        business_registration.set(String::new());
                        is_submitting.set(false);
                        on_success.emit(cards);
                    }
                    Err(err) => {
                        Logger::error_with_component(
                            "create_project_modal",
                            &format!("Project creation failed: {err}"),
                        );
                        submit_error.set(Some(format!("Could not create the project: {err}")));
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

    if !props.is_open {
        return html! {};
    }

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal create-project-modal" onclick={on_modal_click}>
                <div class="modal-content">
                    <h3 class="modal-title">{"Create a Project"}</h3>

                    {if let Some(error) = (*submit_error).clone() {
                        html! { <div class="form-message error">{error}</div> }
                    } else {
                        html! {}
                    }}

                    <form class="create-project-form" onsubmit={on_submit}>
                        <div class="form-group">
                            <label for="project-title">{"Title"}</label>
                            <input
                                id="project-title"
                                type="text"
                                placeholder="What are you building?"
                                value={(*title).clone()}
                                onchange={on_title_change}
                                disabled={*is_submitting}
                                autofocus=true
                            />
                            {field_error(&field_errors, "title")}
                        </div>

                        <div class="form-group">
                            <label for="project-description">{"Description"}</label>
                            <textarea
                                id="project-description"
                                rows="4"
                                placeholder="Tell backers about the project (10-500 characters)"
                                value={(*description).clone()}
                                onchange={on_description_change}
                                disabled={*is_submitting}
                            />
                            {field_error(&field_errors, "description")}
                        </div>

                        <div class="form-group">
                            <label for="project-funding-goal">{"Funding goal (tokens)"}</label>
                            <input
                                id="project-funding-goal"
                                type="number"
                                step="0.00000001"
                                min="0"
                                placeholder="100.0"
                                value={(*funding_goal).clone()}
                                onchange={on_funding_goal_change}
                                disabled={*is_submitting}
                            />
                            {field_error(&field_errors, "funding_goal")}
                        </div>

                        <div class="form-group">
                            <label for="project-legal-entity">{"Legal entity"}</label>
                            <input
                                id="project-legal-entity"
                                type="text"
                                placeholder="Registered company name"
                                value={(*legal_entity).clone()}
                                onchange={on_legal_entity_change}
                                disabled={*is_submitting}
                            />
                            {field_error(&field_errors, "legal_entity")}
                        </div>

                        <div class="form-group">
                            <label for="project-contact-info">{"Contact email"}</label>
                            <input
                                id="project-contact-info"
                                type="email"
                                placeholder="you@company.example"
                                value={(*contact_info).clone()}
                                onchange={on_contact_info_change}
                                disabled={*is_submitting}
                            />
                            {field_error(&field_errors, "contact_info")}
                        </div>

                        <div class="form-group">
                            <label for="project-category">{"Category"}</label>
                            <select
                                id="project-category"
                                onchange={on_category_change}
                                disabled={*is_submitting}
                            >
                                <option value="" selected={category.is_empty()}>
                                    {"Select a category"}
                                </option>
                                {for Category::ALL.iter().map(|c| html! {
                                    <option
                                        value={c.name()}
                                        selected={*category == c.name()}
                                    >
                                        {c.name()}
                                    </option>
                                })}
                            </select>
                            {field_error(&field_errors, "category")}
                        </div>

                        <div class="form-group">
                            <label for="project-business-registration">
                                {"Business registration number"}
                            </label>
                            <input
                                id="project-business-registration"
                                type="number"
                                min="0"
                                placeholder="0"
                                value={(*business_registration).clone()}
                                onchange={on_business_registration_change}
                                disabled={*is_submitting}
                            />
                            {field_error(&field_errors, "business_registration")}
                        </div>

                        <div class="modal-buttons">
                            <button
                                type="submit"
                                class="btn btn-primary"
                                disabled={*is_submitting}
                            >
                                {if *is_submitting { "Creating..." } else { "Create Project" }}
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
