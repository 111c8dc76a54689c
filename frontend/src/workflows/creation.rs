use shared::{
    to_base_units, CampaignCard, CampaignStatus, CreateIdeaRequest, ProjectCreationRequest,
};

use crate::services::backend::{FundverseBackend, RpcError};
use crate::services::logging::Logger;

const COMPONENT: &str = "creation";

/// Submit a validated project, then refetch the campaign list.
///
/// The funding goal is converted to base units here, immediately before
/// transmission; no decimal amount ever goes over the wire. On success the
/// fresh list is handed back so the caller can replace its copy. On failure
/// no refetch happens and the dialog stays open for a retry.
pub async fn submit_project<B>(
    backend: &B,
    project: &ProjectCreationRequest,
    filter: Option<CampaignStatus>,
) -> Result<Vec<CampaignCard>, RpcError>
where
    B: FundverseBackend + ?Sized,
{
    let funding_goal = to_base_units(&project.funding_goal)
        .map_err(|err| RpcError::Encode(format!("funding goal: {err}")))?;

    let request = CreateIdeaRequest {
        title: project.title.clone(),
        description: project.description.clone(),
        funding_goal,
        legal_entity: project.legal_entity.clone(),
        contact_info: project.contact_info.clone(),
        category: project.category,
        business_registration: project.business_registration,
    };

    let idea_id = backend.create_idea(&request).await?;
    Logger::info_with_component(COMPONENT, &format!("created idea {idea_id}"));

    super::refresh_campaigns(backend, filter).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::testing::{sample_card, MockBackend};
    use futures::executor::block_on;
    use shared::Category;

    fn sample_project() -> ProjectCreationRequest {
        ProjectCreationRequest {
            title: "Eco-Friendly Water Bottles".to_string(),
            description: "Reusable bottles made from recycled materials".to_string(),
            funding_goal: "12.5".to_string(),
            legal_entity: "EcoCorp LLC".to_string(),
            contact_info: "contact@ecocorp.example".to_string(),
            category: Category::Environment,
            business_registration: 1,
        }
    }

    #[test]
    fn converts_funding_goal_to_base_units() {
        let backend = MockBackend::default();

        block_on(submit_project(&backend, &sample_project(), None)).unwrap();

        let sent = backend.last_create_idea.borrow().clone().unwrap();
        assert_eq!(sent.funding_goal, 1_250_000_000);
        assert_eq!(sent.category, Category::Environment);
    }

    #[test]
    fn successful_creation_refreshes_exactly_once_with_the_full_list() {
        let backend = MockBackend::with_cards(vec![sample_card(1), sample_card(2)]);

        let cards = block_on(submit_project(&backend, &sample_project(), None)).unwrap();

        assert_eq!(backend.call_count("get_campaign_cards"), 1);
        // The result is the backend's list as-is, not an append onto
        // anything held locally.
        assert_eq!(cards, backend.cards);
    }

    #[test]
    fn failed_creation_skips_the_refresh() {
        let backend = MockBackend {
            fail_create_idea: true,
            ..Default::default()
        };

        let result = block_on(submit_project(&backend, &sample_project(), None));

        assert!(result.is_err());
        assert_eq!(backend.call_count("get_campaign_cards"), 0);
        assert_eq!(backend.call_count("get_campaign_cards_by_status"), 0);
    }

    #[test]
    fn refresh_honors_the_active_status_filter() {
        let backend = MockBackend::with_cards(vec![sample_card(3)]);

        block_on(submit_project(
            &backend,
            &sample_project(),
            Some(CampaignStatus::Ended),
        ))
        .unwrap();

        assert_eq!(backend.call_count("get_campaign_cards_by_status"), 1);
        assert_eq!(backend.call_count("get_campaign_cards"), 0);
    }
}
