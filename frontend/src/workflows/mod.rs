pub mod contribution;
pub mod creation;

use shared::{CampaignCard, CampaignStatus};

use crate::services::backend::{FundverseBackend, RpcError};

/// Wholesale refetch of the campaign list, optionally filtered by status.
///
/// Callers replace their copy with whatever comes back; nothing is merged
/// or patched client-side. The latest full fetch always wins over any
/// local derivation.
pub async fn refresh_campaigns<B>(
    backend: &B,
    filter: Option<CampaignStatus>,
) -> Result<Vec<CampaignCard>, RpcError>
where
    B: FundverseBackend + ?Sized,
{
    match filter {
        Some(status) => backend.get_campaign_cards_by_status(status).await,
        None => backend.get_campaign_cards().await,
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use async_trait::async_trait;
    use shared::{
        CampaignCard, CampaignStatus, ConfirmPaymentRequest, ContributeRequest, CreateIdeaRequest,
        RegisterUserRequest,
    };

    use crate::services::backend::{FundverseBackend, RpcError};

    /// In-memory actor that records every call in order and fails on demand.
    #[derive(Default)]
    pub struct MockBackend {
        pub calls: RefCell<Vec<&'static str>>,
        pub fail_register: bool,
        pub fail_contribute: bool,
        pub fail_confirm: bool,
        pub fail_create_idea: bool,
        pub cards: Vec<CampaignCard>,
        pub last_create_idea: RefCell<Option<CreateIdeaRequest>>,
        pub last_contribute: RefCell<Option<ContributeRequest>>,
    }

    impl MockBackend {
        pub fn with_cards(cards: Vec<CampaignCard>) -> Self {
            Self {
                cards,
                ..Default::default()
            }
        }

        pub fn call_count(&self, name: &str) -> usize {
            self.calls.borrow().iter().filter(|c| **c == name).count()
        }

        fn record(&self, name: &'static str) {
            self.calls.borrow_mut().push(name);
        }
    }

    pub fn sample_card(id: u64) -> CampaignCard {
        CampaignCard {
            id,
            idea_id: id,
            title: format!("Campaign {id}"),
            category: "Technology".to_string(),
            amount_raised: 50_000_000,
            goal: 1_250_000_000,
            end_date: 1_760_000_000,
            days_left: 7,
        }
    }

    #[async_trait(?Send)]
    impl FundverseBackend for MockBackend {
        async fn create_idea(&self, request: &CreateIdeaRequest) -> Result<u64, RpcError> {
            self.record("create_idea");
            *self.last_create_idea.borrow_mut() = Some(request.clone());
            if self.fail_create_idea {
                return Err(RpcError::Rejected("create_idea refused".to_string()));
            }
            Ok(42)
        }

        async fn get_campaign_cards(&self) -> Result<Vec<CampaignCard>, RpcError> {
            self.record("get_campaign_cards");
            Ok(self.cards.clone())
        }

        async fn get_campaign_cards_by_status(
            &self,
            _status: CampaignStatus,
        ) -> Result<Vec<CampaignCard>, RpcError> {
            self.record("get_campaign_cards_by_status");
            Ok(self.cards.clone())
        }

        async fn register_user(&self, _request: &RegisterUserRequest) -> Result<(), RpcError> {
            self.record("register_user");
            if self.fail_register {
                return Err(RpcError::Rejected("user already registered".to_string()));
            }
            Ok(())
        }

        async fn contribute(&self, request: &ContributeRequest) -> Result<u64, RpcError> {
            self.record("contribute");
            *self.last_contribute.borrow_mut() = Some(request.clone());
            if self.fail_contribute {
                return Err(RpcError::Rejected("contribution refused".to_string()));
            }
            Ok(900)
        }

        async fn confirm_payment(&self, _request: &ConfirmPaymentRequest) -> Result<(), RpcError> {
            self.record("confirm_payment");
            if self.fail_confirm {
                return Err(RpcError::Rejected("confirmation refused".to_string()));
            }
            Ok(())
        }
    }
}
