use async_trait::async_trait;
use gloo::net::http::Request;
use shared::{
    CampaignCard, CampaignStatus, ConfirmPaymentRequest, ContributeRequest, ContributeResponse,
    CreateIdeaRequest, CreateIdeaResponse, RegisterUserRequest,
};
use thiserror::Error;

use crate::services::config::AppConfig;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RpcError {
    #[error("network error: {0}")]
    Network(String),
    #[error("failed to encode request: {0}")]
    Encode(String),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("call rejected by backend: {0}")]
    Rejected(String),
}

/// Narrow capability set over the external FundVerse actor.
///
/// Workflows and components depend on this contract instead of an
/// open-ended connection handle, so tests can substitute an in-memory
/// actor and nothing outside this module knows about the transport.
#[async_trait(?Send)]
pub trait FundverseBackend {
    /// Submit a new project idea; returns the new idea id.
    async fn create_idea(&self, request: &CreateIdeaRequest) -> Result<u64, RpcError>;

    /// Fetch every campaign card.
    async fn get_campaign_cards(&self) -> Result<Vec<CampaignCard>, RpcError>;

    /// Fetch campaign cards filtered to active or ended campaigns.
    async fn get_campaign_cards_by_status(
        &self,
        status: CampaignStatus,
    ) -> Result<Vec<CampaignCard>, RpcError>;

    /// Register the acting user. Fails harmlessly if already registered.
    async fn register_user(&self, request: &RegisterUserRequest) -> Result<(), RpcError>;

    /// Record a contribution; returns the contribution id to confirm.
    async fn contribute(&self, request: &ContributeRequest) -> Result<u64, RpcError>;

    /// Confirm a previously recorded contribution.
    async fn confirm_payment(&self, request: &ConfirmPaymentRequest) -> Result<(), RpcError>;
}

/// HTTP gateway client for the FundVerse actor.
#[derive(Clone, PartialEq)]
pub struct HttpBackend {
    base_url: String,
}

impl HttpBackend {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
        }
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }
}

fn status_query(status: CampaignStatus) -> &'static str {
    match status {
        CampaignStatus::Active => "active",
        CampaignStatus::Ended => "ended",
    }
}

#[async_trait(?Send)]
impl FundverseBackend for HttpBackend {
    async fn create_idea(&self, request: &CreateIdeaRequest) -> Result<u64, RpcError> {
        let url = format!("{}/api/ideas", self.base_url);

        match Request::post(&url)
            .json(request)
            .map_err(|e| RpcError::Encode(e.to_string()))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<CreateIdeaResponse>().await {
                        Ok(data) => Ok(data.idea_id),
                        Err(e) => Err(RpcError::Decode(e.to_string())),
                    }
                } else {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(RpcError::Rejected(error_text))
                }
            }
            Err(e) => Err(RpcError::Network(e.to_string())),
        }
    }

    async fn get_campaign_cards(&self) -> Result<Vec<CampaignCard>, RpcError> {
        let url = format!("{}/api/campaigns/cards", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    match response.json::<Vec<CampaignCard>>().await {
                        Ok(cards) => Ok(cards),
                        Err(e) => Err(RpcError::Decode(e.to_string())),
                    }
                } else {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(RpcError::Rejected(error_text))
                }
            }
            Err(e) => Err(RpcError::Network(e.to_string())),
        }
    }

    async fn get_campaign_cards_by_status(
        &self,
        status: CampaignStatus,
    ) -> Result<Vec<CampaignCard>, RpcError> {
        let url = format!(
            "{}/api/campaigns/cards?status={}",
            self.base_url,
            status_query(status)
        );

        match Request::get(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    match response.json::<Vec<CampaignCard>>().await {
                        Ok(cards) => Ok(cards),
                        Err(e) => Err(RpcError::Decode(e.to_string())),
                    }
                } else {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(RpcError::Rejected(error_text))
                }
            }
            Err(e) => Err(RpcError::Network(e.to_string())),
        }
    }

    async fn register_user(&self, request: &RegisterUserRequest) -> Result<(), RpcError> {
        let url = format!("{}/api/users/register", self.base_url);

        match Request::post(&url)
            .json(request)
            .map_err(|e| RpcError::Encode(e.to_string()))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    Ok(())
                } else {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(RpcError::Rejected(error_text))
                }
            }
            Err(e) => Err(RpcError::Network(e.to_string())),
        }
    }

    async fn contribute(&self, request: &ContributeRequest) -> Result<u64, RpcError> {
        let url = format!("{}/api/contributions", self.base_url);

        match Request::post(&url)
            .json(request)
            .map_err(|e| RpcError::Encode(e.to_string()))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<ContributeResponse>().await {
                        Ok(data) => Ok(data.contribution_id),
                        Err(e) => Err(RpcError::Decode(e.to_string())),
                    }
                } else {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(RpcError::Rejected(error_text))
                }
            }
            Err(e) => Err(RpcError::Network(e.to_string())),
        }
    }

    async fn confirm_payment(&self, request: &ConfirmPaymentRequest) -> Result<(), RpcError> {
        let url = format!("{}/api/contributions/confirm", self.base_url);

        match Request::post(&url)
            .json(request)
            .map_err(|e| RpcError::Encode(e.to_string()))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    Ok(())
                } else {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(RpcError::Rejected(error_text))
                }
            }
            Err(e) => Err(RpcError::Network(e.to_string())),
        }
    }
}
