use shared::{
    to_base_units, CampaignCard, CampaignStatus, ConfirmPaymentRequest, ContributeRequest,
    Principal, RegisterUserRequest, ValidContribution,
};

use crate::services::backend::{FundverseBackend, RpcError};
use crate::services::identity::AuthSession;
use crate::services::logging::Logger;

const COMPONENT: &str = "contribution";

/// Ordered contribution protocol: best-effort user registration, the
/// contribution itself, payment confirmation, then a list refetch.
///
/// Registration failure (typically "already registered") is logged and the
/// workflow continues. A failure of the contribution or the confirmation
/// aborts the remaining steps; the client holds no ledger of its own, so
/// the external actor's state stays the sole source of truth and nothing
/// is rolled back or reconciled here.
pub async fn submit_contribution<B>(
    backend: &B,
    session: &AuthSession,
    payee: &Principal,
    campaign_id: u64,
    contribution: &ValidContribution,
    filter: Option<CampaignStatus>,
) -> Result<Vec<CampaignCard>, RpcError>
where
    B: FundverseBackend + ?Sized,
{
    let register = RegisterUserRequest {
        display_name: session.display_name.clone(),
        email: session.email.clone(),
    };
    if let Err(err) = backend.register_user(&register).await {
        Logger::warn_with_component(COMPONENT, &format!("user registration skipped: {err}"));
    }

    let amount_base_units = to_base_units(&contribution.amount)
        .map_err(|err| RpcError::Encode(format!("amount: {err}")))?;

    let contribution_id = backend
        .contribute(&ContributeRequest {
            payee: payee.clone(),
            campaign_id,
            amount_base_units,
        })
        .await?;

    backend
        .confirm_payment(&ConfirmPaymentRequest {
            contribution_id,
            payee: payee.clone(),
        })
        .await?;

    Logger::info_with_component(
        COMPONENT,
        &format!("contribution {contribution_id} confirmed for campaign {campaign_id}"),
    );

    super::refresh_campaigns(backend, filter).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::testing::{sample_card, MockBackend};
    use futures::executor::block_on;

    fn sample_session() -> AuthSession {
        AuthSession {
            principal: Principal::from("2vxsx-fae"),
            display_name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    fn payee() -> Principal {
        Principal::from("rrkah-fqaaa-aaaaa-aaaaq-cai")
    }

    fn amount(text: &str) -> ValidContribution {
        ValidContribution {
            amount: text.to_string(),
        }
    }

    #[test]
    fn protocol_steps_run_in_order() {
        let backend = MockBackend::with_cards(vec![sample_card(1)]);

        block_on(submit_contribution(
            &backend,
            &sample_session(),
            &payee(),
            1,
            &amount("25"),
            None,
        ))
        .unwrap();

        assert_eq!(
            *backend.calls.borrow(),
            vec![
                "register_user",
                "contribute",
                "confirm_payment",
                "get_campaign_cards",
            ]
        );
    }

    #[test]
    fn registration_failure_does_not_block_the_contribution() {
        let backend = MockBackend {
            fail_register: true,
            ..Default::default()
        };

        let result = block_on(submit_contribution(
            &backend,
            &sample_session(),
            &payee(),
            1,
            &amount("10"),
            None,
        ));

        assert!(result.is_ok());
        assert_eq!(backend.call_count("contribute"), 1);
        assert_eq!(backend.call_count("confirm_payment"), 1);
    }

    #[test]
    fn failed_contribution_never_reaches_confirmation() {
        let backend = MockBackend {
            fail_contribute: true,
            ..Default::default()
        };

        let result = block_on(submit_contribution(
            &backend,
            &sample_session(),
            &payee(),
            1,
            &amount("10"),
            None,
        ));

        assert!(result.is_err());
        assert_eq!(backend.call_count("confirm_payment"), 0);
        assert_eq!(backend.call_count("get_campaign_cards"), 0);
    }

    #[test]
    fn failed_confirmation_aborts_the_refresh() {
        let backend = MockBackend {
            fail_confirm: true,
            ..Default::default()
        };

        let result = block_on(submit_contribution(
            &backend,
            &sample_session(),
            &payee(),
            1,
            &amount("10"),
            None,
        ));

        assert!(result.is_err());
        assert_eq!(backend.call_count("get_campaign_cards"), 0);
    }

    #[test]
    fn successful_contribution_refreshes_exactly_once_with_the_full_list() {
        let backend = MockBackend::with_cards(vec![sample_card(1), sample_card(2)]);

        let cards = block_on(submit_contribution(
            &backend,
            &sample_session(),
            &payee(),
            2,
            &amount("10"),
            None,
        ))
        .unwrap();

        assert_eq!(backend.call_count("get_campaign_cards"), 1);
        assert_eq!(cards, backend.cards);
    }

    #[test]
    fn amount_is_sent_in_base_units_with_the_custody_payee() {
        let backend = MockBackend::default();

        block_on(submit_contribution(
            &backend,
            &sample_session(),
            &payee(),
            5,
            &amount("12.5"),
            None,
        ))
        .unwrap();

        let sent = backend.last_contribute.borrow().clone().unwrap();
        assert_eq!(sent.amount_base_units, 1_250_000_000);
        assert_eq!(sent.campaign_id, 5);
        assert_eq!(sent.payee, payee());
    }
}
