//! Subscription API endpoints

use seccheck_core::domain::account::{Billing, Plan, Subscription};
use seccheck_core::dto::common::MessageResponse;
use seccheck_core::dto::subscription::{
    CheckoutSession, PlansEnvelope, SubscriptionEnvelope, UpgradeSubscription,
};

use crate::SecurityCheckClient;
use crate::endpoint::Endpoint;
use crate::error::Result;

impl SecurityCheckClient {
    /// Get the current user's subscription
    pub async fn current_subscription(&self) -> Result<Subscription> {
        let envelope: SubscriptionEnvelope = self.call(Endpoint::CurrentSubscription).await?;
        Ok(envelope.subscription)
    }

    /// List the available plans
    pub async fn subscription_plans(&self) -> Result<Vec<Plan>> {
        let envelope: PlansEnvelope = self.call(Endpoint::SubscriptionPlans).await?;
        Ok(envelope.plans)
    }

    /// Start an upgrade to a paid plan
    ///
    /// # Returns
    /// The checkout session the user must complete
    pub async fn upgrade_subscription(
        &self,
        plan: &str,
        billing: Billing,
    ) -> Result<CheckoutSession> {
        self.send(
            Endpoint::UpgradeSubscription,
            &UpgradeSubscription {
                plan: plan.to_string(),
                billing,
            },
        )
        .await
    }

    /// Cancel the subscription at the end of the current period
    pub async fn cancel_subscription(&self) -> Result<MessageResponse> {
        self.call(Endpoint::CancelSubscription).await
    }
}
