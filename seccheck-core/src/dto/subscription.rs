//! Subscription DTOs

use serde::{Deserialize, Serialize};

use crate::domain::account::{Billing, Plan, Subscription};

#[derive(Debug, Clone, Deserialize)]
pub struct SubscriptionEnvelope {
    pub subscription: Subscription,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlansEnvelope {
    pub plans: Vec<Plan>,
}

/// Request to move to a paid plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradeSubscription {
    pub plan: String,
    pub billing: Billing,
}

/// Payment session the user must complete to finish an upgrade
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub checkout_url: String,
}
