use super::{PaymentError, PaymentOutcome, PaymentProvider, PaymentRequest};
use actor_store::Stamp;
use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Behaviour {
    Approve,
    Dismiss,
    Unavailable,
}

/// Payment provider with a scripted answer.
#[derive(Debug)]
pub struct SimulatedPaymentProvider {
    behaviour: Behaviour,
    requests: Mutex<Vec<PaymentRequest>>,
}

impl SimulatedPaymentProvider {
    fn with(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Authorizes every request with a fresh `pay_sim_<n>` reference.
    pub fn approving() -> Self {
        Self::with(Behaviour::Approve)
    }

    /// Every request ends as if the customer closed the payment window.
    pub fn dismissing() -> Self {
        Self::with(Behaviour::Dismiss)
    }

    /// Every request fails as if the gateway could not be loaded.
    pub fn unavailable() -> Self {
        Self::with(Behaviour::Unavailable)
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<PaymentRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl PaymentProvider for SimulatedPaymentProvider {
    async fn authorize(&self, request: PaymentRequest) -> Result<PaymentOutcome, PaymentError> {
        info!(
            amount_minor = request.amount_minor,
            currency = %request.currency,
            "Authorizing payment"
        );
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        match self.behaviour {
            Behaviour::Approve => Ok(PaymentOutcome::Authorized {
                reference: format!("pay_sim_{}", Stamp::next().id),
            }),
            Behaviour::Dismiss => Ok(PaymentOutcome::Dismissed),
            Behaviour::Unavailable => Err(PaymentError::Unavailable(
                "simulated gateway offline".into(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(amount_minor: u64) -> PaymentRequest {
        PaymentRequest {
            amount_minor,
            currency: "INR".into(),
            description: "test".into(),
        }
    }

    #[tokio::test]
    async fn test_approving_issues_distinct_references() {
        let provider = SimulatedPaymentProvider::approving();
        let first = provider.authorize(request(100)).await.unwrap();
        let second = provider.authorize(request(200)).await.unwrap();
        assert_ne!(first, second);
        assert!(matches!(
            first,
            PaymentOutcome::Authorized { ref reference } if reference.starts_with("pay_sim_")
        ));
        assert_eq!(provider.requests(), vec![request(100), request(200)]);
    }

    #[tokio::test]
    async fn test_dismiss_and_unavailable() {
        assert_eq!(
            SimulatedPaymentProvider::dismissing()
                .authorize(request(1))
                .await,
            Ok(PaymentOutcome::Dismissed)
        );
        assert!(SimulatedPaymentProvider::unavailable()
            .authorize(request(1))
            .await
            .is_err());
    }
}
