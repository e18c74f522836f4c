//! # Account Client
//!
//! Registration, credential checks and profile edits on top of `ResourceClient<Account>`.

use crate::account_actor::password::{hash_password, verify_password};
use crate::account_actor::AccountError;
use crate::model::{Account, AccountCreate, AccountKey, ProfileUpdate, Registration, Role};
use actor_store::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

/// Client for interacting with the Account actor.
#[derive(Clone)]
pub struct AccountClient {
    inner: ResourceClient<Account>,
}

impl AccountClient {
    pub fn new(inner: ResourceClient<Account>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Account> for AccountClient {
    type Error = AccountError;

    fn inner(&self) -> &ResourceClient<Account> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast::<AccountError>() {
            Ok(err) => err,
            Err(FrameworkError::AlreadyExists(_)) => AccountError::AlreadyRegistered,
            Err(FrameworkError::NotFound(key)) => AccountError::NotFound(key),
            Err(FrameworkError::Storage(e)) => AccountError::DatabaseError(e.to_string()),
            Err(other) => AccountError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl AccountClient {
    /// Registers a new account. Fails with `AlreadyRegistered` if the email is taken for
    /// this role; the stored accounts are then left exactly as they were.
    #[instrument(skip(self, registration), fields(role = %registration.profile.role()))]
    pub async fn register(&self, registration: Registration) -> Result<Account, AccountError> {
        if registration.email.trim().is_empty() {
            return Err(AccountError::MissingField("email"));
        }
        if registration.password.is_empty() {
            return Err(AccountError::MissingField("password"));
        }
        let password_hash = hash_password(&registration.password)
            .map_err(|e| AccountError::PasswordHash(e.to_string()))?;

        let params = AccountCreate {
            email: registration.email,
            password_hash,
            phone: registration.phone,
            profile: registration.profile,
        };
        let account = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(key = %account.key(), "Registered");
        Ok(account)
    }

    /// Returns the account iff one exists for `(email, role)` and `password` matches it.
    #[instrument(skip(self, password))]
    pub async fn authenticate(
        &self,
        role: Role,
        email: &str,
        password: &str,
    ) -> Result<Account, AccountError> {
        debug!("Sending request");
        let key = AccountKey::new(role, email.trim());
        match self.get(key).await? {
            Some(account) if verify_password(password, &account.password_hash) => Ok(account),
            _ => {
                warn!("Rejected credentials");
                Err(AccountError::InvalidCredentials)
            }
        }
    }

    /// Replaces profile fields of the account identified by `key`.
    #[instrument(skip(self))]
    pub async fn update_profile(
        &self,
        key: AccountKey,
        update: ProfileUpdate,
    ) -> Result<Account, AccountError> {
        debug!("Sending request");
        self.inner.update(key, update).await.map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Profile;
    use actor_store::mock::{create_mock_client, expect_create, MockClient};

    fn stored(email: &str, password: &str) -> Account {
        Account {
            email: email.into(),
            password_hash: hash_password(password).unwrap(),
            phone: String::new(),
            profile: Profile::Customer {
                full_name: "Asha".into(),
            },
            registered_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_register_sends_hash_not_password() {
        let (client, mut receiver) = create_mock_client::<Account>(10);
        let accounts = AccountClient::new(client);

        let task = tokio::spawn(async move {
            accounts
                .register(Registration::customer("Asha", "a@x.com", "pw1"))
                .await
        });

        let (params, responder) = expect_create(&mut receiver).await.unwrap();
        assert_ne!(params.password_hash, "pw1");
        assert!(verify_password("pw1", &params.password_hash));
        responder.send(Ok(stored("a@x.com", "pw1"))).unwrap();

        assert_eq!(task.await.unwrap().unwrap().email, "a@x.com");
    }

    #[tokio::test]
    async fn test_register_rejects_blank_fields_without_calling_actor() {
        let mock = MockClient::<Account>::new();
        let accounts = AccountClient::new(mock.client());

        let err = accounts
            .register(Registration::customer("Asha", "   ", "pw1"))
            .await
            .unwrap_err();
        assert_eq!(err, AccountError::MissingField("email"));

        let err = accounts
            .register(Registration::customer("Asha", "a@x.com", ""))
            .await
            .unwrap_err();
        assert_eq!(err, AccountError::MissingField("password"));

        mock.verify();
    }

    #[tokio::test]
    async fn test_authentication_failures_are_uniform() {
        let mut mock = MockClient::<Account>::new();
        mock.expect_get(AccountKey::new(Role::Customer, "a@x.com"))
            .return_ok(Some(stored("a@x.com", "pw1")));
        mock.expect_get(AccountKey::new(Role::Customer, "b@x.com"))
            .return_ok(None);
        let accounts = AccountClient::new(mock.client());

        let wrong_password = accounts
            .authenticate(Role::Customer, "a@x.com", "nope")
            .await
            .unwrap_err();
        let unknown = accounts
            .authenticate(Role::Customer, "b@x.com", "pw1")
            .await
            .unwrap_err();
        assert_eq!(wrong_password, AccountError::InvalidCredentials);
        assert_eq!(wrong_password, unknown);
        assert_eq!(wrong_password.to_string(), unknown.to_string());

        mock.verify();
    }

    #[test]
    fn test_duplicate_maps_to_already_registered() {
        let err = AccountClient::map_error(FrameworkError::AlreadyExists("customer:a@x.com".into()));
        assert_eq!(err, AccountError::AlreadyRegistered);
    }
}
