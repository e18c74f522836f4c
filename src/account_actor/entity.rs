//! [`ActorEntity`] implementation for [`Account`].

use crate::account_actor::AccountError;
use crate::model::{Account, AccountCreate, AccountKey, Profile, ProfileUpdate};
use actor_store::{ActorEntity, Stamp};
use async_trait::async_trait;

/// Accounts have no custom actions; they are created, read, and edited.
#[derive(Debug)]
pub enum AccountAction {}

#[async_trait]
impl ActorEntity for Account {
    type Id = AccountKey;
    type Create = AccountCreate;
    type Update = ProfileUpdate;
    type Action = AccountAction;
    type ActionResult = ();
    type Context = ();
    type Error = AccountError;

    const COLLECTION: &'static str = "app_users";

    fn id(&self) -> AccountKey {
        self.key()
    }

    /// Builds the account from an already-hashed registration.
    ///
    /// Duplicate `(email, role)` pairs are rejected by the actor (the default
    /// `on_conflict`), which leaves the stored collection untouched.
    fn from_create_params(stamp: Stamp, params: AccountCreate) -> Result<Self, AccountError> {
        let email = params.email.trim().to_string();
        if email.is_empty() {
            return Err(AccountError::MissingField("email"));
        }
        if params.password_hash.is_empty() {
            return Err(AccountError::MissingField("password"));
        }
        Ok(Self {
            email,
            password_hash: params.password_hash,
            phone: params.phone.trim().to_string(),
            profile: trimmed(params.profile),
            registered_at: stamp.at,
        })
    }

    async fn on_update(&mut self, update: ProfileUpdate, _ctx: &()) -> Result<(), AccountError> {
        match &mut self.profile {
            Profile::Customer { full_name } => {
                if update.owner_name.is_some() {
                    return Err(AccountError::ProfileMismatch("owner_name"));
                }
                if update.restaurant_name.is_some() {
                    return Err(AccountError::ProfileMismatch("restaurant_name"));
                }
                if let Some(name) = update.full_name {
                    *full_name = name.trim().to_string();
                }
            }
            Profile::Restaurant {
                owner_name,
                restaurant_name,
            } => {
                if update.full_name.is_some() {
                    return Err(AccountError::ProfileMismatch("full_name"));
                }
                if let Some(name) = update.owner_name {
                    *owner_name = name.trim().to_string();
                }
                if let Some(name) = update.restaurant_name {
                    *restaurant_name = name.trim().to_string();
                }
            }
        }
        if let Some(phone) = update.phone {
            self.phone = phone.trim().to_string();
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: AccountAction, _ctx: &()) -> Result<(), AccountError> {
        match action {}
    }
}

fn trimmed(profile: Profile) -> Profile {
    match profile {
        Profile::Customer { full_name } => Profile::Customer {
            full_name: full_name.trim().to_string(),
        },
        Profile::Restaurant {
            owner_name,
            restaurant_name,
        } => Profile::Restaurant {
            owner_name: owner_name.trim().to_string(),
            restaurant_name: restaurant_name.trim().to_string(),
        },
    }
}
