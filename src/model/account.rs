//! Registered customers and restaurant operators.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Which side of the platform an account belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Restaurant,
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Customer => write!(f, "customer"),
            Role::Restaurant => write!(f, "restaurant"),
        }
    }
}

/// Natural identity of an account: the same email may register once per role.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountKey {
    pub email: String,
    pub role: Role,
}

impl AccountKey {
    pub fn new(role: Role, email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            role,
        }
    }
}

impl Display for AccountKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.role, self.email)
    }
}

/// Role-specific profile fields. The variant *is* the role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Profile {
    Customer {
        full_name: String,
    },
    Restaurant {
        owner_name: String,
        restaurant_name: String,
    },
}

impl Profile {
    pub fn role(&self) -> Role {
        match self {
            Profile::Customer { .. } => Role::Customer,
            Profile::Restaurant { .. } => Role::Restaurant,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub email: String,
    /// Argon2 PHC string.
    pub password_hash: String,
    pub phone: String,
    #[serde(flatten)]
    pub profile: Profile,
    pub registered_at: DateTime<Utc>,
}

impl Account {
    pub fn role(&self) -> Role {
        self.profile.role()
    }

    pub fn key(&self) -> AccountKey {
        AccountKey::new(self.role(), self.email.clone())
    }

    /// Full name for customers, owner name for restaurants; the email when that is blank.
    pub fn display_name(&self) -> String {
        let name = match &self.profile {
            Profile::Customer { full_name } => full_name,
            Profile::Restaurant { owner_name, .. } => owner_name,
        };
        if name.trim().is_empty() {
            self.email.clone()
        } else {
            name.clone()
        }
    }

    /// Label stamped on a restaurant's dishes: restaurant name, else owner name.
    pub fn restaurant_label(&self) -> Option<String> {
        match &self.profile {
            Profile::Customer { .. } => None,
            Profile::Restaurant {
                owner_name,
                restaurant_name,
            } => Some(if restaurant_name.trim().is_empty() {
                owner_name.clone()
            } else {
                restaurant_name.clone()
            }),
        }
    }
}

/// Registration form as submitted. The role is taken from `profile`.
#[derive(Debug, Clone)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub phone: String,
    pub profile: Profile,
}

impl Registration {
    pub fn customer(
        full_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            phone: String::new(),
            profile: Profile::Customer {
                full_name: full_name.into(),
            },
        }
    }

    pub fn restaurant(
        owner_name: impl Into<String>,
        restaurant_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            phone: String::new(),
            profile: Profile::Restaurant {
                owner_name: owner_name.into(),
                restaurant_name: restaurant_name.into(),
            },
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }
}

/// Payload for creating an account; the password has already been hashed.
#[derive(Debug, Clone)]
pub struct AccountCreate {
    pub email: String,
    pub password_hash: String,
    pub phone: String,
    pub profile: Profile,
}

/// Profile edit. `None` leaves a field as it is.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub phone: Option<String>,
    pub full_name: Option<String>,
    pub owner_name: Option<String>,
    pub restaurant_name: Option<String>,
}
