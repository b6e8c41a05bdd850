use crate::club::ClubMembership;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};

#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct User {
    id: i32,
    email: String,
    first_name: String,
    last_name: String,
    phone: Option<String>,
}

impl User {
    pub fn new(
        id: i32,
        email: String,
        first_name: String,
        last_name: String,
        phone: Option<String>,
    ) -> Self {
        Self {
            id,
            email,
            first_name,
            last_name,
            phone,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Getters, Serialize, Deserialize, Clone)]
pub struct RegisterRequest {
    email: String,
    password: String,
    first_name: String,
    last_name: String,
    phone: Option<String>,
}

impl RegisterRequest {
    pub fn new(
        email: String,
        password: String,
        first_name: String,
        last_name: String,
        phone: Option<String>,
    ) -> Self {
        Self {
            email,
            password,
            first_name,
            last_name,
            phone,
        }
    }
}

impl Debug for RegisterRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RegisterRequest {{email={}, password=MASKED, first_name={}, last_name={}}}",
            self.email, self.first_name, self.last_name
        )
    }
}

#[derive(Getters, Serialize, Deserialize, Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

impl LoginRequest {
    pub fn new(email: String, password: String) -> Self {
        Self { email, password }
    }
}

impl Debug for LoginRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "LoginRequest {{email={}, password=MASKED}}", self.email)
    }
}

#[derive(Debug, Getters, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    token: String,
    user: User,
}

impl LoginResponse {
    pub fn new(token: String, user: User) -> Self {
        Self { token, user }
    }
}

#[derive(Getters, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    current_password: String,
    new_password: String,
}

impl ChangePasswordRequest {
    pub fn new(current_password: String, new_password: String) -> Self {
        Self {
            current_password,
            new_password,
        }
    }
}

impl Debug for ChangePasswordRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ChangePasswordRequest {{MASKED}}")
    }
}

/// The authenticated user and every club they belong to.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq)]
pub struct CurrentUser {
    user: User,
    clubs: Vec<ClubMembership>,
}

impl CurrentUser {
    pub fn new(user: User, clubs: Vec<ClubMembership>) -> Self {
        Self { user, clubs }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    pub const PASSWORD: &str = "correct horse battery staple";

    pub fn jon_doe() -> RegisterRequest {
        RegisterRequest::new(
            "jon.doe@email.com".to_owned(),
            PASSWORD.to_owned(),
            "Jon".to_owned(),
            "Doe".to_owned(),
            Some("+33 6 12 34 56 78".to_owned()),
        )
    }

    pub fn jonette_snow() -> RegisterRequest {
        RegisterRequest::new(
            "jonette.snow@email.com".to_owned(),
            PASSWORD.to_owned(),
            "Jonette".to_owned(),
            "Snow".to_owned(),
            None,
        )
    }

    pub fn jean_valjean() -> RegisterRequest {
        RegisterRequest::new(
            "jean.valjean@email.com".to_owned(),
            PASSWORD.to_owned(),
            "Jean".to_owned(),
            "Valjean".to_owned(),
            None,
        )
    }

    #[test]
    fn should_mask_password() {
        let debug = format!("{:?}", jon_doe());
        assert!(!debug.contains(PASSWORD));
        assert!(debug.contains("MASKED"));
    }

    #[test]
    fn should_build_full_name() {
        let user = User::new(1, "".to_owned(), "Jon".to_owned(), "Doe".to_owned(), None);
        assert_eq!("Jon Doe", user.full_name());
    }
}
