use derive_getters::Getters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Getters, Serialize, Deserialize)]
pub struct SendSituations {
    member_ids: Vec<i32>,
}

impl SendSituations {
    pub fn new(member_ids: Vec<i32>) -> Self {
        Self { member_ids }
    }
}

/// Outcome of one email of a bulk sending.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
pub struct EmailSendingResult {
    member_id: i32,
    email: Option<String>,
    sent: bool,
    message: Option<String>,
}

impl EmailSendingResult {
    pub fn sent_to(member_id: i32, email: String) -> Self {
        Self {
            member_id,
            email: Some(email),
            sent: true,
            message: None,
        }
    }

    pub fn failed(member_id: i32, email: Option<String>, message: String) -> Self {
        Self {
            member_id,
            email,
            sent: false,
            message: Some(message),
        }
    }
}
