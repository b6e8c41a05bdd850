use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Every API response is wrapped into this envelope.
/// `data` is only present on successful calls that return something.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn succeeded(message: Option<String>, data: Option<T>) -> Self {
        Self {
            success: true,
            message,
            data,
        }
    }

    pub fn failure(message: String) -> Self {
        Self {
            success: false,
            message: Some(message),
            data: None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use crate::envelope::Envelope;

    #[test]
    fn should_skip_missing_fields() {
        let envelope = Envelope::<()>::failure("Oops".to_owned());
        assert_eq!(
            r#"{"success":false,"message":"Oops"}"#,
            serde_json::to_string(&envelope).unwrap()
        );
    }

    #[test]
    fn should_serialize_data() {
        let envelope = Envelope::succeeded(None, Some(vec![1, 2]));
        assert_eq!(
            r#"{"success":true,"data":[1,2]}"#,
            serde_json::to_string(&envelope).unwrap()
        );
    }
}
