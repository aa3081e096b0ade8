use serde::{Deserialize, Serialize};

/// Contact form fields
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    /// Names of the fields that are empty after trimming
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// A form can be submitted only when every field is filled in
    pub fn is_submittable(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ContactReceipt {
    pub status: String,
    pub title: String,
    pub message: String,
}

impl ContactReceipt {
    pub fn sent() -> Self {
        Self {
            status: "sent".to_string(),
            title: "Message sent!".to_string(),
            message: "Thank you for your message. We'll get back to you soon.".to_string(),
        }
    }
}
