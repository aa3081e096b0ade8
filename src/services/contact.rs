use crate::{
    error::{AppError, AppResult},
    models::{ContactForm, ContactReceipt},
};
use std::time::Duration;

/// Simulates sending the contact form
///
/// Nothing leaves the process: after `delay` the form is cleared and a receipt
/// is returned. Forms with any blank field are rejected up front.
pub async fn submit_contact(form: &mut ContactForm, delay: Duration) -> AppResult<ContactReceipt> {
    if !form.is_submittable() {
        return Err(AppError::InvalidInput(format!(
            "Missing contact fields: {}",
            form.missing_fields().join(", ")
        )));
    }

    tokio::time::sleep(delay).await;

    tracing::info!(
        message_len = form.message.len(),
        "Contact message accepted"
    );

    form.clear();
    Ok(ContactReceipt::sent())
}
