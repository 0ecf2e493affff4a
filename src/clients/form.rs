//! Multipart field sets for `post_multi`.

use crate::clients::attachment::Attachment;
use crate::clients::errors::ApiError;

/// The multipart field name every attachment is sent under.
const ATTACHMENT_FIELD: &str = "attachment";

/// The field set of a multipart command.
///
/// Holds ordered text fields and an ordered attachment sequence. Text
/// fields with empty values are dropped entirely — they never appear in
/// the encoded body as empty parts. Repeated values produce one part
/// per element under the same field name. Attachments expand to one
/// part each, named `attachment`, in the order they were added.
///
/// # Example
///
/// ```rust
/// use mailgun_api::{Attachment, FormFields};
///
/// let fields = FormFields::new()
///     .field("from", "sender@example.com")
///     .field_values("to", ["a@example.com", "b@example.com"])
///     .field("subject", "Quarterly report")
///     .attachment(Attachment::bytes(vec![1, 2, 3]).filename("report.pdf"));
/// ```
#[derive(Debug, Default)]
pub struct FormFields {
    fields: Vec<(String, String)>,
    attachments: Vec<Attachment>,
}

impl FormFields {
    /// Creates an empty field set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a text field.
    ///
    /// An empty value is dropped rather than sent as an empty part.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.fields.push((key.into(), value));
        }
        self
    }

    /// Appends one text field per value, all under the same name.
    #[must_use]
    pub fn field_values<I, V>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let key = key.into();
        for value in values {
            self.fields.push((key.clone(), value.into()));
        }
        self
    }

    /// Appends a single attachment.
    #[must_use]
    pub fn attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Appends a sequence of attachments, preserving order.
    #[must_use]
    pub fn attachments(mut self, attachments: impl IntoIterator<Item = Attachment>) -> Self {
        self.attachments.extend(attachments);
        self
    }

    /// Returns the retained text fields in insertion order.
    #[must_use]
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Returns the number of attachments added.
    #[must_use]
    pub fn attachment_count(&self) -> usize {
        self.attachments.len()
    }

    /// Encodes the field set as a multipart form.
    ///
    /// The form owns its boundary; the dispatcher clears any merged
    /// `Content-Type` header so the encoder's value reaches the wire.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when an attachment carries a malformed
    /// content type.
    pub(crate) fn into_form(self) -> Result<reqwest::multipart::Form, ApiError> {
        let mut form = reqwest::multipart::Form::new();

        for (name, value) in self.fields {
            form = form.text(name, value);
        }

        for attachment in self.attachments {
            form = form.part(ATTACHMENT_FIELD, attachment.into_part()?);
        }

        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values_are_excluded_entirely() {
        let fields = FormFields::new()
            .field("from", "sender@example.com")
            .field("o:testmode", "")
            .field("subject", "hello");

        let keys: Vec<&str> = fields.fields().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["from", "subject"]);
    }

    #[test]
    fn test_repeated_values_produce_one_entry_per_element() {
        let fields = FormFields::new().field_values("to", ["a@example.com", "b@example.com"]);

        assert_eq!(
            fields.fields(),
            &[
                ("to".to_string(), "a@example.com".to_string()),
                ("to".to_string(), "b@example.com".to_string()),
            ]
        );
    }

    #[test]
    fn test_attachments_preserve_order() {
        let fields = FormFields::new()
            .attachment(Attachment::bytes(b"first".to_vec()).filename("a.png"))
            .attachment(Attachment::bytes(b"second".to_vec()));

        assert_eq!(fields.attachment_count(), 2);
    }

    #[test]
    fn test_attachments_extends_from_iterator() {
        let fields = FormFields::new().attachments(vec![
            Attachment::bytes(b"one".to_vec()),
            Attachment::bytes(b"two".to_vec()),
            Attachment::bytes(b"three".to_vec()),
        ]);

        assert_eq!(fields.attachment_count(), 3);
    }

    #[test]
    fn test_into_form_encodes_fields_and_attachments() {
        let fields = FormFields::new()
            .field("from", "sender@example.com")
            .attachment(Attachment::bytes(b"data".to_vec()).content_type("image/png"));

        assert!(fields.into_form().is_ok());
    }

    #[test]
    fn test_into_form_surfaces_attachment_errors() {
        let fields =
            FormFields::new().attachment(Attachment::bytes(b"data".to_vec()).content_type("???"));

        assert!(fields.into_form().is_err());
    }
}
