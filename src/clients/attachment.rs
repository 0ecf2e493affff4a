//! Attachment payloads for multipart commands.
//!
//! An attachment is either a byte buffer or a byte stream, plus optional
//! described metadata (filename, content type, known length). The data
//! shape is an explicit tagged union chosen by the caller at
//! construction time — nothing is sniffed at dispatch.
//!
//! Streams are consumed exactly once by the multipart encoder; a failed
//! send is never replayed against a stream-backed attachment.

use crate::clients::errors::ApiError;

/// Filename attached to buffer-backed parts that carry no explicit name.
const DEFAULT_FILENAME: &str = "file";

/// The data carried by an [`Attachment`].
#[derive(Debug)]
pub enum AttachmentData {
    /// An in-memory byte buffer.
    Bytes(Vec<u8>),
    /// A byte stream, consumed once during encoding.
    Stream(reqwest::Body),
}

impl AttachmentData {
    /// Returns `true` for stream-backed data.
    #[must_use]
    pub const fn is_stream(&self) -> bool {
        matches!(self, Self::Stream(_))
    }
}

/// A single multipart attachment.
///
/// Built from bytes or a stream, optionally described with a filename,
/// content type, and known length. Each attachment becomes one
/// multipart part named `attachment`.
///
/// # Metadata policy
///
/// - A buffer without an explicit filename is sent as `file`; streams
///   never receive a synthesized filename.
/// - An empty content type or filename, and a known length of zero, are
///   treated as absent.
/// - The known length sizes stream-backed parts; buffers already carry
///   an inherent length.
///
/// # Example
///
/// ```rust
/// use mailgun_api::Attachment;
///
/// let logo = Attachment::bytes(vec![0x89, 0x50, 0x4e, 0x47])
///     .filename("logo.png")
///     .content_type("image/png");
/// ```
#[derive(Debug)]
pub struct Attachment {
    data: AttachmentData,
    filename: Option<String>,
    content_type: Option<String>,
    known_length: Option<u64>,
}

impl Attachment {
    /// Creates an attachment from an in-memory byte buffer.
    #[must_use]
    pub fn bytes(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: AttachmentData::Bytes(data.into()),
            filename: None,
            content_type: None,
            known_length: None,
        }
    }

    /// Creates an attachment from a byte stream.
    ///
    /// The stream is read exactly once while the request body is being
    /// written.
    #[must_use]
    pub fn stream(body: impl Into<reqwest::Body>) -> Self {
        Self {
            data: AttachmentData::Stream(body.into()),
            filename: None,
            content_type: None,
            known_length: None,
        }
    }

    /// Sets the filename presented in the part's `Content-Disposition`.
    #[must_use]
    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Sets the part's content type.
    #[must_use]
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Sets the stream length used to size the part.
    #[must_use]
    pub const fn known_length(mut self, length: u64) -> Self {
        self.known_length = Some(length);
        self
    }

    /// Returns `true` for stream-backed attachments.
    #[must_use]
    pub const fn is_stream(&self) -> bool {
        self.data.is_stream()
    }

    /// The filename that will reach the wire, after defaulting.
    fn effective_filename(&self) -> Option<String> {
        match self.filename.as_deref() {
            Some(name) if !name.is_empty() => Some(name.to_string()),
            _ if self.is_stream() => None,
            _ => Some(DEFAULT_FILENAME.to_string()),
        }
    }

    /// The content type that will reach the wire; empty strings are absent.
    fn effective_content_type(&self) -> Option<&str> {
        self.content_type.as_deref().filter(|ct| !ct.is_empty())
    }

    /// The length hint that will be applied; zero is absent.
    fn effective_known_length(&self) -> Option<u64> {
        self.known_length.filter(|length| *length > 0)
    }

    /// Converts the attachment into a multipart part.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] when the content type is not a valid MIME
    /// string.
    pub(crate) fn into_part(self) -> Result<reqwest::multipart::Part, ApiError> {
        let filename = self.effective_filename();
        let content_type = self.effective_content_type().map(str::to_string);
        let known_length = self.effective_known_length();

        let part = match self.data {
            AttachmentData::Bytes(bytes) => reqwest::multipart::Part::bytes(bytes),
            AttachmentData::Stream(body) => match known_length {
                Some(length) => reqwest::multipart::Part::stream_with_length(body, length),
                None => reqwest::multipart::Part::stream(body),
            },
        };

        let part = match filename {
            Some(name) => part.file_name(name),
            None => part,
        };

        let part = match content_type {
            Some(content_type) => part.mime_str(&content_type)?,
            None => part,
        };

        Ok(part)
    }
}
