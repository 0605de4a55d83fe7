//! Replayable multipart form bodies.
//!
//! A `reqwest::multipart::Form` is consumed when it is sent, so a request
//! that may be retried keeps its parts here and builds a fresh form for
//! every attempt.

use reqwest::multipart::{Form, Part};

use crate::clients::errors::InvalidHttpRequestError;

/// A single named part of a multipart form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultipartPart {
    /// The form field name.
    pub name: String,
    /// The raw part content.
    pub data: Vec<u8>,
    /// The file name reported in `Content-Disposition`, for file parts.
    pub file_name: Option<String>,
    /// The part's own `Content-Type`, if any.
    pub content_type: Option<String>,
}

/// An ordered list of multipart parts.
///
/// # Example
///
/// ```rust
/// use directus_api::clients::MultipartForm;
///
/// let form = MultipartForm::new()
///     .text("title", "Quarterly report")
///     .file("file", "report.pdf", "application/pdf", b"%PDF-1.7".to_vec());
///
/// assert_eq!(form.parts().len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MultipartForm {
    parts: Vec<MultipartPart>,
}

impl MultipartForm {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a plain text part.
    #[must_use]
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(MultipartPart {
            name: name.into(),
            data: value.into().into_bytes(),
            file_name: None,
            content_type: None,
        });
        self
    }

    /// Appends a file part with an explicit content type.
    #[must_use]
    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        data: Vec<u8>,
    ) -> Self {
        self.parts.push(MultipartPart {
            name: name.into(),
            data,
            file_name: Some(file_name.into()),
            content_type: Some(content_type.into()),
        });
        self
    }

    /// Returns the parts in insertion order.
    #[must_use]
    pub fn parts(&self) -> &[MultipartPart] {
        &self.parts
    }

    /// Builds a transport form from the stored parts.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::InvalidContentType`] if a part
    /// carries a content type that is not a valid MIME type.
    pub fn to_form(&self) -> Result<Form, InvalidHttpRequestError> {
        let mut form = Form::new();
        for part in &self.parts {
            let mut body = Part::bytes(part.data.clone());
            if let Some(file_name) = &part.file_name {
                body = body.file_name(file_name.clone());
            }
            if let Some(content_type) = &part.content_type {
                body = body.mime_str(content_type).map_err(|_| {
                    InvalidHttpRequestError::InvalidContentType {
                        part: part.name.clone(),
                        content_type: content_type.clone(),
                    }
                })?;
            }
            form = form.part(part.name.clone(), body);
        }
        Ok(form)
    }
}
