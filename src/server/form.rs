// Buffered multipart form reader for the upload endpoints

use axum::extract::Multipart;
use std::collections::HashMap;

use super::error::ApiError;

/// One multipart field, file or plain text.
#[derive(Debug, Clone)]
pub struct FormPart {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Every field of a multipart body, read into memory. The body limit layer
/// bounds the total size. A repeated name keeps its first value.
#[derive(Debug, Default)]
pub struct FormData {
    parts: HashMap<String, FormPart>,
}

impl FormData {
    pub async fn read(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut parts = HashMap::new();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::bad_request(format!("Invalid form data: {}", e.body_text())))?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };
            let file_name = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(str::to_string);
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::bad_request(format!("Invalid form data: {}", e.body_text())))?;

            parts.entry(name).or_insert(FormPart {
                file_name,
                content_type,
                bytes: bytes.to_vec(),
            });
        }
        Ok(Self { parts })
    }

    /// Remove and return a field, typically the uploaded file.
    pub fn take(&mut self, name: &str) -> Option<FormPart> {
        self.parts.remove(name)
    }

    /// Text value of a field; empty and non-UTF-8 values count as absent.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.parts
            .get(name)
            .and_then(|p| std::str::from_utf8(&p.bytes).ok())
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
impl FormData {
    pub fn from_parts<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, FormPart)>,
    {
        Self {
            parts: parts.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_part(value: &str) -> FormPart {
        FormPart {
            file_name: None,
            content_type: None,
            bytes: value.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_text_skips_empty_and_binary() {
        let form = FormData::from_parts([
            ("language", text_part("hi")),
            ("prompt", text_part("")),
            (
                "audio",
                FormPart {
                    file_name: Some("a.webm".to_string()),
                    content_type: Some("audio/webm".to_string()),
                    bytes: vec![0xff, 0xfe],
                },
            ),
        ]);
        assert_eq!(form.text("language"), Some("hi"));
        assert_eq!(form.text("prompt"), None);
        assert_eq!(form.text("audio"), None);
        assert_eq!(form.text("missing"), None);
    }

    #[test]
    fn test_take_removes_field() {
        let mut form = FormData::from_parts([("image", text_part("x"))]);
        assert!(form.take("image").is_some());
        assert!(form.take("image").is_none());
    }
}
