//! Client-side checks for image uploads.
//!
//! These only spare the user a round-trip; the backend validates again.

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use thiserror::Error;
use web_sys::{File, FormData, HtmlInputElement};

use super::api::{ApiClient, ApiError, ApiResult};
use crate::config::AppConfig;

pub const ALLOWED_IMAGE_TYPES: [&str; 2] = ["image/png", "image/jpeg"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("No file selected")]
    Empty,
    #[error("Only PNG and JPEG images are allowed (got \"{0}\")")]
    UnsupportedType(String),
    #[error("Image is {size_kb} KB, the limit is {max_kb} KB")]
    TooLarge { size_kb: u64, max_kb: u64 },
    #[error("Failed to prepare upload: {0}")]
    Form(String),
}

/// Check the MIME type and size of an image before it is submitted.
pub fn validate_image(mime: &str, size: u64, max_bytes: u64) -> Result<(), UploadError> {
    if size == 0 {
        return Err(UploadError::Empty);
    }
    let mime = mime.trim().to_ascii_lowercase();
    if !ALLOWED_IMAGE_TYPES.contains(&mime.as_str()) {
        return Err(UploadError::UnsupportedType(mime));
    }
    if size > max_bytes {
        return Err(UploadError::TooLarge {
            size_kb: size.div_ceil(1024),
            max_kb: max_bytes / 1024,
        });
    }
    Ok(())
}

pub fn validate_file(file: &File, max_bytes: u64) -> Result<(), UploadError> {
    validate_image(&file.type_(), file.size() as u64, max_bytes)
}

/// Multipart body with the image (if any) under `field` plus plain text fields.
pub fn image_form(field: &str, file: Option<&File>, fields: &[(&str, &str)]) -> Result<FormData, UploadError> {
    let form = FormData::new().map_err(|e| UploadError::Form(format!("{:?}", e)))?;
    if let Some(file) = file {
        form.append_with_blob_and_filename(field, file, &file.name())
            .map_err(|e| UploadError::Form(format!("{:?}", e)))?;
    }
    for (name, value) in fields {
        form.append_with_str(name, value)
            .map_err(|e| UploadError::Form(format!("{:?}", e)))?;
    }
    Ok(form)
}

impl From<UploadError> for ApiError {
    fn from(e: UploadError) -> Self {
        ApiError::Business(e.to_string())
    }
}

/// Validate the image again and post it with `fields` as one multipart request.
pub async fn upload_image<T: DeserializeOwned>(
    api: &ApiClient,
    path: &str,
    field: &str,
    file: Option<&File>,
    fields: &[(&str, &str)],
    max_bytes: u64,
) -> ApiResult<T> {
    if let Some(file) = file {
        validate_file(file, max_bytes)?;
    }
    let form = image_form(field, file, fields)?;
    api.post_multipart(path, form).await
}

/// File picker that only keeps files passing `validate_image`.
#[component]
pub fn ImageUploadField(
    #[prop(into)]
    label: String,

    /// Selected file, cleared when the pick is rejected
    file: RwSignal<Option<File>, LocalStorage>,
) -> impl IntoView {
    let max_bytes = use_context::<AppConfig>()
        .map(|c| c.upload.max_bytes)
        .unwrap_or(5 * 1024 * 1024);
    let (error, set_error) = signal::<Option<String>>(None);

    let on_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let picked = input.files().and_then(|files| files.get(0));
        match picked {
            Some(f) => match validate_file(&f, max_bytes) {
                Ok(()) => {
                    set_error.set(None);
                    file.set(Some(f));
                }
                Err(e) => {
                    input.set_value("");
                    set_error.set(Some(e.to_string()));
                    file.set(None);
                }
            },
            None => file.set(None),
        }
    };

    view! {
        <div class="form-group">
            <label>{label}</label>
            <input type="file" accept=ALLOWED_IMAGE_TYPES.join(",") on:change=on_change />
            {move || error.get().map(|e| view! { <div class="form-error">{e}</div> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: u64 = 5 * 1024 * 1024;

    #[test]
    fn test_png_and_jpeg_are_accepted() {
        assert_eq!(validate_image("image/png", 1024, MAX), Ok(()));
        assert_eq!(validate_image("image/jpeg", MAX, MAX), Ok(()));
        assert_eq!(validate_image("IMAGE/JPEG", 10, MAX), Ok(()));
    }

    #[test]
    fn test_other_types_are_rejected() {
        assert_eq!(
            validate_image("image/gif", 10, MAX),
            Err(UploadError::UnsupportedType("image/gif".to_string()))
        );
        assert!(matches!(
            validate_image("", 10, MAX),
            Err(UploadError::UnsupportedType(_))
        ));
    }

    #[test]
    fn test_size_ceiling_is_inclusive() {
        assert_eq!(
            validate_image("image/png", MAX + 1, MAX),
            Err(UploadError::TooLarge {
                size_kb: 5121,
                max_kb: 5120
            })
        );
    }

    #[test]
    fn test_empty_file_is_rejected_first() {
        assert_eq!(validate_image("image/gif", 0, MAX), Err(UploadError::Empty));
    }

    #[test]
    fn test_upload_errors_surface_as_business_errors() {
        let err: ApiError = UploadError::TooLarge { size_kb: 6000, max_kb: 5120 }.into();
        assert_eq!(err, ApiError::Business("Image is 6000 KB, the limit is 5120 KB".to_string()));
    }
}
