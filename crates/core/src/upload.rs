//! Image upload rules: content-type acceptance, stored file naming and the
//! URLs handed back to clients.

use crate::error::CoreError;

/// Declared content types must start with this prefix.
pub const IMAGE_CONTENT_TYPE_PREFIX: &str = "image/";

/// Key prefix for objects written to the S3 bucket.
pub const S3_KEY_PREFIX: &str = "clothing-items/";

/// URL path under which the local upload directory is served.
pub const LOCAL_URL_PREFIX: &str = "/uploads";

/// Reject anything whose declared content type is not an image, returning
/// the accepted content type otherwise.
pub fn validate_image_content_type<'a>(
    filename: &str,
    content_type: Option<&'a str>,
) -> Result<&'a str, CoreError> {
    match content_type {
        Some(ct) if ct.starts_with(IMAGE_CONTENT_TYPE_PREFIX) => Ok(ct),
        _ => Err(CoreError::Validation(format!(
            "File {filename} is not an image"
        ))),
    }
}

/// Extension of `filename` including the leading dot, or `""`.
///
/// Only the last path component is considered, and a leading dot (as in
/// `.hidden`) does not start an extension.
pub fn file_extension(filename: &str) -> &str {
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);
    let stem_start = base.len() - base.trim_start_matches('.').len();
    match base[stem_start..].rfind('.') {
        Some(idx) => &base[stem_start + idx..],
        None => "",
    }
}

/// Random 128-bit name for a stored file, keeping the original extension.
pub fn unique_filename(original: &str) -> String {
    format!("{}{}", uuid::Uuid::new_v4(), file_extension(original))
}

/// Object key for a stored file name.
pub fn s3_object_key(stored_name: &str) -> String {
    format!("{S3_KEY_PREFIX}{stored_name}")
}

/// Public HTTPS URL of an object in a bucket.
pub fn s3_public_url(bucket: &str, region: &str, key: &str) -> String {
    format!("https://{bucket}.s3.{region}.amazonaws.com/{key}")
}

/// Root-relative URL of a file in the local upload directory.
pub fn local_url(stored_name: &str) -> String {
    format!("{LOCAL_URL_PREFIX}/{stored_name}")
}
