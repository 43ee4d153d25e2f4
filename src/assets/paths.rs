use crate::foundation::error::{StudioError, StudioResult};

/// Validate a client-supplied artifact name: one path segment, no traversal.
pub fn sanitize_file_name(name: &str) -> StudioResult<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(StudioError::validation("file name must be non-empty"));
    }
    if name.contains(['/', '\\', '\0']) {
        return Err(StudioError::validation(
            "file name must not contain path separators",
        ));
    }
    if name == "." || name.contains("..") {
        return Err(StudioError::validation("file name must not contain '..'"));
    }
    Ok(name)
}

/// Build `<prefix>-<composition>-<millis>.<ext>`, keeping only filename-safe characters.
pub fn output_file_name(prefix: &str, composition: &str, millis: i64, ext: &str) -> String {
    let clean = |s: &str| -> String {
        s.chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '-'
                }
            })
            .collect()
    };
    format!("{}-{}-{millis}.{}", clean(prefix), clean(composition), clean(ext))
}
