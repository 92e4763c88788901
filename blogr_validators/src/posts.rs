use super::errors::ValidationError;

pub const POST_BODY_MAX_SIZE: usize = 100000;
const COMMENT_BODY_MAX_SIZE: usize = 10000;

fn validate_body(
    body: &str,
    max_size: usize,
) -> Result<(), ValidationError> {
    if body.trim().is_empty() {
        return Err(ValidationError("body is empty"));
    };
    if body.chars().count() > max_size {
        return Err(ValidationError("body is too long"));
    };
    Ok(())
}

pub fn validate_post_body(body: &str) -> Result<(), ValidationError> {
    validate_body(body, POST_BODY_MAX_SIZE)
}

pub fn validate_comment_body(body: &str) -> Result<(), ValidationError> {
    validate_body(body, COMMENT_BODY_MAX_SIZE)
}
