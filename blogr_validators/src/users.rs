use regex::Regex;

use super::errors::ValidationError;

const USERNAME_RE: &str = r"^[A-Za-z][A-Za-z0-9_.]*$";
const USERNAME_LENGTH_MAX: usize = 64;
const EMAIL_RE: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";
const EMAIL_LENGTH_MAX: usize = 64;
const NAME_LENGTH_MAX: usize = 64;
const LOCATION_LENGTH_MAX: usize = 64;

pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.is_empty() {
        return Err(ValidationError("username is empty"));
    };
    if username.chars().count() > USERNAME_LENGTH_MAX {
        return Err(ValidationError("username is too long"));
    };
    let username_regexp = Regex::new(USERNAME_RE)
        .expect("regexp should be valid");
    if !username_regexp.is_match(username) {
        return Err(ValidationError(
            "usernames must have only letters, numbers, dots or underscores",
        ));
    };
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError("email is empty"));
    };
    if email.chars().count() > EMAIL_LENGTH_MAX {
        return Err(ValidationError("email is too long"));
    };
    let email_regexp = Regex::new(EMAIL_RE)
        .expect("regexp should be valid");
    if !email_regexp.is_match(email) {
        return Err(ValidationError("invalid email address"));
    };
    Ok(())
}

pub fn validate_password(
    password: &str,
    confirmation: &str,
) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError("password is empty"));
    };
    if password != confirmation {
        return Err(ValidationError("passwords must match"));
    };
    Ok(())
}

pub fn validate_profile(
    name: Option<&str>,
    location: Option<&str>,
) -> Result<(), ValidationError> {
    if let Some(name) = name {
        if name.chars().count() > NAME_LENGTH_MAX {
            return Err(ValidationError("name is too long"));
        };
    };
    if let Some(location) = location {
        if location.chars().count() > LOCATION_LENGTH_MAX {
            return Err(ValidationError("location is too long"));
        };
    };
    Ok(())
}
