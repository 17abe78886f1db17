use crate::error::ValidationResult;
use crate::model::User;
use crate::validation;

/// Creates a user with a non-blank, trimmed name and a trimmed email.
pub fn create_user(id: i64, name: &str, email: &str) -> ValidationResult<User> {
    let valid_name = validation::non_blank(name, "name")?;
    Ok(User::new(id, valid_name, email.trim()))
}
