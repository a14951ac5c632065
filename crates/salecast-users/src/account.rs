//! Signup and login.

use salecast_core::ValidationError;

use crate::error::UserError;
use crate::password::{hash_password, verify_password};
use crate::repository::{User, UserRepository};

/// Register a new account.
///
/// # Errors
///
/// - `UserError::Validation` if the e-mail or password is blank.
/// - `UserError::EmailTaken` if the e-mail is already registered.
/// - Repository I/O failures.
pub fn signup<R: UserRepository + ?Sized>(
    repo: &mut R,
    email: &str,
    password: &str,
) -> Result<User, UserError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::message("email must not be empty").into());
    }
    if password.is_empty() {
        return Err(ValidationError::message("password must not be empty").into());
    }
    if repo.find_by_email(email)?.is_some() {
        return Err(UserError::EmailTaken(email.to_string()));
    }

    let user = repo.create(email, hash_password(password)?)?;
    tracing::info!(user_id = %user.id, "registered user");
    Ok(user)
}

/// Authenticate by e-mail and password.
///
/// # Errors
///
/// Returns `UserError::InvalidCredentials` for an unknown e-mail or a wrong
/// password, without saying which.
pub fn login<R: UserRepository + ?Sized>(
    repo: &R,
    email: &str,
    password: &str,
) -> Result<User, UserError> {
    match repo.find_by_email(email.trim())? {
        Some(user) if verify_password(password, &user.password_hash) => {
            tracing::debug!(user_id = %user.id, "login succeeded");
            Ok(user)
        }
        _ => Err(UserError::InvalidCredentials),
    }
}
