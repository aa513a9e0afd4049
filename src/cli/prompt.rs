//! Interactive credential prompting.

use dialoguer::{Input, Password};

use crate::api::Credentials;
use crate::config::validation::validate_email;
use crate::error::{Error, Result};

/// Collect login credentials, prompting for whatever was not supplied.
pub fn prompt_credentials(email: Option<String>, password: Option<String>) -> Result<Credentials> {
    let email = match email {
        Some(email) => email,
        None => Input::<String>::new()
            .with_prompt("Email")
            .interact_text()
            .map_err(prompt_error)?,
    };
    let email = email.trim().to_string();
    validate_email(&email)?;

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .interact()
            .map_err(prompt_error)?,
    };

    if password.is_empty() {
        return Err(Error::MissingConfig("password".to_string()));
    }

    Ok(Credentials::new(email, password))
}

fn prompt_error(e: dialoguer::Error) -> Error {
    Error::Config(format!("Failed to read credentials: {}", e))
}
