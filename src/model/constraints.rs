use once_cell::sync::Lazy;
use regex::Regex;

use super::form::RegisterForm;
use crate::constants::HINT_USERNAME_CHARSET;
use crate::constants::HINT_USERNAME_LENGTH;
use crate::constants::USERNAME_MAX_LEN;
use crate::constants::USERNAME_MIN_LEN;

static USERNAME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._]+$").expect("static regex"));

/// Username rules the input surface enforces before the form is handed to the controller.
///
/// Like `minlength` and `pattern`, they only apply to a non-empty value: an empty username is
/// reported by the validator instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintViolation {
    UsernameLength,
    UsernameCharset,
}

impl ConstraintViolation {
    pub fn hint(&self) -> &'static str {
        match self {
            ConstraintViolation::UsernameLength => HINT_USERNAME_LENGTH,
            ConstraintViolation::UsernameCharset => HINT_USERNAME_CHARSET,
        }
    }
}

pub fn check_input_constraints(form: &RegisterForm) -> Result<(), ConstraintViolation> {
    let username = form.username.as_str();
    if username.is_empty() {
        return Ok(());
    }

    let len = username.chars().count();
    if !(USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&len) {
        return Err(ConstraintViolation::UsernameLength);
    }

    if !USERNAME_PATTERN.is_match(username) {
        return Err(ConstraintViolation::UsernameCharset);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::model::form::FieldUpdate;

    fn with_username(username: &str) -> RegisterForm {
        RegisterForm {
            username: username.to_string(),
            ..Default::default()
        }
    }

    #[rstest]
    #[case("", Ok(()))]
    #[case("abc", Ok(()))]
    #[case("john.doe_99", Ok(()))]
    #[case("ab", Err(ConstraintViolation::UsernameLength))]
    #[case("abcdefghijklm", Err(ConstraintViolation::UsernameLength))]
    #[case("john doe", Err(ConstraintViolation::UsernameCharset))]
    #[case("jöhn", Err(ConstraintViolation::UsernameCharset))]
    #[case("a-b-c", Err(ConstraintViolation::UsernameCharset))]
    fn username_constraints(
        #[case] username: &str,
        #[case] expected: Result<(), ConstraintViolation>,
    ) {
        assert_eq!(check_input_constraints(&with_username(username)), expected);
    }

    #[test]
    fn truncated_username_passes_length_rule() {
        let form = RegisterForm::default().apply(FieldUpdate::Username("averyveryverylongname".to_string()));
        assert_eq!(check_input_constraints(&form), Ok(()));
    }
}
