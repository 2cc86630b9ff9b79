use crate::config::SessionConfig;
use crate::model::RegisterForm;
use crate::model::RegisterResponse;
use crate::model::RegisterResult;

/// Test fixtures for creating consistent test data
pub struct TestFixtures;

impl TestFixtures {
    /// A form that passes every client-side rule
    pub fn valid_form() -> RegisterForm {
        RegisterForm {
            username: "jane.doe".to_string(),
            email: "jane@example.com".to_string(),
            password: "Abcdef1!".to_string(),
            terms: true,
        }
    }

    pub fn session_config() -> SessionConfig {
        SessionConfig::default()
    }

    pub fn success() -> RegisterResult {
        RegisterResult::Success {
            body: RegisterResponse {
                message: Some("User registered successfully".to_string()),
            },
        }
    }

    pub fn rejected(message: &str) -> RegisterResult {
        RegisterResult::ServerRejected {
            status: 400,
            body: RegisterResponse {
                message: Some(message.to_string()),
            },
        }
    }
}
