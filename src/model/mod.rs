pub mod constraints;
pub mod form;
pub mod lifecycle;
pub mod message;
pub mod register;
pub mod validation;

pub use constraints::ConstraintViolation;
pub use form::Field;
pub use form::FieldUpdate;
pub use form::RegisterForm;
pub use lifecycle::Lifecycle;
pub use lifecycle::LifecycleEvent;
pub use lifecycle::SubmissionState;
pub use message::TransientMessage;
pub use register::RegisterRequest;
pub use register::RegisterResponse;
pub use register::RegisterResult;
pub use validation::Advisory;
pub use validation::ValidationErrors;
pub use validation::ValidationReport;
