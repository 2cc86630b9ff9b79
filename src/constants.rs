/// ======================= Transient messages =======================
pub const MSG_ENTER_CREDENTIALS: &str = "Enter the credentials to register";
pub const MSG_REGISTER_SUCCESS: &str = "Register successfully";
pub const MSG_REGISTER_FAILED_PREFIX: &str = "Register failed: ";
pub const MSG_NETWORK_ERROR: &str = "Network error";

/// ======================= Field errors =======================
pub const ERR_USERNAME_REQUIRED: &str = "Username is required";
pub const ERR_EMAIL_REQUIRED: &str = "Email is required";
pub const ERR_EMAIL_INVALID: &str = "Email address is invalid";
pub const ERR_PASSWORD_REQUIRED: &str = "Password is required";
pub const ERR_PASSWORD_LENGTH: &str = "Password must be between 8 and 15 characters long";
pub const ERR_PASSWORD_UPPERCASE: &str = "Password must contain at least one uppercase letter";
pub const ERR_PASSWORD_LOWERCASE: &str = "Password must contain at least one lowercase letter";
pub const ERR_PASSWORD_NUMBER: &str = "Password must contain at least one number";
pub const ERR_PASSWORD_SPECIAL: &str = "Password must contain at least one special character";
pub const ERR_TERMS_REQUIRED: &str = "You must agree to the terms & conditions";

/// ======================= Input rules =======================
pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 15;
pub const PASSWORD_SPECIAL_CHARS: &[char] = &['!', '@', '#', '$', '%', '^', '&', '*'];

pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 12;
pub const HINT_USERNAME_CHARSET: &str = "Username should only contain letters, numbers, dots, and underscores.";
pub const HINT_USERNAME_LENGTH: &str = "Username must be between 3 and 12 characters long.";

/// ======================= Routes =======================
pub const ROUTE_LOGIN: &str = "/";
pub const ROUTE_REGISTER: &str = "/register";
pub const ROUTE_DASHBOARD: &str = "/dashboard";
