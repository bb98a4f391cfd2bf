/// Upper bound (exclusive) of the "Underweight" band.
pub const UNDERWEIGHT_UPPER_BOUND: f64 = 18.5;

/// Upper bound (exclusive) of the "Normal Weight" band.
pub const NORMAL_WEIGHT_UPPER_BOUND: f64 = 25.0;

/// Upper bound (exclusive) of the "Overweight" band. Anything at or above is "Obese".
pub const OVERWEIGHT_UPPER_BOUND: f64 = 30.0;

/// Date format accepted for medical records.
pub const RECORD_DATE_FORMAT: &str = "%Y-%m-%d";

/// Timestamp suffix used for full export file names.
pub const EXPORT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Client-facing message for a duplicate signup.
pub const EMAIL_ALREADY_REGISTERED: &str = "Email already registered";

/// Client-facing message for any failed login.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";
