use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// NetGSM subscriber number (`usercode`).
///
/// Invariant: non-empty after trimming.
pub struct UserCode(String);

impl UserCode {
    /// Wire field name used by NetGSM (`usercode`).
    pub const FIELD: &'static str = "usercode";

    /// Create a validated [`UserCode`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated subscriber number.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// NetGSM account password.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct Password(String);

impl Password {
    /// Wire field name used by NetGSM (`password`).
    pub const FIELD: &'static str = "password";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender id shown as the message originator (`msgheader`).
///
/// Invariant: non-empty after trimming. The value must be registered with
/// your NetGSM account.
pub struct MessageHeader(String);

impl MessageHeader {
    /// Wire field name used by NetGSM (`msgheader`).
    pub const FIELD: &'static str = "msgheader";

    /// Create a validated [`MessageHeader`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated header.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Application key for the NetGSM OTP API (`appkey`).
///
/// Invariant: non-empty after trimming.
pub struct AppKey(String);

impl AppKey {
    /// Wire field name used by NetGSM (`appkey`).
    pub const FIELD: &'static str = "appkey";

    /// Create a validated [`AppKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Shared secret callers of the protected relay routes must present.
///
/// Invariant: non-empty after trimming.
pub struct SecretToken(String);

impl SecretToken {
    /// Environment variable the relay reads this from.
    pub const FIELD: &'static str = "SECRET_TOKEN";

    /// Create a validated [`SecretToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated secret.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Recipient phone number as sent to NetGSM (`no`).
///
/// Invariant: non-empty after trimming. The value is otherwise opaque: no
/// format or country validation is performed, the digits go to the provider
/// exactly as given.
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    /// Wire field name used by NetGSM (`no`).
    pub const FIELD: &'static str = "no";

    /// Create a validated (non-empty) raw phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to NetGSM.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`msg`).
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
pub struct MessageText(String);

impl MessageText {
    /// Wire field name used by NetGSM (`msg`).
    pub const FIELD: &'static str = "msg";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// NetGSM bulk send result code.
///
/// The provider reports this as a string; the value is preserved as-is even
/// when the code is unknown to this crate.
pub struct ResultCode(String);

impl ResultCode {
    /// Code NetGSM returns when the batch was accepted.
    pub const SUCCESS: &'static str = "00";

    /// Construct a result code from its wire representation.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the code exactly as provided by NetGSM.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if this code means the batch was accepted.
    pub fn is_success(&self) -> bool {
        self.0 == Self::SUCCESS
    }

    /// Map this code to a known result code variant, if one exists.
    pub fn known(&self) -> Option<KnownResultCode> {
        KnownResultCode::from_code(&self.0)
    }

    /// Returns `true` if this code indicates invalid credentials or missing API access.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self.known(),
            Some(kind) if kind.is_auth_error()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Known NetGSM bulk send result codes supported by this crate.
///
/// Unknown codes are preserved as [`ResultCode`] and return `None` from
/// [`KnownResultCode::from_code`].
pub enum KnownResultCode {
    Accepted,
    InvalidMessageText,
    InvalidCredentials,
    UnregisteredHeader,
    IysRejected,
    IysBrandNotFound,
    InvalidParameters,
    QuotaExceeded,
    DuplicateSubmission,
}

impl KnownResultCode {
    /// Convert a raw NetGSM result code into a known variant.
    pub fn from_code(code: &str) -> Option<Self> {
        Some(match code {
            "00" => Self::Accepted,
            "20" => Self::InvalidMessageText,
            "30" => Self::InvalidCredentials,
            "40" => Self::UnregisteredHeader,
            "50" => Self::IysRejected,
            "51" => Self::IysBrandNotFound,
            "70" => Self::InvalidParameters,
            "80" => Self::QuotaExceeded,
            "85" => Self::DuplicateSubmission,
            _ => return None,
        })
    }

    /// Whether this code indicates invalid/expired credentials.
    pub fn is_auth_error(self) -> bool {
        matches!(self, Self::InvalidCredentials)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// NetGSM OTP send result code.
///
/// The OTP API reports this as an integer inside the response XML. The value
/// is preserved as-is even when unknown to this crate.
pub struct OtpCode(i32);

impl OtpCode {
    /// Sentinel used when the response carried no parseable code.
    pub const UNKNOWN: Self = Self(-1);

    /// Construct an OTP code from its integer representation.
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    /// Get the integer code as provided by NetGSM.
    pub fn as_i32(self) -> i32 {
        self.0
    }

    /// Returns `true` if this code means the message was accepted.
    pub fn is_success(self) -> bool {
        self.0 == 0
    }

    /// Map this code to a known OTP code variant, if one exists.
    pub fn known(self) -> Option<KnownOtpCode> {
        KnownOtpCode::from_code(self.0)
    }

    /// Returns `true` if this code indicates invalid credentials or missing API access.
    pub fn is_auth_error(self) -> bool {
        matches!(
            self.known(),
            Some(kind) if kind.is_auth_error()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Known NetGSM OTP result codes supported by this crate.
pub enum KnownOtpCode {
    Accepted,
    InvalidMessageText,
    InvalidCredentials,
    UnregisteredHeader,
    InvalidParameters,
    QuotaExceeded,
}

impl KnownOtpCode {
    /// Convert a raw NetGSM OTP code into a known variant.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            0 => Self::Accepted,
            20 => Self::InvalidMessageText,
            30 => Self::InvalidCredentials,
            40 => Self::UnregisteredHeader,
            70 => Self::InvalidParameters,
            80 => Self::QuotaExceeded,
            _ => return None,
        })
    }

    /// Whether this code indicates invalid/expired credentials.
    pub fn is_auth_error(self) -> bool {
        matches!(self, Self::InvalidCredentials)
    }
}
