//! Advisory input rules for the admin forms.
//!
//! None of these block submission; the server remains the authority. The
//! browser layer rewrites input values through the sanitizers and renders the
//! feedback returned here.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

pub const IP_ADDRESS_FEEDBACK: &str = "Please enter a valid IP address (e.g., 192.168.1.100)";

const MACHINE_ID_MAX_DIGITS: usize = 2;

/// Dotted quad with 1-3 digit octets, each at most 255. Leading zeros are
/// accepted.
#[must_use]
pub fn is_valid_ip_address(value: &str) -> bool {
    let mut octets = 0;
    for part in value.split('.') {
        octets += 1;
        if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        match part.parse::<u16>() {
            Ok(n) if n <= 255 => {}
            _ => return false,
        }
    }
    octets == 4
}

/// Digits only, truncated to two characters.
#[must_use]
pub fn sanitize_machine_id(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).take(MACHINE_ID_MAX_DIGITS).collect()
}

/// ASCII letters and digits only.
#[must_use]
pub fn sanitize_rfid_tag(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_alphanumeric).collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    Weak,
    Moderate,
    Strong,
}

impl PasswordStrength {
    /// Score by length and the number of character classes present
    /// (upper, lower, digit, other).
    #[must_use]
    pub fn evaluate(password: &str) -> Self {
        let len = password.chars().count();
        if len < 6 {
            return Self::Weak;
        }
        let classes = [
            password.chars().any(|c| c.is_ascii_uppercase()),
            password.chars().any(|c| c.is_ascii_lowercase()),
            password.chars().any(|c| c.is_ascii_digit()),
            password.chars().any(|c| !c.is_ascii_alphanumeric()),
        ]
        .into_iter()
        .filter(|present| *present)
        .count();

        if len >= 8 && classes >= 3 {
            Self::Strong
        } else if classes >= 2 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Weak => "Password is too weak",
            Self::Moderate => "Password strength: Moderate",
            Self::Strong => "Password strength: Strong",
        }
    }

    /// Inline text colour for the feedback line.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Weak => "#dc3545",
            Self::Moderate => "#ffc107",
            Self::Strong => "#198754",
        }
    }
}
