//! Sensitive data marker for automatic redaction
//!
//! Customer contact details (phone numbers, email addresses, street
//! addresses) are personal data and must not reach log output verbatim.

use std::fmt;

/// Wrapper for personal data that redacts itself in Debug and Display
///
/// # Example
///
/// ```
/// use artbuddy_core_types::Sensitive;
///
/// let phone = Sensitive::new("91234567");
/// assert_eq!(format!("{:?}", phone), "***REDACTED***");
/// assert_eq!(format!("{}", phone), "***REDACTED***");
///
/// // Access the actual value when needed
/// assert_eq!(phone.expose(), &"91234567");
/// ```
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    /// Wrap a sensitive value
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the underlying value
    pub fn expose(&self) -> &T {
        &self.0
    }

    /// Consume the wrapper and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T: Clone> Clone for Sensitive<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: PartialEq> PartialEq for Sensitive<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_and_display_redact() {
        let email = Sensitive::new("alice@example.com");
        assert_eq!(format!("{:?}", email), "***REDACTED***");
        assert_eq!(format!("{}", email), "***REDACTED***");
    }

    #[test]
    fn test_expose_and_into_inner() {
        let phone = Sensitive::new(String::from("98765432"));
        assert_eq!(phone.expose(), "98765432");
        assert_eq!(phone.clone(), phone);
        assert_eq!(phone.into_inner(), "98765432");
    }

    #[test]
    fn test_redacts_inside_derived_debug() {
        #[derive(Debug)]
        #[allow(dead_code)]
        struct Contact {
            name: String,
            phone: Sensitive<String>,
        }

        let contact = Contact {
            name: "Alice".to_string(),
            phone: Sensitive::new("91234567".to_string()),
        };

        let debug_str = format!("{:?}", contact);
        assert!(debug_str.contains("Alice"));
        assert!(debug_str.contains("***REDACTED***"));
        assert!(!debug_str.contains("91234567"));
    }
}
