//! Parent PIN entry
//!
//! Demonstration-grade gate: the PIN is compared as plain text and there
//! is no attempt counting.

use super::ValidationError;
use crate::DEMO_PIN;
use tracing::warn;

pub const PIN_LENGTH: usize = 4;

/// Digit-only input buffer for a PIN
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinPad {
    digits: String,
}

impl PinPad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a digit. Non-digits and input past four digits are dropped.
    pub fn push(&mut self, c: char) -> bool {
        if c.is_ascii_digit() && self.digits.len() < PIN_LENGTH {
            self.digits.push(c);
            true
        } else {
            false
        }
    }

    pub fn backspace(&mut self) {
        self.digits.pop();
    }

    pub fn clear(&mut self) {
        self.digits.clear();
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.digits.len() == PIN_LENGTH
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }
}

/// Compares entered PINs with the configured one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentGate {
    pin: String,
}

impl ParentGate {
    pub fn new(pin: impl Into<String>) -> Self {
        Self { pin: pin.into() }
    }

    pub fn verify(&self, entered: &str) -> Result<(), ValidationError> {
        if entered == self.pin {
            Ok(())
        } else {
            warn!("parent PIN rejected");
            if self.pin == DEMO_PIN {
                Err(ValidationError::IncorrectDemoPin)
            } else {
                Err(ValidationError::IncorrectPin)
            }
        }
    }
}

impl Default for ParentGate {
    fn default() -> Self {
        Self::new(DEMO_PIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_pad_accepts_only_digits() {
        let mut pad = PinPad::new();
        assert!(pad.push('1'));
        assert!(!pad.push('a'));
        assert!(pad.push('2'));
        assert_eq!(pad.as_str(), "12");
        pad.backspace();
        assert_eq!(pad.as_str(), "1");
    }

    #[test]
    fn test_pin_pad_caps_length() {
        let mut pad = PinPad::new();
        for c in "123456".chars() {
            pad.push(c);
        }
        assert_eq!(pad.as_str(), "1234");
        assert!(pad.is_complete());
    }

    #[test]
    fn test_gate_exact_match() {
        let gate = ParentGate::default();
        assert!(gate.verify("1234").is_ok());
        assert_eq!(gate.verify("4321"), Err(ValidationError::IncorrectDemoPin));
        assert_eq!(gate.verify("12345"), Err(ValidationError::IncorrectDemoPin));
        assert_eq!(
            ValidationError::IncorrectDemoPin.to_string(),
            "Incorrect PIN. Try 1234 for demo."
        );
    }

    #[test]
    fn test_gate_retry_allowed() {
        let gate = ParentGate::new("0000");
        for _ in 0..10 {
            assert!(gate.verify("9999").is_err());
        }
        assert!(gate.verify("0000").is_ok());
    }

    #[test]
    fn test_custom_pin_hides_demo_hint() {
        let gate = ParentGate::new("0000");
        let err = gate.verify("1234").unwrap_err();
        assert_eq!(err, ValidationError::IncorrectPin);
        assert!(!err.to_string().contains("1234"));
    }
}
