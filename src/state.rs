//! The calculator's single mutable aggregate.

use crate::error::ValidationError;
use crate::models::{
    Address, AddressFamily, DerivedView, Ipv4Address, Ipv6Address, Ipv6Summary, NetworkView,
};
use crate::parsing::{commit_if_complete, validate_incremental};

/// Outcome of accepting a piece of address text.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextStatus {
    /// The text was a complete address and the committed value moved.
    Committed,
    /// The text is valid so far but not yet a complete address.
    Incomplete,
}

/// The single mutable aggregate behind the calculator.
///
/// Mutated only through the operations below; derived values are
/// recomputed from it on every read. Each family keeps its own text and
/// committed address so toggling away and back restores them.
#[derive(Debug, Clone)]
pub struct CalculatorState {
    family: AddressFamily,
    v4_text: String,
    v6_text: String,
    committed_v4: Ipv4Address,
    committed_v6: Option<Ipv6Address>,
    prefix: u8,
    last_error: Option<ValidationError>,
}

impl CalculatorState {
    /// Fresh state showing the default example address.
    pub fn new() -> CalculatorState {
        CalculatorState {
            family: AddressFamily::V4,
            v4_text: String::from("192.168.1.1"),
            v6_text: String::new(),
            committed_v4: Ipv4Address::from([192, 168, 1, 1]),
            committed_v6: None,
            prefix: AddressFamily::V4.default_prefix(),
            last_error: None,
        }
    }

    /// Switch address family.
    ///
    /// A real change resets the prefix to the family default and clears
    /// the last error; each family's text and committed address stay
    /// retained for the way back. Selecting the current family again
    /// changes nothing.
    pub fn set_family(&mut self, v6: bool) {
        let family = if v6 {
            AddressFamily::V6
        } else {
            AddressFamily::V4
        };
        if family == self.family {
            return;
        }
        log::debug!("Switching family to {}", family);
        self.family = family;
        self.prefix = family.default_prefix();
        self.last_error = None;
    }

    /// Accept new address text for the current family.
    ///
    /// Valid text is stored and, when complete, committed; partial text
    /// reports [`TextStatus::Incomplete`] and leaves the committed
    /// address where it was. Invalid text changes nothing: the previous
    /// text and committed address survive, the error is recorded and
    /// returned.
    pub fn set_address_text(&mut self, text: &str) -> Result<TextStatus, ValidationError> {
        if let Err(e) = validate_incremental(text, self.family) {
            log::warn!("Rejected {} text {:?}: {}", self.family, text, e);
            self.last_error = Some(e.clone());
            return Err(e);
        }
        self.last_error = None;
        match self.family {
            AddressFamily::V4 => self.v4_text = text.to_string(),
            AddressFamily::V6 => self.v6_text = text.to_string(),
        }
        match commit_if_complete(text, self.family) {
            Some(Address::V4(addr)) => {
                log::debug!("Committed IPv4 address {}", addr);
                self.committed_v4 = addr;
                Ok(TextStatus::Committed)
            }
            Some(Address::V6(addr)) => {
                log::debug!("Committed IPv6 address {}", addr);
                self.committed_v6 = Some(addr);
                Ok(TextStatus::Committed)
            }
            None => Ok(TextStatus::Incomplete),
        }
    }

    /// Set the prefix length for the current family.
    ///
    /// Out-of-range values are rejected with the range error and the
    /// prior prefix stays in effect.
    pub fn set_prefix(&mut self, prefix: u8) -> Result<(), ValidationError> {
        let max = self.family.max_prefix();
        if prefix > max {
            let e = ValidationError::Range { max };
            log::warn!("Rejected prefix {}: {}", prefix, e);
            self.last_error = Some(e.clone());
            return Err(e);
        }
        log::debug!("Prefix set to {}", prefix);
        self.last_error = None;
        self.prefix = prefix;
        Ok(())
    }

    /// Snapshot of every derived field for the current family.
    pub fn derived(&self) -> DerivedView {
        match self.family {
            AddressFamily::V4 => {
                // The state never holds an out-of-range prefix.
                let view = NetworkView::derive(&self.committed_v4, self.prefix)
                    .unwrap_or_else(|e| panic!("Error deriving IPv4 view: {}", e));
                DerivedView::V4(view)
            }
            AddressFamily::V6 => {
                let summary = Ipv6Summary::derive(self.committed_v6.as_ref(), self.prefix)
                    .unwrap_or_else(|e| panic!("Error deriving IPv6 summary: {}", e));
                DerivedView::V6(summary)
            }
        }
    }

    /// The family currently selected.
    pub fn family(&self) -> AddressFamily {
        self.family
    }

    /// The prefix length currently in effect.
    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// The current family's address text as last accepted.
    pub fn address_text(&self) -> &str {
        match self.family {
            AddressFamily::V4 => &self.v4_text,
            AddressFamily::V6 => &self.v6_text,
        }
    }

    /// The error recorded by the most recent rejected operation, if the
    /// latest operation was rejected.
    pub fn last_error(&self) -> Option<&ValidationError> {
        self.last_error.as_ref()
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        CalculatorState::new()
    }
}
