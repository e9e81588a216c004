// cargo watch -x 'fmt' -x 'run'  // 'run -- --some-arg'

//! IP address / CIDR arithmetic engine.
//!
//! Validates address text incrementally, commits complete addresses, and
//! derives subnet mask, network, broadcast, usable range, host count,
//! class and privacy. IPv4 gets the full treatment; IPv6 is reduced to
//! host count and a unique-local heuristic.

mod error;
pub mod models;
pub mod output;
pub mod parsing;
mod state;

pub use error::ValidationError;
pub use state::{CalculatorState, TextStatus};

/// Evaluate a target like `192.168.1.1/24` or `fd00:0:0:0:0:0:0:1/48`.
///
/// The family is detected by the presence of `:`. The address part must
/// be a complete, committable address; the optional prefix must be in the
/// family's range. Without a prefix the family default applies.
pub fn evaluate(target: &str) -> Result<models::DerivedView, ValidationError> {
    let target = target.trim();
    let (addr_text, prefix_text) = match target.split_once('/') {
        Some((addr, prefix)) => (addr, Some(prefix)),
        None => (target, None),
    };

    let mut state = CalculatorState::new();
    state.set_family(addr_text.contains(':'));

    if let Some(p) = prefix_text {
        let max = state.family().max_prefix();
        let prefix: u32 = p
            .parse()
            .map_err(|_| ValidationError::format(format!("Invalid prefix length: {p}")))?;
        if prefix > u32::from(max) {
            return Err(ValidationError::Range { max });
        }
        state.set_prefix(prefix as u8)?;
    }

    match state.set_address_text(addr_text)? {
        TextStatus::Committed => Ok(state.derived()),
        // The stateful engine tolerates partial text; a one-shot target
        // has no later keystrokes coming.
        TextStatus::Incomplete => Err(ValidationError::format(format!(
            "Incomplete address: {addr_text}"
        ))),
    }
}
