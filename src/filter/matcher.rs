//! Address pattern matching.
//!
//! The filter address is the pattern and the candidate is the value being
//! tested. Broadcast patterns are deliberately wide: a local broadcast
//! pattern accepts any local station, and a remote broadcast pattern accepts
//! any station on the same remote network.

use crate::address::Address;
use crate::utils::error::FilterError;

/// An address that has been checked to be a valid match pattern
///
/// **Public** - the only way to get one is through [`FilterAddress::new`],
/// so matching against it cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterAddress(Address);

impl FilterAddress {
    /// Validate an address for use as a pattern
    ///
    /// # Errors
    /// * `FilterError::InvalidFilterMode` - the address is not one of the
    ///   five canonical modes
    pub fn new(address: Address) -> Result<Self, FilterError> {
        if address.is_canonical() {
            Ok(Self(address))
        } else {
            Err(FilterError::InvalidFilterMode(address.mode().to_string()))
        }
    }

    pub fn address(&self) -> &Address {
        &self.0
    }
}

/// Check whether `candidate` matches a validated pattern
///
/// **Public** - main entry point for address matching
pub fn matches(candidate: &Address, filter: &FilterAddress) -> bool {
    // FilterAddress never holds a non-canonical pattern
    match_pattern(candidate, &filter.0).unwrap_or(false)
}

/// Check whether `candidate` matches an arbitrary address used as a pattern
///
/// **Public** - for callers holding an unvalidated pattern
///
/// # Errors
/// * `FilterError::InvalidFilterMode` - `filter` is not a canonical mode
pub fn try_matches(candidate: &Address, filter: &Address) -> Result<bool, FilterError> {
    match_pattern(candidate, filter)
        .ok_or_else(|| FilterError::InvalidFilterMode(filter.mode().to_string()))
}

/// Evaluate the match table; `None` when the pattern has no rule
///
/// **Private** - shared by `matches` and `try_matches`
fn match_pattern(candidate: &Address, pattern: &Address) -> Option<bool> {
    let matched = match pattern {
        Address::LocalBroadcast => matches!(
            candidate,
            Address::LocalStation(_) | Address::LocalBroadcast
        ),
        Address::LocalStation(station) => matches!(
            candidate,
            Address::LocalStation(c) if c == station
        ),
        Address::RemoteBroadcast(net) => matches!(
            candidate,
            Address::RemoteStation(c, _) | Address::RemoteBroadcast(c) if c == net
        ),
        Address::RemoteStation(net, station) => matches!(
            candidate,
            Address::RemoteStation(c_net, c_station) if c_net == net && c_station == station
        ),
        Address::GlobalBroadcast => matches!(candidate, Address::GlobalBroadcast),
        Address::Null => return None,
    };

    Some(matched)
}
