//! Source / destination / host filtering of decoded messages.

use super::matcher::{matches, FilterAddress};
use crate::address::Address;
use crate::parser::schema::Message;
use crate::utils::error::FilterError;

/// Up to three address filters, fixed for the whole run
///
/// **Public** - built once from configuration, then shared by reference
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    source: Option<FilterAddress>,
    destination: Option<FilterAddress>,
    host: Option<FilterAddress>,
}

/// Outcome of running a message through a [`FilterSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterVerdict {
    Accepted,
    SourceRejected,
    DestinationRejected,
    HostRejected,
}

impl FilterSet {
    /// Build a filter set, validating every pattern up front
    ///
    /// # Errors
    /// * `FilterError::InvalidFilterMode` - a pattern is not a canonical mode
    pub fn new(
        source: Option<Address>,
        destination: Option<Address>,
        host: Option<Address>,
    ) -> Result<Self, FilterError> {
        Ok(Self {
            source: source.map(FilterAddress::new).transpose()?,
            destination: destination.map(FilterAddress::new).transpose()?,
            host: host.map(FilterAddress::new).transpose()?,
        })
    }

    /// Build a filter set from textual addresses (e.g. `"5:*"`)
    ///
    /// **Public** - used by the CLI
    ///
    /// # Errors
    /// * `FilterError::InvalidAddress` - the text is not an address
    /// * `FilterError::InvalidFilterMode` - the address is not a valid pattern
    pub fn from_text(
        source: Option<&str>,
        destination: Option<&str>,
        host: Option<&str>,
    ) -> Result<Self, FilterError> {
        Self::new(
            parse_filter("source", source)?,
            parse_filter("destination", destination)?,
            parse_filter("host", host)?,
        )
    }

    pub fn source(&self) -> Option<&Address> {
        self.source.as_ref().map(FilterAddress::address)
    }

    pub fn destination(&self) -> Option<&Address> {
        self.destination.as_ref().map(FilterAddress::address)
    }

    pub fn host(&self) -> Option<&Address> {
        self.host.as_ref().map(FilterAddress::address)
    }

    /// Whether no filter is active
    pub fn is_empty(&self) -> bool {
        self.source.is_none() && self.destination.is_none() && self.host.is_none()
    }

    /// Run the filters in order, stopping at the first failure
    ///
    /// **Public** - `accepts` is the boolean shortcut
    pub fn verdict(&self, msg: &Message) -> FilterVerdict {
        if let Some(filter) = &self.source {
            if !matches(msg.source(), filter) {
                return FilterVerdict::SourceRejected;
            }
        }

        if let Some(filter) = &self.destination {
            if !matches(msg.destination(), filter) {
                return FilterVerdict::DestinationRejected;
            }
        }

        if let Some(filter) = &self.host {
            if !matches(msg.source(), filter) && !matches(msg.destination(), filter) {
                return FilterVerdict::HostRejected;
            }
        }

        FilterVerdict::Accepted
    }

    /// Whether a message passes every active filter
    pub fn accepts(&self, msg: &Message) -> bool {
        self.verdict(msg) == FilterVerdict::Accepted
    }
}

/// Free-function form of [`FilterSet::accepts`]
pub fn accepts(msg: &Message, filters: &FilterSet) -> bool {
    filters.accepts(msg)
}

impl FilterVerdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterVerdict::Accepted => "accepted",
            FilterVerdict::SourceRejected => "source filter fail",
            FilterVerdict::DestinationRejected => "destination filter fail",
            FilterVerdict::HostRejected => "host filter fail",
        }
    }
}

fn parse_filter(role: &'static str, text: Option<&str>) -> Result<Option<Address>, FilterError> {
    text.map(|t| {
        t.parse::<Address>()
            .map_err(|source| FilterError::InvalidAddress { role, source })
    })
    .transpose()
}
