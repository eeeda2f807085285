//! Booking requests and the order in which they are admitted.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coarse priority tier of a requester.
///
/// Ordered so that a higher tier compares greater.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PriorityClass {
    #[default]
    Standard,
    Vip,
}

impl PriorityClass {
    pub fn is_vip(&self) -> bool {
        matches!(self, PriorityClass::Vip)
    }
}

impl From<bool> for PriorityClass {
    fn from(is_vip: bool) -> Self {
        if is_vip {
            PriorityClass::Vip
        } else {
            PriorityClass::Standard
        }
    }
}

impl fmt::Display for PriorityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriorityClass::Standard => f.write_str("standard"),
            PriorityClass::Vip => f.write_str("vip"),
        }
    }
}

/// A pending request to book a seat.
///
/// Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    requester: String,
    priority: PriorityClass,
    arrival: DateTime<Utc>,
}

impl BookingRequest {
    pub fn new(
        requester: impl Into<String>,
        priority: PriorityClass,
        arrival: DateTime<Utc>,
    ) -> Self {
        Self {
            requester: requester.into(),
            priority,
            arrival,
        }
    }

    /// Identity of whoever made the request.
    pub fn requester(&self) -> &str {
        &self.requester
    }

    pub fn priority(&self) -> PriorityClass {
        self.priority
    }

    /// When the request reached the system.
    pub fn arrival(&self) -> DateTime<Utc> {
        self.arrival
    }
}

/// Admission order between two requests.
///
/// `Less` means `a` is admitted before `b`: higher priority first, then
/// earlier arrival. Requests equal under this comparison are separated by
/// insertion order in the queue.
pub fn admission_cmp(a: &BookingRequest, b: &BookingRequest) -> Ordering {
    b.priority
        .cmp(&a.priority)
        .then_with(|| a.arrival.cmp(&b.arrival))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn priority_from_flag() {
        assert_eq!(PriorityClass::from(true), PriorityClass::Vip);
        assert_eq!(PriorityClass::from(false), PriorityClass::Standard);
        assert!(PriorityClass::Vip > PriorityClass::Standard);
        assert!(PriorityClass::Vip.is_vip());
    }

    #[test]
    fn vip_before_standard_regardless_of_time() {
        let standard = BookingRequest::new("U1", PriorityClass::Standard, at(10));
        let vip = BookingRequest::new("U2", PriorityClass::Vip, at(20));

        assert_eq!(admission_cmp(&vip, &standard), Ordering::Less);
        assert_eq!(admission_cmp(&standard, &vip), Ordering::Greater);
    }

    #[test]
    fn earlier_arrival_wins_within_tier() {
        let early = BookingRequest::new("U3", PriorityClass::Vip, at(15));
        let late = BookingRequest::new("U2", PriorityClass::Vip, at(20));

        assert_eq!(admission_cmp(&early, &late), Ordering::Less);
    }

    #[test]
    fn identical_keys_compare_equal() {
        let a = BookingRequest::new("A", PriorityClass::Standard, at(5));
        let b = BookingRequest::new("B", PriorityClass::Standard, at(5));

        assert_eq!(admission_cmp(&a, &b), Ordering::Equal);
    }

    #[test]
    fn priority_serde_names() {
        assert_eq!(serde_json::to_string(&PriorityClass::Vip).unwrap(), "\"vip\"");
        let p: PriorityClass = serde_json::from_str("\"standard\"").unwrap();
        assert_eq!(p, PriorityClass::Standard);
        assert_eq!(PriorityClass::Vip.to_string(), "vip");
    }
}
