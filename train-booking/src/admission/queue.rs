//! Priority queue of pending booking requests.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use super::request::{BookingRequest, admission_cmp};

/// A request together with its insertion sequence number.
#[derive(Debug, Clone)]
struct Queued {
    request: BookingRequest,
    sequence: u64,
}

impl Queued {
    /// Position in admission order: `Less` is admitted first.
    fn admission(&self, other: &Self) -> Ordering {
        admission_cmp(&self.request, &other.request)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap yields the next request to admit.
        other.admission(self)
    }
}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Queued {}

/// Pending booking requests ordered for admission.
///
/// Requests are ordered by priority class (highest first), then arrival
/// time (earliest first), then the order in which they were submitted.
/// The queue decides sequence only; whether a request gets a seat is up to
/// whoever consumes the admission order.
#[derive(Debug, Default)]
pub struct BookingAdmissionQueue {
    heap: BinaryHeap<Queued>,
    next_sequence: u64,
}

impl BookingAdmissionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a request. Never rejects.
    ///
    /// Returns the request's insertion sequence number, which breaks ties
    /// between requests with the same priority and arrival time.
    pub fn submit(&mut self, request: BookingRequest) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        debug!(
            requester = request.requester(),
            priority = %request.priority(),
            arrival = %request.arrival(),
            sequence,
            "booking request queued"
        );

        self.heap.push(Queued { request, sequence });
        sequence
    }

    /// Remove and return every pending request in admission order.
    pub fn drain_admission_order(&mut self) -> Vec<BookingRequest> {
        let admitted: Vec<BookingRequest> = std::iter::from_fn(|| self.heap.pop())
            .map(|queued| queued.request)
            .collect();

        debug!(count = admitted.len(), "admission queue drained");
        admitted
    }

    /// Pending requests in admission order, leaving the queue untouched.
    pub fn admission_order(&self) -> Vec<BookingRequest> {
        // into_sorted_vec is ascending by heap order, i.e. last admitted first.
        self.heap
            .clone()
            .into_sorted_vec()
            .into_iter()
            .rev()
            .map(|queued| queued.request)
            .collect()
    }

    /// The request that would be admitted next.
    pub fn peek(&self) -> Option<&BookingRequest> {
        self.heap.peek().map(|queued| &queued.request)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

/// An admission queue shared between request handlers.
///
/// One lock guards the heap, so each submit and each drain is atomic with
/// respect to the others: no request is lost or seen twice.
#[derive(Debug, Clone, Default)]
pub struct SharedAdmissionQueue {
    inner: Arc<Mutex<BookingAdmissionQueue>>,
}

impl SharedAdmissionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, BookingAdmissionQueue> {
        // Every queue operation leaves the heap valid, so a panic in another
        // holder does not invalidate it.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn submit(&self, request: BookingRequest) -> u64 {
        self.lock().submit(request)
    }

    /// Submit a request and return the admission order including it, as one
    /// atomic step.
    pub fn submit_and_snapshot(&self, request: BookingRequest) -> Vec<BookingRequest> {
        let mut queue = self.lock();
        queue.submit(request);
        queue.admission_order()
    }

    pub fn drain_admission_order(&self) -> Vec<BookingRequest> {
        self.lock().drain_admission_order()
    }

    pub fn admission_order(&self) -> Vec<BookingRequest> {
        self.lock().admission_order()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admission::PriorityClass;
    use chrono::{DateTime, TimeZone, Utc};
    use std::collections::HashSet;
    use std::thread;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn request(user: &str, vip: bool, secs: i64) -> BookingRequest {
        BookingRequest::new(user, PriorityClass::from(vip), at(secs))
    }

    fn requesters(requests: &[BookingRequest]) -> Vec<&str> {
        requests.iter().map(BookingRequest::requester).collect()
    }

    #[test]
    fn vip_first_then_earliest() {
        let mut queue = BookingAdmissionQueue::new();
        queue.submit(request("U1", false, 10));
        queue.submit(request("U2", true, 20));
        queue.submit(request("U3", true, 15));

        let order = queue.drain_admission_order();
        assert_eq!(requesters(&order), vec!["U3", "U2", "U1"]);
    }

    #[test]
    fn empty_queue_drains_to_nothing() {
        let mut queue = BookingAdmissionQueue::new();
        assert!(queue.drain_admission_order().is_empty());
        assert!(queue.peek().is_none());
    }

    #[test]
    fn identical_keys_keep_submission_order() {
        let mut queue = BookingAdmissionQueue::new();
        let first = queue.submit(request("A", false, 7));
        let second = queue.submit(request("B", false, 7));
        queue.submit(request("C", false, 7));
        assert!(first < second);

        let order = queue.drain_admission_order();
        assert_eq!(requesters(&order), vec!["A", "B", "C"]);
    }

    #[test]
    fn duplicate_requests_are_both_retained() {
        let mut queue = BookingAdmissionQueue::new();
        queue.submit(request("Same", true, 1));
        queue.submit(request("Same", true, 1));

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.drain_admission_order().len(), 2);
    }

    #[test]
    fn drain_empties_queue() {
        let mut queue = BookingAdmissionQueue::new();
        queue.submit(request("U1", false, 1));
        queue.drain_admission_order();

        assert!(queue.is_empty());
        queue.submit(request("U2", false, 2));
        assert_eq!(requesters(&queue.drain_admission_order()), vec!["U2"]);
    }

    #[test]
    fn snapshot_does_not_consume() {
        let mut queue = BookingAdmissionQueue::new();
        queue.submit(request("U1", false, 10));
        queue.submit(request("U2", true, 20));

        let snapshot = queue.admission_order();
        assert_eq!(requesters(&snapshot), vec!["U2", "U1"]);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.peek().map(BookingRequest::requester), Some("U2"));
        assert_eq!(queue.drain_admission_order(), snapshot);
    }

    #[test]
    fn shared_submit_and_snapshot() {
        let queue = SharedAdmissionQueue::new();
        queue.submit(request("U1", false, 10));
        let order = queue.submit_and_snapshot(request("U2", true, 20));

        assert_eq!(requesters(&order), vec!["U2", "U1"]);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn concurrent_submissions_none_lost_or_duplicated() {
        let queue = SharedAdmissionQueue::new();

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let queue = queue.clone();
                thread::spawn(move || {
                    for i in 0..50 {
                        // Same arrival for everyone forces tie-breaking
                        queue.submit(request(&format!("{t}-{i}"), i % 2 == 0, 100));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let order = queue.drain_admission_order();
        assert_eq!(order.len(), 400);

        let unique: HashSet<&str> = order.iter().map(BookingRequest::requester).collect();
        assert_eq!(unique.len(), 400);

        // All VIPs come before all standard requests
        let first_standard = order
            .iter()
            .position(|r| !r.priority().is_vip())
            .unwrap();
        assert!(order[first_standard..].iter().all(|r| !r.priority().is_vip()));
        assert!(queue.is_empty());
    }

    #[test]
    fn concurrent_drains_split_without_overlap() {
        let queue = SharedAdmissionQueue::new();
        for i in 0..200 {
            queue.submit(request(&format!("U{i}"), false, i));
        }

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let queue = queue.clone();
                thread::spawn(move || queue.drain_admission_order())
            })
            .collect();

        let mut total = 0;
        let mut seen = HashSet::new();
        for handle in handles {
            for r in handle.join().unwrap() {
                total += 1;
                seen.insert(r.requester().to_string());
            }
        }

        assert_eq!(total, 200);
        assert_eq!(seen.len(), 200);
    }
}
