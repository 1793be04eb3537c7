use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::{AccountStatus, AdminUser, Booking, BookingStatus, parse_price};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingLookup {
    Reference { reference: String, last_name: String },
    Email { email: String },
}

/// Finds bookings matching `lookup`, ignoring case and surrounding
/// whitespace. No match is an empty list.
pub fn find_bookings(bookings: &[Booking], lookup: &BookingLookup) -> Vec<Booking> {
    let same = |a: &str, b: &str| a.trim().eq_ignore_ascii_case(b.trim());

    bookings
        .iter()
        .filter(|b| match lookup {
            BookingLookup::Reference {
                reference,
                last_name,
            } => same(&b.reference, reference) && same(&b.last_name, last_name),
            BookingLookup::Email { email } => same(&b.email, email),
        })
        .cloned()
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub total_users: usize,
    pub active_users: usize,
    pub total_bookings: usize,
    pub bookings_by_status: BTreeMap<String, usize>,
    pub revenue: u64,
}

impl DashboardSummary {
    /// Revenue counts every booking that was not cancelled.
    pub fn compute(users: &[AdminUser], bookings: &[Booking]) -> Self {
        let mut bookings_by_status = BTreeMap::new();
        for booking in bookings {
            *bookings_by_status
                .entry(booking.status.to_string())
                .or_insert(0) += 1;
        }

        let revenue = bookings
            .iter()
            .filter(|b| b.status != BookingStatus::Cancelled)
            .map(|b| parse_price(&b.amount))
            .sum();

        Self {
            total_users: users.len(),
            active_users: users
                .iter()
                .filter(|u| u.status == AccountStatus::Active)
                .count(),
            total_bookings: bookings.len(),
            bookings_by_status,
            revenue,
        }
    }
}
