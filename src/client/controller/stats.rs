use crate::model::{
    item::ItemDto,
    review::ReviewDto,
    seller::{SellerDecision, SellerRequestDto, SellerStatus},
    user::{UserDto, UserStatus},
};

/// Tally of seller requests by status, shown on the stats cards.
///
/// A client-side cache of server state: it is derived from the fetched
/// list and then maintained incrementally as staff decide requests, so it
/// can drift when several staff act concurrently. A refetch recounts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestStats {
    pub total: usize,
    pub approved: usize,
    pub rejected: usize,
    pub pending: usize,
}

impl RequestStats {
    pub fn from_requests(requests: &[SellerRequestDto]) -> Self {
        let mut stats = RequestStats {
            total: requests.len(),
            ..Default::default()
        };
        for request in requests {
            match request.status {
                SellerStatus::Pending => stats.pending += 1,
                SellerStatus::Approved => stats.approved += 1,
                SellerStatus::Rejected => stats.rejected += 1,
            }
        }
        stats
    }

    /// Moves one request from the pending bucket into the decided one.
    ///
    /// A no-op when the request was already terminal. Clamps instead of
    /// underflowing if the cached counters have drifted.
    pub fn apply_decision(&mut self, previous: SellerStatus, decision: SellerDecision) {
        if previous.is_terminal() {
            return;
        }
        self.pending = self.pending.saturating_sub(1);
        match decision.target_status() {
            SellerStatus::Approved => self.approved += 1,
            SellerStatus::Rejected => self.rejected += 1,
            SellerStatus::Pending => {}
        }
    }
}

/// Aggregates shown on the dashboard landing page, derived from the
/// fetched collections instead of trusting cached backend numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DashboardStats {
    pub total_users: usize,
    pub active_users: usize,
    pub inactive_users: usize,
    pub total_items: usize,
    pub available_items: usize,
    pub unavailable_items: usize,
    pub total_reviews: usize,
    pub average_rating: f64,
}

impl DashboardStats {
    pub fn from_collections(users: &[UserDto], items: &[ItemDto], reviews: &[ReviewDto]) -> Self {
        let active_users = users
            .iter()
            .filter(|user| user.status == UserStatus::Active)
            .count();
        let available_items = items.iter().filter(|item| item.available).count();
        let average_rating = if reviews.is_empty() {
            0.0
        } else {
            let sum: u32 = reviews.iter().map(|review| u32::from(review.rating)).sum();
            f64::from(sum) / reviews.len() as f64
        };

        DashboardStats {
            total_users: users.len(),
            active_users,
            inactive_users: users.len() - active_users,
            total_items: items.len(),
            available_items,
            unavailable_items: items.len() - available_items,
            total_reviews: reviews.len(),
            average_rating,
        }
    }
}
