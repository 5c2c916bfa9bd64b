//! Numeric summaries over reviews.

use crate::types::{Rating, Review};

/// Arithmetic mean of the ratings, or `None` for an empty set.
pub fn average_rating<'a, I>(reviews: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a Review>,
{
    let (sum, count) = reviews
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), review| {
            (sum + u64::from(review.rating.get()), count + 1)
        });
    (count > 0).then(|| sum as f64 / count as f64)
}

/// Count of reviews per star value, index 0 holding 5 stars and index 4 one star.
pub fn rating_distribution<'a, I>(reviews: I) -> [usize; 5]
where
    I: IntoIterator<Item = &'a Review>,
{
    let mut buckets = [0usize; 5];
    for review in reviews {
        buckets[usize::from(Rating::MAX - review.rating.get())] += 1;
    }
    buckets
}

/// One bar of the distribution chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RatingBucket {
    pub stars: u8,
    pub count: usize,
    /// Share of all reviews, `0.0..=100.0`
    pub percent: f64,
}

/// Everything the review header shows: average, total and distribution.
///
/// Only visible reviews count; pending ones are dropped before aggregation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RatingSummary {
    pub average: Option<f64>,
    pub total: usize,
    pub distribution: [usize; 5],
}

impl RatingSummary {
    pub fn from_reviews(reviews: &[Review]) -> Self {
        let visible: Vec<&Review> = reviews.iter().filter(|r| r.is_visible()).collect();
        Self {
            average: average_rating(visible.iter().copied()),
            total: visible.len(),
            distribution: rating_distribution(visible.iter().copied()),
        }
    }

    /// Average to one decimal place ("4.7").
    pub fn display_average(&self) -> Option<String> {
        self.average.map(|avg| format!("{avg:.1}"))
    }

    /// Stars drawn filled in the header: the average rounded down.
    pub fn filled_stars(&self) -> usize {
        self.average.map(|avg| avg.floor() as usize).unwrap_or(0)
    }

    pub fn buckets(&self) -> impl Iterator<Item = RatingBucket> + '_ {
        self.distribution.iter().enumerate().map(move |(i, &count)| {
            let percent = if self.total > 0 {
                count as f64 / self.total as f64 * 100.0
            } else {
                0.0
            };
            RatingBucket {
                stars: Rating::MAX - i as u8,
                count,
                percent,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ReviewStatus;
    use pretty_assertions::assert_eq;

    fn rated(values: &[u8]) -> Vec<Review> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Review {
                id: format!("r{i}"),
                rating: Rating::new(v).expect("test rating"),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn average_of_five_five_four() {
        let reviews = rated(&[5, 5, 4]);
        let avg = average_rating(&reviews).expect("non-empty");
        assert!((avg - 14.0 / 3.0).abs() < 1e-9);
        let summary = RatingSummary::from_reviews(&reviews);
        assert_eq!(summary.display_average().as_deref(), Some("4.7"));
        assert_eq!(summary.filled_stars(), 4);
    }

    #[test]
    fn average_of_empty_set_is_none() {
        assert_eq!(average_rating(&[] as &[Review]), None);
        let summary = RatingSummary::from_reviews(&[]);
        assert_eq!(summary.display_average(), None);
        assert_eq!(summary.filled_stars(), 0);
        assert!(summary.buckets().all(|b| b.percent == 0.0));
    }

    #[test]
    fn distribution_runs_five_down_to_one() {
        let reviews = rated(&[5, 4, 4, 2, 5, 5, 1]);
        assert_eq!(rating_distribution(&reviews), [3, 2, 0, 1, 1]);
    }

    #[test]
    fn distribution_sums_to_visible_total() {
        let mut reviews = rated(&[5, 3, 3, 1, 4, 2, 5]);
        reviews[1].status = ReviewStatus::Pending;
        reviews[6].status = ReviewStatus::Pending;
        let summary = RatingSummary::from_reviews(&reviews);
        assert_eq!(summary.total, 5);
        assert_eq!(summary.distribution.iter().sum::<usize>(), summary.total);
    }

    #[test]
    fn pending_reviews_do_not_move_the_average() {
        let mut reviews = rated(&[4, 4, 1]);
        reviews[2].status = ReviewStatus::Pending;
        reviews[2].featured = true;
        let summary = RatingSummary::from_reviews(&reviews);
        assert_eq!(summary.average, Some(4.0));
        assert_eq!(summary.distribution, [0, 2, 0, 0, 0]);
    }

    #[test]
    fn bucket_percentages() {
        let reviews = rated(&[5, 5, 4, 3]);
        let buckets: Vec<RatingBucket> = RatingSummary::from_reviews(&reviews).buckets().collect();
        assert_eq!(buckets[0], RatingBucket { stars: 5, count: 2, percent: 50.0 });
        assert_eq!(buckets[1], RatingBucket { stars: 4, count: 1, percent: 25.0 });
        assert_eq!(buckets[4].stars, 1);
    }
}
