use chrono::NaiveDate;
use entity::{Employee, PerformanceReview, ReviewStatus, User, round2};
use platform_api::{ApiResult, ValidationError};
use platform_db::{InMemoryRepository, Repository};
use uuid::Uuid;

use super::{lines, require, resolve_employee};

/// Review form input; the list fields hold one entry per line.
#[derive(Clone, Debug, PartialEq)]
pub struct ReviewDraft {
    pub employee_id: Option<Uuid>,
    pub review_period: String,
    pub overall_rating: f64,
    pub goals: String,
    pub achievements: String,
    pub improvement_areas: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PerformanceFilter {
    pub status: Option<ReviewStatus>,
    pub period: Option<String>,
}

impl PerformanceFilter {
    pub fn matches(&self, review: &PerformanceReview) -> bool {
        self.status.is_none_or(|status| review.status == status)
            && self
                .period
                .as_deref()
                .is_none_or(|period| review.review_period == period)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PerformanceStats {
    pub average_rating: f64,
    pub finished: usize,
    pub drafts: usize,
}

/// Orders `Q<n> <year>` labels chronologically; anything else sorts by text
/// after them.
fn period_key(period: &str) -> (Option<(u32, u32)>, &str) {
    let parsed = period.split_once(' ').and_then(|(quarter, year)| {
        let quarter = quarter.strip_prefix('Q')?.parse().ok()?;
        Some((year.parse().ok()?, quarter))
    });
    (parsed, period)
}

pub struct PerformanceScreen<R = InMemoryRepository<PerformanceReview>> {
    repo: R,
}

impl<R: Repository<PerformanceReview>> PerformanceScreen<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list(&self, filter: &PerformanceFilter) -> ApiResult<Vec<PerformanceReview>> {
        Ok(self
            .repo
            .all()?
            .into_iter()
            .filter(|review| filter.matches(review))
            .collect())
    }

    /// Opens a draft review signed by the current user.
    pub fn create(
        &mut self,
        employees: &[Employee],
        reviewer: &User,
        draft: ReviewDraft,
        today: NaiveDate,
    ) -> ApiResult<PerformanceReview> {
        let employee = resolve_employee(employees, draft.employee_id)?;
        require(&draft.review_period, "reviewPeriod")?;
        if !PerformanceReview::rating_in_range(draft.overall_rating) {
            return Err(ValidationError::RatingOutOfRange.into());
        }
        let goals = non_empty(lines(&draft.goals), "goals")?;
        let achievements = non_empty(lines(&draft.achievements), "achievements")?;
        let improvement_areas = non_empty(lines(&draft.improvement_areas), "improvementAreas")?;

        let review = PerformanceReview {
            id: Uuid::new_v4(),
            employee_id: employee.id,
            employee_name: employee.full_name(),
            review_period: draft.review_period,
            overall_rating: draft.overall_rating,
            goals,
            achievements,
            improvement_areas,
            reviewed_by: reviewer.full_name(),
            date: today,
            status: ReviewStatus::Draft,
        };
        self.repo.prepend(review.clone())?;
        tracing::info!(review_id = %review.id, employee_id = %employee.id, "review drafted");
        Ok(review)
    }

    pub fn stats(&self, filter: &PerformanceFilter) -> ApiResult<PerformanceStats> {
        let reviews = self.list(filter)?;
        let average_rating = if reviews.is_empty() {
            0.0
        } else {
            reviews.iter().map(|r| r.overall_rating).sum::<f64>() / reviews.len() as f64
        };
        Ok(PerformanceStats {
            average_rating: round2(average_rating),
            finished: reviews.iter().filter(|r| r.is_finished()).count(),
            drafts: reviews
                .iter()
                .filter(|r| r.status == ReviewStatus::Draft)
                .count(),
        })
    }

    /// Review periods on file, newest first.
    pub fn periods(&self) -> ApiResult<Vec<String>> {
        let mut periods: Vec<String> = self
            .repo
            .all()?
            .into_iter()
            .map(|r| r.review_period)
            .collect();
        periods.sort_by(|a, b| period_key(b).cmp(&period_key(a)));
        periods.dedup();
        Ok(periods)
    }
}

fn non_empty(entries: Vec<String>, field: &'static str) -> Result<Vec<String>, ValidationError> {
    if entries.is_empty() {
        return Err(ValidationError::EmptyList(field));
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DatasetBuilder;
    use entity::{Department, UserRole};

    fn reviewer() -> User {
        User {
            id: "1".into(),
            email: "hr@company.com".into(),
            first_name: "Sarah".into(),
            last_name: "Johnson".into(),
            role: UserRole::Hr,
            department: Department::Hr,
            avatar: None,
        }
    }

    fn draft(employee_id: Uuid, rating: f64) -> ReviewDraft {
        ReviewDraft {
            employee_id: Some(employee_id),
            review_period: "Q1 2025".into(),
            overall_rating: rating,
            goals: "Cut scrap rate\n\nTrain two operators\n".into(),
            achievements: "Zero incidents".into(),
            improvement_areas: "Documentation".into(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    #[test]
    fn drafts_are_signed_by_the_current_user() {
        let employees = DatasetBuilder::new(Some(12)).employees(1);
        let mut screen = PerformanceScreen::new(InMemoryRepository::new());
        let review = screen
            .create(&employees, &reviewer(), draft(employees[0].id, 4.5), today())
            .unwrap();
        assert_eq!(review.reviewed_by, "Sarah Johnson");
        assert_eq!(review.status, ReviewStatus::Draft);
        assert_eq!(review.goals, vec!["Cut scrap rate", "Train two operators"]);
        assert_eq!(review.employee_name, employees[0].full_name());
    }

    #[test]
    fn rejects_out_of_range_ratings_and_empty_lists() {
        let employees = DatasetBuilder::new(Some(12)).employees(1);
        let mut screen = PerformanceScreen::new(InMemoryRepository::new());
        let err = screen
            .create(&employees, &reviewer(), draft(employees[0].id, 0.0), today())
            .unwrap_err();
        assert_eq!(err.validation(), Some(&ValidationError::RatingOutOfRange));

        let mut blank = draft(employees[0].id, 3.0);
        blank.achievements = "\n \n".into();
        let err = screen
            .create(&employees, &reviewer(), blank, today())
            .unwrap_err();
        assert_eq!(err.validation(), Some(&ValidationError::EmptyList("achievements")));
        assert!(screen.list(&PerformanceFilter::default()).unwrap().is_empty());
    }

    #[test]
    fn periods_sort_by_quarter_not_text() {
        let employees = DatasetBuilder::new(Some(12)).employees(1);
        let mut screen = PerformanceScreen::new(InMemoryRepository::new());
        for period in ["Q2 2024", "Q1 2025", "Q4 2024", "Q2 2024"] {
            let mut review = draft(employees[0].id, 3.0);
            review.review_period = period.into();
            screen.create(&employees, &reviewer(), review, today()).unwrap();
        }
        assert_eq!(screen.periods().unwrap(), vec!["Q1 2025", "Q4 2024", "Q2 2024"]);
    }

    #[test]
    fn stats_average_and_count() {
        let employees = DatasetBuilder::new(Some(12)).employees(1);
        let mut screen = PerformanceScreen::new(InMemoryRepository::new());
        screen
            .create(&employees, &reviewer(), draft(employees[0].id, 4.0), today())
            .unwrap();
        screen
            .create(&employees, &reviewer(), draft(employees[0].id, 3.5), today())
            .unwrap();
        let stats = screen.stats(&PerformanceFilter::default()).unwrap();
        assert_eq!(stats.average_rating, 3.75);
        assert_eq!(stats.drafts, 2);
        assert_eq!(stats.finished, 0);
    }
}
