use chrono::NaiveDate;
use entity::{TrainingCategory, TrainingProgram, TrainingStatus};
use platform_api::{ApiResult, ValidationError};
use platform_db::{InMemoryRepository, Repository};
use uuid::Uuid;

use super::require;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgramDraft {
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub capacity: u32,
    pub category: TrainingCategory,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrainingFilter {
    pub status: Option<TrainingStatus>,
    pub category: Option<TrainingCategory>,
}

impl TrainingFilter {
    pub fn matches(&self, program: &TrainingProgram) -> bool {
        self.status.is_none_or(|status| program.status == status)
            && self
                .category
                .is_none_or(|category| program.category == category)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrainingStats {
    pub ongoing: usize,
    pub enrolled: u32,
    pub upcoming: usize,
}

pub struct TrainingScreen<R = InMemoryRepository<TrainingProgram>> {
    repo: R,
}

impl<R: Repository<TrainingProgram>> TrainingScreen<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list(&self, filter: &TrainingFilter) -> ApiResult<Vec<TrainingProgram>> {
        Ok(self
            .repo
            .all()?
            .into_iter()
            .filter(|program| filter.matches(program))
            .collect())
    }

    /// Schedules an empty, upcoming program.
    pub fn create(&mut self, draft: ProgramDraft) -> ApiResult<TrainingProgram> {
        require(&draft.title, "title")?;
        if draft.end_date < draft.start_date {
            return Err(ValidationError::InvalidDateRange.into());
        }
        if draft.capacity == 0 {
            return Err(ValidationError::InvalidCapacity.into());
        }
        let program = TrainingProgram {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            instructor: draft.instructor,
            start_date: draft.start_date,
            end_date: draft.end_date,
            capacity: draft.capacity,
            enrolled: 0,
            category: draft.category,
            status: TrainingStatus::Upcoming,
        };
        self.repo.prepend(program.clone())?;
        tracing::info!(program_id = %program.id, "training program created");
        Ok(program)
    }

    pub fn stats(&self) -> ApiResult<TrainingStats> {
        let programs = self.repo.all()?;
        let count = |status: TrainingStatus| programs.iter().filter(|p| p.status == status).count();
        Ok(TrainingStats {
            ongoing: count(TrainingStatus::Ongoing),
            enrolled: programs.iter().map(|p| p.enrolled).sum(),
            upcoming: count(TrainingStatus::Upcoming),
        })
    }
}
