//! Generators for training programs and the recruitment pipeline.

use chrono::Duration;
use entity::{
    Candidate, CandidateStatus, Department, JobPosting, JobStatus, JobType, SalaryRange,
    TrainingCategory, TrainingProgram, TrainingStatus,
};
use rand::Rng;

use super::{DatasetBuilder, DatasetError, ensure_parents, vocab};

impl DatasetBuilder {
    pub fn training_programs(&mut self, count: usize) -> Vec<TrainingProgram> {
        (0..count).map(|_| self.training_program()).collect()
    }

    fn training_program(&mut self) -> TrainingProgram {
        let start_date = self.future_day(365);
        let end_date = start_date + Duration::days(self.rng.gen_range(1..=30));
        let capacity = self.rng.gen_range(10..=50);
        let enrolled = self.rng.gen_range(5..=45).min(capacity);
        TrainingProgram {
            id: self.uuid(),
            title: self.pick(vocab::TRAINING_TITLES).to_string(),
            description: self.paragraph(),
            instructor: self.person_name(),
            start_date,
            end_date,
            capacity,
            enrolled,
            category: self.pick_variant(TrainingCategory::ALL),
            status: self.pick_variant(TrainingStatus::ALL),
        }
    }

    pub fn job_postings(&mut self, count: usize) -> Vec<JobPosting> {
        (0..count).map(|_| self.job_posting()).collect()
    }

    fn job_posting(&mut self) -> JobPosting {
        let department = self.pick_variant(Department::ALL);
        let description = format!("{}\n\n{}", self.paragraph(), self.paragraph());
        JobPosting {
            id: self.uuid(),
            title: self.pick(department.positions()).to_string(),
            department,
            location: self.pick(vocab::JOB_LOCATIONS).to_string(),
            job_type: self.pick_variant(JobType::ALL),
            description,
            requirements: self.pick_some(vocab::JOB_REQUIREMENTS, 3, 6),
            salary: SalaryRange {
                min: self.rng.gen_range(40_000..=60_000),
                max: self.rng.gen_range(70_000..=120_000),
            },
            status: self.pick_variant(JobStatus::ALL),
            posted_date: self.recent_day(60),
            applications: self.rng.gen_range(5..=50),
        }
    }

    pub fn candidates(
        &mut self,
        jobs: &[JobPosting],
        count: usize,
    ) -> Result<Vec<Candidate>, DatasetError> {
        ensure_parents(jobs, "candidates", "jobPostings")?;
        Ok((0..count)
            .map(|_| {
                let job = self.sample(jobs);
                self.candidate(job)
            })
            .collect())
    }

    fn candidate(&mut self, job: &JobPosting) -> Candidate {
        let gender = self.pick_variant(&[entity::Gender::Male, entity::Gender::Female]);
        let first_name = self.first_name(gender);
        let last_name = self.last_name();
        Candidate {
            id: self.uuid(),
            job_id: job.id,
            job_title: job.title.clone(),
            email: self.email(&first_name, &last_name),
            phone: self.phone(),
            resume: format!("{last_name}_Resume.pdf"),
            experience: self.rng.gen_range(0..=15),
            skills: self.pick_some(vocab::CANDIDATE_SKILLS, 3, 7),
            status: self.pick_variant(CandidateStatus::ALL),
            applied_date: self.recent_day(30),
            notes: self.maybe(0.6, |builder| builder.sentence()),
            first_name,
            last_name,
        }
    }
}
