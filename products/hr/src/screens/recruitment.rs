use chrono::NaiveDate;
use entity::{Candidate, CandidateStatus, Department, JobPosting, JobStatus, JobType, SalaryRange};
use platform_api::{ApiResult, ValidationError};
use platform_db::{InMemoryRepository, Repository};
use uuid::Uuid;

use super::{lines, require, resolve_job};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobDraft {
    pub title: String,
    pub department: Department,
    pub location: String,
    pub job_type: JobType,
    pub description: String,
    /// One requirement per line.
    pub requirements: String,
    pub salary: SalaryRange,
    pub status: JobStatus,
}

impl JobDraft {
    fn validate(&self) -> Result<Vec<String>, ValidationError> {
        require(&self.title, "title")?;
        if !self.salary.is_ordered() {
            return Err(ValidationError::InvalidSalaryRange);
        }
        Ok(lines(&self.requirements))
    }
}

/// What the job modal was opened for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JobForm {
    Add(JobDraft),
    Edit(Uuid, JobDraft),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateDraft {
    pub job_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub resume: String,
    pub experience: u32,
    pub skills: Vec<String>,
    pub notes: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RecruitmentStats {
    pub open_jobs: usize,
    pub applications: usize,
    pub interviews: usize,
    pub hires: usize,
}

pub struct RecruitmentScreen<J = InMemoryRepository<JobPosting>, C = InMemoryRepository<Candidate>>
{
    jobs: J,
    candidates: C,
}

impl<J, C> RecruitmentScreen<J, C>
where
    J: Repository<JobPosting>,
    C: Repository<Candidate>,
{
    pub fn new(jobs: J, candidates: C) -> Self {
        Self { jobs, candidates }
    }

    pub fn jobs(&self, status: Option<JobStatus>) -> ApiResult<Vec<JobPosting>> {
        Ok(self
            .jobs
            .all()?
            .into_iter()
            .filter(|job| status.is_none_or(|status| job.status == status))
            .collect())
    }

    pub fn candidates(&self, status: Option<CandidateStatus>) -> ApiResult<Vec<Candidate>> {
        Ok(self
            .candidates
            .all()?
            .into_iter()
            .filter(|candidate| status.is_none_or(|status| candidate.status == status))
            .collect())
    }

    pub fn submit_job(&mut self, form: JobForm, today: NaiveDate) -> ApiResult<JobPosting> {
        match form {
            JobForm::Add(draft) => {
                let requirements = draft.validate()?;
                let job = JobPosting {
                    id: Uuid::new_v4(),
                    title: draft.title,
                    department: draft.department,
                    location: draft.location,
                    job_type: draft.job_type,
                    description: draft.description,
                    requirements,
                    salary: draft.salary,
                    status: draft.status,
                    posted_date: today,
                    applications: 0,
                };
                self.jobs.prepend(job.clone())?;
                tracing::info!(job_id = %job.id, "job posted");
                Ok(job)
            }
            JobForm::Edit(id, draft) => {
                let mut job = self.jobs.get(id)?;
                job.requirements = draft.validate()?;
                job.title = draft.title;
                job.department = draft.department;
                job.location = draft.location;
                job.job_type = draft.job_type;
                job.description = draft.description;
                job.salary = draft.salary;
                job.status = draft.status;
                self.jobs.replace(job.clone())?;
                tracing::info!(job_id = %id, "job updated");
                Ok(job)
            }
        }
    }

    /// Files an application against a live posting and bumps its
    /// application count.
    pub fn add_candidate(&mut self, draft: CandidateDraft, today: NaiveDate) -> ApiResult<Candidate> {
        require(&draft.first_name, "firstName")?;
        require(&draft.last_name, "lastName")?;
        let postings = self.jobs.all()?;
        let mut job = resolve_job(&postings, draft.job_id)?.clone();

        let candidate = Candidate {
            id: Uuid::new_v4(),
            job_id: job.id,
            job_title: job.title.clone(),
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            phone: draft.phone,
            resume: draft.resume,
            experience: draft.experience,
            skills: draft.skills,
            status: CandidateStatus::Applied,
            applied_date: today,
            notes: draft.notes,
        };
        self.candidates.prepend(candidate.clone())?;
        job.applications += 1;
        self.jobs.replace(job)?;
        tracing::info!(candidate_id = %candidate.id, job_id = %candidate.job_id, "candidate applied");
        Ok(candidate)
    }

    pub fn move_candidate(&mut self, id: Uuid, status: CandidateStatus) -> ApiResult<Candidate> {
        let mut candidate = self.candidates.get(id)?;
        candidate.status = status;
        self.candidates.replace(candidate.clone())?;
        tracing::info!(candidate_id = %id, %status, "candidate moved");
        Ok(candidate)
    }

    pub fn stats(&self) -> ApiResult<RecruitmentStats> {
        let candidates = self.candidates.all()?;
        let count = |status: CandidateStatus| candidates.iter().filter(|c| c.status == status).count();
        Ok(RecruitmentStats {
            open_jobs: self.jobs(Some(JobStatus::Open))?.len(),
            applications: candidates.len(),
            interviews: count(CandidateStatus::Interview),
            hires: count(CandidateStatus::Hired),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform_api::ApiError;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    fn job_draft(min: u32, max: u32) -> JobDraft {
        JobDraft {
            title: "Process Engineer".into(),
            department: Department::Engineering,
            location: "Main Plant".into(),
            job_type: JobType::FullTime,
            description: "Own the extrusion line.".into(),
            requirements: "BSc in engineering\n\n3+ years experience".into(),
            salary: SalaryRange { min, max },
            status: JobStatus::Open,
        }
    }

    fn candidate_draft(job_id: Uuid) -> CandidateDraft {
        CandidateDraft {
            job_id,
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            email: "grace@example.com".into(),
            phone: "+1-555-300-4000".into(),
            resume: "Hopper_Resume.pdf".into(),
            experience: 12,
            skills: vec!["COBOL".into()],
            notes: None,
        }
    }

    fn screen() -> RecruitmentScreen {
        RecruitmentScreen::new(InMemoryRepository::new(), InMemoryRepository::new())
    }

    #[test]
    fn new_postings_start_empty_and_today() {
        let mut screen = screen();
        let job = screen.submit_job(JobForm::Add(job_draft(50_000, 80_000)), today()).unwrap();
        assert_eq!(job.applications, 0);
        assert_eq!(job.posted_date, today());
        assert_eq!(job.requirements, vec!["BSc in engineering", "3+ years experience"]);
    }

    #[test]
    fn inverted_salary_range_is_rejected() {
        let mut screen = screen();
        let err = screen
            .submit_job(JobForm::Add(job_draft(90_000, 80_000)), today())
            .unwrap_err();
        assert_eq!(err.validation(), Some(&ValidationError::InvalidSalaryRange));
        assert!(screen.jobs(None).unwrap().is_empty());
    }

    #[test]
    fn editing_keeps_posting_metadata() {
        let mut screen = screen();
        let job = screen.submit_job(JobForm::Add(job_draft(50_000, 80_000)), today()).unwrap();
        screen.add_candidate(candidate_draft(job.id), today()).unwrap();

        let mut changed = job_draft(55_000, 85_000);
        changed.status = JobStatus::Closed;
        let later = today().succ_opt().unwrap();
        let edited = screen.submit_job(JobForm::Edit(job.id, changed), later).unwrap();
        assert_eq!(edited.posted_date, today());
        assert_eq!(edited.applications, 1);
        assert_eq!(edited.salary.min, 55_000);
        assert_eq!(screen.stats().unwrap().open_jobs, 0);
    }

    #[test]
    fn candidates_resolve_their_job_title() {
        let mut screen = screen();
        let job = screen.submit_job(JobForm::Add(job_draft(50_000, 80_000)), today()).unwrap();
        let candidate = screen.add_candidate(candidate_draft(job.id), today()).unwrap();
        assert_eq!(candidate.job_title, "Process Engineer");
        assert_eq!(candidate.status, CandidateStatus::Applied);

        let ghost = Uuid::new_v4();
        let err = screen.add_candidate(candidate_draft(ghost), today()).unwrap_err();
        assert_eq!(err.validation(), Some(&ValidationError::UnknownJob(ghost)));
        assert_eq!(screen.candidates(None).unwrap().len(), 1);
    }

    #[test]
    fn stats_count_pipeline_stages() {
        let mut screen = screen();
        let job = screen.submit_job(JobForm::Add(job_draft(50_000, 80_000)), today()).unwrap();
        let a = screen.add_candidate(candidate_draft(job.id), today()).unwrap();
        let b = screen.add_candidate(candidate_draft(job.id), today()).unwrap();
        screen.move_candidate(a.id, CandidateStatus::Interview).unwrap();
        screen.move_candidate(b.id, CandidateStatus::Hired).unwrap();

        let stats = screen.stats().unwrap();
        assert_eq!(
            stats,
            RecruitmentStats {
                open_jobs: 1,
                applications: 2,
                interviews: 1,
                hires: 1,
            }
        );
        assert!(matches!(
            screen.move_candidate(Uuid::new_v4(), CandidateStatus::Offer),
            Err(ApiError::NotFound)
        ));
    }
}
