use chrono::{DateTime, NaiveDate, Utc};
use entity::{
    AccidentSeverity, AccidentStatus, CertificateStatus, CertificateType, Employee,
    InsurancePolicy, InsuranceType, PolicyStatus, WorkAccident, WorkCertificate,
};
use platform_api::ApiResult;
use platform_db::{InMemoryRepository, Repository};
use uuid::Uuid;

use super::{require, resolve_employee};

#[derive(Clone, Debug, PartialEq)]
pub struct PolicyDraft {
    pub employee_id: Option<Uuid>,
    pub policy_type: InsuranceType,
    pub provider: String,
    pub policy_number: String,
    pub coverage_amount: u32,
    pub monthly_premium: f64,
    pub start_date: NaiveDate,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccidentDraft {
    pub employee_id: Option<Uuid>,
    pub accident_date: DateTime<Utc>,
    pub location: String,
    pub description: String,
    pub severity: AccidentSeverity,
    pub follow_up_actions: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CertificateDraft {
    pub employee_id: Option<Uuid>,
    pub certificate_type: CertificateType,
}

/// The three benefits modals, each with its own payload.
#[derive(Clone, Debug, PartialEq)]
pub enum BenefitsForm {
    Policy(PolicyDraft),
    Accident(AccidentDraft),
    Certificate(CertificateDraft),
}

#[derive(Clone, Debug, PartialEq)]
pub enum BenefitsRecord {
    Policy(InsurancePolicy),
    Accident(WorkAccident),
    Certificate(WorkCertificate),
}

pub struct BenefitsScreen<
    P = InMemoryRepository<InsurancePolicy>,
    A = InMemoryRepository<WorkAccident>,
    C = InMemoryRepository<WorkCertificate>,
> {
    policies: P,
    accidents: A,
    certificates: C,
}

impl<P, A, C> BenefitsScreen<P, A, C>
where
    P: Repository<InsurancePolicy>,
    A: Repository<WorkAccident>,
    C: Repository<WorkCertificate>,
{
    pub fn new(policies: P, accidents: A, certificates: C) -> Self {
        Self {
            policies,
            accidents,
            certificates,
        }
    }

    pub fn policies(&self) -> ApiResult<Vec<InsurancePolicy>> {
        Ok(self.policies.all()?)
    }

    pub fn accidents(&self) -> ApiResult<Vec<WorkAccident>> {
        Ok(self.accidents.all()?)
    }

    pub fn certificates(&self) -> ApiResult<Vec<WorkCertificate>> {
        Ok(self.certificates.all()?)
    }

    pub fn submit(
        &mut self,
        employees: &[Employee],
        form: BenefitsForm,
        today: NaiveDate,
    ) -> ApiResult<BenefitsRecord> {
        let record = match form {
            BenefitsForm::Policy(draft) => {
                let employee = resolve_employee(employees, draft.employee_id)?;
                require(&draft.provider, "provider")?;
                require(&draft.policy_number, "policyNumber")?;
                let policy = InsurancePolicy {
                    id: Uuid::new_v4(),
                    employee_id: employee.id,
                    employee_name: employee.full_name(),
                    policy_type: draft.policy_type,
                    provider: draft.provider,
                    policy_number: draft.policy_number,
                    coverage_amount: draft.coverage_amount,
                    monthly_premium: draft.monthly_premium,
                    start_date: draft.start_date,
                    status: PolicyStatus::Active,
                };
                self.policies.prepend(policy.clone())?;
                BenefitsRecord::Policy(policy)
            }
            BenefitsForm::Accident(draft) => {
                let employee = resolve_employee(employees, draft.employee_id)?;
                require(&draft.location, "location")?;
                require(&draft.description, "description")?;
                let accident = WorkAccident {
                    id: Uuid::new_v4(),
                    employee_id: employee.id,
                    employee_name: employee.full_name(),
                    accident_date: draft.accident_date,
                    location: draft.location,
                    description: draft.description,
                    severity: draft.severity,
                    status: AccidentStatus::Reported,
                    follow_up_actions: draft.follow_up_actions,
                };
                self.accidents.prepend(accident.clone())?;
                BenefitsRecord::Accident(accident)
            }
            BenefitsForm::Certificate(draft) => {
                let employee = resolve_employee(employees, draft.employee_id)?;
                let certificate = WorkCertificate {
                    id: Uuid::new_v4(),
                    employee_id: employee.id,
                    employee_name: employee.full_name(),
                    certificate_type: draft.certificate_type,
                    request_date: today,
                    issue_date: None,
                    status: CertificateStatus::Requested,
                    issued_by: None,
                };
                self.certificates.prepend(certificate.clone())?;
                BenefitsRecord::Certificate(certificate)
            }
        };
        tracing::info!(kind = record.kind(), "benefits record filed");
        Ok(record)
    }
}

impl BenefitsRecord {
    pub fn kind(&self) -> &'static str {
        match self {
            BenefitsRecord::Policy(_) => "policy",
            BenefitsRecord::Accident(_) => "accident",
            BenefitsRecord::Certificate(_) => "certificate",
        }
    }
}
