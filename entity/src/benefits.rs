use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

labelled_enum! {
    pub enum InsuranceType {
        Health => "health",
        Life => "life",
        Disability => "disability",
    }
}

labelled_enum! {
    pub enum PolicyStatus {
        Active => "active",
        Expired => "expired",
        Cancelled => "cancelled",
    }
}

labelled_enum! {
    pub enum AccidentSeverity {
        Minor => "minor",
        Moderate => "moderate",
        Severe => "severe",
        Critical => "critical",
    }
}

labelled_enum! {
    pub enum AccidentStatus {
        Reported => "reported",
        Investigating => "investigating",
        Closed => "closed",
    }
}

labelled_enum! {
    pub enum CertificateType {
        Work => "work",
        Salary => "salary",
    }
}

labelled_enum! {
    pub enum CertificateStatus {
        Requested => "requested",
        Issued => "issued",
        Downloaded => "downloaded",
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsurancePolicy {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub employee_name: String,
    #[serde(rename = "type")]
    pub policy_type: InsuranceType,
    pub provider: String,
    pub policy_number: String,
    pub coverage_amount: u32,
    pub monthly_premium: f64,
    pub start_date: NaiveDate,
    pub status: PolicyStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkAccident {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub employee_name: String,
    pub accident_date: DateTime<Utc>,
    pub location: String,
    pub description: String,
    pub severity: AccidentSeverity,
    pub status: AccidentStatus,
    pub follow_up_actions: String,
}

/// `issue_date` and `issued_by` are present exactly when the certificate has
/// left the `requested` state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkCertificate {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub employee_name: String,
    #[serde(rename = "type")]
    pub certificate_type: CertificateType,
    pub request_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<NaiveDate>,
    pub status: CertificateStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued_by: Option<String>,
}
