use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::round2;

labelled_enum! {
    pub enum PayrollStatus {
        Draft => "draft",
        Processed => "processed",
        Paid => "paid",
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollRecord {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub employee_name: String,
    /// `YYYY-MM`.
    pub period: String,
    pub base_salary: f64,
    pub overtime: f64,
    pub bonuses: f64,
    pub deductions: f64,
    pub gross_pay: f64,
    pub net_pay: f64,
    pub status: PayrollStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_date: Option<NaiveDate>,
}

/// Monthly pay derived from an annual salary and the period's adjustments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PayFigures {
    pub base_salary: f64,
    pub gross_pay: f64,
    pub net_pay: f64,
}

impl PayFigures {
    /// `base = salary / 12`, `gross = base + overtime + bonuses`,
    /// `net = gross - deductions`; each rounded to two decimals, with gross
    /// and net computed from the already rounded base and gross.
    pub fn compute(annual_salary: u32, overtime: f64, bonuses: f64, deductions: f64) -> Self {
        let base_salary = round2(f64::from(annual_salary) / 12.0);
        let gross_pay = round2(base_salary + overtime + bonuses);
        let net_pay = round2(gross_pay - deductions);
        Self {
            base_salary,
            gross_pay,
            net_pay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn net_never_exceeds_gross_with_positive_deductions() {
        let pay = PayFigures::compute(65_000, 120.50, 300.0, 412.25);
        assert_eq!(pay.base_salary, 5416.67);
        assert_eq!(pay.gross_pay, 5837.17);
        assert_eq!(pay.net_pay, 5424.92);
        assert!(pay.net_pay <= pay.gross_pay);
    }
}
