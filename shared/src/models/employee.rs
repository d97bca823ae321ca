//! Employee Model

use serde::{Deserialize, Serialize};

/// An employee as reported by the Brink Settings service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosEmployee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// Job code the employee is currently assigned, if any
    pub job_code_id: Option<String>,
    /// Base hourly rate; 0 for salaried employees
    pub pay_rate: f64,
    /// Job-type override rate; takes precedence over the base rate
    /// whenever it is set
    pub job_type_pay_rate: f64,
}

impl PosEmployee {
    /// Effective hourly rate: the job-type override when set, else the
    /// base rate. A result of 0 marks a salaried employee.
    pub fn effective_pay_rate(&self) -> f64 {
        if self.job_type_pay_rate > 0.0 {
            self.job_type_pay_rate
        } else {
            self.pay_rate
        }
    }

    /// "First Last" display name, tolerating a missing half
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(pay_rate: f64, job_type_pay_rate: f64) -> PosEmployee {
        PosEmployee {
            id: "e1".to_string(),
            first_name: "Dana".to_string(),
            last_name: "Reyes".to_string(),
            job_code_id: Some("J4".to_string()),
            pay_rate,
            job_type_pay_rate,
        }
    }

    #[test]
    fn test_job_type_rate_wins() {
        assert_eq!(employee(12.0, 15.5).effective_pay_rate(), 15.5);
    }

    #[test]
    fn test_base_rate_fallback() {
        assert_eq!(employee(12.0, 0.0).effective_pay_rate(), 12.0);
    }

    #[test]
    fn test_salaried_is_zero() {
        assert_eq!(employee(0.0, 0.0).effective_pay_rate(), 0.0);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(employee(0.0, 0.0).display_name(), "Dana Reyes");
    }
}
