//! POS Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Split-tender payment detail line
///
/// Brink nests these under a payment when one tender is split; each
/// detail may carry its own tip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentDetail {
    pub id: String,
    /// Amount applied by this detail line
    pub amount: f64,
    /// Tip recorded on this detail line
    pub tip_amount: f64,
}

/// Payment applied to an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    pub amount: f64,
    /// Brink tender identifier (cash, card, ...)
    pub tender_id: String,
    /// Tip recorded directly on the payment
    pub tip_amount: f64,
    /// Employee who took the payment
    pub employee_id: String,
    pub till_number: String,
    /// Split-tender detail lines, empty for simple payments
    #[serde(default)]
    pub details: Vec<PaymentDetail>,
}

impl Payment {
    /// Total tip for this payment: the payment-level tip plus every
    /// positive detail-line tip. Negative detail tips (voids) are
    /// ignored rather than subtracted.
    pub fn total_tip(&self) -> f64 {
        let base = if self.tip_amount > 0.0 {
            self.tip_amount
        } else {
            0.0
        };
        base + self
            .details
            .iter()
            .filter(|d| d.tip_amount > 0.0)
            .map(|d| d.tip_amount)
            .sum::<f64>()
    }
}

/// An order as reported by the Brink Sales service
///
/// Orders with no `first_send_time` or a non-positive `total` are
/// incomplete/test data and never reach aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosOrder {
    pub id: String,
    /// Guest-facing order number
    pub number: String,
    pub total: f64,
    /// Order name/label as entered at the register
    pub name: String,
    /// UTC timestamp of the first kitchen send, absent on open orders
    pub first_send_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub payments: Vec<Payment>,
}

impl PosOrder {
    /// Total declared tips across all payments on this order
    pub fn total_tips(&self) -> f64 {
        self.payments.iter().map(Payment::total_tip).sum()
    }
}
