//! Fixed-rate mortgage installment for the buy strategy

use super::startup::down_payment;
use super::EffectiveParameters;
use crate::strategy::AcquisitionStrategy;

/// Monthly installment on an amortizing fixed-rate loan.
///
/// `annual_rate` is a decimal (0.12 for 12%). Written against the discount
/// factor `(1 + r)^-n` so very high rates settle on the interest-only
/// installment `P * r` instead of `inf / inf`.
pub fn amortized_payment(principal: f64, annual_rate: f64, term_months: u32) -> f64 {
    if principal <= 0.0 {
        return 0.0;
    }
    if term_months == 0 {
        return principal;
    }

    let n = term_months as f64;
    let r = annual_rate / 12.0;
    if r.abs() < 1e-12 {
        return principal / n;
    }

    let discount = (1.0 + r).powf(-n);
    principal * r / (1.0 - discount)
}

/// Loan principal after the down payment
pub fn loan_principal(params: &EffectiveParameters) -> f64 {
    params.purchase_price - down_payment(params)
}

/// Monthly mortgage installment; 0 for a sublease or a fully paid purchase
pub fn monthly_debt_service(params: &EffectiveParameters) -> f64 {
    match params.strategy {
        AcquisitionStrategy::Buy => amortized_payment(
            loan_principal(params),
            params.interest_rate_percent / 100.0,
            params.loan_term_months(),
        ),
        AcquisitionStrategy::Sublease => 0.0,
    }
}
