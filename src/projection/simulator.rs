//! Month-indexed cash-flow simulation with payback detection and an
//! adaptive display window

use serde::{Deserialize, Serialize};

use super::cashflows::MonthlyCashFlowPoint;
use super::state::SimulationState;

/// Bounds for the simulated and displayed horizons
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizonConfig {
    /// Months always simulated, and the hard cap on the display window
    pub max_months: u32,

    /// Shortest display window
    pub min_display_months: u32,

    /// Months shown past payback or loan payoff
    pub tail_months: u32,
}

impl Default for HorizonConfig {
    fn default() -> Self {
        Self {
            max_months: 360,
            min_display_months: 60,
            tail_months: 24,
        }
    }
}

/// What the simulator needs from the cost models
#[derive(Debug, Clone, Copy)]
pub struct SimulationInputs {
    pub initial_investment: f64,

    /// Net cash flow per month while any loan is being serviced
    pub monthly_cash_flow: f64,

    /// Installment that drops away once the loan term ends
    pub debt_service: f64,

    /// Loan term in months; `None` when there is no loan (sublease)
    pub loan_term_months: Option<u32>,
}

/// Simulation output
#[derive(Debug, Clone)]
pub struct CashFlowSimulation {
    /// Displayed series, months 1..=display_months
    pub points: Vec<MonthlyCashFlowPoint>,

    /// `None` when the position never recovers within the maximum horizon
    pub payback_month: Option<u32>,

    pub display_months: u32,

    /// Length of the full horizon that was searched for payback
    pub simulated_months: u32,

    /// Cumulative position at the end of the full horizon
    pub final_cumulative: f64,
}

#[derive(Debug, Clone, Default)]
pub struct CashFlowSimulator {
    horizon: HorizonConfig,
}

impl CashFlowSimulator {
    pub fn new(horizon: HorizonConfig) -> Self {
        Self { horizon }
    }

    /// Run the full horizon in a single forward pass, then cut the series
    /// down to the display window.
    pub fn simulate(&self, inputs: &SimulationInputs) -> CashFlowSimulation {
        let mut state = SimulationState::from_initial_investment(inputs.initial_investment);
        let mut points = Vec::with_capacity(self.horizon.max_months as usize);

        for month in 1..=self.horizon.max_months {
            let net = self.net_cash_flow(inputs, month);
            state.advance_month(net);
            points.push(MonthlyCashFlowPoint {
                month,
                net_cash_flow: net,
                cumulative: state.cumulative,
            });
        }

        let display_months = self.display_months(state.payback_month, inputs.loan_term_months);
        points.truncate(display_months as usize);

        log::debug!(
            "Simulated {} months: payback={:?}, display={} months",
            state.month,
            state.payback_month,
            display_months
        );

        CashFlowSimulation {
            points,
            payback_month: state.payback_month,
            display_months,
            simulated_months: state.month,
            final_cumulative: state.cumulative,
        }
    }

    /// Net cash flow for a month; the installment is added back once the loan is repaid
    fn net_cash_flow(&self, inputs: &SimulationInputs, month: u32) -> f64 {
        match inputs.loan_term_months {
            Some(term) if month > term => inputs.monthly_cash_flow + inputs.debt_service,
            _ => inputs.monthly_cash_flow,
        }
    }

    /// Display window: at least the minimum, long enough to show payback and
    /// loan payoff plus a tail, never past the maximum.
    pub fn display_months(&self, payback_month: Option<u32>, loan_term_months: Option<u32>) -> u32 {
        let h = &self.horizon;
        let mut months = h.min_display_months;

        if let Some(payback) = payback_month {
            months = months.max(payback.saturating_add(h.tail_months));
        }
        if let Some(term) = loan_term_months {
            months = months.max(term.saturating_add(h.tail_months));
        }

        months.min(h.max_months)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sublease(initial: f64, monthly: f64) -> SimulationInputs {
        SimulationInputs {
            initial_investment: initial,
            monthly_cash_flow: monthly,
            debt_service: 0.0,
            loan_term_months: None,
        }
    }

    #[test]
    fn test_months_are_contiguous_from_one() {
        let sim = CashFlowSimulator::default().simulate(&sublease(1_000.0, 100.0));

        for (i, point) in sim.points.iter().enumerate() {
            assert_eq!(point.month, i as u32 + 1);
        }
        assert_eq!(sim.points.len() as u32, sim.display_months);
    }

    #[test]
    fn test_payback_month() {
        let sim = CashFlowSimulator::default().simulate(&sublease(1_000.0, 100.0));

        assert_eq!(sim.payback_month, Some(10));
        assert_eq!(sim.display_months, 60);
        assert_relative_eq!(sim.points[9].cumulative, 0.0);
        assert!(sim.points[8].cumulative < 0.0);
    }

    #[test]
    fn test_unreached_payback() {
        let sim = CashFlowSimulator::default().simulate(&sublease(1_000.0, -5.0));

        assert_eq!(sim.payback_month, None);
        assert_eq!(sim.display_months, 60);
        assert_eq!(sim.simulated_months, 360);
        assert_relative_eq!(sim.final_cumulative, -1_000.0 - 5.0 * 360.0);
    }

    #[test]
    fn test_late_payback_extends_window() {
        // 100 months to recover
        let sim = CashFlowSimulator::default().simulate(&sublease(10_000.0, 100.0));
        assert_eq!(sim.payback_month, Some(100));
        assert_eq!(sim.display_months, 124);
    }

    #[test]
    fn test_loan_payoff_lifts_cash_flow() {
        let inputs = SimulationInputs {
            initial_investment: 50_000.0,
            monthly_cash_flow: -100.0,
            debt_service: 1_000.0,
            loan_term_months: Some(120),
        };
        let sim = CashFlowSimulator::default().simulate(&inputs);

        assert_relative_eq!(sim.points[119].net_cash_flow, -100.0);
        assert_relative_eq!(sim.points[120].net_cash_flow, 900.0);

        // -50,000 - 12,000 = -62,000 at month 120, then +900/month
        // 62,000 / 900 = 68.9 -> month 189
        assert_eq!(sim.payback_month, Some(189));
        assert_eq!(sim.display_months, 213);
    }

    #[test]
    fn test_window_is_capped() {
        let simulator = CashFlowSimulator::default();
        assert_eq!(simulator.display_months(Some(350), None), 360);
        assert_eq!(simulator.display_months(None, Some(600)), 360);
        assert_eq!(simulator.display_months(None, Some(180)), 204);
        assert_eq!(simulator.display_months(Some(0), None), 60);
    }

    #[test]
    fn test_payback_found_beyond_display_minimum() {
        // Payback inside the full horizon but after the minimum window
        let sim = CashFlowSimulator::default().simulate(&sublease(34_000.0, 100.0));
        assert_eq!(sim.payback_month, Some(340));
        assert_eq!(sim.display_months, 360);
    }
}
