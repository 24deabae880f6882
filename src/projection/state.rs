//! Running state of the month-by-month cash-flow simulation

/// Position of the investment at a point in the simulation
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Last simulated month (0 before the first month)
    pub month: u32,

    /// Cumulative net cash position, starting at minus the initial investment
    pub cumulative: f64,

    /// First month the cumulative position reached zero or above
    pub payback_month: Option<u32>,
}

impl SimulationState {
    /// State before month 1. A non-negative opening position counts as
    /// recovered at month 0.
    pub fn from_initial_investment(initial_investment: f64) -> Self {
        let cumulative = -initial_investment;
        Self {
            month: 0,
            cumulative,
            payback_month: if cumulative >= 0.0 { Some(0) } else { None },
        }
    }

    /// Book one month of net cash flow
    pub fn advance_month(&mut self, net_cash_flow: f64) {
        self.month += 1;
        self.cumulative += net_cash_flow;

        if self.payback_month.is_none() && self.cumulative >= 0.0 {
            self.payback_month = Some(self.month);
        }
    }

    pub fn is_recovered(&self) -> bool {
        self.payback_month.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payback_recorded_once() {
        let mut state = SimulationState::from_initial_investment(100.0);
        assert!(!state.is_recovered());

        state.advance_month(60.0);
        state.advance_month(60.0);
        assert_eq!(state.payback_month, Some(2));

        state.advance_month(-500.0);
        state.advance_month(1_000.0);
        assert_eq!(state.payback_month, Some(2));
        assert_eq!(state.month, 4);
    }

    #[test]
    fn test_zero_investment_is_recovered_at_start() {
        let state = SimulationState::from_initial_investment(0.0);
        assert_eq!(state.payback_month, Some(0));
    }
}
