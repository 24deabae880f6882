//! Parameter resolution and the cost models built on top of it

mod resolver;
mod startup;
mod debt;
mod opex;

pub use resolver::{resolve, resolve_from, EffectiveParameters};
pub use startup::{down_payment, estimate_startup_costs, lease_entry_cost, StartupCostBreakdown};
pub use debt::{amortized_payment, loan_principal, monthly_debt_service};
pub use opex::{gross_monthly_revenue, monthly_operating_expenses, MonthlyOpexBreakdown};
