//! Financial projectors: lump-sum growth, contributions, withdrawals, goals and deposits

pub mod annuity;
mod results;
mod growth;
mod contribution;
mod withdrawal;
mod goal;
mod deposit;

pub use results::{
    AifResult, ContributionResult, DepositResult, GoalResult, GrowthResult, RetirementResult,
    SipSwpResult, WithdrawalResult,
};
pub use growth::{
    compound, compound_periodic, project_aif, project_future_value, project_lumpsum,
    project_mutual_fund, AifInput, FutureValueInput, LumpsumInput,
};
pub use contribution::{project_sip, project_sip_topup, SipInput, SipTopupInput};
pub use withdrawal::{project_sip_swp, project_swp, SipSwpInput, SwpInput};
pub use goal::{project_goal, project_retirement, GoalInput, RetirementInput};
pub use deposit::{project_fd, FdInput};
