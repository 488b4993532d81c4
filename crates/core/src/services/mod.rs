pub mod budget_service;
pub mod calendar_service;
pub mod category_service;
pub mod debt_service;
pub mod net_worth_service;
pub mod projection_service;
pub mod recurring_service;
pub mod round_up_service;
pub mod safe_to_spend_service;
pub mod spending_service;
