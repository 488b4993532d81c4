pub mod errors;
pub mod models;
pub mod services;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::info;

use errors::CoreError;
use models::{
    analytics::DashboardSummary,
    bill::UpcomingBill,
    budget::{BudgetCategory, BudgetLimit, BudgetPace},
    category::ResolvedCategory,
    debt::{LiabilityInsight, PayoffSchedule},
    projection::{InvestmentSummary, ProjectionPoint},
    settings::EngineConfig,
    snapshot::FinancialSnapshot,
    spending::{CategoryShare, MerchantTotal, SpendingAggregate, SpendingFilter, TrendDelta},
    summary::{NetWorthSummary, SafeToSpend},
    transaction::Direction,
    window::{BucketGranularity, DateWindow},
};
use services::{
    budget_service::BudgetService, calendar_service::CalendarService,
    category_service::CategoryService, debt_service::DebtService,
    net_worth_service::NetWorthService, projection_service::ProjectionService,
    recurring_service::RecurringService, round_up_service::RoundUpService,
    safe_to_spend_service::SafeToSpendService, spending_service::SpendingService,
};

/// Number of merchants listed on the spending screen.
const TOP_MERCHANT_LIMIT: usize = 5;

/// Main entry point for the finance engine.
///
/// Holds one normalized snapshot of inputs and the policy config, and
/// recomputes every figure on demand. Nothing derived is cached: replace the
/// snapshot when upstream data changes and call again.
#[must_use]
pub struct FinanceEngine {
    snapshot: FinancialSnapshot,
    config: EngineConfig,
    calendar: CalendarService,
    category_service: CategoryService,
    spending_service: SpendingService,
    safe_to_spend_service: SafeToSpendService,
    net_worth_service: NetWorthService,
    budget_service: BudgetService,
    debt_service: DebtService,
    projection_service: ProjectionService,
    recurring_service: RecurringService,
    round_up_service: RoundUpService,
}

impl std::fmt::Debug for FinanceEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinanceEngine")
            .field("accounts", &self.snapshot.accounts.len())
            .field("transactions", &self.snapshot.transactions.len())
            .field("liabilities", &self.snapshot.liabilities.len())
            .field("bills", &self.snapshot.bills.len())
            .field("investments", &self.snapshot.investments.len())
            .field("config", &self.config)
            .finish()
    }
}

impl FinanceEngine {
    /// Engine over `snapshot` with the default policy.
    pub fn new(snapshot: FinancialSnapshot) -> Self {
        Self::build(snapshot, EngineConfig::default(), CalendarService::new())
    }

    /// Engine over `snapshot` with a custom policy. The config is validated.
    pub fn with_config(snapshot: FinancialSnapshot, config: EngineConfig) -> Result<Self, CoreError> {
        config.validate()?;
        let calendar = CalendarService::with_offset_minutes(config.utc_offset_minutes)?;
        Ok(Self::build(snapshot, config, calendar))
    }

    /// Engine over a snapshot serialized as JSON by the data layer.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let snapshot = FinancialSnapshot::from_json(json)?;
        Ok(Self::new(snapshot))
    }

    // ── Inputs ──────────────────────────────────────────────────────

    /// The normalized snapshot every calculation reads.
    #[must_use]
    pub fn snapshot(&self) -> &FinancialSnapshot {
        &self.snapshot
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn calendar(&self) -> &CalendarService {
        &self.calendar
    }

    /// Swap in freshly fetched inputs.
    pub fn replace_snapshot(&mut self, snapshot: FinancialSnapshot) {
        self.snapshot = snapshot.normalized();
        info!(transactions = self.snapshot.transactions.len(), "snapshot replaced");
    }

    // ── Categories & Dates ──────────────────────────────────────────

    #[must_use]
    pub fn resolve_category(&self, raw_category: Option<&str>) -> ResolvedCategory {
        self.category_service.resolve(raw_category)
    }

    /// Local calendar day of `now`.
    #[must_use]
    pub fn local_day(&self, now: &DateTime<Utc>) -> NaiveDate {
        self.calendar.local_day(now)
    }

    #[must_use]
    pub fn bucket_key(&self, instant: &DateTime<Utc>, granularity: BucketGranularity) -> String {
        self.calendar.bucket_key(instant, granularity)
    }

    #[must_use]
    pub fn days_until(&self, target: NaiveDate, now: &DateTime<Utc>) -> i64 {
        self.calendar.days_until(target, now)
    }

    // ── Spending ────────────────────────────────────────────────────

    #[must_use]
    pub fn aggregate(&self, filter: &SpendingFilter) -> SpendingAggregate {
        self.spending_service
            .aggregate(&self.snapshot.transactions, filter, &self.calendar)
    }

    /// Outflows in `window`, bucketed at `granularity`.
    #[must_use]
    pub fn spending(&self, window: DateWindow, granularity: BucketGranularity) -> SpendingAggregate {
        self.aggregate(&SpendingFilter::outflows(window).with_granularity(granularity))
    }

    /// Inflows in `window`, bucketed at `granularity`.
    #[must_use]
    pub fn income(&self, window: DateWindow, granularity: BucketGranularity) -> SpendingAggregate {
        self.aggregate(&SpendingFilter::inflows(window).with_granularity(granularity))
    }

    #[must_use]
    pub fn category_shares(&self, aggregate: &SpendingAggregate) -> Vec<CategoryShare> {
        self.spending_service.category_shares(aggregate)
    }

    #[must_use]
    pub fn top_merchants(&self, window: DateWindow) -> Vec<MerchantTotal> {
        self.spending_service.top_merchants(
            &self.snapshot.transactions,
            &SpendingFilter::outflows(window),
            &self.calendar,
            TOP_MERCHANT_LIMIT,
        )
    }

    #[must_use]
    pub fn trend(&self, current: DateWindow, direction: Direction) -> TrendDelta {
        self.spending_service
            .trend(&self.snapshot.transactions, current, direction, &self.calendar)
    }

    #[must_use]
    pub fn week_over_week(&self, now: &DateTime<Utc>) -> TrendDelta {
        self.spending_service
            .week_over_week(&self.snapshot.transactions, now, &self.calendar)
    }

    // ── Safe-to-Spend & Net Worth ───────────────────────────────────

    /// Safe-to-Spend over the configured horizon. Only the snapshot's
    /// pending transactions count against it.
    #[must_use]
    pub fn safe_to_spend(&self, now: &DateTime<Utc>) -> SafeToSpend {
        self.safe_to_spend_service.calculate(
            &self.snapshot.accounts,
            &self.snapshot.transactions,
            &self.snapshot.bills,
            self.snapshot.settings.user_buffer,
            self.config.safe_to_spend_horizon_days,
            now,
            &self.calendar,
        )
    }

    #[must_use]
    pub fn net_worth(&self) -> NetWorthSummary {
        self.net_worth_service
            .calculate(&self.snapshot.accounts, &self.snapshot.liabilities)
    }

    // ── Budget ──────────────────────────────────────────────────────

    /// Pace of `limits` for the calendar month containing `now`, using
    /// spending aggregated over that same month.
    #[must_use]
    pub fn budget_pace(&self, limits: &[BudgetLimit], now: &DateTime<Utc>) -> BudgetPace {
        let today = self.calendar.local_day(now);
        let month = self.calendar.month_window(today);
        let spending = self.spending(month, BucketGranularity::Day);
        let categories = self
            .budget_service
            .categories_from_spending(limits, &spending);
        self.budget_service.pace(&categories, today, &month)
    }

    /// Pace of externally supplied `{budget, spent}` rows over `period`.
    #[must_use]
    pub fn budget_pace_for(&self, categories: &[BudgetCategory], today: NaiveDate, period: &DateWindow) -> BudgetPace {
        self.budget_service.pace(categories, today, period)
    }

    // ── Debt ────────────────────────────────────────────────────────

    #[must_use]
    pub fn cost_of_waiting(&self, balance: f64, apr_percent: f64, days: u32) -> f64 {
        self.debt_service.cost_of_waiting(balance, apr_percent, days)
    }

    /// Insights for every liability, with payments capped by today's Safe-to-Spend.
    #[must_use]
    pub fn liability_insights(&self, now: &DateTime<Utc>) -> Vec<LiabilityInsight> {
        let safe_to_spend = self.safe_to_spend(now).amount;
        self.debt_service
            .insights(&self.snapshot.liabilities, safe_to_spend, now, &self.calendar)
    }

    /// Minimum-payment payoff for one liability, if it has an APR and minimum.
    #[must_use]
    pub fn minimum_payment_payoff(&self, liability_id: &str) -> Option<PayoffSchedule> {
        self.snapshot
            .liabilities
            .iter()
            .find(|l| l.id == liability_id)
            .and_then(|l| self.debt_service.minimum_payment_payoff(l))
    }

    // ── Investments ─────────────────────────────────────────────────

    #[must_use]
    pub fn investment_summary(&self) -> InvestmentSummary {
        self.projection_service.summarize(&self.snapshot.investments)
    }

    /// Future value under the configured default annual return.
    #[must_use]
    pub fn project_growth(&self, current_value: f64, monthly_contribution: f64, years: u32) -> f64 {
        self.projection_service.project_growth(
            current_value,
            monthly_contribution,
            years,
            self.config.default_annual_return_pct,
        )
    }

    /// Yearly projection of the whole investment portfolio.
    #[must_use]
    pub fn portfolio_projection(&self, monthly_contribution: f64, years: u32) -> Vec<ProjectionPoint> {
        let current: f64 = self
            .snapshot
            .investments
            .iter()
            .map(|a| a.balance)
            .fold(0.0, |acc, x| acc + x);
        self.projection_service.projection_series(
            current,
            monthly_contribution,
            years,
            self.config.default_annual_return_pct,
        )
    }

    // ── Bills & Round-ups ───────────────────────────────────────────

    #[must_use]
    pub fn upcoming_bills(&self, now: &DateTime<Utc>) -> Vec<UpcomingBill> {
        self.recurring_service.upcoming(
            &self.snapshot.bills,
            self.config.safe_to_spend_horizon_days,
            now,
            &self.calendar,
        )
    }

    /// Average monthly cost of every recurring charge.
    #[must_use]
    pub fn monthly_bill_total(&self) -> f64 {
        self.recurring_service.monthly_total(&self.snapshot.bills)
    }

    #[must_use]
    pub fn round_ups(&self, window: &DateWindow) -> f64 {
        self.round_up_service.total(
            &self.snapshot.transactions,
            &self.snapshot.settings,
            window,
            &self.calendar,
        )
    }

    // ── Dashboard ───────────────────────────────────────────────────

    /// Every home-screen figure for `now`, from this one snapshot.
    #[must_use]
    pub fn dashboard(&self, now: &DateTime<Utc>) -> DashboardSummary {
        let today = self.calendar.local_day(now);
        let month = self.calendar.month_window(today);
        let month_spending = self.spending(month, BucketGranularity::Day);
        let safe_to_spend = self.safe_to_spend(now);
        let liabilities = self.debt_service.insights(
            &self.snapshot.liabilities,
            safe_to_spend.amount,
            now,
            &self.calendar,
        );

        DashboardSummary {
            as_of: today,
            month_categories: self.category_shares(&month_spending),
            month_spending: month_spending.total,
            safe_to_spend,
            net_worth: self.net_worth(),
            week_over_week: self.week_over_week(now),
            liabilities,
            investments: self.investment_summary(),
            upcoming_bills: self.upcoming_bills(now),
            month_round_ups: self.round_ups(&month),
        }
    }

    /// Dashboard for the current system time.
    #[must_use]
    pub fn dashboard_today(&self) -> DashboardSummary {
        self.dashboard(&Utc::now())
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(snapshot: FinancialSnapshot, config: EngineConfig, calendar: CalendarService) -> Self {
        let snapshot = snapshot.normalized();
        info!(
            accounts = snapshot.accounts.len(),
            transactions = snapshot.transactions.len(),
            liabilities = snapshot.liabilities.len(),
            "finance engine ready"
        );

        Self {
            budget_service: BudgetService::from_config(&config),
            debt_service: DebtService::from_config(&config),
            snapshot,
            config,
            calendar,
            category_service: CategoryService::new(),
            spending_service: SpendingService::new(),
            safe_to_spend_service: SafeToSpendService::new(),
            net_worth_service: NetWorthService::new(),
            projection_service: ProjectionService::new(),
            recurring_service: RecurringService::new(),
            round_up_service: RoundUpService::new(),
        }
    }
}
