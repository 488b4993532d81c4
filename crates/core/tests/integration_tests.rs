// ═══════════════════════════════════════════════════════════════════
// Integration Tests — FinanceEngine over a JSON snapshot
// ═══════════════════════════════════════════════════════════════════

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use finance_engine_core::errors::CoreError;
use finance_engine_core::models::budget::{BudgetLimit, PaceStatus};
use finance_engine_core::models::debt::Urgency;
use finance_engine_core::models::settings::EngineConfig;
use finance_engine_core::models::snapshot::FinancialSnapshot;
use finance_engine_core::models::transaction::{Direction, Transaction};
use finance_engine_core::models::window::{BucketGranularity, DateWindow};
use finance_engine_core::FinanceEngine;

/// Wednesday afternoon.
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 12, 15, 0, 0).unwrap()
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

const SNAPSHOT_JSON: &str = r##"{
    "accounts": [
        { "id": "chk", "institution": "Chase", "type": "checking",
          "availableBalance": 4250.32, "currentBalance": 4300.0 },
        { "id": "sav", "institution": "Ally", "type": "savings",
          "availableBalance": 10000.0, "currentBalance": 10000.0 }
    ],
    "transactions": [
        { "id": "t1", "accountId": "chk", "postedDate": "2025-03-01T14:00:00Z",
          "amount": 2000.0, "merchantName": "Acme Payroll", "rawCategory": "INCOME" },
        { "id": "t2", "accountId": "chk", "postedDate": "2025-03-03T18:00:00Z",
          "amount": -50.0, "merchantName": "Whole Foods", "rawCategory": "GROCERIES" },
        { "id": "t3", "accountId": "chk", "postedDate": "2025-03-05T19:30:00Z",
          "amount": -150.0, "merchantName": "Nobu", "rawCategory": "FOOD_AND_DRINK" },
        { "id": "t4", "accountId": "chk", "postedDate": "2025-03-10T12:15:00Z",
          "amount": 100.0, "direction": "OUTFLOW", "merchantName": "Chipotle",
          "rawCategory": "food and drink" },
        { "id": "t5", "accountId": "chk", "postedDate": "2025-03-11T09:00:00Z",
          "amount": -49.25, "merchantName": "Whole Foods", "rawCategory": "GROCERIES" },
        { "id": "t6", "accountId": "chk", "postedDate": "2025-03-12T10:00:00Z",
          "amount": -20.0, "merchantName": "Target", "rawCategory": "SHOPPING",
          "pending": true },
        { "id": "t7", "accountId": "chk", "postedDate": "2025-02-20T10:00:00Z",
          "amount": -300.0, "merchantName": "Landlord", "rawCategory": "RENT_AND_UTILITIES" }
    ],
    "liabilities": [
        { "id": "cc", "name": "Sapphire", "type": "credit_card",
          "currentBalance": 2340.5, "creditLimit": 5000.0, "minimumPayment": 75.0,
          "dueDate": "2025-03-14", "apr": 24.99, "lateFeeRule": 40.0 },
        { "id": "auto", "name": "Auto Loan", "type": "auto_loan",
          "currentBalance": 15000.0, "minimumPayment": 350.0,
          "dueDate": "2025-04-01", "apr": 6.5 }
    ],
    "bills": [
        { "id": "rent", "merchant": "Landlord", "cadence": "monthly",
          "nextDate": "2025-03-15", "avgAmount": 1500.0, "rawCategory": "RENT_AND_UTILITIES" },
        { "id": "netflix", "merchant": "Netflix", "cadence": "monthly",
          "nextDate": "2025-03-25", "avgAmount": 15.49, "rawCategory": "SUBSCRIPTIONS" }
    ],
    "investments": [
        { "id": "ira", "name": "Roth IRA", "balance": 12000.0, "contributions": 10000.0 }
    ],
    "settings": { "userBuffer": 200.0, "roundUpEnabled": true, "roundUpMultiplier": 1.0 }
}"##;

fn engine() -> FinanceEngine {
    FinanceEngine::from_json(SNAPSHOT_JSON).unwrap()
}

fn march() -> DateWindow {
    DateWindow::new(d(2025, 3, 1), d(2025, 3, 31)).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
// Loading
// ═══════════════════════════════════════════════════════════════════

mod loading {
    use super::*;

    #[test]
    fn snapshot_is_normalized_on_load() {
        let engine = engine();
        assert_eq!(engine.snapshot().transactions.len(), 7);
        assert!(engine
            .snapshot()
            .transactions
            .iter()
            .all(|t| t.direction.is_some() && t.amount >= 0.0));
    }

    #[test]
    fn debug_shows_counts_not_data() {
        let debug = format!("{:?}", engine());
        assert!(debug.contains("FinanceEngine"));
        assert!(debug.contains("transactions: 7"));
        assert!(!debug.contains("Whole Foods"));
    }

    #[test]
    fn malformed_snapshot_fails() {
        let err = FinanceEngine::from_json(r#"{"accounts": 5}"#).unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn invalid_config_fails() {
        let config = EngineConfig {
            near_limit_pct: f64::NAN,
            ..EngineConfig::default()
        };
        let err = FinanceEngine::with_config(FinancialSnapshot::default(), config).unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig(_)));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Spending
// ═══════════════════════════════════════════════════════════════════

mod spending {
    use super::*;

    #[test]
    fn month_spending_by_category() {
        let engine = engine();
        let agg = engine.spending(march(), BucketGranularity::Week);
        assert_close(agg.total, 369.25);
        assert_eq!(agg.transaction_count, 5);
        assert_close(agg.category_amount("Food & Drink"), 250.0);
        assert_close(agg.category_amount("Groceries"), 99.25);
        assert_close(agg.category_amount("Shopping"), 20.0);
        assert_close(agg.by_bucket["2025-03-03"], 200.0);
        assert_close(agg.by_bucket["2025-03-10"], 169.25);

        let shares = engine.category_shares(&agg);
        assert_eq!(shares[0].name, "Food & Drink");
        assert_close(shares.iter().map(|s| s.percent).sum::<f64>(), 100.0);
    }

    #[test]
    fn income_is_separate() {
        let income = engine().income(march(), BucketGranularity::Month);
        assert_close(income.total, 2000.0);
        assert_close(income.by_bucket["2025-03"], 2000.0);
    }

    #[test]
    fn top_merchants() {
        let merchants = engine().top_merchants(march());
        assert_eq!(merchants[0].merchant, "Nobu");
        assert_eq!(merchants[1].merchant, "Chipotle");
        assert_eq!(merchants[2].merchant, "Whole Foods");
        assert_eq!(merchants[2].transaction_count, 2);
    }

    #[test]
    fn week_over_week() {
        let trend = engine().week_over_week(&now());
        assert_close(trend.previous, 200.0);
        assert_close(trend.current, 169.25);
        assert_close(trend.change, (169.25 - 200.0) / 200.0);
    }

    #[test]
    fn local_offset_moves_bucket() {
        let late_night = Transaction::new("n", "chk", Utc.with_ymd_and_hms(2025, 3, 10, 3, 0, 0).unwrap(), -30.0);
        let snapshot = FinancialSnapshot {
            transactions: vec![late_night],
            ..FinancialSnapshot::default()
        };
        let config = EngineConfig {
            utc_offset_minutes: -300,
            ..EngineConfig::default()
        };
        let engine = FinanceEngine::with_config(snapshot, config).unwrap();
        let week = DateWindow::new(d(2025, 3, 3), d(2025, 3, 16)).unwrap();
        let agg = engine.spending(week, BucketGranularity::Week);
        assert_close(agg.by_bucket["2025-03-03"], 30.0);
        assert!(!agg.by_bucket.contains_key("2025-03-10"));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Safe-to-Spend, net worth, budget
// ═══════════════════════════════════════════════════════════════════

mod summaries {
    use super::*;

    #[test]
    fn safe_to_spend() {
        let sts = engine().safe_to_spend(&now());
        assert_close(sts.breakdown.liquid_available, 4250.32);
        assert_close(sts.breakdown.pending_outflows, 20.0);
        assert_close(sts.breakdown.upcoming_essentials, 1500.0);
        assert_close(sts.breakdown.user_buffer, 200.0);
        assert_close(sts.amount, 2530.32);
        assert_eq!(sts.horizon_days, 7);
    }

    #[test]
    fn longer_horizon_picks_up_more_bills() {
        let config = EngineConfig {
            safe_to_spend_horizon_days: 14,
            ..EngineConfig::default()
        };
        let snapshot = FinancialSnapshot::from_json(SNAPSHOT_JSON).unwrap();
        let engine = FinanceEngine::with_config(snapshot, config).unwrap();
        let sts = engine.safe_to_spend(&now());
        assert_close(sts.breakdown.upcoming_essentials, 1515.49);
        assert_eq!(engine.upcoming_bills(&now()).len(), 2);
    }

    #[test]
    fn net_worth() {
        let nw = engine().net_worth();
        assert_close(nw.assets, 14_300.0);
        assert_close(nw.liabilities, 17_340.5);
        assert_close(nw.net_worth, -3_040.5);
    }

    #[test]
    fn budget_pace_for_current_month() {
        let limits = vec![BudgetLimit::new("GROCERIES", 400.0), BudgetLimit::new("FOOD_AND_DRINK", 300.0)];
        let pace = engine().budget_pace(&limits, &now());
        assert_eq!(pace.day_of_period, 12);
        assert_eq!(pace.days_in_period, 31);
        assert_close(pace.total_spent, 349.25);
        assert_eq!(pace.expected_spend, 271.0);
        assert_close(pace.pace_difference, 78.25);
        assert_eq!(pace.status, PaceStatus::Over);
        assert!(!pace.is_on_track);
        assert_eq!(pace.categories[0].name, "Food & Drink");
        assert!(pace.categories[0].is_near_limit);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Debt, investments, bills
// ═══════════════════════════════════════════════════════════════════

mod obligations {
    use super::*;

    #[test]
    fn liability_insights() {
        let insights = engine().liability_insights(&now());
        assert_eq!(insights.len(), 2);

        let card = &insights[0];
        assert_eq!(card.id, "cc");
        assert_eq!(card.days_until_due, Some(2));
        assert_eq!(card.urgency, Some(Urgency::Urgent));
        assert_close(card.utilization_pct.unwrap(), 46.81);
        assert!((card.cost_of_waiting.unwrap() - 11.21).abs() < 0.01);
        assert_close(card.recommended_payment, 2340.5);
        assert_eq!(card.late_fee_at_risk, None);

        let auto = &insights[1];
        assert_eq!(auto.urgency, Some(Urgency::Normal));
        assert_eq!(auto.utilization_pct, None);
        assert_close(auto.recommended_payment, 2530.32);
    }

    #[test]
    fn payoff_lookup_by_id() {
        let engine = engine();
        let payoff = engine.minimum_payment_payoff("cc").unwrap();
        assert!(payoff.total_interest > 0.0);
        assert!(engine.minimum_payment_payoff("missing").is_none());
    }

    #[test]
    fn investments() {
        let engine = engine();
        let summary = engine.investment_summary();
        assert_close(summary.total_gain, 2000.0);
        assert_close(summary.gain_percent, 20.0);

        let series = engine.portfolio_projection(500.0, 5);
        assert_eq!(series.len(), 5);
        assert_eq!(series[4].value, engine.project_growth(12_000.0, 500.0, 5));
    }

    #[test]
    fn bills() {
        let engine = engine();
        let upcoming = engine.upcoming_bills(&now());
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].merchant, "Landlord");
        assert_eq!(upcoming[0].days_until, 3);
        assert_eq!(upcoming[0].category.display_name, "Bills & Utilities");
        assert_close(engine.monthly_bill_total(), 1515.49);
    }

    #[test]
    fn round_ups_skip_pending_and_whole_amounts() {
        assert_close(engine().round_ups(&march()), 0.75);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Dashboard
// ═══════════════════════════════════════════════════════════════════

mod dashboard {
    use super::*;

    #[test]
    fn agrees_with_individual_calls() {
        let engine = engine();
        let dash = engine.dashboard(&now());
        assert_eq!(dash.as_of, d(2025, 3, 12));
        assert_eq!(dash.safe_to_spend, engine.safe_to_spend(&now()));
        assert_eq!(dash.net_worth, engine.net_worth());
        assert_eq!(dash.liabilities, engine.liability_insights(&now()));
        assert_eq!(dash.week_over_week, engine.week_over_week(&now()));
        assert_close(dash.month_spending, 369.25);
        assert_eq!(dash.month_categories.len(), 3);
        assert_close(dash.month_round_ups, 0.75);
    }

    #[test]
    fn empty_snapshot_has_no_negative_zero() {
        let engine = FinanceEngine::new(FinancialSnapshot::default());
        let json = serde_json::to_string(&engine.dashboard(&now())).unwrap();
        assert!(!json.contains("-0.0"), "negative zero in {json}");
    }

    #[test]
    fn serializes_camel_case() {
        let value = serde_json::to_value(engine().dashboard(&now())).unwrap();
        assert!(value.get("safeToSpend").is_some());
        assert!(value.get("weekOverWeek").is_some());
        assert_eq!(value["asOf"], "2025-03-12");
    }

    #[test]
    fn replacing_snapshot_updates_figures() {
        let mut engine = engine();
        let mut snapshot = engine.snapshot().clone();
        snapshot.transactions.push(
            Transaction::new("t8", "chk", Utc.with_ymd_and_hms(2025, 3, 12, 11, 0, 0).unwrap(), 30.0)
                .with_direction(Direction::Outflow)
                .pending(),
        );
        engine.replace_snapshot(snapshot);
        let sts = engine.safe_to_spend(&now());
        assert_close(sts.breakdown.pending_outflows, 50.0);
        assert_close(sts.amount, 2500.32);
    }
}
