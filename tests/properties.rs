//! Property tests for step advancement and money rounding.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use pay_scale_engine::calculation::{CompensationLedger, round_money};
use pay_scale_engine::models::{Grade, GradeStep, Position, SalaryFigures, Step};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()
}

fn any_step() -> impl Strategy<Value = Step> {
    (1u8..=6).prop_map(|ordinal| Step::try_from(ordinal).unwrap())
}

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // 1970 .. roughly 2100
    (0u64..47_500).prop_map(|offset| base_date() + Days::new(offset))
}

fn any_position() -> impl Strategy<Value = Position> {
    (any::<u8>(), any_step(), any_date())
        .prop_map(|(grade, step, since)| Position::new(GradeStep::new(Grade::new(grade), step), since))
}

proptest! {
    #[test]
    fn next_step_climbs_by_one_or_saturates(step in any_step()) {
        if step.is_max() {
            prop_assert_eq!(step.next(), step);
        } else {
            prop_assert_eq!(step.next().ordinal(), step.ordinal() + 1);
        }
    }

    #[test]
    fn projection_is_idempotent(position in any_position(), target in any_date()) {
        let once = position.project_to(target);
        prop_assert_eq!(once.project_to(target), once);
    }

    #[test]
    fn projection_is_monotonic(position in any_position(), a in any_date(), b in any_date()) {
        let (earlier, later) = if a <= b { (a, b) } else { (b, a) };
        let first = position.project_to(earlier);
        let second = position.project_to(later);
        prop_assert!(first.grade_step.step <= second.grade_step.step);
        prop_assert!(first.since <= second.since);
    }

    #[test]
    fn projection_before_since_is_unchanged(position in any_position(), days_before in 1u64..10_000) {
        let target = position.since - Days::new(days_before);
        prop_assert_eq!(position.project_to(target), position);
    }

    #[test]
    fn projection_keeps_grade_and_never_exceeds_max(position in any_position(), target in any_date()) {
        let projected = position.project_to(target);
        prop_assert_eq!(projected.grade_step.grade, position.grade_step.grade);
        prop_assert!(projected.grade_step.step >= position.grade_step.step);
        prop_assert!(projected.grade_step.step <= Step::MAX);
        prop_assert!(projected.since >= position.since);
    }

    #[test]
    fn advancement_history_matches_projection(position in any_position(), target in any_date()) {
        let history = position.advancements_until(target);
        let projected = position.project_to(target);
        match history.last() {
            None => prop_assert_eq!(projected, position),
            Some(last) => {
                prop_assert_eq!(last.to, projected.grade_step.step);
                prop_assert_eq!(last.effective, projected.since);
                prop_assert!(history.windows(2).all(|w| w[0].effective < w[1].effective));
                prop_assert!(history.iter().all(|a| a.effective <= target));
            }
        }
    }

    #[test]
    fn since_after_reaching_max_is_last_six_year_mark(position in any_position(), target in any_date()) {
        let history = position.advancements_until(target);
        let projected = position.project_to(target);
        if let Some(reached) = history.iter().find(|a| a.to == Step::MAX) {
            let mut mark = reached.effective;
            while let Some(next) = Step::MAX.next_advancement(mark).filter(|d| *d <= target) {
                mark = next;
            }
            prop_assert_eq!(projected.since, mark);
        }
    }

    #[test]
    fn half_cent_always_rounds_up(cents in 0i64..100_000_000) {
        // cents + 0.5 cent
        let amount = Decimal::new(cents * 10 + 5, 3);
        prop_assert_eq!(round_money(amount), Decimal::new(cents + 1, 2));
    }

    #[test]
    fn monthly_total_is_gross_times_one_point_three(cents in 0i64..100_000_000) {
        let gross = Decimal::new(cents, 2);
        let grade_step = GradeStep::new(Grade::new(13), Step::One);
        let mut ledger = CompensationLedger::new();
        ledger.set(2019, grade_step, SalaryFigures::new(gross, Decimal::ZERO)).unwrap();

        let total = ledger.monthly_total(2019, grade_step).unwrap();
        prop_assert_eq!(total, round_money(gross * Decimal::new(13, 1)));
        prop_assert_eq!(total.scale(), 2);
    }
}
