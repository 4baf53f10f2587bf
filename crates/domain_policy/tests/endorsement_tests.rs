//! Endorsement Tests
//!
//! Covers `InsuranceCompany::add_risk` and `InsuranceCompany::remove_risk`:
//! policy lookup, catalog membership, effective-date bounds and the full
//! window repricing that follows a change.

use chrono::{Duration, TimeZone, Utc};
use core_kernel::FixedClock;
use domain_policy::{InsuranceCompany, PolicyError, Risk};
use rust_decimal_macros::dec;
use test_utils::{
    assert_insured_risk_names, assert_money_eq, assert_policy_error, init_test_tracing,
    RiskFixtures, TemporalFixtures, TestCompanyBuilder,
};

/// Company with Fire and Water in the catalog and one Office policy
/// insuring Fire for a month from now
fn company_with_office_policy() -> (InsuranceCompany<FixedClock>, FixedClock, Risk, Risk) {
    let fire = RiskFixtures::fire();
    let water = RiskFixtures::water();
    let (mut company, clock) = TestCompanyBuilder::new()
        .with_risks([fire.clone(), water.clone()])
        .build_with_clock();
    company
        .sell_policy(Some("Office"), TemporalFixtures::now(), 1, Some(&[fire.clone()]))
        .expect("sale should succeed");
    company.take_events();
    (company, clock, fire, water)
}

// ============================================================================
// ADD RISK
// ============================================================================

mod add_risk {
    use super::*;

    #[test]
    fn test_adds_risk_and_reprices_whole_window() {
        init_test_tracing();
        let (mut company, _clock, _fire, water) = company_with_office_policy();

        company
            .add_risk(
                Some("Office"),
                &water,
                TemporalFixtures::days_from_now(10),
                TemporalFixtures::days_from_now(5),
            )
            .unwrap();

        let policy = company
            .get_policy(Some("Office"), TemporalFixtures::now())
            .unwrap()
            .unwrap();
        assert_insured_risk_names(policy, &["Fire", "Water"]);
        // round(230 / 365, 2) = 0.63 over all 30 days of April
        assert_money_eq(&policy.premium(), dec!(18.90));
        assert_eq!(policy.version(), 2);
    }

    #[test]
    fn test_same_risk_can_be_added_twice() {
        let (mut company, _clock, fire, _water) = company_with_office_policy();

        company
            .add_risk(Some("Office"), &fire, TemporalFixtures::now(), TemporalFixtures::now())
            .unwrap();

        let policy = &company.sold_policies()[0];
        assert_insured_risk_names(policy, &["Fire", "Fire"]);
        // round(280 / 365, 2) = 0.77
        assert_money_eq(&policy.premium(), dec!(23.10));
    }

    #[test]
    fn test_missing_name_rejected() {
        let (mut company, _clock, _fire, water) = company_with_office_policy();

        let result = company.add_risk(None, &water, TemporalFixtures::now(), TemporalFixtures::now());

        assert_policy_error(result, "Name of insured object can't be null.");
    }

    #[test]
    fn test_empty_name_rejected() {
        let (mut company, _clock, _fire, water) = company_with_office_policy();

        let result = company.add_risk(Some(""), &water, TemporalFixtures::now(), TemporalFixtures::now());

        assert_policy_error(result, "Name of insured object can't be empty.");
    }

    #[test]
    fn test_unknown_insured_object_rejected() {
        let (mut company, _clock, _fire, water) = company_with_office_policy();

        let result = company.add_risk(
            Some("Warehouse"),
            &water,
            TemporalFixtures::now(),
            TemporalFixtures::now(),
        );

        assert_policy_error(result, "Impossible add risk to nonexistent policy.");
    }

    #[test]
    fn test_effective_date_outside_every_policy_rejected() {
        let (mut company, _clock, _fire, water) = company_with_office_policy();

        let result = company.add_risk(
            Some("Office"),
            &water,
            TemporalFixtures::now(),
            TemporalFixtures::days_from_now(31),
        );

        assert_eq!(result.unwrap_err(), PolicyError::PolicyNotFound);
    }

    #[test]
    fn test_risk_outside_catalog_rejected() {
        let (mut company, _clock, _fire, _water) = company_with_office_policy();

        let result = company.add_risk(
            Some("Office"),
            &RiskFixtures::theft(),
            TemporalFixtures::now(),
            TemporalFixtures::now(),
        );

        assert_policy_error(result, "This risk not from avaliable list.");
    }

    #[test]
    fn test_start_before_now_rejected() {
        let (mut company, clock, _fire, water) = company_with_office_policy();
        clock.advance(Duration::days(3));

        let result = company.add_risk(
            Some("Office"),
            &water,
            TemporalFixtures::days_from_now(2),
            TemporalFixtures::days_from_now(3),
        );

        assert_policy_error(result, "Valid date must be equal to or greater than date now.");
    }

    #[test]
    fn test_start_after_policy_end_rejected() {
        let (mut company, _clock, _fire, water) = company_with_office_policy();

        let result = company.add_risk(
            Some("Office"),
            &water,
            TemporalFixtures::days_from_now(31),
            TemporalFixtures::now(),
        );

        assert_policy_error(
            result,
            "Valid date must be equal to or greater than date of policy.",
        );
    }

    #[test]
    fn test_start_before_policy_start_rejected() {
        let fire = RiskFixtures::fire();
        let water = RiskFixtures::water();
        let mut company = TestCompanyBuilder::new()
            .with_risks([fire.clone(), water.clone()])
            .build();
        company
            .sell_policy(Some("Office"), TemporalFixtures::days_from_now(10), 1, Some(&[fire]))
            .unwrap();

        let result = company.add_risk(
            Some("Office"),
            &water,
            TemporalFixtures::days_from_now(5),
            TemporalFixtures::days_from_now(10),
        );

        assert_eq!(result.unwrap_err(), PolicyError::EndorsementDateOutsidePolicy);
    }

    /// Both ends of the window are valid start dates
    #[test]
    fn test_start_on_window_bounds_accepted() {
        let (mut company, _clock, fire, water) = company_with_office_policy();
        let valid_till = company.sold_policies()[0].valid_till();

        company
            .add_risk(Some("Office"), &water, TemporalFixtures::now(), TemporalFixtures::now())
            .unwrap();
        company
            .add_risk(Some("Office"), &fire, valid_till, valid_till)
            .unwrap();

        assert_eq!(company.sold_policies()[0].insured_risks().len(), 3);
    }

    #[test]
    fn test_rejection_changes_nothing() {
        let (mut company, _clock, _fire, water) = company_with_office_policy();
        let before = company.sold_policies()[0].clone();

        let result = company.add_risk(
            Some("Office"),
            &water,
            TemporalFixtures::days_from_now(40),
            TemporalFixtures::now(),
        );

        assert!(result.is_err());
        let after = &company.sold_policies()[0];
        assert_eq!(after.insured_risks(), before.insured_risks());
        assert_eq!(after.premium(), before.premium());
        assert_eq!(after.version(), before.version());
        assert!(company.take_events().is_empty());
    }
}

// ============================================================================
// REMOVE RISK
// ============================================================================

mod remove_risk {
    use super::*;

    #[test]
    fn test_removes_risk_and_reprices_whole_window() {
        let (mut company, _clock, fire, water) = company_with_office_policy();
        company
            .add_risk(Some("Office"), &water, TemporalFixtures::now(), TemporalFixtures::now())
            .unwrap();

        company
            .remove_risk(
                Some("Office"),
                &fire,
                TemporalFixtures::days_from_now(15),
                TemporalFixtures::days_from_now(1),
            )
            .unwrap();

        let policy = &company.sold_policies()[0];
        assert_insured_risk_names(policy, &["Water"]);
        // round(90 / 365, 2) = 0.25 over 30 days
        assert_money_eq(&policy.premium(), dec!(7.50));
    }

    #[test]
    fn test_removing_last_risk_leaves_zero_premium() {
        let (mut company, _clock, fire, _water) = company_with_office_policy();

        company
            .remove_risk(Some("Office"), &fire, TemporalFixtures::now(), TemporalFixtures::now())
            .unwrap();

        let policy = &company.sold_policies()[0];
        assert!(policy.insured_risks().is_empty());
        assert!(policy.premium().is_zero());
    }

    #[test]
    fn test_removes_only_first_duplicate() {
        let (mut company, _clock, fire, _water) = company_with_office_policy();
        company
            .add_risk(Some("Office"), &fire, TemporalFixtures::now(), TemporalFixtures::now())
            .unwrap();

        company
            .remove_risk(Some("Office"), &fire, TemporalFixtures::now(), TemporalFixtures::now())
            .unwrap();

        assert_insured_risk_names(&company.sold_policies()[0], &["Fire"]);
    }

    #[test]
    fn test_risk_not_in_policy_rejected() {
        let (mut company, _clock, _fire, water) = company_with_office_policy();

        let result = company.remove_risk(
            Some("Office"),
            &water,
            TemporalFixtures::now(),
            TemporalFixtures::now(),
        );

        assert_policy_error(result, "Can't remove nonexistent risk from policy.");
    }

    #[test]
    fn test_unknown_insured_object_rejected() {
        let (mut company, _clock, fire, _water) = company_with_office_policy();

        let result = company.remove_risk(
            Some("Warehouse"),
            &fire,
            TemporalFixtures::now(),
            TemporalFixtures::now(),
        );

        assert_policy_error(result, "Impossible add risk to nonexistent policy.");
    }

    /// A risk withdrawn from the catalog can no longer be removed
    #[test]
    fn test_withdrawn_risk_rejected() {
        let (mut company, _clock, fire, _water) = company_with_office_policy();
        company.remove_available_risk(fire.id());

        let result = company.remove_risk(
            Some("Office"),
            &fire,
            TemporalFixtures::now(),
            TemporalFixtures::now(),
        );

        assert_policy_error(result, "This risk not from avaliable list.");
        assert_eq!(company.sold_policies()[0].insured_risks().len(), 1);
    }

    #[test]
    fn test_end_before_now_rejected() {
        let (mut company, clock, fire, _water) = company_with_office_policy();
        clock.advance(Duration::days(5));

        let result = company.remove_risk(
            Some("Office"),
            &fire,
            TemporalFixtures::days_from_now(4),
            TemporalFixtures::days_from_now(5),
        );

        assert_policy_error(result, "Valid date must be equal to or greater than date now.");
    }

    #[test]
    fn test_end_after_policy_end_rejected() {
        let (mut company, _clock, fire, _water) = company_with_office_policy();

        let result = company.remove_risk(
            Some("Office"),
            &fire,
            Utc.with_ymd_and_hms(2024, 5, 2, 0, 0, 0).unwrap(),
            TemporalFixtures::now(),
        );

        assert_eq!(result.unwrap_err(), PolicyError::EndorsementDateOutsidePolicy);
    }

    /// The date checks run before the membership check
    #[test]
    fn test_date_checked_before_membership() {
        let (mut company, clock, _fire, water) = company_with_office_policy();
        clock.advance(Duration::days(2));

        let result = company.remove_risk(
            Some("Office"),
            &water,
            TemporalFixtures::days_from_now(1),
            TemporalFixtures::days_from_now(2),
        );

        assert_eq!(result.unwrap_err(), PolicyError::EndorsementDateInPast);
    }
}

// ============================================================================
// SCENARIOS
// ============================================================================

mod scenarios {
    use super::*;

    /// Sell Fire, add Water, remove Fire: the premium tracks the current
    /// risk set over the whole window at every step
    #[test]
    fn test_fire_then_water_lifecycle() {
        init_test_tracing();
        let (mut company, _clock, fire, water) = company_with_office_policy();
        // round(140 / 365, 2) = 0.38 over 30 days
        assert_money_eq(&company.sold_policies()[0].premium(), dec!(11.40));

        company
            .add_risk(
                Some("Office"),
                &water,
                TemporalFixtures::days_from_now(7),
                TemporalFixtures::days_from_now(7),
            )
            .unwrap();
        assert_money_eq(&company.sold_policies()[0].premium(), dec!(18.90));

        company
            .remove_risk(
                Some("Office"),
                &fire,
                TemporalFixtures::days_from_now(20),
                TemporalFixtures::days_from_now(20),
            )
            .unwrap();
        assert_money_eq(&company.sold_policies()[0].premium(), dec!(7.50));

        let events = company.take_events();
        let kinds: Vec<_> = events.iter().map(|e| e.event_type()).collect();
        assert_eq!(kinds, ["RiskAdded", "RiskRemoved"]);
    }

    /// Endorsements target the policy in effect on the effective date
    #[test]
    fn test_endorsement_targets_policy_in_effect() {
        let fire = RiskFixtures::fire();
        let water = RiskFixtures::water();
        let (mut company, clock) = TestCompanyBuilder::new()
            .with_risks([fire.clone(), water.clone()])
            .build_with_clock();
        let first = company
            .sell_policy(Some("Office"), TemporalFixtures::now(), 1, Some(&[fire.clone()]))
            .unwrap();
        let second = company
            .sell_policy(Some("Office"), first.valid_till() + Duration::days(1), 1, Some(&[fire]))
            .unwrap();
        clock.set(second.valid_from());

        company
            .add_risk(Some("Office"), &water, second.valid_from(), second.valid_from())
            .unwrap();

        assert_eq!(company.sold_policies()[0].insured_risks().len(), 1);
        assert_eq!(company.sold_policies()[1].insured_risks().len(), 2);
    }
}
