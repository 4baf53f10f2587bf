//! Policy Lookup Tests
//!
//! `get_policy` returns the first policy for the insured object whose window
//! contains the effective date, both ends inclusive.

use chrono::Duration;
use test_utils::{assert_policy_error, RiskFixtures, TemporalFixtures, TestCompanyBuilder};

#[test]
fn test_finds_policy_inside_window() {
    let fire = RiskFixtures::fire();
    let mut company = TestCompanyBuilder::new().with_risk(fire.clone()).build();
    let sold = company
        .sell_policy(Some("Office"), TemporalFixtures::now(), 3, Some(&[fire]))
        .unwrap();

    let found = company
        .get_policy(Some("Office"), TemporalFixtures::days_from_now(45))
        .unwrap()
        .expect("policy should be in effect");

    assert_eq!(found.id(), sold.id());
}

#[test]
fn test_window_bounds_are_inclusive() {
    let fire = RiskFixtures::fire();
    let mut company = TestCompanyBuilder::new().with_risk(fire.clone()).build();
    let sold = company
        .sell_policy(Some("Office"), TemporalFixtures::now(), 1, Some(&[fire]))
        .unwrap();

    assert!(company.get_policy(Some("Office"), sold.valid_from()).unwrap().is_some());
    assert!(company.get_policy(Some("Office"), sold.valid_till()).unwrap().is_some());
}

#[test]
fn test_dates_outside_window_find_nothing() {
    let fire = RiskFixtures::fire();
    let mut company = TestCompanyBuilder::new().with_risk(fire.clone()).build();
    let sold = company
        .sell_policy(Some("Office"), TemporalFixtures::days_from_now(10), 1, Some(&[fire]))
        .unwrap();

    let before = sold.valid_from() - Duration::seconds(1);
    let after = sold.valid_till() + Duration::seconds(1);

    assert!(company.get_policy(Some("Office"), before).unwrap().is_none());
    assert!(company.get_policy(Some("Office"), after).unwrap().is_none());
}

#[test]
fn test_other_insured_object_not_found() {
    let fire = RiskFixtures::fire();
    let mut company = TestCompanyBuilder::new().with_risk(fire.clone()).build();
    company
        .sell_policy(Some("Office"), TemporalFixtures::now(), 1, Some(&[fire]))
        .unwrap();

    let result = company.get_policy(Some("office"), TemporalFixtures::now()).unwrap();

    assert!(result.is_none());
}

#[test]
fn test_picks_policy_for_effective_date() {
    let fire = RiskFixtures::fire();
    let mut company = TestCompanyBuilder::new().with_risk(fire.clone()).build();
    let first = company
        .sell_policy(Some("Office"), TemporalFixtures::now(), 1, Some(&[fire.clone()]))
        .unwrap();
    let second = company
        .sell_policy(Some("Office"), TemporalFixtures::days_from_now(60), 1, Some(&[fire]))
        .unwrap();

    let early = company.get_policy(Some("Office"), TemporalFixtures::days_from_now(5)).unwrap();
    let late = company.get_policy(Some("Office"), TemporalFixtures::days_from_now(65)).unwrap();
    let gap = company.get_policy(Some("Office"), TemporalFixtures::days_from_now(45)).unwrap();

    assert_eq!(early.map(|p| p.id()), Some(first.id()));
    assert_eq!(late.map(|p| p.id()), Some(second.id()));
    assert!(gap.is_none());
}

/// Back-to-back policies share a boundary instant; the earlier sale wins
#[test]
fn test_shared_boundary_returns_first_sold() {
    let fire = RiskFixtures::fire();
    let mut company = TestCompanyBuilder::new().with_risk(fire.clone()).build();
    let first = company
        .sell_policy(Some("Office"), TemporalFixtures::now(), 1, Some(&[fire.clone()]))
        .unwrap();
    company
        .sell_policy(Some("Office"), first.valid_till(), 1, Some(&[fire]))
        .unwrap();

    let found = company.get_policy(Some("Office"), first.valid_till()).unwrap().unwrap();

    assert_eq!(found.id(), first.id());
}

#[test]
fn test_missing_name_rejected() {
    let company = TestCompanyBuilder::new().build();

    assert_policy_error(
        company.get_policy(None, TemporalFixtures::now()),
        "Name of insured object can't be null.",
    );
}

#[test]
fn test_empty_name_rejected() {
    let company = TestCompanyBuilder::new().build();

    assert_policy_error(
        company.get_policy(Some(""), TemporalFixtures::now()),
        "Name of insured object can't be empty.",
    );
}

#[test]
fn test_empty_company_finds_nothing() {
    let company = TestCompanyBuilder::new().build();

    assert!(company.get_policy(Some("Office"), TemporalFixtures::now()).unwrap().is_none());
}
