use position_history::check::{warnings, Check, Rule, Window};
use position_history::config::Config;
use position_history::construct::Mandate;
use position_history::datatype::{Item, Precision, PrecisionDate};

fn item(id: &str) -> Item {
    Item::parse(id).unwrap()
}

fn day(raw: &str) -> PrecisionDate {
    PrecisionDate::new(raw, Precision::Day)
}

fn year(raw: &str) -> PrecisionDate {
    PrecisionDate::new(raw, Precision::Year)
}

fn check<'a>(rule: Rule, window: Window<'a>, config: &'a Config) -> Check<'a> {
    Check::new(rule, window, config)
}

#[test]
fn incumbent_alone_needs_only_a_start_date() {
    let config = Config::default();
    let dated = Mandate::new(item("Q1")).with_start_date(day("2019-07-24"));
    let c = check(Rule::MissingFields, Window::new(None, &dated, None), &config);
    assert!(!c.is_problem());
    assert_eq!(c.explanation(), None);

    let undated = Mandate::new(item("Q1"));
    let c = check(Rule::MissingFields, Window::new(None, &undated, None), &config);
    assert!(c.is_problem());
    assert_eq!(c.headline(), "Missing field");
    assert_eq!(c.explanation().unwrap(), "{{Q|Q1}} is missing {{P|580}}");
}

#[test]
fn missing_fields_lists_every_property() {
    let config = Config::default();
    let later = Mandate::new(item("Q3")).with_start_date(day("2000-01-01"));
    let current = Mandate::new(item("Q2"));
    let earlier = Mandate::new(item("Q1")).with_start_date(day("1990-01-01"));
    let c = check(Rule::MissingFields, Window::new(Some(&later), &current, Some(&earlier)), &config);
    assert!(c.is_problem());
    assert_eq!(c.headline(), "Missing fields");
    assert_eq!(
        c.explanation().unwrap(),
        "{{Q|Q2}} is missing {{P|580}}, {{P|1365}}, {{P|582}}, {{P|1366}}"
    );
}

#[test]
fn missing_successor_claim() {
    let config = Config::default();
    let later = Mandate::new(item("Q3")).with_start_date(day("2000-01-01"));
    let current = Mandate::new(item("Q2"))
        .with_start_date(day("1995-01-01"))
        .with_end_date(day("2000-01-01"));
    let c = check(Rule::MissingFields, Window::new(Some(&later), &current, None), &config);
    assert!(c.is_problem());
    assert!(c.explanation().unwrap().contains("{{P|1366}}"));
    assert!(!c.explanation().unwrap().contains("{{P|1365}}"));
}

#[test]
fn no_succession_claims_between_terms_of_the_same_person() {
    let config = Config::default();
    let later = Mandate::new(item("Q7")).with_start_date(day("2009-01-01"));
    let current = Mandate::new(item("Q7"))
        .with_start_date(day("2005-01-01"))
        .with_end_date(day("2009-01-01"));
    let earlier = Mandate::new(item("Q7"))
        .with_start_date(day("2001-01-01"))
        .with_end_date(day("2005-01-01"));
    let c = check(Rule::MissingFields, Window::new(Some(&later), &current, Some(&earlier)), &config);
    assert!(!c.is_problem());
    assert_eq!(c.explanation().unwrap_or_default(), "");
}

#[test]
fn acting_holders_need_no_succession_claims() {
    let config = Config::default();
    let later = Mandate::new(item("Q3")).with_start_date(day("2000-01-01"));
    let current = Mandate::new(item("Q2"))
        .with_start_date(day("1999-01-01"))
        .with_end_date(day("2000-01-01"))
        .with_nature(item("Q4676846"));
    let earlier = Mandate::new(item("Q1")).with_start_date(day("1990-01-01"));
    assert!(current.acting(&config));
    let c = check(Rule::MissingFields, Window::new(Some(&later), &current, Some(&earlier)), &config);
    assert!(!c.is_problem());
}

#[test]
fn acting_designation_is_configurable() {
    let config = Config { acting_designation: String::from("Q99"), ..Config::default() };
    let current = Mandate::new(item("Q2")).with_nature(item("Q4676846"));
    assert!(!current.acting(&config));
    let current = Mandate::new(item("Q2")).with_nature(item("Q99"));
    assert!(current.acting(&config));
}

#[test]
fn empty_dates_count_as_missing() {
    let config = Config::default();
    let current = Mandate::new(item("Q1")).with_start_date(PrecisionDate::new("", Precision::Day));
    assert!(current.start_date().is_none());
    let c = check(Rule::MissingFields, Window::new(None, &current, None), &config);
    assert!(c.is_problem());
}

#[test]
fn wrong_predecessor() {
    let config = Config::default();
    let current = Mandate::new(item("Q2")).with_predecessor(item("Q9"));
    let earlier = Mandate::new(item("Q1"));
    let c = check(Rule::WrongPredecessor, Window::new(None, &current, Some(&earlier)), &config);
    assert!(c.is_problem());
    assert_eq!(c.headline(), "Inconsistent predecessor");
    assert_eq!(
        c.explanation().unwrap(),
        "{{Q|Q2}} has a {{P|1365}} of {{Q|Q9}}, but follows {{Q|Q1}} here"
    );

    let agreeing = Mandate::new(item("Q2")).with_predecessor(item("Q1"));
    let c = check(Rule::WrongPredecessor, Window::new(None, &agreeing, Some(&earlier)), &config);
    assert!(!c.is_problem());
}

#[test]
fn earliest_holder_may_lack_a_predecessor() {
    let config = Config::default();
    let current = Mandate::new(item("Q1"));
    let c = check(Rule::WrongPredecessor, Window::new(None, &current, None), &config);
    assert!(!c.is_problem());
    let c = check(Rule::MissingPredecessor, Window::new(None, &current, None), &config);
    assert!(!c.is_problem());
}

#[test]
fn predecessor_claimed_but_nobody_earlier() {
    let config = Config::default();
    let current = Mandate::new(item("Q2")).with_predecessor(item("Q1"));
    let c = check(Rule::MissingPredecessor, Window::new(None, &current, None), &config);
    assert!(c.is_problem());
    assert_eq!(c.headline(), "Inconsistent predecessor");
    assert_eq!(
        c.explanation().unwrap(),
        "{{Q|Q2}} has a {{P|1365}} of {{Q|Q1}}, but does not follow anyone here"
    );
}

#[test]
fn wrong_successor() {
    let config = Config::default();
    let later = Mandate::new(item("Q3"));
    let current = Mandate::new(item("Q2")).with_successor(item("Q8"));
    let c = check(Rule::WrongSuccessor, Window::new(Some(&later), &current, None), &config);
    assert!(c.is_problem());
    assert_eq!(c.headline(), "Inconsistent successor");
    assert_eq!(
        c.explanation().unwrap(),
        "{{Q|Q2}} has a {{P|1366}} of {{Q|Q8}}, but is followed by {{Q|Q3}} here"
    );
}

#[test]
fn incumbent_may_lack_a_successor() {
    let config = Config::default();
    let current = Mandate::new(item("Q3"));
    let c = check(Rule::WrongSuccessor, Window::new(None, &current, None), &config);
    assert!(!c.is_problem());
}

#[test]
fn successor_claimed_but_nobody_later() {
    let config = Config::default();
    let current = Mandate::new(item("Q3")).with_successor(item("Q4"));
    let c = check(Rule::MissingSuccessor, Window::new(None, &current, None), &config);
    assert!(c.is_problem());
    assert_eq!(c.headline(), "Inconsistent successor");
    assert_eq!(
        c.explanation().unwrap(),
        "{{Q|Q3}} has a {{P|1366}} of {{Q|Q4}}, but is not followed by anyone here"
    );
}

#[test]
fn overlapping_dates() {
    let config = Config::default();
    let later = Mandate::new(item("Q2")).with_start_date(day("1742-02-16"));
    let current = Mandate::new(item("Q1")).with_end_date(day("1742-02-27"));
    let c = check(Rule::Overlap, Window::new(Some(&later), &current, None), &config);
    assert!(c.is_problem());
    assert_eq!(c.headline(), "Date overlap");
    assert_eq!(
        c.explanation().unwrap(),
        "{{Q|Q1}} has a {{P|582}} of 1742-02-27, which is later than the {{P|580}} of 1742-02-16 for {{Q|Q2}}"
    );
}

#[test]
fn handover_on_the_same_day_is_fine() {
    let config = Config::default();
    let later = Mandate::new(item("Q2")).with_start_date(day("1742-02-16"));
    let current = Mandate::new(item("Q1")).with_end_date(day("1742-02-16"));
    let c = check(Rule::Overlap, Window::new(Some(&later), &current, None), &config);
    assert!(!c.is_problem());
    let current = Mandate::new(item("Q1")).with_end_date(day("1742-02-11"));
    let c = check(Rule::Overlap, Window::new(Some(&later), &current, None), &config);
    assert!(!c.is_problem());
}

#[test]
fn imprecise_dates_may_overlap() {
    let config = Config::default();
    let later = Mandate::new(item("Q2")).with_start_date(day("2012-03-01"));
    let current = Mandate::new(item("Q1")).with_end_date(year("2012-01-01"));
    let c = check(Rule::Overlap, Window::new(Some(&later), &current, None), &config);
    assert!(c.is_problem());
    assert_eq!(c.headline(), "Date precision");
    assert_eq!(
        c.explanation().unwrap(),
        "{{Q|Q1}} has a {{P|582}} of 2012, which may overlap with the {{P|580}} of 2012-03-01 for {{Q|Q2}}"
    );
}

#[test]
fn imprecise_dates_in_different_years_do_not_overlap() {
    let config = Config::default();
    let later = Mandate::new(item("Q2")).with_start_date(day("2013-03-01"));
    let current = Mandate::new(item("Q1")).with_end_date(year("2012-01-01"));
    let c = check(Rule::Overlap, Window::new(Some(&later), &current, None), &config);
    assert!(!c.is_problem());
}

#[test]
fn imprecise_dates_before_the_common_era() {
    let config = Config::default();
    let later = Mandate::new(item("Q2")).with_start_date(day("-0509-03-01"));
    let current = Mandate::new(item("Q1")).with_end_date(year("-0509-01-01"));
    let c = check(Rule::Overlap, Window::new(Some(&later), &current, None), &config);
    assert!(!c.is_problem());
    assert_eq!(c.warning(), None);
}

#[test]
fn no_overlap_without_dates() {
    let config = Config::default();
    let later = Mandate::new(item("Q2")).with_start_date(day("1800-01-01"));
    let dateless = Mandate::new(item("Q1"));
    let c = check(Rule::Overlap, Window::new(Some(&later), &dateless, None), &config);
    assert!(!c.is_problem());
    let c = check(Rule::Overlap, Window::new(None, &dateless, None), &config);
    assert!(!c.is_problem());
}

#[test]
fn rules_report_together_in_order() {
    let config = Config::default();
    let later = Mandate::new(item("Q3")).with_start_date(day("2000-01-01"));
    let current = Mandate::new(item("Q2"))
        .with_start_date(day("1995-01-01"))
        .with_end_date(day("2001-01-01"))
        .with_predecessor(item("Q9"))
        .with_successor(item("Q8"));
    let headlines: Vec<String> = warnings(Window::new(Some(&later), &current, None), &config)
        .into_iter()
        .map(|w| w.headline)
        .collect();
    assert_eq!(
        headlines,
        vec!["Date overlap", "Inconsistent predecessor", "Inconsistent successor"]
    );
}

#[test]
fn property_codes_are_configurable() {
    let mut config = Config::default();
    config.properties.start_date = 1;
    let undated = Mandate::new(item("Q1"));
    let c = check(Rule::MissingFields, Window::new(None, &undated, None), &config);
    assert_eq!(c.explanation().unwrap(), "{{Q|Q1}} is missing {{P|1}}");
}
