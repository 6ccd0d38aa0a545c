use argmin::core::CostFunction;
use chrono::NaiveDate;
use nalgebra::DVector;

use holidayeffect::configuration::Configuration;
use holidayeffect::effect::holidayeffect::HolidayEffect;
use holidayeffect::manager::manager::IManager;
use holidayeffect::model::weightfit::WeightFit;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn load() -> Configuration {
    let config = Configuration::new();
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/json/holidays.json");
    config.from_reader(path).unwrap();
    config
}

#[test]
fn test_configured_effects_on_dates() {
    let config = load();
    let encoding = config.time_encoding();
    let effects = config.holiday_effects().unwrap();
    let names: Vec<&str> = effects.effects().iter().map(|e| e.name()).collect();
    assert_eq!(names, vec!["BlackFridayWeekend", "Christmas", "YearEndSale"]);

    let dates = [ymd(2020, 11, 28), ymd(2020, 12, 25), ymd(2021, 12, 25), ymd(2021, 3, 1)];
    let t = DVector::from_vec(encoding.encode_all(&dates));
    let total = effects.total(&t);
    let expected = [0.05, 0.05 + 0.2, 0.05, 0.0];
    for (v, e) in total.iter().zip(expected.iter()) {
        assert!((v - e).abs() < 1e-12, "{} vs {}", v, e);
    }
}

#[test]
fn test_fit_reduces_error_on_configured_effects() {
    let config = load();
    let encoding = config.time_encoding();
    let effects = config.holiday_effects().unwrap();

    let dates: Vec<NaiveDate> = ymd(2020, 1, 1)
        .iter_days()
        .take_while(|d| *d <= ymd(2022, 12, 31))
        .collect();
    let t = DVector::from_vec(encoding.encode_all(&dates));
    let base = DVector::from_element(t.len(), 10.0);

    let mut truth = effects.clone();
    truth.set_weights(&[1.0, 2.0, 0.5]).unwrap();
    let observed = truth.predict(&t, &base).unwrap();

    let mut fit = WeightFit::new(effects, t, base, observed).unwrap();
    let initial_cost = fit.cost(&fit.effects().weights()).unwrap();
    let report = fit.fit(20).unwrap();

    assert!(report.cost < initial_cost, "{} vs {}", report.cost, initial_cost);
    assert!(report.iterations > 0);
    assert_eq!(fit.effects().weights(), report.weights);
}

#[test]
fn test_unknown_effect_name() {
    let config = load();
    let manager = config.holiday_effect_manager();
    assert!(manager.get("Easter").is_err());
}
