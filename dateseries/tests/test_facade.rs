//! End-to-end use of the façade: build fixings, slice them, observe a rate.

use approx::assert_relative_eq;
use dateseries::rates::index::GBP_LIBOR_3M;
use dateseries::rates::{
    FlatForwardCurve, ForwardIborRateObservationFn, HistoricIborIndexRates, IborRateObservation,
    RateObservationFn, SimpleRatesProvider,
};
use dateseries::{Date, DateDoubleSeries};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn fixings_feed_rate_observation() {
    let start = date(2014, 6, 2);
    let fixings: DateDoubleSeries = (0..40)
        .map(|i| start + i)
        .filter(|d| !d.is_weekend())
        .enumerate()
        .map(|(i, d)| (d, 0.005 + i as f64 * 1e-5))
        .collect();
    assert!(fixings.is_dense());

    let june = fixings.sub_series(start, date(2014, 7, 1)).unwrap();
    assert_eq!(june.latest_date().unwrap(), date(2014, 6, 30));

    let valuation = date(2014, 7, 4);
    let provider = SimpleRatesProvider::new(valuation).with_ibor_rates(HistoricIborIndexRates::new(
        GBP_LIBOR_3M,
        valuation,
        june.clone(),
        FlatForwardCurve::new(0.0123).unwrap(),
    ));
    let observation = IborRateObservation::new(GBP_LIBOR_3M, date(2014, 6, 30));
    let rate = ForwardIborRateObservationFn::DEFAULT
        .rate(&observation, date(2014, 7, 2), date(2014, 10, 2), &provider)
        .unwrap();
    assert_relative_eq!(rate, june.latest_value().unwrap());
}
