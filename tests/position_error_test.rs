// tests/position_error_test.rs

use motor_test_plot::constants::MAX_MOTOR_INCREMENTS;
use motor_test_plot::data_analysis::position_error::{compute_error, round_to};
use motor_test_plot::data_input::log_data::TimeSeriesTable;
use motor_test_plot::error::PlotError;

fn table(hall: Vec<f64>, motor: Vec<f64>) -> TimeSeriesTable {
    let time: Vec<f64> = (0..hall.len()).map(|i| i as f64).collect();
    TimeSeriesTable::from_columns(vec![
        ("Time since start [s]", time),
        ("EM1 hall_theta", hall),
        ("EM1 motor_theta", motor),
    ])
    .unwrap()
}

/// Deterministic pseudo-random encoder readings in [0, MAX_MOTOR_INCREMENTS].
fn encoder_readings(seed: u64, count: usize) -> Vec<f64> {
    let mut state = seed;
    (0..count)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            ((state >> 33) % (MAX_MOTOR_INCREMENTS as u64 + 1)) as f64
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_series_aligned_with_table() {
        for rows in [1, 2, 17, 500] {
            let t = table(encoder_readings(1, rows), encoder_readings(2, rows));
            let result = compute_error(&t).unwrap();
            assert_eq!(result.len(), t.row_count(), "length mismatch for {} rows", rows);
        }
    }

    #[test]
    fn test_error_within_percent_range() {
        let t = table(encoder_readings(3, 1000), encoder_readings(4, 1000));
        let result = compute_error(&t).unwrap();
        assert!(result
            .error_series
            .iter()
            .all(|&e| (0.0..=100.0).contains(&e)));
    }

    #[test]
    fn test_missing_samples_give_exactly_zero() {
        let t = table(
            vec![100.0, f64::NAN, 300.0, 400.0],
            vec![0.0, 200.0, f64::NAN, 0.0],
        );
        let result = compute_error(&t).unwrap();
        let series = result.channel(0);
        assert_eq!(series[1], 0.0);
        assert_eq!(series[2], 0.0);
        assert!(series.iter().all(|e| e.is_finite()));
        assert_eq!(result.missing_samples, 2);
    }

    #[test]
    fn test_summary_matches_rounded_statistics() {
        let t = table(encoder_readings(5, 250), encoder_readings(6, 250));
        let result = compute_error(&t).unwrap();
        let values: Vec<f64> = result.error_series.iter().copied().collect();
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert!((result.mean_error - round_to(mean, 2)).abs() < 1e-12);
        assert_eq!(result.max_error, round_to(max, 2));
    }

    #[test]
    fn test_summary_rounding_with_large_deltas() {
        let t = table(vec![0.0, 9345.0, 18690.0], vec![0.0, 0.0, 0.0]);
        let result = compute_error(&t).unwrap();
        assert_eq!(result.mean_error, 10.0);
        assert_eq!(result.max_error, 20.0);

        // 1000 increments = 1.0700... %, mean over two rows 0.535... %
        let t = table(vec![0.0, 1000.0], vec![0.0, 0.0]);
        let result = compute_error(&t).unwrap();
        assert_eq!(result.mean_error, 0.54);
        assert_eq!(result.max_error, 1.07);
    }

    #[test]
    fn test_missing_motor_theta_column() {
        let t = TimeSeriesTable::from_columns(vec![
            ("Time since start [s]", vec![0.0, 1.0]),
            ("hall_theta_1", vec![1.0, 2.0]),
        ])
        .unwrap();
        match compute_error(&t) {
            Err(PlotError::MissingColumn { substring }) => assert_eq!(substring, "motor_theta"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_result_tuple_order() {
        let t = table(vec![0.0, 9345.0], vec![0.0, 0.0]);
        let (mean, series, max) = compute_error(&t).unwrap().into_tuple();
        assert_eq!(mean, 5.0);
        assert_eq!(series.nrows(), 2);
        assert_eq!(max, 10.0);
    }
}
