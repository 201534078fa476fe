use crate::proteomic::models::coverage::{CoverageBucket, MzWindow, WindowError};

/// Fraction of all m/z values strictly inside each window. Windows may overlap,
/// the buckets keep the order of the windows.
pub fn aggregate(mz_values: &[f64], windows: &[MzWindow]) -> Result<Vec<CoverageBucket>, WindowError> {
    return windows.iter()
        .map(|window| {
            let number_of_observations = mz_values.iter().filter(|mz| window.contains(**mz)).count();
            CoverageBucket::new(*window, number_of_observations, mz_values.len())
        })
        .collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn windows(bounds: &[(f64, f64)]) -> Vec<MzWindow> {
        return bounds.iter().map(|(start_mz, stop_mz)| MzWindow::new(*start_mz, *stop_mz).unwrap()).collect();
    }

    #[test]
    fn test_fraction() {
        let buckets = aggregate(&[150.0, 300.0, 500.0, 900.0], &windows(&[(200.0, 800.0)])).unwrap();
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].get_number_of_observations(), 2);
        assert_eq!(buckets[0].get_total_number_of_observations(), 4);
        assert_eq!(buckets[0].get_fraction(), 0.5);
    }

    #[test]
    fn test_overlapping_windows_keep_order() {
        let buckets = aggregate(&[410.0, 420.0, 430.0, 445.0], &windows(&[(425.0, 450.0), (400.0, 425.0), (415.0, 440.0)])).unwrap();
        let fractions: Vec<f64> = buckets.iter().map(|bucket| bucket.get_fraction()).collect();
        assert_eq!(fractions, vec![0.5, 0.5, 0.5]);
        assert_eq!(buckets[0].get_start_mz(), 425.0);
        assert_eq!(buckets[2].get_stop_mz(), 440.0);
    }

    #[test]
    fn test_bounds_are_exclusive() {
        let buckets = aggregate(&[200.0, 800.0], &windows(&[(200.0, 800.0)])).unwrap();
        assert_eq!(buckets[0].get_number_of_observations(), 0);
    }

    #[test]
    fn test_no_observations() {
        let buckets = aggregate(&[], &windows(&[(200.0, 800.0)])).unwrap();
        assert_eq!(buckets[0].get_total_number_of_observations(), 0);
        assert_eq!(buckets[0].get_fraction(), 0.0);
        assert!(aggregate(&[500.0], &[]).unwrap().is_empty());
    }
}
