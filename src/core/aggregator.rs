use crate::domain::model::LanguageStats;

/// Builds the statistics for one language from its raw listings.
pub fn aggregate<L, F>(listings: &[L], found: u64, estimate: F) -> LanguageStats
where
    F: Fn(&L) -> Option<f64>,
{
    from_estimates(found, listings.iter().map(estimate))
}

pub fn from_estimates<I>(found: u64, estimates: I) -> LanguageStats
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (processed, total) = estimates
        .into_iter()
        .flatten()
        .fold((0u64, 0f64), |(count, sum), salary| (count + 1, sum + salary));

    let average_salary = if processed > 0 {
        (total / processed as f64).floor() as u64
    } else {
        0
    };

    LanguageStats {
        vacancies_found: found,
        vacancies_processed: processed,
        average_salary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_skips_missing_estimates() {
        let stats = from_estimates(10, vec![Some(150.0), None, Some(90.0)]);

        assert_eq!(stats.vacancies_found, 10);
        assert_eq!(stats.vacancies_processed, 2);
        assert_eq!(stats.average_salary, 120);
    }

    #[test]
    fn test_average_is_floored() {
        let stats = from_estimates(3, vec![Some(100.0), Some(100.0), Some(101.0)]);
        assert_eq!(stats.average_salary, 100);
    }

    #[test]
    fn test_nothing_processed_gives_zero_average() {
        let empty = from_estimates(0, Vec::new());
        assert_eq!(empty, LanguageStats::default());

        let all_missing = from_estimates(7, vec![None, None]);
        assert_eq!(all_missing.vacancies_found, 7);
        assert_eq!(all_missing.vacancies_processed, 0);
        assert_eq!(all_missing.average_salary, 0);
    }

    #[test]
    fn test_aggregate_uses_estimator_per_listing() {
        let listings = vec![(100, 200), (0, 0), (60, 120)];
        let stats = aggregate(&listings, 50, |(from, to)| {
            crate::core::salary::predict_salary(Some(*from), Some(*to))
        });

        assert_eq!(stats.vacancies_found, 50);
        assert_eq!(stats.vacancies_processed, 2);
        assert_eq!(stats.average_salary, 120);
    }
}
