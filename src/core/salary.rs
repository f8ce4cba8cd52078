/// Single salary estimate from an optional range.
///
/// A bound of 0 counts as "not specified", which is how SuperJob reports an
/// open range.
pub fn predict_salary(salary_from: Option<u64>, salary_to: Option<u64>) -> Option<f64> {
    let salary_from = salary_from.filter(|value| *value > 0);
    let salary_to = salary_to.filter(|value| *value > 0);

    match (salary_from, salary_to) {
        (Some(from), Some(to)) => Some((from as f64 + to as f64) / 2.0),
        (Some(from), None) => Some(from as f64 * 1.2),
        (None, Some(to)) => Some(to as f64 * 0.8),
        (None, None) => None,
    }
}
