/// Per-language statistics for one provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LanguageStats {
    /// Total reported by the provider on the first page of results, not the
    /// number of listings actually paged through. Listings without a salary
    /// are included, so this may be lower or higher than `vacancies_processed`.
    pub vacancies_found: u64,
    /// Listings that produced a ruble salary estimate.
    pub vacancies_processed: u64,
    /// Floor of the mean estimate; 0 when nothing was processed.
    pub average_salary: u64,
}

/// Raw listings for one language plus the provider's reported total.
#[derive(Debug, Clone)]
pub struct FetchedVacancies<L> {
    pub listings: Vec<L>,
    pub found: u64,
}

impl<L> FetchedVacancies<L> {
    pub fn new(listings: Vec<L>, found: u64) -> Self {
        Self { listings, found }
    }
}

/// Rows of one provider's table, in configured language order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderReport {
    pub title: String,
    pub rows: Vec<(String, LanguageStats)>,
}

impl ProviderReport {
    pub fn stats_for(&self, language: &str) -> Option<&LanguageStats> {
        self.rows
            .iter()
            .find(|(name, _)| name == language)
            .map(|(_, stats)| stats)
    }
}
