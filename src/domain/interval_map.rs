//! Platform interval to provider period mapping.

use crate::domain::constant::Interval;

/// Fixed mapping from [`Interval`] to the provider's period string.
///
/// Only the enabled entries are present; anything else is unsupported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalTable {
    entries: Vec<(Interval, &'static str)>,
}

impl IntervalTable {
    /// Daily and weekly bars.
    pub fn standard() -> Self {
        Self {
            entries: vec![(Interval::Daily, "daily"), (Interval::Weekly, "weekly")],
        }
    }

    /// Daily, weekly and monthly bars.
    pub fn with_monthly() -> Self {
        let mut table = Self::standard();
        table.entries.push((Interval::Monthly, "monthly"));
        table
    }

    pub fn get(&self, interval: Interval) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(i, _)| *i == interval)
            .map(|(_, period)| *period)
    }

    /// Resolve an optional interval; unset intervals are never supported.
    pub fn resolve(&self, interval: Option<Interval>) -> Option<&'static str> {
        interval.and_then(|i| self.get(i))
    }

    pub fn entries(&self) -> &[(Interval, &'static str)] {
        &self.entries
    }
}

impl Default for IntervalTable {
    fn default() -> Self {
        Self::standard()
    }
}
