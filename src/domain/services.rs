//! Counter state engine for the ang pao tally.
//!
//! The engine owns the denomination registry, the per-denomination counts and
//! the bounded undo history. Totals, subtotals and percentage shares are
//! recomputed from the counts on demand and never stored.

use super::errors::DomainResult;
use super::history::HistoryStack;
use super::models::{Denomination, DenominationSet, TallyState};

/// One row of the distribution breakdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistributionRow {
    pub denomination: Denomination,
    pub count: u64,
    pub subtotal: u64,
    /// Share of the total amount, 0 to 100.
    pub percentage: f64,
}

/// Tally of denomination taps with bounded undo.
///
/// Every mutating operation takes `&mut self`, so the history pop and the
/// count decrement in [`CounterEngine::undo`] always happen together.
///
/// # Examples
///
/// ```
/// use angpao::domain::CounterEngine;
///
/// let mut engine = CounterEngine::default();
/// let hundred = engine.denominations().lookup(100).unwrap();
/// let fifty = engine.denominations().lookup(50).unwrap();
///
/// engine.add(hundred);
/// engine.add(hundred);
/// engine.add(fifty);
/// assert_eq!(engine.total(), 250);
/// assert_eq!(engine.total_packets(), 3);
///
/// engine.undo();
/// assert_eq!(engine.total(), 200);
/// ```
#[derive(Debug, Clone)]
pub struct CounterEngine {
    denominations: DenominationSet,
    tally: TallyState,
    history: HistoryStack,
}

impl Default for CounterEngine {
    fn default() -> Self {
        let denominations = DenominationSet::default();
        Self {
            tally: TallyState::new(&denominations),
            history: HistoryStack::default(),
            denominations,
        }
    }
}

impl CounterEngine {
    /// Creates an empty engine over `denominations`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ZeroHistoryLimit`](super::errors::DomainError::ZeroHistoryLimit)
    /// when `history_limit` is zero.
    pub fn new(denominations: DenominationSet, history_limit: usize) -> DomainResult<Self> {
        Ok(Self {
            tally: TallyState::new(&denominations),
            history: HistoryStack::with_limit(history_limit)?,
            denominations,
        })
    }

    pub fn denominations(&self) -> &DenominationSet {
        &self.denominations
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn history_limit(&self) -> usize {
        self.history.limit()
    }

    /// Records one packet of `denomination`.
    ///
    /// A denomination taken from another registry is ignored.
    pub fn add(&mut self, denomination: Denomination) {
        if !self.tally.increment(denomination) {
            log::warn!("Ignoring denomination {} outside the registry", denomination);
            return;
        }

        if let Some(evicted) = self.history.push(denomination) {
            log::debug!("History full, dropped oldest entry {}", evicted);
        }
        log::debug!("Added {} (count {})", denomination, self.tally.count(denomination));
    }

    /// Records one packet of the denomination at a registry position.
    pub fn add_at(&mut self, index: usize) -> Option<Denomination> {
        let denomination = self.denominations.get(index)?;
        self.add(denomination);
        Some(denomination)
    }

    /// Reverts the most recent addition, if any, and returns it.
    pub fn undo(&mut self) -> Option<Denomination> {
        let denomination = self.history.pop()?;
        if !self.tally.decrement(denomination) {
            log::warn!("Undo of {} found a zero count; count left at 0", denomination);
        }
        log::debug!("Undid {} (count {})", denomination, self.tally.count(denomination));
        Some(denomination)
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Clears every count and the history.
    pub fn reset(&mut self) {
        self.tally.clear();
        self.history.clear();
        log::debug!("Tally reset");
    }

    pub fn count(&self, denomination: Denomination) -> u64 {
        self.tally.count(denomination)
    }

    pub fn subtotal(&self, denomination: Denomination) -> u64 {
        u64::from(denomination.value()) * self.tally.count(denomination)
    }

    pub fn total(&self) -> u64 {
        self.denominations.iter().map(|d| self.subtotal(d)).sum()
    }

    pub fn total_packets(&self) -> u64 {
        self.denominations.iter().map(|d| self.tally.count(d)).sum()
    }

    /// Share of the total contributed by `denomination`, 0 when nothing is tallied.
    pub fn percentage(&self, denomination: Denomination) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.subtotal(denomination) as f64 / total as f64 * 100.0
    }

    /// The most recent `n` history entries, newest first.
    pub fn recent(&self, n: usize) -> Vec<Denomination> {
        self.history.iter().take(n).collect()
    }

    /// Count, subtotal and share for every denomination, in registry order.
    pub fn breakdown(&self) -> Vec<DistributionRow> {
        let total = self.total();
        self.denominations
            .iter()
            .map(|denomination| {
                let subtotal = self.subtotal(denomination);
                DistributionRow {
                    denomination,
                    count: self.tally.count(denomination),
                    subtotal,
                    percentage: if total == 0 {
                        0.0
                    } else {
                        subtotal as f64 / total as f64 * 100.0
                    },
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    fn denom(engine: &CounterEngine, value: u32) -> Denomination {
        engine.denominations().lookup(value).unwrap()
    }

    fn history_values(engine: &CounterEngine) -> Vec<u32> {
        engine.history().iter().map(Denomination::value).collect()
    }

    fn assert_totals_consistent(engine: &CounterEngine) {
        let total: u64 = engine
            .denominations()
            .iter()
            .map(|d| u64::from(d.value()) * engine.count(d))
            .sum();
        let packets: u64 = engine.denominations().iter().map(|d| engine.count(d)).sum();
        assert_eq!(engine.total(), total);
        assert_eq!(engine.total_packets(), packets);
    }

    #[test]
    fn test_new_engine_is_empty() {
        let engine = CounterEngine::default();
        assert_eq!(engine.total(), 0);
        assert_eq!(engine.total_packets(), 0);
        assert!(engine.history().is_empty());
        assert!(!engine.can_undo());
        assert_eq!(engine.history_limit(), 50);
    }

    #[test]
    fn test_new_rejects_zero_history_limit() {
        let result = CounterEngine::new(DenominationSet::default(), 0);
        assert!(matches!(result, Err(DomainError::ZeroHistoryLimit)));
    }

    #[test]
    fn test_add_scenario() {
        let mut engine = CounterEngine::default();
        let hundred = denom(&engine, 100);
        let fifty = denom(&engine, 50);

        engine.add(hundred);
        engine.add(hundred);
        engine.add(fifty);

        assert_eq!(engine.total(), 250);
        assert_eq!(engine.total_packets(), 3);
        assert_eq!(engine.count(hundred), 2);
        assert_eq!(engine.count(fifty), 1);
        assert_eq!(history_values(&engine), vec![50, 100, 100]);

        assert_eq!(engine.undo(), Some(fifty));
        assert_eq!(engine.count(fifty), 0);
        assert_eq!(engine.total(), 200);
        assert_eq!(history_values(&engine), vec![100, 100]);
    }

    #[test]
    fn test_undo_on_empty_is_noop() {
        let mut engine = CounterEngine::default();
        engine.add(denom(&engine, 10));
        engine.reset();

        assert!(engine.undo().is_none());
        assert_eq!(engine.total(), 0);
        assert_eq!(engine.total_packets(), 0);
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_add_then_undo_restores_state() {
        let mut engine = CounterEngine::default();
        engine.add(denom(&engine, 5));
        engine.add(denom(&engine, 2));

        let before_history = engine.history().clone();
        let before_breakdown = engine.breakdown();

        engine.add(denom(&engine, 100));
        engine.undo();

        assert_eq!(engine.history(), &before_history);
        assert_eq!(engine.breakdown(), before_breakdown);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut engine = CounterEngine::default();
        for value in [100, 50, 50, 2, 5, 10] {
            engine.add(denom(&engine, value));
        }

        engine.reset();

        assert_eq!(engine.total(), 0);
        assert_eq!(engine.total_packets(), 0);
        assert!(engine.history().is_empty());
        assert_eq!(engine.denominations().len(), 5);
    }

    #[test]
    fn test_history_bounded_after_sixty_adds() {
        let mut engine = CounterEngine::default();
        for i in 0..60 {
            engine.add_at(i % 5);
        }

        assert_eq!(engine.history().len(), 50);
        assert_eq!(engine.total_packets(), 60);
        assert_totals_consistent(&engine);
    }

    #[test]
    fn test_packets_equal_adds_minus_effective_undos() {
        let mut engine = CounterEngine::default();
        let sequence = [0, 1, 1, 4, 3, 0, 2];
        for index in sequence {
            engine.add_at(index);
        }

        let mut effective = 0;
        for _ in 0..10 {
            if engine.undo().is_some() {
                effective += 1;
            }
            assert_totals_consistent(&engine);
        }

        assert_eq!(effective, sequence.len());
        assert_eq!(engine.total_packets(), sequence.len() as u64 - effective as u64);
    }

    #[test]
    fn test_undo_beyond_history_limit_keeps_older_counts() {
        let mut engine = CounterEngine::new(DenominationSet::default(), 2).unwrap();
        let ten = denom(&engine, 10);
        for _ in 0..3 {
            engine.add(ten);
        }

        while engine.undo().is_some() {}

        assert_eq!(engine.count(ten), 1);
        assert_eq!(engine.total(), 10);
    }

    #[test]
    fn test_percentage_zero_when_empty() {
        let engine = CounterEngine::default();
        for d in engine.denominations().iter() {
            assert_eq!(engine.percentage(d), 0.0);
        }
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let mut engine = CounterEngine::default();
        for value in [100, 50, 10, 5, 5, 2, 2, 2] {
            engine.add(denom(&engine, value));
        }

        let sum: f64 = engine
            .denominations()
            .iter()
            .map(|d| engine.percentage(d))
            .sum();
        assert!((sum - 100.0).abs() < 1e-9);

        let hundred = denom(&engine, 100);
        assert_eq!(engine.subtotal(hundred), 100);
        assert!((engine.percentage(hundred) - 100.0 / 176.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_add_at_out_of_range() {
        let mut engine = CounterEngine::default();
        assert!(engine.add_at(9).is_none());
        assert_eq!(engine.total_packets(), 0);

        assert_eq!(engine.add_at(1).map(Denomination::value), Some(50));
    }

    #[test]
    fn test_foreign_denomination_is_ignored() {
        let mut engine = CounterEngine::default();
        let other = DenominationSet::new(vec![20]).unwrap();

        engine.add(other.lookup(20).unwrap());

        assert_eq!(engine.total(), 0);
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_recent_limits_and_orders() {
        let mut engine = CounterEngine::default();
        for value in [2, 5, 10, 50] {
            engine.add(denom(&engine, value));
        }

        let recent: Vec<u32> = engine.recent(3).into_iter().map(Denomination::value).collect();
        assert_eq!(recent, vec![50, 10, 5]);
        assert_eq!(engine.recent(12).len(), 4);
    }

    #[test]
    fn test_breakdown_rows_follow_registry_order() {
        let mut engine = CounterEngine::default();
        engine.add(denom(&engine, 50));
        engine.add(denom(&engine, 50));

        let rows = engine.breakdown();
        let order: Vec<u32> = rows.iter().map(|r| r.denomination.value()).collect();
        assert_eq!(order, vec![100, 50, 10, 5, 2]);

        let fifty = &rows[1];
        assert_eq!(fifty.count, 2);
        assert_eq!(fifty.subtotal, 100);
        assert_eq!(fifty.percentage, 100.0);
        assert_eq!(rows[0].percentage, 0.0);
    }
}
