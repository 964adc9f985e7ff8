//! The in-memory record store and the simulated background update.

use rand::Rng;

use crate::core::record::PerfRecord;
use crate::core::seed::{self, ReportingPeriod};

use super::state::Category;

/// Increment ceiling for a simulated booking bump.
const MAX_LIVE_INCREMENT: u64 = 50_000;

/// Current record lists, one per category. Period changes replace all three
/// wholesale; there is no partial cross-category update.
#[derive(Debug, Clone, PartialEq)]
pub struct DataStore {
    pub clients: Vec<PerfRecord>,
    pub products: Vec<PerfRecord>,
    pub months: Vec<PerfRecord>,
}

impl DataStore {
    pub fn seeded() -> Self {
        let mut store = Self {
            clients: Vec::new(),
            products: Vec::new(),
            months: Vec::new(),
        };
        store.replace_period(ReportingPeriod::default());
        store
    }

    /// Atomic swap of every category's list for the given period.
    pub fn replace_period(&mut self, period: ReportingPeriod) {
        let dataset = seed::dataset_for(period);
        self.clients = dataset.clients;
        self.products = dataset.products;
        self.months = dataset.months;
    }

    pub fn records(&self, category: Category) -> &[PerfRecord] {
        match category {
            Category::Clients => &self.clients,
            Category::Products => &self.products,
            Category::Months => &self.months,
        }
    }

    /// Name lookup across all categories, used by detail actions.
    pub fn find(&self, name: &str) -> Option<&PerfRecord> {
        self.clients
            .iter()
            .chain(self.products.iter())
            .chain(self.months.iter())
            .find(|record| record.name == name)
    }

    /// Applies a planned bump. Returns the touched record's name so the
    /// caller can announce it. Derived fields need no refresh because they
    /// are computed live.
    pub fn apply_bump(&mut self, bump: &RecordBump) -> Option<String> {
        let list = match bump.category {
            Category::Clients => &mut self.clients,
            Category::Products => &mut self.products,
            Category::Months => &mut self.months,
        };
        let record = list.get_mut(bump.index)?;
        record.bump_achieved(bump.increment);
        Some(record.name.clone())
    }
}

/// Outcome of one live-update tick.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveUpdate {
    /// Whether the notification badge increments this tick.
    pub notify: bool,
    pub bump: Option<RecordBump>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordBump {
    pub category: Category,
    pub index: usize,
    pub increment: f64,
}

impl RecordBump {
    /// Whether applying this bump must repaint the screen. Only the active
    /// category's chart is on screen, so bumps elsewhere change data without
    /// forcing a render.
    pub fn repaints(&self, active: Category) -> bool {
        self.category == active
    }
}

/// Rolls the two independent probability gates for a tick: ~30% of ticks
/// raise a notification, ~20% bump a random client's achieved value.
pub fn plan_live_update<R: Rng>(rng: &mut R, client_count: usize) -> LiveUpdate {
    let notify = rng.gen::<f64>() > 0.7;
    let bump = if rng.gen::<f64>() > 0.8 && client_count > 0 {
        Some(RecordBump {
            category: Category::Clients,
            index: rng.gen_range(0..client_count),
            increment: rng.gen_range(0..MAX_LIVE_INCREMENT) as f64,
        })
    } else {
        None
    };
    LiveUpdate { notify, bump }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn seeded_store_serves_the_default_quarter() {
        let store = DataStore::seeded();
        assert_eq!(store.clients.len(), 5);
        assert_eq!(store.products.len(), 3);
        assert_eq!(store.months.len(), 3);
        assert_eq!(store.records(Category::Products)[0].name, "FCT");
    }

    #[test]
    fn period_swap_replaces_every_category() {
        let mut store = DataStore::seeded();
        let before = store.months.clone();

        store.replace_period(ReportingPeriod::January2026);
        assert_eq!(store.months.len(), 1);
        assert_eq!(store.clients[0].achieved, 175_000.0);

        store.replace_period(ReportingPeriod::Q1Fy2026);
        assert_eq!(store.months, before);
    }

    #[test]
    fn find_spans_all_categories() {
        let store = DataStore::seeded();
        assert!(store.find("Sponsorship").is_some());
        assert!(store.find("February").is_some());
        assert!(store.find("Nobody Known").is_none());
    }

    #[test]
    fn bump_raises_achieved_and_reports_name() {
        let mut store = DataStore::seeded();
        let before = store.clients[2].achieved;
        let name = store.apply_bump(&RecordBump {
            category: Category::Clients,
            index: 2,
            increment: 25_000.0,
        });
        assert_eq!(name.as_deref(), Some("Premier Foods"));
        assert_eq!(store.clients[2].achieved, before + 25_000.0);
    }

    #[test]
    fn bump_out_of_range_is_ignored() {
        let mut store = DataStore::seeded();
        let name = store.apply_bump(&RecordBump {
            category: Category::Months,
            index: 99,
            increment: 1_000.0,
        });
        assert!(name.is_none());
    }

    #[test]
    fn planned_bumps_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut saw_bump = false;
        let mut saw_quiet = false;

        for _ in 0..500 {
            let update = plan_live_update(&mut rng, 5);
            match update.bump {
                Some(bump) => {
                    saw_bump = true;
                    assert_eq!(bump.category, Category::Clients);
                    assert!(bump.index < 5);
                    assert!(bump.increment >= 0.0);
                    assert!(bump.increment < MAX_LIVE_INCREMENT as f64);
                }
                None => saw_quiet = true,
            }
        }
        assert!(saw_bump && saw_quiet);
    }

    #[test]
    fn bumps_repaint_only_the_active_category() {
        let bump = RecordBump {
            category: Category::Clients,
            index: 0,
            increment: 1_000.0,
        };
        assert!(bump.repaints(Category::Clients));
        assert!(!bump.repaints(Category::Products));
        assert!(!bump.repaints(Category::Months));
    }

    #[test]
    fn empty_store_never_plans_a_bump() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert!(plan_live_update(&mut rng, 0).bump.is_none());
        }
    }
}
