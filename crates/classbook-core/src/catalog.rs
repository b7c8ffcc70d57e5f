// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Catalog store — the full fetched list of services plus a derived visible
// list shaped by the date-window and search filters.
//
// Both filters are predicates over the FULL list, never over the previously
// filtered view, so the two stay independent and the last-applied one wins.
// Clearing the search query restores the stored date-window view.

use chrono::{DateTime, Utc};

use crate::types::Service;

/// An inclusive [start, end] window over class times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateWindow {
    /// Whether the whole class fits inside the window: the class starts at or
    /// after the window start AND ends at or before the window end.
    pub fn contains(&self, service: &Service) -> bool {
        service.start >= self.start && service.end() <= self.end
    }
}

/// In-memory catalog of service offerings.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Everything the backend returned. Never mutated by filtering.
    services: Vec<Service>,
    /// The list the UI renders.
    visible: Vec<Service>,
    /// Stored date window; survives searches so an empty query can restore it.
    window: Option<DateWindow>,
    /// Current search query. Non-empty query takes precedence over the window.
    query: String,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the backing list (e.g. after a fetch) and reapply the current
    /// filter to the new data.
    pub fn set_services(&mut self, services: Vec<Service>) {
        self.services = services;
        self.reapply();
    }

    /// Show only classes that fall entirely inside `window`, bounds inclusive.
    /// Stores the window and supersedes any active search.
    pub fn filter_by_range(&mut self, window: DateWindow) {
        self.query.clear();
        self.window = Some(window);
        self.reapply();
    }

    /// Drop the stored date window.
    pub fn clear_range(&mut self) {
        self.window = None;
        self.reapply();
    }

    /// Case-insensitive substring match on the class name, applied to the
    /// full list. An empty query restores the date-window view (or the full
    /// list when no window is stored).
    pub fn search(&mut self, query: &str) {
        self.query = query.to_owned();
        self.reapply();
    }

    /// The list the UI should render.
    pub fn visible(&self) -> &[Service] {
        &self.visible
    }

    /// The full unfiltered list.
    pub fn all(&self) -> &[Service] {
        &self.services
    }

    pub fn window(&self) -> Option<DateWindow> {
        self.window
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    fn reapply(&mut self) {
        if !self.query.is_empty() {
            let needle = self.query.to_lowercase();
            self.visible = self
                .services
                .iter()
                .filter(|s| s.name.to_lowercase().contains(&needle))
                .cloned()
                .collect();
        } else if let Some(window) = self.window {
            self.visible = self
                .services
                .iter()
                .filter(|s| window.contains(s))
                .cloned()
                .collect();
        } else {
            self.visible = self.services.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn svc(name: &str, day: u32, hour: u32, length: i64) -> Service {
        Service::new(
            name.into(),
            format!("{name} class"),
            Utc.with_ymd_and_hms(2023, 4, day, hour, 0, 0).unwrap(),
            length,
            10,
            15.0,
        )
    }

    fn window(start_day: u32, end_day: u32) -> DateWindow {
        DateWindow {
            start: Utc.with_ymd_and_hms(2023, 4, start_day, 0, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2023, 4, end_day, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn range_filter_keeps_classes_inside_bounds() {
        let mut catalog = Catalog::new();
        catalog.set_services(vec![
            svc("Yoga", 11, 11, 120),
            svc("Painting", 14, 9, 60),
        ]);
        catalog.filter_by_range(window(11, 12));
        let names: Vec<_> = catalog.visible().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Yoga"]);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        // Worked example: start 11:00 + 120min ends 13:00, inside [Apr 11, Apr 12].
        let mut catalog = Catalog::new();
        catalog.set_services(vec![svc("Yoga", 11, 11, 120)]);
        catalog.filter_by_range(window(11, 12));
        assert_eq!(catalog.visible().len(), 1);

        // A class ending exactly at the window end is still included.
        let mut edge = Catalog::new();
        edge.set_services(vec![svc("Midnight", 11, 22, 120)]);
        edge.filter_by_range(window(11, 12));
        assert_eq!(edge.visible().len(), 1);
    }

    #[test]
    fn class_running_past_window_end_is_excluded() {
        let mut catalog = Catalog::new();
        catalog.set_services(vec![svc("Overrun", 11, 23, 120)]);
        catalog.filter_by_range(window(11, 12));
        assert!(catalog.is_empty());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let mut catalog = Catalog::new();
        catalog.set_services(vec![svc("Hot Yoga", 11, 11, 60), svc("Painting", 12, 9, 60)]);
        catalog.search("yOgA");
        let names: Vec<_> = catalog.visible().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Hot Yoga"]);
    }

    #[test]
    fn search_applies_to_full_list_not_range_view() {
        let mut catalog = Catalog::new();
        catalog.set_services(vec![svc("Yoga", 11, 11, 60), svc("Yoga Advanced", 20, 11, 60)]);
        catalog.filter_by_range(window(11, 12));
        assert_eq!(catalog.visible().len(), 1);

        // The search sees both services even though the range view showed one.
        catalog.search("yoga");
        assert_eq!(catalog.visible().len(), 2);
    }

    #[test]
    fn empty_query_restores_range_view() {
        let mut catalog = Catalog::new();
        catalog.set_services(vec![svc("Yoga", 11, 11, 60), svc("Yoga Advanced", 20, 11, 60)]);
        catalog.filter_by_range(window(11, 12));
        catalog.search("advanced");
        assert_eq!(catalog.visible().len(), 1);
        assert_eq!(catalog.visible()[0].name, "Yoga Advanced");

        catalog.search("");
        let names: Vec<_> = catalog.visible().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Yoga"]);
    }

    #[test]
    fn empty_query_without_window_shows_everything() {
        let mut catalog = Catalog::new();
        catalog.set_services(vec![svc("Yoga", 11, 11, 60), svc("Painting", 12, 9, 60)]);
        catalog.search("paint");
        catalog.search("");
        assert_eq!(catalog.visible().len(), 2);
    }

    #[test]
    fn filtering_never_mutates_backing_list() {
        let mut catalog = Catalog::new();
        catalog.set_services(vec![svc("Yoga", 11, 11, 60), svc("Painting", 14, 9, 60)]);
        catalog.filter_by_range(window(11, 12));
        catalog.search("nothing matches this");
        assert_eq!(catalog.all().len(), 2);
    }

    #[test]
    fn refetch_reapplies_current_filter() {
        let mut catalog = Catalog::new();
        catalog.set_services(vec![svc("Yoga", 11, 11, 60)]);
        catalog.filter_by_range(window(11, 12));
        catalog.set_services(vec![svc("Yoga", 11, 11, 60), svc("Painting", 14, 9, 60)]);
        assert_eq!(catalog.visible().len(), 1);
    }

    #[test]
    fn clear_range_restores_full_list() {
        let mut catalog = Catalog::new();
        catalog.set_services(vec![svc("Yoga", 11, 11, 60), svc("Painting", 14, 9, 60)]);
        catalog.filter_by_range(window(11, 12));
        catalog.clear_range();
        assert_eq!(catalog.visible().len(), 2);
    }
}
