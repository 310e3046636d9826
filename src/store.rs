//! The record store: a fixed [`Dataset`] plus the current filtered view over it.

use log::debug;

use crate::error::StoreResult;
use crate::processing::aggregate::{field_percent, field_population, population_total};
use crate::processing::{filter_by_state, filter_by_threshold, Comparison};
use crate::report::Report;
use crate::types::{Dataset, Record};

/// Ordered positions into a [`Dataset`] selecting the current working subset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredView {
    positions: Vec<usize>,
}

impl FilteredView {
    /// A view covering every record of `dataset`.
    pub fn full(dataset: &Dataset) -> Self {
        Self {
            positions: (0..dataset.len()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[usize] {
        &self.positions
    }
}

/// Owns the dataset and the filtered view; every operation returns a [`Report`].
///
/// Filters replace the view only on success. `filter_state` starts over from the full dataset
/// while the threshold filters narrow the current view.
#[derive(Debug, Clone)]
pub struct RecordStore {
    dataset: Dataset,
    view: FilteredView,
}

impl RecordStore {
    pub fn new(dataset: Dataset) -> Self {
        let view = FilteredView::full(&dataset);
        Self { dataset, view }
    }

    pub fn view(&self) -> &FilteredView {
        &self.view
    }

    /// Records of the current view, in dataset order.
    pub fn filtered(&self) -> impl Iterator<Item = &Record> + Clone {
        self.view
            .positions
            .iter()
            .filter_map(|&idx| self.dataset.get(idx))
    }

    pub fn display(&self) -> Report {
        if self.view.is_empty() {
            return Report::NoData;
        }
        Report::Records(
            self.filtered()
                .map(|r| {
                    (
                        r.county().to_owned(),
                        r.state().to_owned(),
                        r.population().to_owned(),
                    )
                })
                .collect(),
        )
    }

    pub fn filter_state(&mut self, state: &str) -> Report {
        self.view = FilteredView {
            positions: filter_by_state(&self.dataset, state),
        };
        debug!("filter state == {state}: {} records", self.view.len());
        Report::FilterState {
            state: state.to_owned(),
            count: self.view.len(),
        }
    }

    pub fn filter_gt(&mut self, field: &str, threshold: f64) -> StoreResult<Report> {
        self.filter_threshold(field, Comparison::GreaterThan, threshold)
    }

    pub fn filter_lt(&mut self, field: &str, threshold: f64) -> StoreResult<Report> {
        self.filter_threshold(field, Comparison::LessThan, threshold)
    }

    fn filter_threshold(
        &mut self,
        field: &str,
        cmp: Comparison,
        threshold: f64,
    ) -> StoreResult<Report> {
        let positions =
            filter_by_threshold(&self.dataset, &self.view.positions, field, cmp, threshold)?;
        debug!(
            "filter {field} {} {threshold}: {} -> {} records",
            cmp.keyword(),
            self.view.len(),
            positions.len()
        );
        self.view = FilteredView { positions };
        Ok(Report::FilterThreshold {
            field: field.to_owned(),
            cmp,
            threshold,
            count: self.view.len(),
        })
    }

    pub fn population_total(&self) -> StoreResult<Report> {
        let total = population_total(self.filtered())?;
        Ok(Report::PopulationTotal(total))
    }

    pub fn population_field(&self, field: &str) -> StoreResult<Report> {
        let value = field_population(self.filtered(), field)?;
        Ok(Report::FieldPopulation {
            field: field.to_owned(),
            value,
        })
    }

    pub fn percent_field(&self, field: &str) -> StoreResult<Report> {
        let value = field_percent(self.filtered(), field)?;
        Ok(Report::FieldPercent {
            field: field.to_owned(),
            value,
        })
    }
}
