//! Table view engine: filter, sort, paginate, summarize.
//!
//! The whole view is re-derived from current inputs on every frame.
//! Filtering and summary run over the full record list; pagination is
//! applied last, so summary cards always describe the filtered set,
//! never just the visible page.

use std::cmp::Ordering;

use chrono::Datelike;

use crate::model::MarginRecord;

/// Sort key types for table columns.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Integer(i64),
    Float(f64),
    String(String),
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (SortKey::Integer(a), SortKey::Integer(b)) => a.partial_cmp(b),
            (SortKey::Float(a), SortKey::Float(b)) => a.partial_cmp(b),
            (SortKey::String(a), SortKey::String(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

/// Sortable record columns, in table display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Product,
    Category,
    BusinessUnit,
    Department,
    Vendor,
    Month,
    Cost,
    Price,
    Margin,
    MarginPercentage,
    Date,
}

impl SortField {
    /// All fields in display order.
    pub fn all() -> &'static [SortField] {
        &[
            SortField::Id,
            SortField::Product,
            SortField::Category,
            SortField::BusinessUnit,
            SortField::Department,
            SortField::Vendor,
            SortField::Month,
            SortField::Cost,
            SortField::Price,
            SortField::Margin,
            SortField::MarginPercentage,
            SortField::Date,
        ]
    }

    /// Column header label.
    pub fn title(&self) -> &'static str {
        match self {
            SortField::Id => "ID",
            SortField::Product => "Product",
            SortField::Category => "Category",
            SortField::BusinessUnit => "Business Unit",
            SortField::Department => "Department",
            SortField::Vendor => "Vendor",
            SortField::Month => "Month",
            SortField::Cost => "Cost",
            SortField::Price => "Price",
            SortField::Margin => "Margin",
            SortField::MarginPercentage => "Margin %",
            SortField::Date => "Date",
        }
    }

    /// Sort key for this column of the given record.
    pub fn key(&self, r: &MarginRecord) -> SortKey {
        match self {
            SortField::Id => SortKey::Integer(r.id),
            SortField::Product => SortKey::String(r.product.clone()),
            SortField::Category => SortKey::String(r.category.clone()),
            SortField::BusinessUnit => SortKey::String(r.business_unit.clone()),
            SortField::Department => SortKey::String(r.department.clone()),
            SortField::Vendor => SortKey::String(r.vendor.clone()),
            SortField::Month => SortKey::String(r.month.clone()),
            SortField::Cost => SortKey::Float(r.cost),
            SortField::Price => SortKey::Float(r.price),
            SortField::Margin => SortKey::Float(r.margin),
            SortField::MarginPercentage => SortKey::Float(r.margin_percentage),
            SortField::Date => SortKey::Integer(i64::from(r.date.num_days_from_ce())),
        }
    }
}

/// Four optional equality predicates; empty string means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub business_unit: String,
    pub department: String,
    pub vendor: String,
    pub month: String,
}

impl FilterState {
    /// True when no predicate is set.
    pub fn is_empty(&self) -> bool {
        self.business_unit.is_empty()
            && self.department.is_empty()
            && self.vendor.is_empty()
            && self.month.is_empty()
    }

    /// Logical AND across all non-empty predicates.
    pub fn matches(&self, r: &MarginRecord) -> bool {
        (self.business_unit.is_empty() || r.business_unit == self.business_unit)
            && (self.department.is_empty() || r.department == self.department)
            && (self.vendor.is_empty() || r.vendor == self.vendor)
            && (self.month.is_empty() || r.month == self.month)
    }

    pub fn clear(&mut self) {
        *self = FilterState::default();
    }
}

/// Optional sort field plus direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    pub field: Option<SortField>,
    pub ascending: bool,
}

impl SortState {
    /// Cycles the sort for `field`: unset -> ascending -> descending -> unset.
    /// Selecting a different field starts a fresh ascending sort.
    pub fn toggle(&mut self, field: SortField) {
        match self.field {
            Some(current) if current == field => {
                if self.ascending {
                    self.ascending = false;
                } else {
                    self.field = None;
                    self.ascending = false;
                }
            }
            _ => {
                self.field = Some(field);
                self.ascending = true;
            }
        }
    }
}

/// 1-based page number and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub page: usize,
    pub page_size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
        }
    }
}

/// Aggregates over the filtered (pre-pagination) set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub total_margin: f64,
    pub avg_margin_percentage: f64,
    pub total_cost: f64,
    pub total_price: f64,
}

/// One derived view: the visible page plus its metadata.
#[derive(Debug, Clone, Default)]
pub struct TableView {
    /// Records on the current page, in filtered/sorted order.
    pub rows: Vec<MarginRecord>,
    pub summary: Summary,
    /// Size of the filtered set.
    pub total_rows: usize,
    /// ceil(total_rows / page_size); 0 when the filtered set is empty.
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
}

/// Retains records matching every non-empty predicate.
pub fn filter_records<'a>(
    records: &'a [MarginRecord],
    filter: &FilterState,
) -> Vec<&'a MarginRecord> {
    records.iter().filter(|r| filter.matches(r)).collect()
}

/// Stable sort by the selected field; identity when no field is selected.
pub fn sort_records(rows: &mut [&MarginRecord], sort: SortState) {
    let Some(field) = sort.field else {
        return;
    };
    rows.sort_by(|a, b| {
        let cmp = field
            .key(a)
            .partial_cmp(&field.key(b))
            .unwrap_or(Ordering::Equal);
        if sort.ascending { cmp } else { cmp.reverse() }
    });
}

/// Slices out the current page. An out-of-range page yields an empty slice.
pub fn paginate<'a>(rows: &[&'a MarginRecord], page: PageState) -> Vec<&'a MarginRecord> {
    let start = page.page.saturating_sub(1).saturating_mul(page.page_size);
    rows.iter()
        .skip(start)
        .take(page.page_size)
        .copied()
        .collect()
}

/// Sums and averages over the filtered set. Average is 0 when empty.
pub fn summarize(rows: &[&MarginRecord]) -> Summary {
    let count = rows.len();
    let total_margin = rows.iter().map(|r| r.margin).sum();
    let total_cost = rows.iter().map(|r| r.cost).sum();
    let total_price = rows.iter().map(|r| r.price).sum();
    let avg_margin_percentage = if count > 0 {
        rows.iter().map(|r| r.margin_percentage).sum::<f64>() / count as f64
    } else {
        0.0
    };
    Summary {
        count,
        total_margin,
        avg_margin_percentage,
        total_cost,
        total_price,
    }
}

/// Filter, sort, and pagination parameters for the record table.
///
/// Owns the side-effect policy: changing any filter field or toggling
/// the sort resets the current page to 1.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub filter: FilterState,
    pub sort: SortState,
    pub page: PageState,
}

impl ViewState {
    pub fn set_business_unit(&mut self, value: impl Into<String>) {
        self.filter.business_unit = value.into();
        self.page.page = 1;
    }

    pub fn set_department(&mut self, value: impl Into<String>) {
        self.filter.department = value.into();
        self.page.page = 1;
    }

    pub fn set_vendor(&mut self, value: impl Into<String>) {
        self.filter.vendor = value.into();
        self.page.page = 1;
    }

    pub fn set_month(&mut self, value: impl Into<String>) {
        self.filter.month = value.into();
        self.page.page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
        self.page.page = 1;
    }

    /// Cycles the sort on `field` (unset -> asc -> desc -> unset).
    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort.toggle(field);
        self.page.page = 1;
    }

    /// Moves to the next page; refused beyond the last page.
    pub fn next_page(&mut self, total_pages: usize) {
        if self.page.page < total_pages {
            self.page.page += 1;
        }
    }

    /// Moves to the previous page; refused below page 1.
    pub fn prev_page(&mut self) {
        if self.page.page > 1 {
            self.page.page -= 1;
        }
    }

    /// Derives the visible page, summary, and pagination metadata.
    pub fn derive(&self, records: &[MarginRecord]) -> TableView {
        let mut filtered = filter_records(records, &self.filter);
        sort_records(&mut filtered, self.sort);

        let summary = summarize(&filtered);
        let total_rows = filtered.len();
        let total_pages = total_rows.div_ceil(self.page.page_size.max(1));
        let rows = paginate(&filtered, self.page)
            .into_iter()
            .cloned()
            .collect();

        TableView {
            rows,
            summary,
            total_rows,
            total_pages,
            page: self.page.page,
            page_size: self.page.page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_records;

    fn ids(rows: &[&MarginRecord]) -> Vec<i64> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn empty_filter_is_identity() {
        let records = sample_records();
        let filtered = filter_records(&records, &FilterState::default());
        assert_eq!(filtered.len(), records.len());
        assert_eq!(ids(&filtered), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn filters_and_across_fields() {
        let records = sample_records();

        let mut filter = FilterState {
            business_unit: "Unit B".to_string(),
            ..Default::default()
        };
        let filtered = filter_records(&records, &filter);
        assert_eq!(ids(&filtered), vec![2, 5]);

        // Adding a second predicate narrows the set further.
        filter.department = "Sales".to_string();
        let filtered = filter_records(&records, &filter);
        assert_eq!(ids(&filtered), vec![5]);

        // A predicate matching nothing yields the empty set.
        filter.vendor = "Vendor 1".to_string();
        let filtered = filter_records(&records, &filter);
        assert!(filtered.is_empty());
    }

    #[test]
    fn filtered_set_is_subset_matching_all_predicates() {
        let records = sample_records();
        let units = ["", "Unit A", "Unit B"];
        let months = ["", "January 2024", "February 2024"];

        for unit in units {
            for month in months {
                let filter = FilterState {
                    business_unit: unit.to_string(),
                    month: month.to_string(),
                    ..Default::default()
                };
                let filtered = filter_records(&records, &filter);
                assert!(filtered.len() <= records.len());
                for r in &filtered {
                    assert!(filter.matches(r));
                }
            }
        }
    }

    #[test]
    fn unit_a_filter_then_margin_descending() {
        // Unit A matches ids 1 and 3; margin descending orders them
        // [50, 15]; both fit on a single default-size page.
        let records = sample_records();
        let mut view = ViewState::default();
        view.set_business_unit("Unit A");
        view.toggle_sort(SortField::Margin); // asc
        view.toggle_sort(SortField::Margin); // desc

        let table = view.derive(&records);
        assert_eq!(table.total_rows, 2);
        assert_eq!(table.total_pages, 1);
        let margins: Vec<f64> = table.rows.iter().map(|r| r.margin).collect();
        assert_eq!(margins, vec![50.0, 15.0]);
        let row_ids: Vec<i64> = table.rows.iter().map(|r| r.id).collect();
        assert_eq!(row_ids, vec![1, 3]);
    }

    #[test]
    fn sort_cycle_returns_to_original_order() {
        let records = sample_records();
        let mut view = ViewState::default();

        view.toggle_sort(SortField::Product);
        let products: Vec<String> = view
            .derive(&records)
            .rows
            .iter()
            .map(|r| r.product.clone())
            .collect();
        assert_eq!(
            products,
            vec![
                "Product A",
                "Product B",
                "Product C",
                "Product D",
                "Product E"
            ]
        );
        assert!(view.sort.ascending);

        view.toggle_sort(SortField::Product);
        assert_eq!(view.sort.field, Some(SortField::Product));
        assert!(!view.sort.ascending);

        // Third selection clears the sort and restores insertion order.
        view.toggle_sort(SortField::Product);
        assert_eq!(view.sort.field, None);
        let row_ids: Vec<i64> = view.derive(&records).rows.iter().map(|r| r.id).collect();
        assert_eq!(row_ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn selecting_a_new_field_restarts_ascending() {
        let mut sort = SortState::default();
        sort.toggle(SortField::Cost);
        sort.toggle(SortField::Cost);
        assert!(!sort.ascending);

        sort.toggle(SortField::Vendor);
        assert_eq!(sort.field, Some(SortField::Vendor));
        assert!(sort.ascending);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        // Records 2 and 5 share marginPercentage 37.5 and must keep
        // their relative input order.
        let records = sample_records();
        let mut rows = filter_records(&records, &FilterState::default());
        sort_records(
            &mut rows,
            SortState {
                field: Some(SortField::MarginPercentage),
                ascending: true,
            },
        );
        assert_eq!(ids(&rows), vec![4, 1, 2, 5, 3]);
    }

    #[test]
    fn pages_concatenate_to_full_set() {
        let records = sample_records();
        let rows = filter_records(&records, &FilterState::default());
        let page_size = 2;
        let total_pages = rows.len().div_ceil(page_size);
        assert_eq!(total_pages, 3);

        let mut seen = Vec::new();
        for page in 1..=total_pages {
            let p = paginate(&rows, PageState { page, page_size });
            assert!(p.len() <= page_size);
            seen.extend(ids(&p));
        }
        assert_eq!(seen, ids(&rows));

        // A page past the end is empty rather than panicking.
        let past = paginate(
            &rows,
            PageState {
                page: total_pages + 1,
                page_size,
            },
        );
        assert!(past.is_empty());
    }

    #[test]
    fn summarize_over_filtered_set_not_page() {
        let records = sample_records();
        let view = ViewState {
            page: PageState {
                page: 1,
                page_size: 2,
            },
            ..Default::default()
        };

        let table = view.derive(&records);
        assert_eq!(table.rows.len(), 2);
        // Summary covers all five records, not the two visible ones.
        assert_eq!(table.summary.count, 5);
        assert!((table.summary.total_margin - 220.0).abs() < 1e-9);
        assert!((table.summary.total_cost - 445.0).abs() < 1e-9);
        assert!((table.summary.total_price - 665.0).abs() < 1e-9);
        let expected_avg = (33.33 + 37.5 + 42.86 + 28.57 + 37.5) / 5.0;
        assert!((table.summary.avg_margin_percentage - expected_avg).abs() < 1e-9);
    }

    #[test]
    fn empty_summary_has_zero_average() {
        let summary = summarize(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.avg_margin_percentage, 0.0);
        assert_eq!(summary.total_margin, 0.0);
    }

    #[test]
    fn filter_and_sort_changes_reset_page() {
        let mut view = ViewState::default();
        view.page.page = 3;
        view.set_department("Sales");
        assert_eq!(view.page.page, 1);

        view.page.page = 2;
        view.toggle_sort(SortField::Price);
        assert_eq!(view.page.page, 1);

        view.page.page = 4;
        view.clear_filters();
        assert_eq!(view.page.page, 1);
        assert!(view.filter.is_empty());
    }

    #[test]
    fn page_navigation_is_clamped() {
        let mut view = ViewState::default();
        view.prev_page();
        assert_eq!(view.page.page, 1);

        view.next_page(3);
        view.next_page(3);
        assert_eq!(view.page.page, 3);
        view.next_page(3);
        assert_eq!(view.page.page, 3);

        // Empty filtered set: zero pages, navigation refused both ways.
        view.page.page = 1;
        view.next_page(0);
        assert_eq!(view.page.page, 1);
    }

    #[test]
    fn date_sort_orders_chronologically() {
        let records = sample_records();
        let mut rows = filter_records(&records, &FilterState::default());
        sort_records(
            &mut rows,
            SortState {
                field: Some(SortField::Date),
                ascending: false,
            },
        );
        assert_eq!(ids(&rows), vec![5, 4, 3, 2, 1]);
    }
}
