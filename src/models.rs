/// One pending price change for a single item, as returned by the
/// price-change query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub plu: i64,
    pub price_old: String,
    pub price_new: String,
}
