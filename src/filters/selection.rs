use crate::ensemble::Filter;
use crate::error::{PipelineError, Result};

/// Keeps only the first sampled response of each item.
///
/// Typical last stage of an ensemble feeding a single-answer metric.
pub struct TakeFirstFilter;

impl Filter for TakeFirstFilter {
    fn name(&self) -> &'static str {
        "TakeFirstFilter"
    }

    fn apply(&self, resps: Vec<Vec<String>>) -> Result<Vec<Vec<String>>> {
        resps
            .into_iter()
            .enumerate()
            .map(|(idx, mut item_resps)| {
                if item_resps.is_empty() {
                    return Err(PipelineError::NotEnoughResponses {
                        item_index: idx,
                        available: 0,
                        needed: 1,
                    });
                }
                item_resps.truncate(1);
                Ok(item_resps)
            })
            .collect()
    }
}

/// Keeps the first `k` sampled responses of each item.
pub struct TakeKFilter {
    k: usize,
}

impl TakeKFilter {
    pub fn new(k: usize) -> Self {
        TakeKFilter { k }
    }
}

impl Filter for TakeKFilter {
    fn name(&self) -> &'static str {
        "TakeKFilter"
    }

    fn apply(&self, resps: Vec<Vec<String>>) -> Result<Vec<Vec<String>>> {
        resps
            .into_iter()
            .enumerate()
            .map(|(idx, mut item_resps)| {
                if item_resps.len() < self.k {
                    return Err(PipelineError::NotEnoughResponses {
                        item_index: idx,
                        available: item_resps.len(),
                        needed: self.k,
                    });
                }
                item_resps.truncate(self.k);
                Ok(item_resps)
            })
            .collect()
    }
}
