use crate::data_model::EvaluationItem;
use crate::error::{PipelineError, Result};
use tracing::{debug, warn};

/// A pure, order-preserving transform over per-item response lists.
///
/// `apply` receives one entry per evaluation item (in item order), each
/// entry being the ordered list of sampled responses for that item. It must
/// return the same number of entries in the same item order; each item's own
/// list may change count and content arbitrarily (e.g. filter down to a
/// single answer). No other side effects.
pub trait Filter: Send + Sync {
    // Send + Sync so an ensemble can be shared by a multithreaded runner
    fn name(&self) -> &'static str; // For logging/error reporting

    fn apply(&self, resps: Vec<Vec<String>>) -> Result<Vec<Vec<String>>>;
}

/// A named pipeline of filters applied in order to a batch of items.
///
/// Intended usage is to stack multiple post-processing steps: the output of
/// filter *k* becomes the input of filter *k+1*. The final response lists
/// are written back onto each item under this ensemble's name, so several
/// ensembles with distinct names can run over the same items without
/// interfering. Constructed once per task configuration and reused across
/// all of that task's items.
pub struct FilterEnsemble {
    name: String,
    filters: Vec<Box<dyn Filter>>,
}

impl FilterEnsemble {
    pub fn new(name: impl Into<String>, filters: Vec<Box<dyn Filter>>) -> Self {
        let name = name.into();
        if filters.is_empty() {
            warn!(ensemble = %name, "Filter ensemble created with no filters.");
        }
        FilterEnsemble { name, filters }
    }

    /// The key under which results land in `filtered_responses`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs the pipeline over `items` and stores the result on each item as
    /// `filtered_responses[self.name]`. Raw `responses` are never mutated.
    ///
    /// Every filter must preserve the batch length; a mismatch fails fast
    /// with `LengthMismatch` rather than silently misaligning items and
    /// responses on write-back.
    pub fn apply(&self, items: &mut [EvaluationItem]) -> Result<()> {
        let mut resps: Vec<Vec<String>> = items
            .iter()
            .map(|item| item.responses.clone())
            .collect();

        for filter in &self.filters {
            debug!(ensemble = %self.name, filter = filter.name(), "Running filter");

            let out = filter
                .apply(resps)
                .map_err(|e| PipelineError::StepError {
                    filter_name: filter.name().to_string(),
                    source: Box::new(e),
                })?;

            if out.len() != items.len() {
                return Err(PipelineError::LengthMismatch {
                    filter_name: filter.name().to_string(),
                    expected: items.len(),
                    actual: out.len(),
                });
            }
            resps = out;
        }

        for (item, resp) in items.iter_mut().zip(resps) {
            item.filtered_responses.insert(self.name.clone(), resp);
        }
        Ok(())
    }
}
