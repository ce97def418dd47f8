use crate::ensemble::{Filter, FilterEnsemble};
use crate::error::{PipelineError, Result};
use crate::filters::{IdentityFilter, TakeFirstFilter, TakeKFilter};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Represents the overall post-processing configuration read from YAML.
///
/// A task may configure several ensembles; each runs independently over the
/// task's items and stores its result under its own name.
#[derive(Deserialize, Debug, Clone)]
pub struct PostprocConfig {
    pub ensembles: Vec<EnsembleConfig>,
}

/// One named filter pipeline: an ordered list of filter specifications.
#[derive(Deserialize, Debug, Clone)]
pub struct EnsembleConfig {
    pub name: String,
    pub filters: Vec<FilterConfig>,
}

impl EnsembleConfig {
    /// Instantiates the configured filters, in order, into an ensemble.
    pub fn build(&self) -> FilterEnsemble {
        let filters: Vec<Box<dyn Filter>> = self
            .filters
            .iter()
            .map(|spec| spec.build())
            .collect();
        FilterEnsemble::new(self.name.clone(), filters)
    }
}

/// Represents a single filter stage in a pipeline.
/// Uses Serde's externally tagged enum representation.
#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "type")] // The 'type' field in YAML determines which variant
pub enum FilterConfig {
    Identity,
    TakeFirst,
    TakeK(TakeKParams),
    // Add other filter types here as needed
}

/// Parameters for the TakeK filter.
#[derive(Deserialize, Debug, Clone)]
pub struct TakeKParams {
    pub k: usize,
}

impl FilterConfig {
    /// Returns a string slice representing the name of the filter type.
    pub fn name(&self) -> &'static str {
        match self {
            FilterConfig::Identity => "Identity",
            FilterConfig::TakeFirst => "TakeFirst",
            FilterConfig::TakeK(_) => "TakeK",
        }
    }

    fn build(&self) -> Box<dyn Filter> {
        match self {
            FilterConfig::Identity => Box::new(IdentityFilter),
            FilterConfig::TakeFirst => Box::new(TakeFirstFilter),
            FilterConfig::TakeK(params) => Box::new(TakeKFilter::new(params.k)),
        }
    }
}

/// Loads and parses the post-processing configuration YAML file.
pub fn load_postproc_config<P: AsRef<Path>>(config_path: P) -> Result<PostprocConfig> {
    let path_ref = config_path.as_ref();
    let config_content = fs::read_to_string(path_ref).map_err(|e| {
        PipelineError::ConfigError(format!(
            "Failed to read postproc config file '{}': {}",
            path_ref.display(),
            e
        ))
    })?;

    serde_yaml::from_str(&config_content).map_err(|e| {
        PipelineError::ConfigError(format!(
            "Failed to parse postproc config YAML from '{}': {}",
            path_ref.display(),
            e
        ))
    })
}
