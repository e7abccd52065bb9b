use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{Attribute, Observation, Region};

/// Outcome of merging tabular rows into boundary regions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinReport {
    pub matched: usize,
    /// Observation keys with no region of the same key.
    pub unmatched_observations: Vec<String>,
    /// Region keys that received no values and will render as "no data".
    pub regions_without_data: Vec<String>,
}

/// Copies every tracked metric of each observation into the region(s) with the
/// exact same key.
///
/// Unmatched keys are reported but never treated as errors.
pub fn join_observations(regions: &mut [Region], observations: &[Observation]) -> JoinReport {
    let mut report = JoinReport::default();

    for observation in observations {
        let mut found = false;
        for region in regions.iter_mut().filter(|r| r.key == observation.state) {
            for attribute in Attribute::ALL {
                region
                    .values
                    .insert(attribute, observation.value(attribute));
            }
            found = true;
        }

        if found {
            report.matched += 1;
        } else {
            report.unmatched_observations.push(observation.state.clone());
        }
    }

    report.regions_without_data = regions
        .iter()
        .filter(|r| !r.has_joined_values())
        .map(|r| r.key.clone())
        .collect();

    debug!(
        matched = report.matched,
        regions = regions.len(),
        "joined observations into regions"
    );
    if !report.unmatched_observations.is_empty() {
        warn!(
            keys = ?report.unmatched_observations,
            "observations without a matching region"
        );
    }

    report
}
