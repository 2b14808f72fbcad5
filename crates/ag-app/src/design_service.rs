//! Design execution and caching service.

use ag_core::Constants;
use ag_design::{DesignOutcome, Technology, design};
use ag_influent::Influent;
use ag_results::DesignCache;
use tracing::{debug, warn};

use crate::error::AppResult;

/// Options for evaluating designs.
#[derive(Debug, Clone)]
pub struct DesignOptions {
    pub use_cache: bool,
}

impl Default for DesignOptions {
    fn default() -> Self {
        Self { use_cache: true }
    }
}

/// Runs the sizing rules for one session, memoizing per influent.
pub struct DesignService {
    constants: Constants,
    options: DesignOptions,
    cache: DesignCache,
}

impl Default for DesignService {
    fn default() -> Self {
        Self::new(*Constants::standard(), DesignOptions::default())
    }
}

impl DesignService {
    pub fn new(constants: Constants, options: DesignOptions) -> Self {
        Self {
            constants,
            options,
            cache: DesignCache::new(),
        }
    }

    pub fn constants(&self) -> &Constants {
        &self.constants
    }

    pub fn cache(&self) -> &DesignCache {
        &self.cache
    }

    /// Size one technology for `influent`.
    pub fn run(&self, technology: Technology, influent: &Influent) -> AppResult<DesignOutcome> {
        let evaluate = || {
            debug!(technology = %technology, "evaluating design rule");
            design(technology, influent, &self.constants)
        };

        let outcome = if self.options.use_cache {
            self.cache.get_or_compute(technology, influent, evaluate)?
        } else {
            evaluate()?
        };
        Ok(outcome)
    }

    /// Size each listed technology independently, preserving order.
    ///
    /// One technology failing (e.g. an influent already weaker than its
    /// effluent table) does not prevent the others from being sized.
    pub fn run_many(
        &self,
        technologies: &[Technology],
        influent: &Influent,
    ) -> Vec<(Technology, AppResult<DesignOutcome>)> {
        technologies
            .iter()
            .map(|&tech| {
                let outcome = self.run(tech, influent);
                if let Err(err) = &outcome {
                    warn!(technology = %tech, error = %err, "design rule failed");
                }
                (tech, outcome)
            })
            .collect()
    }

    pub fn run_all(&self, influent: &Influent) -> Vec<(Technology, AppResult<DesignOutcome>)> {
        self.run_many(&Technology::ALL, influent)
    }
}
