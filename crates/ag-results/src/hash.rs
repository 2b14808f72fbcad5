//! Content-based hashing for design IDs.

use ag_design::Technology;
use ag_influent::Influent;
use sha2::{Digest, Sha256};

pub fn compute_design_id(technology: Technology, influent: &Influent, engine_version: &str) -> String {
    let mut hasher = Sha256::new();

    hasher.update(technology.name().as_bytes());

    let influent_json = serde_json::to_string(influent).unwrap_or_default();
    hasher.update(influent_json.as_bytes());

    hasher.update(engine_version.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}
