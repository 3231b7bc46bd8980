// Comment analysis: the classifier seam, its mock backend and the demo fixtures.

pub mod classifier;
pub mod demo;
pub mod handlers;
