pub mod attribute_parser;
pub mod eligibility;
pub mod shortlist_log;

pub use eligibility::{Classification, EligibilityEvaluator, RejectReason, Verdict};
pub use shortlist_log::ShortlistLog;
