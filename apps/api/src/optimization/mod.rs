// Resume optimization: rule-based scoring of a resume snapshot.
// Implements: rule vocabularies, individual checks, the detailed/basic rule
// tables, the pluggable scorer and its HTTP handlers.

pub mod handlers;
pub mod policy;
pub mod report;
pub mod rules;
pub mod scorer;
pub mod signals;
