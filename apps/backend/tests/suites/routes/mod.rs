pub mod healthcheck;
pub mod weekly_reads;
pub mod weekly_scorecard;
