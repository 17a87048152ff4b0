/// Application services built on top of outbound ports
mod issue_search_dedup_gate;

pub use issue_search_dedup_gate::IssueSearchDedupGate;
