//! hwdiag Logic - Hardware Diagnosis Rule Matcher
//!
//! This crate matches observed hardware symptoms ("facts") against a knowledge
//! base of condition→conclusion rules and reports the best-supported
//! diagnosis. Each rule is scored by the share of its conditions present in
//! the facts.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       hwdiag matcher                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │                 Knowledge Base                        │   │
//! │  │  Loader │ Conditions │ Rules │ Exclusion Sets         │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! │                           │                                  │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │                    Matcher                            │   │
//! │  │  Contradiction Check │ Scoring │ Stable Ranking       │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! │                           │                                  │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │                    Verdict                            │   │
//! │  │  Contradiction │ NoMatch │ SingleMatch │ RankedList   │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! │                                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use hwdiag_logic::{infer, FactSet, KnowledgeBase, Rule};
//!
//! let kb = KnowledgeBase::with_rules([
//!     Rule::new(["A", "B"], "X").unwrap(),
//!     Rule::new(["A"], "Y").unwrap(),
//! ]);
//! let facts: FactSet = ["A", "B"].into_iter().collect();
//!
//! let verdict = infer(&kb, &facts);
//! assert_eq!(verdict.to_string(), "Possibility: X (Match-degree: 100%)");
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod exclusion;
pub mod facts;
pub mod knowledge;
pub mod loader;
pub mod rule;
pub mod selection;
pub mod verdict;

// Re-exports
pub use config::Config;
pub use engine::{infer, score_rules, Matcher};
pub use error::{Error, Result};
pub use exclusion::{ExclusionTable, ExclusiveSet};
pub use facts::FactSet;
pub use knowledge::KnowledgeBase;
pub use rule::{Conclusion, Condition, Rule, RuleBuilder};
pub use selection::{render_result, select_facts};
pub use verdict::{MatchResult, Verdict};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
