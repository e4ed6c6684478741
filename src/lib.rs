pub mod chain;
pub mod charset;
pub mod config;
pub mod dictionary;
pub mod engine;
pub mod export;
pub mod io;
pub mod mutation;
pub mod operation;
pub mod oracle;
pub mod passwd;
pub mod report;
pub mod rule;
pub mod search;
pub mod stats;
pub mod user;

pub mod prelude {
    pub use crate::chain::{RULE_CHAINS, RuleChain};
    pub use crate::config::{LengthPolicy, MutationConfig, ReplaceMode, SearchSettings};
    pub use crate::engine::{Engine, RunReport};
    pub use crate::oracle::{HashOracle, UnixCrypt};
    pub use crate::rule::Rule;
    pub use crate::search::{Outcome, UserResult};
    pub use crate::user::UserEntry;
}
