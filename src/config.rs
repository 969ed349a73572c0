//! Tree configuration
//!
//! Host-selectable behaviour of a [`Tree`](crate::Tree): how contract
//! violations surface and how much arena space to reserve up front.

use crate::error::{RenderTreeError, RenderTreeResult};

// =============================================================================
// ContractPolicy
// =============================================================================

/// What a tree does when a caller breaks an accessor contract
/// (`WrongVariant`, `UnknownNode`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContractPolicy {
    /// Return the error to the caller
    #[default]
    Report,
    /// Panic at the checked boundary with the error message
    Assert,
}

// =============================================================================
// TreeConfig
// =============================================================================

/// Configuration for a render tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeConfig {
    /// Contract violation handling.
    pub contract: ContractPolicy,
    /// Number of nodes to reserve arena space for.
    pub expected_nodes: usize,
}

impl TreeConfig {
    /// Development config (panic on contract violations).
    pub const STRICT: Self = Self {
        contract: ContractPolicy::Assert,
        expected_nodes: 0,
    };

    /// Production config (report contract violations).
    pub const LENIENT: Self = Self {
        contract: ContractPolicy::Report,
        expected_nodes: 0,
    };

    /// Create a new config.
    pub fn new(contract: ContractPolicy) -> Self {
        Self {
            contract,
            expected_nodes: 0,
        }
    }

    /// Reserve arena space for `n` nodes.
    pub fn with_capacity(mut self, n: usize) -> Self {
        self.expected_nodes = n;
        self
    }

    /// Route a result through the contract policy.
    ///
    /// Under [`ContractPolicy::Assert`] a contract violation panics here;
    /// rejected mutations are always returned.
    pub(crate) fn check<T>(&self, result: RenderTreeResult<T>) -> RenderTreeResult<T> {
        if let Err(err) = &result
            && err.is_contract_violation()
        {
            match self.contract {
                ContractPolicy::Report => log::warn!("render tree contract violation: {err}"),
                ContractPolicy::Assert => contract_failure(err),
            }
        }
        result
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self::LENIENT
    }
}

#[cold]
#[inline(never)]
fn contract_failure(err: &RenderTreeError) -> ! {
    panic!("render tree contract violation: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::NodeId;

    #[test]
    fn test_default_reports() {
        let config = TreeConfig::default();
        assert_eq!(config.contract, ContractPolicy::Report);
        let res: RenderTreeResult<()> = Err(RenderTreeError::UnknownNode(NodeId::new(9, 0)));
        assert!(config.check(res).is_err());
    }

    #[test]
    fn test_strict_passes_mutation_errors_through() {
        let res: RenderTreeResult<()> = Err(RenderTreeError::NotAttached(NodeId::new(2, 0)));
        assert!(TreeConfig::STRICT.check(res).is_err());
    }

    #[test]
    #[should_panic(expected = "contract violation")]
    fn test_strict_panics_on_contract_violation() {
        let res: RenderTreeResult<()> = Err(RenderTreeError::UnknownNode(NodeId::new(9, 0)));
        let _ = TreeConfig::STRICT.check(res);
    }

    #[test]
    fn test_capacity_builder() {
        let config = TreeConfig::new(ContractPolicy::Report).with_capacity(64);
        assert_eq!(config.expected_nodes, 64);
    }
}
