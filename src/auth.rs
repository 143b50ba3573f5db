//! Administrator authorization for mutating registry calls.

use alloy_primitives::Address;

/// Decides whether a caller may mutate the registry.
///
/// Consulted at the top of every mutating operation; read paths never
/// require authorization.
pub trait AdminPolicy: Send + Sync {
    fn is_admin(&self, caller: &Address) -> bool;
}

/// Policy with a single fixed administrator.
#[derive(Debug, Clone)]
pub struct SingleAdmin {
    owner: Address,
}

impl SingleAdmin {
    pub fn new(owner: Address) -> Self {
        Self { owner }
    }

    pub fn owner(&self) -> Address {
        self.owner
    }
}

impl AdminPolicy for SingleAdmin {
    fn is_admin(&self, caller: &Address) -> bool {
        *caller == self.owner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_single_admin() {
        let owner = address!("0x0000000000000000000000000000000000000001");
        let other = address!("0x0000000000000000000000000000000000000002");
        let policy = SingleAdmin::new(owner);

        assert!(policy.is_admin(&owner));
        assert!(!policy.is_admin(&other));
        assert_eq!(policy.owner(), owner);
    }
}
