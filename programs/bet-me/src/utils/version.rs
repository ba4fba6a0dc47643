use crate::error::BetMeError;
use anchor_lang::prelude::*;

/// Commitment guard: a commitment is only accepted against the exact state
/// version the caller observed. Any change since then, relevant or not,
/// rejects it.
pub fn ensure_version_matches(expected_version: u64, state_version: u64) -> Result<()> {
    require!(
        expected_version == state_version,
        BetMeError::StaleStateVersion
    );

    Ok(())
}

pub fn next_version(state_version: u64) -> Result<u64> {
    state_version
        .checked_add(1)
        .ok_or(BetMeError::Overflow.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_version_accepted() {
        assert!(ensure_version_matches(0, 0).is_ok());
        assert!(ensure_version_matches(7, 7).is_ok());
    }

    #[test]
    fn test_older_and_newer_versions_rejected() {
        // strict equality, a caller ahead of the state is as wrong as one behind it
        assert_eq!(
            ensure_version_matches(3, 4).unwrap_err(),
            anchor_lang::error::Error::from(BetMeError::StaleStateVersion)
        );
        assert_eq!(
            ensure_version_matches(5, 4).unwrap_err(),
            anchor_lang::error::Error::from(BetMeError::StaleStateVersion)
        );
    }

    #[test]
    fn test_next_version() {
        assert_eq!(next_version(0).unwrap(), 1);
        assert!(next_version(u64::MAX).is_err());
    }
}
