use crate::constants::*;
use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace, Default, Debug, PartialEq, Eq)]
pub struct BetMe {
    // --- Identity ---
    pub id: u64,       // Owner-chosen identifier, part of the PDA seeds.
    pub owner: Pubkey, // The party betting the assertion is true. Never changes.

    // --- Terms ---
    #[max_len(MAX_ASSERTION_LEN)]
    pub assertion: String,              // The statement being bet on.
    pub deadline: i64,                  // Decisions must land strictly before this timestamp.
    pub arbiter_fee_bps: u16,           // Arbiter fee as basis points of the owner's bet.
    pub arbiter: Option<Pubkey>,        // The arbiter candidate, or none.
    pub arbiter_penalty_amount: u64,    // Bond the arbiter must post, forfeited if they never rule.
    pub opponent: Option<Pubkey>,       // Designated opponent, or none for first-come.

    // --- State ---
    pub state_version: u64,             // Bumped once per successful mutation.
    pub current_bet: u64,               // Owner stake; 0 until committed.
    pub is_arbiter_confirmed: bool,     // The arbiter has posted the bond.
    pub is_opponent_confirmed: bool,    // The opponent has matched the stake.
    pub decision: Decision,             // Write-once ruling.
    pub is_owner_withdrawn: bool,
    pub is_arbiter_withdrawn: bool,
    pub is_opponent_withdrawn: bool,

    // --- Metadata ---
    pub bump: u8,                       // A bump seed for PDA.
}

/// Terms supplied by the owner at creation.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct BetTerms {
    pub assertion: String,
    pub deadline: Option<i64>,
    pub arbiter_fee_bps: u16,
    pub arbiter: Option<Pubkey>,
    pub opponent: Option<Pubkey>,
    pub arbiter_penalty_amount: u64,
}

impl BetMe {
    pub fn is_owner_stake_committed(&self) -> bool {
        self.current_bet > 0
    }

    pub fn arbiter_has_voted(&self) -> bool {
        self.decision != Decision::Unset
    }

    /// True or false was ruled; unresolvable does not count.
    pub fn is_decision_made(&self) -> bool {
        matches!(
            self.decision,
            Decision::AssertionTrue | Decision::AssertionFalse
        )
    }

    pub fn is_assertion_true(&self) -> bool {
        self.decision == Decision::AssertionTrue
    }

    pub fn is_expired(&self, now: i64) -> bool {
        now >= self.deadline
    }

    pub fn is_voting_in_progress(&self, now: i64) -> bool {
        self.is_opponent_confirmed && !self.arbiter_has_voted() && !self.is_expired(now)
    }

    /// Both sides are in, the deadline has passed and no ruling was made.
    pub fn is_arbiter_lazy(&self, now: i64) -> bool {
        self.is_arbiter_confirmed
            && self.is_opponent_confirmed
            && !self.arbiter_has_voted()
            && self.is_expired(now)
    }

    pub fn is_withdrawal_open(&self, now: i64) -> bool {
        self.arbiter_has_voted() || self.is_expired(now)
    }

    pub fn is_arbiter(&self, who: &Pubkey) -> bool {
        self.arbiter.as_ref() == Some(who)
    }

    /// Role a signer holds for pull payments. The opponent only counts once
    /// their stake is in.
    pub fn role_of(&self, who: &Pubkey) -> Option<Role> {
        if *who == self.owner {
            Some(Role::Owner)
        } else if self.is_arbiter(who) {
            Some(Role::Arbiter)
        } else if self.is_opponent_confirmed && self.opponent.as_ref() == Some(who) {
            Some(Role::Opponent)
        } else {
            None
        }
    }
}
