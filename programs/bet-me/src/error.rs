use anchor_lang::prelude::*;

#[error_code]
pub enum BetMeError {
    // Access Errors (0x1000 - 0x1999)
    #[msg("Only the bet owner may perform this action")]
    NotOwner = 0x1000,

    #[msg("Signer is not the designated arbiter")]
    NotArbiter = 0x1001,

    #[msg("Signer is not the designated opponent")]
    NotDesignatedOpponent = 0x1002,

    #[msg("The owner cannot take the opponent role")]
    OwnerCannotOppose = 0x1003,

    #[msg("The arbiter cannot take the opponent role")]
    ArbiterCannotOppose = 0x1004,

    #[msg("Signer holds no role in this bet")]
    UnknownParty = 0x1005,

    // Terms Errors (0x2000 - 0x2999)
    #[msg("Assertion text must not be empty")]
    EmptyAssertion = 0x2000,

    #[msg("Assertion text exceeds the maximum length")]
    AssertionTooLong = 0x2001,

    #[msg("Deadline must be strictly in the future")]
    DeadlineNotInFuture = 0x2002,

    #[msg("Arbiter fee must be less than 10000 basis points")]
    InvalidArbiterFee = 0x2003,

    #[msg("The owner cannot be the arbiter")]
    ArbiterIsOwner = 0x2004,

    #[msg("The opponent cannot be the arbiter")]
    ArbiterIsOpponent = 0x2005,

    #[msg("The owner cannot be the opponent")]
    OpponentIsOwner = 0x2006,

    #[msg("The arbiter cannot be the opponent")]
    OpponentIsArbiter = 0x2007,

    #[msg("New value is identical to the current value")]
    UnchangedValue = 0x2008,

    // Lifecycle Errors (0x3000 - 0x3999)
    #[msg("Owner stake has already been committed")]
    OwnerStakeAlreadyCommitted = 0x3000,

    #[msg("Owner stake has not been committed yet")]
    OwnerStakeNotCommitted = 0x3001,

    #[msg("No arbiter address is set")]
    ArbiterNotSet = 0x3002,

    #[msg("Arbiter has already confirmed bonding")]
    ArbiterAlreadyConfirmed = 0x3003,

    #[msg("Arbiter has not confirmed bonding")]
    ArbiterNotConfirmed = 0x3004,

    #[msg("Opponent stake has already been committed")]
    OpponentStakeAlreadyCommitted = 0x3005,

    #[msg("Opponent stake has not been committed yet")]
    OpponentStakeNotCommitted = 0x3006,

    #[msg("A decision has already been recorded")]
    DecisionAlreadyRecorded = 0x3007,

    #[msg("Decision must be true, false or unresolvable")]
    InvalidDecision = 0x3008,

    #[msg("The deadline has passed")]
    DeadlinePassed = 0x3009,

    #[msg("Voting is still in progress")]
    VotingInProgress = 0x300a,

    #[msg("Opponent has an unwithdrawn payout")]
    OpponentPayoutPending = 0x300b,

    // Commitment Errors (0x4000 - 0x4999)
    #[msg("Expected state version does not match the current state version")]
    StaleStateVersion = 0x4000,

    #[msg("Stake amount must be greater than 0")]
    ZeroStake = 0x4001,

    #[msg("Stake amount must equal the owner's bet")]
    StakeMismatch = 0x4002,

    #[msg("Bond amount must equal the arbiter penalty amount")]
    PenaltyMismatch = 0x4003,

    // Settlement Errors (0x5000 - 0x5999)
    #[msg("Withdrawals open after a decision or once the deadline passes")]
    WithdrawalNotOpen = 0x5000,

    #[msg("Payout has already been withdrawn")]
    AlreadyWithdrawn = 0x5001,

    #[msg("Nothing to withdraw")]
    NothingToWithdraw = 0x5002,

    #[msg("Vault has insufficient balance for this operation")]
    InsufficientVaultBalance = 0x5003,

    #[msg("Recipient account was not supplied")]
    UnknownRecipient = 0x5004,

    #[msg("Arithmetic overflow")]
    Overflow = 0x5005,

    #[msg("Arithmetic underflow")]
    Underflow = 0x5006,
}
