use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[repr(u32)]
pub enum DistributorError {
    /// `initialize` was already called on this clone.
    AlreadyInitialized = 1,
    /// The clone has not been initialized by its factory.
    NotInitialized = 2,
    /// Token or creator is the zero account/contract.
    ZeroAddress = 3,
    /// Declared total allocation must be positive.
    InvalidAllocation = 4,
    /// The claim window is over.
    DeadlinePassed = 5,
    /// The recipient already claimed from this campaign.
    AlreadyClaimed = 6,
    /// The proof does not verify against the committed root.
    InvalidProof = 7,
    /// Claimed amount must be positive.
    InvalidAmount = 8,
    /// The clone holds fewer tokens than the claim.
    InsufficientFunds = 9,
    /// Only the campaign creator may sweep.
    NotCreator = 10,
    /// Sweep requires a deadline that has passed.
    NotExpiredYet = 11,
    /// The campaign is closed or holds no tokens.
    NothingToSweep = 12,
    /// The token contract rejected the transfer.
    TransferFailed = 13,
    ArithmeticOverflow = 14,
}
