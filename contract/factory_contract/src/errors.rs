use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
#[repr(u32)]
pub enum FactoryError {
    /// Token, creator or collector is the zero account/contract.
    ZeroAddress = 1,
    /// Declared total allocation must be positive.
    InvalidAllocation = 2,
    /// Attached payment is below the base fee.
    InsufficientFee = 3,
    /// Fees and payments cannot be negative.
    InvalidFee = 4,
    /// Only the current collector may change the fee policy.
    NotCollector = 5,
    /// Moving the creator's deposit into the campaign failed.
    DepositFailed = 6,
    /// Forwarding the creation fee to the collector failed.
    FeeTransferFailed = 7,
    ArithmeticOverflow = 8,
    /// Non-zero deadline that is not in the future.
    InvalidDeadline = 9,
}
