//! Balance policy
//!
//! Pure decision function for balance mutations. Given the current balance,
//! the operation kind, and the amount, it either computes the new balance or
//! rejects the operation. No I/O, no side effects, deterministic, and safe
//! to call concurrently without synchronization.

use rust_decimal::Decimal;

use crate::types::{BankError, OperationKind};

/// Decide the new balance for an operation, or reject it
///
/// # Arguments
///
/// * `current` - The balance read from the account store
/// * `kind` - Whether the amount is deposited or withdrawn
/// * `amount` - The unsigned operation amount
///
/// # Returns
///
/// * `Ok(new_balance)` if the operation is allowed
/// * `Err(BankError::InvalidAmount)` if the amount is negative
/// * `Err(BankError::InsufficientFunds)` if a withdrawal would drive the
///   balance negative
/// * `Err(BankError::ArithmeticOverflow)` if a deposit would overflow
pub fn decide(current: Decimal, kind: OperationKind, amount: Decimal) -> Result<Decimal, BankError> {
    if amount < Decimal::ZERO {
        return Err(BankError::invalid_amount(amount));
    }

    match kind {
        OperationKind::Deposit => current
            .checked_add(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("deposit")),
        OperationKind::Withdrawal => {
            let new_balance = current
                .checked_sub(amount)
                .ok_or_else(|| BankError::arithmetic_overflow("withdrawal"))?;
            if new_balance < Decimal::ZERO {
                return Err(BankError::insufficient_funds(current, amount));
            }
            Ok(new_balance)
        }
    }
}
