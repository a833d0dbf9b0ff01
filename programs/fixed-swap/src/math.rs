use anchor_lang::prelude::*;

use crate::error::SwapError;

/// Which token a swap takes in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwapDirection {
    AToB,
    BToA,
}

impl From<bool> for SwapDirection {
    fn from(a_to_b: bool) -> Self {
        if a_to_b {
            SwapDirection::AToB
        } else {
            SwapDirection::BToA
        }
    }
}

impl SwapDirection {
    pub fn is_a_to_b(self) -> bool {
        self == SwapDirection::AToB
    }
}

/// Result of pricing one swap at the market price
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quote {
    pub amount_in: u64,
    pub amount_out: u64,
    /// Input units not converted by a B -> A floor division
    pub remainder: u64,
}

/// Price `amount_in` raw units of the input token.
///
/// A -> B pays `amount_in * price`, B -> A pays `amount_in / price` and
/// leaves the remainder in the vault. Mint decimals never enter the math.
pub fn quote(amount_in: u64, price: u64, direction: SwapDirection) -> Result<Quote> {
    require!(price > 0, SwapError::InvalidPrice);

    let (amount_out, remainder) = match direction {
        SwapDirection::AToB => (
            amount_in.checked_mul(price).ok_or(SwapError::Overflow)?,
            0,
        ),
        SwapDirection::BToA => (
            amount_in.checked_div(price).ok_or(SwapError::InvalidPrice)?,
            amount_in.checked_rem(price).ok_or(SwapError::InvalidPrice)?,
        ),
    };

    Ok(Quote {
        amount_in,
        amount_out,
        remainder,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::assert_swap_error;
    use proptest::prelude::*;

    #[test]
    fn test_direction_flag() {
        assert_eq!(SwapDirection::from(true), SwapDirection::AToB);
        assert_eq!(SwapDirection::from(false), SwapDirection::BToA);
        assert!(SwapDirection::AToB.is_a_to_b());
        assert!(!SwapDirection::BToA.is_a_to_b());
    }

    #[test]
    fn test_a_to_b_multiplies() {
        let q = quote(100, 2, SwapDirection::AToB).unwrap();
        assert_eq!(q.amount_in, 100);
        assert_eq!(q.amount_out, 200);
        assert_eq!(q.remainder, 0);
    }

    #[test]
    fn test_b_to_a_floors() {
        let q = quote(7, 2, SwapDirection::BToA).unwrap();
        assert_eq!(q.amount_out, 3);
        assert_eq!(q.remainder, 1);

        let q = quote(1, 1_000_000, SwapDirection::BToA).unwrap();
        assert_eq!(q.amount_out, 0);
        assert_eq!(q.remainder, 1);
    }

    #[test]
    fn test_zero_amount_is_a_no_op() {
        for direction in [SwapDirection::AToB, SwapDirection::BToA] {
            let q = quote(0, 5, direction).unwrap();
            assert_eq!(q.amount_out, 0);
            assert_eq!(q.remainder, 0);
        }
    }

    #[test]
    fn test_zero_price_rejected() {
        assert_swap_error(quote(10, 0, SwapDirection::AToB), SwapError::InvalidPrice);
        assert_swap_error(quote(10, 0, SwapDirection::BToA), SwapError::InvalidPrice);
    }

    #[test]
    fn test_a_to_b_overflow() {
        assert_swap_error(
            quote(u64::MAX, 2, SwapDirection::AToB),
            SwapError::Overflow,
        );
        assert_swap_error(
            quote(1 << 32, 1 << 32, SwapDirection::AToB),
            SwapError::Overflow,
        );
        assert!(quote(u64::MAX, 1, SwapDirection::AToB).is_ok());
    }

    proptest! {
        #[test]
        fn prop_a_to_b_is_exact_product(amount in any::<u64>(), price in 1..=u64::MAX) {
            match (amount as u128).checked_mul(price as u128) {
                Some(out) if out <= u64::MAX as u128 => {
                    let q = quote(amount, price, SwapDirection::AToB).unwrap();
                    prop_assert_eq!(q.amount_out as u128, out);
                    prop_assert_eq!(q.remainder, 0);
                }
                _ => prop_assert!(quote(amount, price, SwapDirection::AToB).is_err()),
            }
        }

        #[test]
        fn prop_b_to_a_accounts_for_every_unit(amount in any::<u64>(), price in 1..=u64::MAX) {
            let q = quote(amount, price, SwapDirection::BToA).unwrap();
            prop_assert!(q.remainder < price);
            prop_assert_eq!(
                q.amount_out as u128 * price as u128 + q.remainder as u128,
                amount as u128
            );
        }
    }
}
