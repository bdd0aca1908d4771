use rust_decimal::Decimal;

use crate::types::{Money, Rate};

/// Growth factor `(1 + rate)^periods`, by repeated squaring.
///
/// Returns `None` if the factor overflows the decimal range.
pub fn compound_factor(rate: Rate, periods: u32) -> Option<Decimal> {
    let mut base = Decimal::ONE + rate;
    let mut remaining = periods;
    let mut factor = Decimal::ONE;

    while remaining > 0 {
        if remaining & 1 == 1 {
            factor = factor.checked_mul(base)?;
        }
        remaining >>= 1;
        if remaining > 0 {
            base = base.checked_mul(base)?;
        }
    }

    Some(factor)
}

/// Level payment that retires `principal` over `nper` periods at `rate` per period:
/// `P * x * r / (x - 1)` with `x = (1 + r)^n`, or `P / n` when the rate is zero.
///
/// Returns `None` for `nper == 0` or when the computation leaves the decimal range.
pub fn level_payment(principal: Money, rate: Rate, nper: u32) -> Option<Money> {
    if nper == 0 {
        return None;
    }

    if rate.is_zero() {
        return principal.checked_div(Decimal::from(nper));
    }

    let x = compound_factor(rate, nper)?;
    let numerator = principal.checked_mul(x)?.checked_mul(rate)?;
    numerator.checked_div(x - Decimal::ONE)
}
