use crate::error::{ConvError, ConvResult};

/// Tolerance for detecting roundoff error in the floating point digit count.
pub(crate) const ROUNDOFF_TOL: f64 = 1e-8;

/// Splits `num` into its digits in `base`, most significant first.
///
/// Zero is always `[0]`, never an empty vec.
pub fn from_base10(num: u64, base: u64) -> ConvResult<Vec<u64>> {
    validate_base(base)?;
    if num == 0 {
        return Ok(vec![0]);
    }

    let mut count = num_digits(num as f64, base as f64, ROUNDOFF_TOL);

    // `num as f64` rounds for large values, so settle the estimate on
    // base^(count - 1) <= num < base^count with exact powers.
    while count > 1 && !power_at_most(base, count - 1, num) {
        count -= 1;
    }
    while power_at_most(base, count, num) {
        count += 1;
    }
    tracing::trace!(num, base, count, "digit count");

    let mut rest = num;
    let mut digits = Vec::with_capacity(count);
    for exp in (0..count).rev() {
        // base^exp <= num holds for every exp below count
        let place = base.pow(exp as u32);
        digits.push(rest / place);
        rest %= place;
    }

    Ok(digits)
}

/// Recombines a most-significant-first digit sequence in `base` into its value.
///
/// An empty sequence is 0. Leading zeros are accepted.
pub fn to_base10(digits: &[u64], base: u64) -> ConvResult<u64> {
    validate_base(base)?;

    if let Some(&digit) = digits.iter().find(|&&d| d >= base) {
        return Err(ConvError::DigitOutOfRange { digit, base });
    }

    digits.iter().try_fold(0u64, |acc, &digit| {
        acc.checked_mul(base)
            .and_then(|shifted| shifted.checked_add(digit))
            .ok_or(ConvError::Overflow { base })
    })
}

/// Largest value that can be written with `digits` digits in `base`, i.e.
/// `base^digits - 1`. Saturates at `u64::MAX` when `base^digits` does not fit.
pub fn largest_base10(base: u64, digits: u64) -> ConvResult<u64> {
    validate_base(base)?;

    let largest = u32::try_from(digits)
        .ok()
        .and_then(|exp| base.checked_pow(exp))
        .map_or(u64::MAX, |power| power - 1);

    Ok(largest)
}

/// Floating point estimate of `floor(log_base(num)) + 1`.
///
/// The log of an exact power of `base` can land just under the true integer,
/// so a log within `tol` of an integer is rounded to it before adding 1.
pub(crate) fn num_digits(num: f64, base: f64, tol: f64) -> usize {
    let log_n = num.ln() / base.ln();

    let rounded = log_n.round();
    if (rounded - log_n).abs() < tol {
        return rounded as usize + 1;
    }

    log_n.floor() as usize + 1
}

fn power_at_most(base: u64, exp: usize, num: u64) -> bool {
    u32::try_from(exp)
        .ok()
        .and_then(|exp| base.checked_pow(exp))
        .is_some_and(|power| power <= num)
}

fn validate_base(base: u64) -> ConvResult<()> {
    if base < 2 {
        return Err(ConvError::InvalidBase { base });
    }
    Ok(())
}
