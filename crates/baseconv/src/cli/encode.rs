use anyhow::Context;
use baseconv::{ConvError, ConvResult, alphabet, digits};
use clap::Parser;
use tokio::io::AsyncWriteExt;

/// No `u64` has more digits than this in any base, so wider pads are refused.
const MAX_PAD_WIDTH: u64 = u64::BITS as u64;

#[derive(Parser)]
pub struct EncodeCommand {
    /// Positive base 10 integer to encode
    #[arg(value_name = "NUM")]
    num: u64,

    /// New base to encode the input integer in
    #[arg(short = 'b', long = "base", env = "BASECONV_BASE")]
    base: u64,

    /// Maximum number of digits to use for encoding
    #[arg(short = 'd', long = "digits", env = "BASECONV_DIGITS")]
    digits: Option<u64>,

    /// Pad output to have exactly the number of specified digits
    #[arg(short = 'p', long = "pad", requires = "digits")]
    pad: bool,
}

impl EncodeCommand {
    pub async fn execute(&self) -> anyhow::Result<()> {
        tracing::debug!(num = self.num, base = self.base, digits = ?self.digits, "encoding");

        let output = self
            .render()
            .with_context(|| format!("failed to encode {}", self.num))?;

        let mut stdout = tokio::io::stdout();
        stdout.write_all(output.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;

        Ok(())
    }

    pub(crate) fn render(&self) -> ConvResult<String> {
        super::validate_base(self.base)?;

        if let Some(max_digits) = self.digits {
            let largest = digits::largest_base10(self.base, max_digits)?;
            if self.num > largest {
                return Err(ConvError::EncodedValueTooLarge {
                    num: self.num,
                    base: self.base,
                    digits: max_digits,
                });
            }
        }

        let encoded = alphabet::to_string(&digits::from_base10(self.num, self.base)?)?;

        match self.digits {
            Some(width) if self.pad => {
                let target = usize::try_from(width)
                    .ok()
                    .filter(|_| width <= MAX_PAD_WIDTH)
                    .ok_or(ConvError::PadWidthTooLarge { width })?;
                alphabet::pad(&encoded, target)
            }
            _ => Ok(encoded),
        }
    }
}

#[cfg(test)]
mod test {
    use baseconv::ConvError;

    use crate::cli::encode::EncodeCommand;

    fn command(num: u64, base: u64, digits: Option<u64>, pad: bool) -> EncodeCommand {
        EncodeCommand {
            num,
            base,
            digits,
            pad,
        }
    }

    #[test]
    fn can_encode() -> anyhow::Result<()> {
        pretty_assertions::assert_eq!("ZYeJhao", command(3_520_000_000_000, 62, None, false).render()?);
        pretty_assertions::assert_eq!("1000000", command(64, 2, None, false).render()?);
        pretty_assertions::assert_eq!("0", command(0, 36, None, false).render()?);
        pretty_assertions::assert_eq!("ff", command(255, 16, Some(2), false).render()?);

        Ok(())
    }

    #[test]
    fn can_encode_with_padding() -> anyhow::Result<()> {
        pretty_assertions::assert_eq!("00000101", command(5, 2, Some(8), true).render()?);
        pretty_assertions::assert_eq!("101", command(5, 2, Some(3), true).render()?);
        pretty_assertions::assert_eq!("101", command(5, 2, Some(8), false).render()?);

        Ok(())
    }

    #[test]
    fn rejects_pad_widths_beyond_any_u64() -> anyhow::Result<()> {
        pretty_assertions::assert_eq!(
            Err(ConvError::PadWidthTooLarge { width: u64::MAX }),
            command(5, 2, Some(u64::MAX), true).render()
        );
        pretty_assertions::assert_eq!(
            Err(ConvError::PadWidthTooLarge { width: 65 }),
            command(5, 2, Some(65), true).render()
        );
        pretty_assertions::assert_eq!("0".repeat(63) + "1", command(1, 2, Some(64), true).render()?);
        pretty_assertions::assert_eq!("101", command(5, 2, Some(u64::MAX), false).render()?);

        Ok(())
    }

    #[test]
    fn rejects_values_too_large_for_digits() {
        pretty_assertions::assert_eq!(
            Err(ConvError::EncodedValueTooLarge {
                num: 1024,
                base: 2,
                digits: 10
            }),
            command(1024, 2, Some(10), false).render()
        );
        pretty_assertions::assert_eq!(
            Err(ConvError::EncodedValueTooLarge {
                num: 1,
                base: 10,
                digits: 0
            }),
            command(1, 10, Some(0), true).render()
        );
    }

    #[test]
    fn rejects_bases_outside_alphabet() {
        pretty_assertions::assert_eq!(
            Err(ConvError::BaseExceedsAlphabet { base: 63, size: 62 }),
            command(5, 63, None, false).render()
        );
        pretty_assertions::assert_eq!(
            Err(ConvError::InvalidBase { base: 1 }),
            command(5, 1, None, false).render()
        );
        pretty_assertions::assert_eq!(
            Err(ConvError::InvalidBase { base: 1 }),
            command(5, 1, Some(4), false).render()
        );
    }
}
