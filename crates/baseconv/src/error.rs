#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvError {
    #[error("base [{base}] cannot be less than 2")]
    InvalidBase { base: u64 },

    #[error("cannot convert digit [{digit}] to base [{base}]")]
    DigitOutOfRange { digit: u64, base: u64 },

    #[error("value [{value}] cannot be represented in alphabet of size [{size}]")]
    ValueOutOfAlphabet { value: u64, size: u64 },

    #[error("character [{character}] at position {position} not found in alphabet")]
    CharacterNotInAlphabet { character: char, position: usize },

    #[error("input string length [{len}] exceeds desired padded length [{target}]")]
    PaddedLengthTooShort { len: usize, target: usize },

    #[error("padded length [{width}] is too large")]
    PadWidthTooLarge { width: u64 },

    #[error("cannot encode {num} in base {base} with {digits} digits")]
    EncodedValueTooLarge { num: u64, base: u64, digits: u64 },

    #[error("base [{base}] exceeds alphabet size [{size}]")]
    BaseExceedsAlphabet { base: u64, size: u64 },

    #[error("value does not fit in 64 bits in base [{base}]")]
    Overflow { base: u64 },
}

pub type ConvResult<T> = Result<T, ConvError>;
