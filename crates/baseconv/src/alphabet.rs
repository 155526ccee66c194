use crate::error::{ConvError, ConvResult};

pub(crate) const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub(crate) const ALPHABET_LEN: u64 = ALPHABET.len() as u64;

const NOT_IN_ALPHABET: u8 = u8::MAX;

/// Reverse of `ALPHABET`, indexed by ascii code.
const LOOKUP: [u8; 128] = build_lookup();

const fn build_lookup() -> [u8; 128] {
    let mut table = [NOT_IN_ALPHABET; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Size of the alphabet, which is also the largest supported base.
pub fn len() -> u64 {
    ALPHABET_LEN
}

/// The index-zero character, used for padding.
pub fn zero() -> char {
    ALPHABET[0] as char
}

/// Maps digit values to their alphabet characters.
pub fn to_string(digits: &[u64]) -> ConvResult<String> {
    let mut output = String::with_capacity(digits.len());

    for &value in digits {
        let Some(&symbol) = usize::try_from(value).ok().and_then(|i| ALPHABET.get(i)) else {
            return Err(ConvError::ValueOutOfAlphabet {
                value,
                size: ALPHABET_LEN,
            });
        };
        output.push(symbol as char);
    }

    Ok(output)
}

/// Maps each character to its index in the alphabet. Fails on the first
/// (leftmost) character that has no index.
pub fn from_string(input: &str) -> ConvResult<Vec<u64>> {
    input
        .chars()
        .enumerate()
        .map(|(position, character)| {
            lookup(character).ok_or(ConvError::CharacterNotInAlphabet {
                character,
                position,
            })
        })
        .collect()
}

fn lookup(character: char) -> Option<u64> {
    if !character.is_ascii() {
        return None;
    }

    match LOOKUP[character as usize] {
        NOT_IN_ALPHABET => None,
        value => Some(value as u64),
    }
}

/// Left-pads `input` with the zero character up to `target_len`. Never truncates.
pub fn pad(input: &str, target_len: usize) -> ConvResult<String> {
    let len = input.chars().count();
    if len > target_len {
        return Err(ConvError::PaddedLengthTooShort {
            len,
            target: target_len,
        });
    }

    let padding = target_len - len;
    let mut output = String::new();
    padding
        .checked_add(input.len())
        .and_then(|bytes| output.try_reserve(bytes).ok())
        .ok_or(ConvError::PadWidthTooLarge {
            width: target_len as u64,
        })?;
    output.extend(std::iter::repeat_n(zero(), padding));
    output.push_str(input);

    Ok(output)
}
