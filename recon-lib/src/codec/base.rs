use crate::error::ReconError;

pub const MIN_BASE: u32 = 2;
pub const MAX_BASE: u32 = 36;

fn check_base(base: u32) -> Result<(), ReconError> {
	if !(MIN_BASE..=MAX_BASE).contains(&base) {
		return Err(ReconError::malformed(format!("base {} outside of {}..={}", base, MIN_BASE, MAX_BASE)));
	}
	Ok(())
}

/// Interprets `value` as a number written in `base`.
///
/// Digits run `0-9` then `a-z`, letters in either case. Every character has to be a valid
/// digit for the base, there is no prefix parsing.
pub fn decode_value(value: &str, base: u32) -> Result<i64, ReconError> {
	check_base(base)?;
	if value.is_empty() {
		return Err(ReconError::malformed("empty share value"));
	}

	let radix = i64::from(base);
	let mut result: i64 = 0;
	for digit in value.chars() {
		let d = digit
			.to_digit(base)
			.ok_or(ReconError::InvalidDigit { digit, base })?;
		result = result
			.checked_mul(radix)
			.and_then(|r| r.checked_add(i64::from(d)))
			.ok_or_else(|| ReconError::ValueOverflow { value: value.to_owned(), base })?;
	}
	Ok(result)
}

/// Writes a non-negative `value` in `base`, lowercase letters for digits above 9.
pub fn encode_value(value: i64, base: u32) -> Result<String, ReconError> {
	check_base(base)?;
	if value < 0 {
		return Err(ReconError::malformed(format!("cannot encode negative value {}", value)));
	}
	if value == 0 {
		return Ok(String::from("0"));
	}

	let radix = i64::from(base);
	let mut rest = value;
	let mut digits = Vec::new();
	while rest > 0 {
		// rest % radix < 36, so from_digit always yields a char
		if let Some(c) = std::char::from_digit((rest % radix) as u32, base) {
			digits.push(c);
		}
		rest /= radix;
	}
	Ok(digits.iter().rev().collect())
}

#[cfg(test)]
mod decode_test {
	use crate::codec::base::{decode_value, encode_value};
	use crate::error::ReconError;
	use rand::rngs::StdRng;
	use rand::{Rng, SeedableRng};

	#[test]
	fn decodes_plain_bases() {
		assert_eq!(decode_value("4", 10).unwrap(), 4);
		assert_eq!(decode_value("111", 2).unwrap(), 7);
		assert_eq!(decode_value("213", 4).unwrap(), 39);
		assert_eq!(decode_value("0", 7).unwrap(), 0);
	}

	#[test]
	fn letters_are_case_insensitive() {
		assert_eq!(decode_value("ff", 16).unwrap(), 255);
		assert_eq!(decode_value("FF", 16).unwrap(), 255);
		assert_eq!(decode_value("zz", 36).unwrap(), 35 * 36 + 35);
	}

	#[test]
	fn rejects_digit_outside_base() {
		let err = decode_value("112", 2).unwrap_err();
		assert_eq!(err, ReconError::InvalidDigit { digit: '2', base: 2 });

		let err = decode_value("12g", 16).unwrap_err();
		assert_eq!(err, ReconError::InvalidDigit { digit: 'g', base: 16 });
	}

	#[test]
	fn no_lenient_prefix() {
		// a prefix parser would read this as 12
		assert!(matches!(decode_value("12 ", 10), Err(ReconError::InvalidDigit { digit: ' ', .. })));
		assert!(matches!(decode_value("-5", 10), Err(ReconError::InvalidDigit { digit: '-', .. })));
	}

	#[test]
	fn rejects_bad_base_and_empty() {
		assert!(matches!(decode_value("1", 1), Err(ReconError::MalformedInput(_))));
		assert!(matches!(decode_value("1", 37), Err(ReconError::MalformedInput(_))));
		assert!(matches!(decode_value("", 10), Err(ReconError::MalformedInput(_))));
	}

	#[test]
	fn overflow_is_reported() {
		assert_eq!(decode_value("9223372036854775807", 10).unwrap(), i64::MAX);
		let err = decode_value("9223372036854775808", 10).unwrap_err();
		assert_eq!(err, ReconError::ValueOverflow { value: String::from("9223372036854775808"), base: 10 });
	}

	#[test]
	fn encode_matches_known_strings() {
		assert_eq!(encode_value(39, 4).unwrap(), "213");
		assert_eq!(encode_value(255, 16).unwrap(), "ff");
		assert_eq!(encode_value(0, 2).unwrap(), "0");
		assert!(encode_value(-1, 10).is_err());
	}

	#[test]
	fn round_trip_random_values() {
		let mut rng = StdRng::seed_from_u64(0x5eed);
		for base in 2..=16 {
			for _ in 0..200 {
				let value: i64 = rng.gen_range(0..1_i64 << 40);
				let encoded = encode_value(value, base).unwrap();
				assert_eq!(decode_value(&encoded, base).unwrap(), value, "base {} value {}", base, value);
			}
		}
	}

	#[test]
	fn decode_then_encode_keeps_canonical_strings() {
		for (s, base) in [("101101", 2), ("7a3", 12), ("ffee", 16), ("3", 4)].iter() {
			let v = decode_value(s, *base).unwrap();
			assert_eq!(encode_value(v, *base).unwrap(), *s);
		}
	}
}
