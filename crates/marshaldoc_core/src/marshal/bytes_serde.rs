//! Field adapters used by the JSON document form of value trees.

/// Byte payloads as uppercase hex strings.
pub(crate) mod hex {
	use serde::{Deserialize, Deserializer, Serializer, de};

	pub(crate) fn serialize<S, T>(bytes: &T, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
		T: AsRef<[u8]>,
	{
		serializer.serialize_str(&::hex::encode_upper(bytes))
	}

	pub(crate) fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
	where
		D: Deserializer<'de>,
		T: From<Vec<u8>>,
	{
		let text = String::deserialize(deserializer)?;
		::hex::decode(text.trim()).map(T::from).map_err(de::Error::custom)
	}
}

/// Optional byte payloads as uppercase hex strings or `null`.
pub(crate) mod opt {
	use serde::{Deserialize, Deserializer, Serializer, de};

	pub(crate) fn serialize<S, T>(bytes: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
		T: AsRef<[u8]>,
	{
		match bytes {
			Some(bytes) => serializer.serialize_some(&::hex::encode_upper(bytes)),
			None => serializer.serialize_none(),
		}
	}

	pub(crate) fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
	where
		D: Deserializer<'de>,
		T: From<Vec<u8>>,
	{
		let Some(text) = Option::<String>::deserialize(deserializer)? else {
			return Ok(None);
		};
		::hex::decode(text.trim()).map(|bytes| Some(T::from(bytes))).map_err(de::Error::custom)
	}
}

/// Arbitrary-width integers as decimal strings.
pub(crate) mod decimal {
	use num_bigint::BigInt;
	use serde::{Deserialize, Deserializer, Serializer, de};

	pub(crate) fn serialize<S: Serializer>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(value)
	}

	pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigInt, D::Error> {
		let text = String::deserialize(deserializer)?;
		text.trim().parse::<BigInt>().map_err(de::Error::custom)
	}
}

/// Floats as JSON numbers, with non-finite values spelled `"NaN"`, `"inf"` and `"-inf"`.
pub(crate) mod float {
	use std::fmt;

	use serde::{Deserializer, Serializer, de};

	pub(crate) fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
		if value.is_finite() {
			return serializer.serialize_f64(*value);
		}
		let text = if value.is_nan() {
			"NaN"
		} else if value.is_sign_positive() {
			"inf"
		} else {
			"-inf"
		};
		serializer.serialize_str(text)
	}

	pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
		deserializer.deserialize_any(FloatVisitor)
	}

	struct FloatVisitor;

	impl de::Visitor<'_> for FloatVisitor {
		type Value = f64;

		fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
			formatter.write_str("a number or one of \"NaN\", \"inf\", \"-inf\"")
		}

		fn visit_f64<E: de::Error>(self, value: f64) -> Result<f64, E> {
			Ok(value)
		}

		fn visit_i64<E: de::Error>(self, value: i64) -> Result<f64, E> {
			Ok(value as f64)
		}

		fn visit_u64<E: de::Error>(self, value: u64) -> Result<f64, E> {
			Ok(value as f64)
		}

		fn visit_str<E: de::Error>(self, value: &str) -> Result<f64, E> {
			match value {
				"NaN" => Ok(f64::NAN),
				"inf" => Ok(f64::INFINITY),
				"-inf" => Ok(f64::NEG_INFINITY),
				other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
			}
		}
	}
}
