/// Serde helper functions for custom serialization/deserialization

/// Skip serializing if Option is None
pub fn is_none<T>(value: &Option<T>) -> bool {
    value.is_none()
}

/// Implement `Serialize`/`Deserialize` for a selector enum through its
/// `as_str` and `FromStr` implementations, so the wire names and the
/// accepted aliases stay in one place.
#[macro_export]
macro_rules! impl_selector_serde {
    ($ty:ty) => {
        impl ::serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let s = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                s.parse::<$ty>().map_err(::serde::de::Error::custom)
            }
        }
    };
}
