//! Wire-token protocol shared by every enumeration of the Macie 2 API.
//!
//! Each enum declares its variant to token table once, through `strum`
//! attributes. `Display`, `AsRef<str>` and `&'static str` conversions come from
//! that table, and so does serde: enums derive `SerializeDisplay` and
//! `DeserializeFromStr`, and `FromStr` is routed through [`WireEnum::from_wire`].

use std::collections::{btree_map::Entry, BTreeMap};

use strum::IntoEnumIterator;

use super::error::ModelError;

/// A closed, server-defined vocabulary with an exact token per variant.
pub trait WireEnum: Sized + Copy + IntoEnumIterator + Into<&'static str> + 'static {
    /// Type name used in error messages.
    const NAME: &'static str;

    /// Decodes a wire token. Matching is exact and case-sensitive; there is
    /// no fallback variant.
    fn from_wire(value: &str) -> Result<Self, ModelError> {
        Self::iter()
            .find(|variant| {
                let token: &'static str = (*variant).into();
                token == value
            })
            .ok_or_else(|| ModelError::UnknownEnumValue {
                enum_name: Self::NAME,
                value: value.to_string(),
            })
    }

    /// The token sent on the wire for this variant.
    fn as_wire(self) -> &'static str {
        self.into()
    }

    /// Every token of the vocabulary, in declaration order.
    fn values() -> Vec<&'static str> {
        Self::iter().map(Into::into).collect()
    }
}

/// Implements [`WireEnum`] and `FromStr` for enums deriving `EnumIter` and
/// `IntoStaticStr`.
macro_rules! wire_enum {
    ($($name:ident),+ $(,)?) => {
        $(
            impl $crate::v1::wire::WireEnum for $name {
                const NAME: &'static str = stringify!($name);
            }

            impl ::std::str::FromStr for $name {
                type Err = $crate::v1::error::ModelError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    <Self as $crate::v1::wire::WireEnum>::from_wire(s)
                }
            }
        )+
    };
}
pub(crate) use wire_enum;

/// Inserts `key` into `map`, refusing to overwrite an existing entry.
pub fn insert_unique<V>(
    map: &mut BTreeMap<String, V>,
    field: &'static str,
    key: impl Into<String>,
    value: V,
) -> Result<(), ModelError> {
    match map.entry(key.into()) {
        Entry::Occupied(entry) => Err(ModelError::DuplicateKey {
            field,
            key: entry.key().clone(),
        }),
        Entry::Vacant(entry) => {
            entry.insert(value);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_unique_rejects_existing_key() {
        let mut map = BTreeMap::new();
        insert_unique(&mut map, "tags", "env", 1).unwrap();
        insert_unique(&mut map, "tags", "team", 2).unwrap();

        let err = insert_unique(&mut map, "tags", "env", 3).unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateKey {
                field: "tags",
                key: "env".to_string()
            }
        );
        assert_eq!(map["env"], 1);
        assert_eq!(map.len(), 2);
    }
}
