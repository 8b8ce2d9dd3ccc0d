//! Identifier management using string interning for efficient string storage and comparison
//!
//! Entity ids are compared and hashed constantly during layering, so they are
//! interned once and carried around as a `Copy` symbol.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for efficient identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

/// Separator between an entity name and its containing entity in qualified ids.
const QUALIFIER_SEPARATOR: char = '@';

/// Runs `f` with exclusive access to the global interner.
fn with_interner<R>(f: impl FnOnce(&mut DefaultStringInterner) -> R) -> R {
    let mut interner = INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .expect("Failed to acquire interner lock");
    f(&mut interner)
}

/// Efficient identifier type using string interning
///
/// # Examples
///
/// ```
/// use depgrid_core::identifier::Id;
///
/// // Path-like ids, as produced by a file import provider
/// let file = Id::new("contracts/Token.sol");
///
/// // Composite ids, as produced by a contract inheritance provider
/// let contract = Id::qualified("Token", file);
/// assert_eq!(contract, "Token@contracts/Token.sol");
///
/// // Ids of synthesized grid cells
/// let cell = Id::placeholder(2, 5);
/// assert!(cell.is_placeholder());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from &str.
    ///
    /// Interning the same string twice yields equal ids.
    pub fn new(name: &str) -> Self {
        with_interner(|interner| Self(interner.get_or_intern(name)))
    }

    /// Creates the composite id `"<name>@<container>"`.
    ///
    /// Used for entities that are only unique within the entity containing
    /// them, such as a contract declared inside a source file.
    ///
    /// # Examples
    ///
    /// ```
    /// use depgrid_core::identifier::Id;
    ///
    /// let id = Id::qualified("Ownable", Id::new("access/Ownable.sol"));
    /// assert_eq!(id, "Ownable@access/Ownable.sol");
    /// ```
    pub fn qualified(name: &str, container: Id) -> Self {
        with_interner(|interner| {
            let container_str = interner
                .resolve(container.0)
                .expect("Container ID should exist in interner");
            let qualified = format!("{name}{QUALIFIER_SEPARATOR}{container_str}");
            Self(interner.get_or_intern(&qualified))
        })
    }

    /// Creates the id of a placeholder grid cell at `(x, y)`.
    pub fn placeholder(x: usize, y: usize) -> Self {
        Self::new(&format!("__cell:{x}:{y}"))
    }

    /// Returns `true` if this id was created by [`Id::placeholder`].
    pub fn is_placeholder(&self) -> bool {
        with_interner(|interner| {
            interner
                .resolve(self.0)
                .is_some_and(|name| name.starts_with("__cell:"))
        })
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Copy out of the interner so the lock is not held while formatting.
        let name = with_interner(|interner| {
            interner
                .resolve(self.0)
                .expect("Symbol should exist in interner")
                .to_owned()
        });
        f.write_str(&name)
    }
}

impl std::str::FromStr for Id {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Id {
    /// Creates an `Id` from a string slice
    ///
    /// # Examples
    ///
    /// ```
    /// use depgrid_core::identifier::Id;
    ///
    /// let id: Id = "lib/Math.sol".into();
    /// assert_eq!(id, "lib/Math.sol");
    /// ```
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "string"`
    fn eq(&self, other: &str) -> bool {
        with_interner(|interner| {
            interner
                .resolve(self.0)
                .expect("Symbol should exist in interner")
                == other
        })
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::new(&name))
    }
}
