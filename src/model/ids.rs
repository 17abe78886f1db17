use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Caller-assigned integer identifier. The phantom type parameter `T` keeps
/// a User ID from being used where an Event ID is expected.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<T> {
    value: i64,
    #[serde(skip)]
    _phantom: PhantomData<T>,
}

impl<T> Id<T> {
    pub const fn new(value: i64) -> Self {
        Self {
            value,
            _phantom: PhantomData,
        }
    }

    pub const fn value(&self) -> i64 {
        self.value
    }
}

impl<T> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

// None of these impls may place bounds on `T`.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        Self::new(self.value)
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i64(self.value);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Id").field(&self.value).finish()
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Foo;

    #[test]
    fn ids_with_same_value_are_equal() {
        assert_eq!(Id::<Foo>::new(3), Id::<Foo>::from(3));
    }

    #[test]
    fn negative_ids_are_accepted() {
        assert_eq!(Id::<Foo>::new(-4).value(), -4);
    }

    #[test]
    fn ids_order_by_value() {
        assert!(Id::<Foo>::new(1) < Id::<Foo>::new(2));
    }

    #[test]
    fn formats_debug_and_display() {
        let id = Id::<Foo>::new(7);
        assert_eq!(format!("{:?}", id), "Id(7)");
        assert_eq!(id.to_string(), "7");
        assert_eq!(format!("{:>3}", id), "  7");
    }

    #[test]
    fn serializes_as_bare_integer() {
        let id = Id::<Foo>::new(42);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "42");
        let back: Id<Foo> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
