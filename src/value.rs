//! The JSON value tree and its typed accessors.
//!
//! [`Value`] is a tagged union generic over the caller's integer, float
//! and string representations. Objects are unordered associations:
//! inserting a duplicate key overwrites the prior value and no insertion
//! order is preserved. There is no in-place mutation API once a tree is
//! built from parsed text; trees are otherwise assembled from native
//! containers through the `From` impls and constructors here.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasherDefault, Hash};

use crate::error::AccessError;

/// The backing association for JSON objects.
///
/// A hash map with a fixed-seed hasher: still unordered (callers must
/// not rely on any particular entry order), but iteration is
/// reproducible for a given key set, which keeps re-serialization of
/// the same tree stable.
pub type ObjectMap<S, V> = HashMap<S, V, BuildHasherDefault<DefaultHasher>>;

/// A decoded JSON value.
///
/// `I`, `F` and `S` are the representations used for integers, floats
/// and strings throughout this tree instance. A number literal with a
/// `.` in its text parses into `Float`, any other into `Integer`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<I = i64, F = f64, S = String>
where
    S: Eq + Hash,
{
    /// The `null` literal; carries no payload.
    Null,
    /// `true` or `false`.
    Boolean(bool),
    /// A number without a decimal point.
    Integer(I),
    /// A number with a decimal point.
    Float(F),
    /// A string payload in the tree's string representation.
    String(S),
    /// An ordered, index-addressable sequence.
    Array(Vec<Value<I, F, S>>),
    /// An unordered association from keys to values.
    Object(ObjectMap<S, Value<I, F, S>>),
}

impl<I, F, S: Eq + Hash> Default for Value<I, F, S> {
    fn default() -> Self {
        Value::Null
    }
}

impl<I, F, S: Eq + Hash> Value<I, F, S> {
    /// The null value.
    pub fn null() -> Self {
        Value::Null
    }

    /// Wrap an integer.
    pub fn integer(value: I) -> Self {
        Value::Integer(value)
    }

    /// Wrap a float.
    pub fn float(value: F) -> Self {
        Value::Float(value)
    }

    /// Wrap a string.
    pub fn string(value: impl Into<S>) -> Self {
        Value::String(value.into())
    }

    /// Wrap a sequence of values.
    pub fn array(elements: Vec<Value<I, F, S>>) -> Self {
        Value::Array(elements)
    }

    /// Wrap an association of values.
    pub fn object(members: ObjectMap<S, Value<I, F, S>>) -> Self {
        Value::Object(members)
    }

    /// Whether this tree holds no value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Whether this tree holds a value.
    pub fn has_value(&self) -> bool {
        !self.is_null()
    }

    /// The stored tag's name, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "floating point",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// The boolean payload; the tag must be `Boolean`.
    pub fn as_bool(&self) -> Result<bool, AccessError> {
        match self {
            Value::Boolean(value) => Ok(*value),
            _ => Err(AccessError::IncorrectType),
        }
    }

    /// The integer payload; the tag must be `Integer`.
    pub fn as_integer(&self) -> Result<I, AccessError>
    where
        I: Copy,
    {
        match self {
            Value::Integer(value) => Ok(*value),
            _ => Err(AccessError::IncorrectType),
        }
    }

    /// The float payload; the tag must be `Float`.
    pub fn as_floating_point(&self) -> Result<F, AccessError>
    where
        F: Copy,
    {
        match self {
            Value::Float(value) => Ok(*value),
            _ => Err(AccessError::IncorrectType),
        }
    }

    /// The string payload; the tag must be `String`.
    pub fn as_string(&self) -> Result<&S, AccessError> {
        match self {
            Value::String(value) => Ok(value),
            _ => Err(AccessError::IncorrectType),
        }
    }

    /// A view of the elements; the tag must be `Array`.
    pub fn as_array(&self) -> Result<&[Value<I, F, S>], AccessError> {
        match self {
            Value::Array(elements) => Ok(elements),
            _ => Err(AccessError::IncorrectType),
        }
    }

    /// A view of the members; the tag must be `Object`.
    pub fn as_object(&self) -> Result<&ObjectMap<S, Value<I, F, S>>, AccessError> {
        match self {
            Value::Object(members) => Ok(members),
            _ => Err(AccessError::IncorrectType),
        }
    }

    /// Index into an array.
    pub fn at(&self, index: usize) -> Result<&Value<I, F, S>, AccessError> {
        match self {
            Value::Array(elements) => elements.get(index).ok_or(AccessError::IndexOutOfRange),
            _ => Err(AccessError::IncorrectType),
        }
    }

    /// Look up an object member by key.
    pub fn get<Q>(&self, key: &Q) -> Result<&Value<I, F, S>, AccessError>
    where
        S: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        match self {
            Value::Object(members) => members.get(key).ok_or(AccessError::NoSuchKey),
            _ => Err(AccessError::IncorrectType),
        }
    }
}

impl<I, F, S> Value<I, F, S>
where
    I: PartialOrd,
    F: PartialOrd,
    S: Eq + Hash + PartialOrd,
{
    /// Ordering comparison between two values.
    ///
    /// Requires identical tags (else `IncorrectType`); defined only for
    /// `Integer`, `Float` and `String` via their natural order (else
    /// `IllegalOperand`). The inner `Option` is `None` only for
    /// unordered float pairs such as NaN.
    pub fn try_cmp(&self, other: &Self) -> Result<Option<Ordering>, AccessError> {
        match (self, other) {
            (Value::Integer(lhs), Value::Integer(rhs)) => Ok(lhs.partial_cmp(rhs)),
            (Value::Float(lhs), Value::Float(rhs)) => Ok(lhs.partial_cmp(rhs)),
            (Value::String(lhs), Value::String(rhs)) => Ok(lhs.partial_cmp(rhs)),
            (Value::Null, Value::Null)
            | (Value::Boolean(_), Value::Boolean(_))
            | (Value::Array(_), Value::Array(_))
            | (Value::Object(_), Value::Object(_)) => Err(AccessError::IllegalOperand),
            _ => Err(AccessError::IncorrectType),
        }
    }
}

impl<I, F, S: Eq + Hash> From<bool> for Value<I, F, S> {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl<I, F, S: Eq + Hash> From<Vec<Value<I, F, S>>> for Value<I, F, S> {
    fn from(elements: Vec<Value<I, F, S>>) -> Self {
        Value::Array(elements)
    }
}

impl<I, F, S: Eq + Hash> From<ObjectMap<S, Value<I, F, S>>> for Value<I, F, S> {
    fn from(members: ObjectMap<S, Value<I, F, S>>) -> Self {
        Value::Object(members)
    }
}

/// An ordered map re-hashes into the unordered association; the order is
/// discarded by contract.
impl<I, F, S: Eq + Hash + Ord> From<BTreeMap<S, Value<I, F, S>>> for Value<I, F, S> {
    fn from(members: BTreeMap<S, Value<I, F, S>>) -> Self {
        Value::Object(members.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_object() -> Value {
        let mut members: ObjectMap<String, Value> = ObjectMap::default();
        members.insert("a".to_string(), Value::Integer(1));
        members.insert("b".to_string(), Value::Boolean(true));
        Value::Object(members)
    }

    #[test]
    fn accessors_require_matching_tag() {
        let value: Value = Value::Integer(42);
        assert_eq!(value.as_integer(), Ok(42));
        assert_eq!(value.as_bool(), Err(AccessError::IncorrectType));
        assert_eq!(value.as_string().unwrap_err(), AccessError::IncorrectType);
        assert_eq!(
            value.as_floating_point(),
            Err(AccessError::IncorrectType)
        );
    }

    #[test]
    fn null_reports_no_value() {
        let value: Value = Value::Null;
        assert!(value.is_null());
        assert!(!value.has_value());
        assert!(Value::<i64, f64, String>::Boolean(false).has_value());
    }

    #[test]
    fn array_indexing() {
        let value: Value = Value::Array(vec![Value::Integer(1), Value::Integer(2)]);
        assert_eq!(value.at(0).unwrap().as_integer(), Ok(1));
        assert_eq!(value.at(1).unwrap().as_integer(), Ok(2));
        assert_eq!(value.at(2).unwrap_err(), AccessError::IndexOutOfRange);
        let not_array: Value = Value::Null;
        assert_eq!(not_array.at(0).unwrap_err(), AccessError::IncorrectType);
    }

    #[test]
    fn object_lookup() {
        let value = sample_object();
        assert_eq!(value.get("a").unwrap().as_integer(), Ok(1));
        assert_eq!(value.get("missing").unwrap_err(), AccessError::NoSuchKey);
        let not_object: Value = Value::Integer(0);
        assert_eq!(not_object.get("a").unwrap_err(), AccessError::IncorrectType);
    }

    #[test]
    fn ordering_defined_for_numbers_and_strings() {
        let one: Value = Value::Integer(1);
        let two: Value = Value::Integer(2);
        assert_eq!(one.try_cmp(&two), Ok(Some(Ordering::Less)));

        let a: Value = Value::String("a".to_string());
        let b: Value = Value::String("b".to_string());
        assert_eq!(b.try_cmp(&a), Ok(Some(Ordering::Greater)));

        let lo: Value = Value::Float(1.0);
        let hi: Value = Value::Float(2.5);
        assert_eq!(lo.try_cmp(&hi), Ok(Some(Ordering::Less)));
    }

    #[test]
    fn ordering_rejects_mismatched_and_unordered_tags() {
        let int: Value = Value::Integer(1);
        let float: Value = Value::Float(1.0);
        assert_eq!(int.try_cmp(&float), Err(AccessError::IncorrectType));

        let null: Value = Value::Null;
        assert_eq!(null.try_cmp(&Value::Null), Err(AccessError::IllegalOperand));
        let yes: Value = Value::Boolean(true);
        assert_eq!(
            yes.try_cmp(&Value::Boolean(false)),
            Err(AccessError::IllegalOperand)
        );
        assert_eq!(
            sample_object().try_cmp(&sample_object()),
            Err(AccessError::IllegalOperand)
        );
    }

    #[test]
    fn nan_compares_as_unordered() {
        let nan: Value = Value::Float(f64::NAN);
        let one: Value = Value::Float(1.0);
        assert_eq!(nan.try_cmp(&one), Ok(None));
    }

    #[test]
    fn construction_from_native_containers() {
        let from_bool: Value = true.into();
        assert_eq!(from_bool.as_bool(), Ok(true));

        let from_vec: Value = vec![Value::Null].into();
        assert_eq!(from_vec.as_array().unwrap().len(), 1);

        let mut ordered: BTreeMap<String, Value> = BTreeMap::new();
        ordered.insert("k".to_string(), Value::Integer(7));
        let from_map: Value = ordered.into();
        assert_eq!(from_map.get("k").unwrap().as_integer(), Ok(7));
    }

    #[test]
    fn type_names() {
        assert_eq!(Value::<i64, f64, String>::Null.type_name(), "null");
        assert_eq!(sample_object().type_name(), "object");
        let f: Value = Value::Float(0.5);
        assert_eq!(f.type_name(), "floating point");
    }
}
