//! Instantiation bookkeeping for the generic containers.
//!
//! The containers themselves are ordinary Rust generics. What a code generator
//! additionally needs is the list of distinct instantiations its program uses,
//! each with one stable name and operation set, so it can emit exactly one
//! declaration per type. `Registry` keeps that list, keyed by type identity.

use std::any::TypeId;
use std::borrow::Cow;

use indexmap::IndexMap;

use crate::{Array, Optional, ResultOf, TextBuffer};

/// A type that can be a container element and has a name in generated code.
pub trait ElementType: 'static {
    fn name() -> Cow<'static, str>;
}

macro_rules! element_types {
    ($($ty:ty => $name:expr),* $(,)?) => {
        $(
            impl ElementType for $ty {
                #[inline(always)]
                fn name() -> Cow<'static, str> {
                    Cow::Borrowed($name)
                }
            }
        )*
    };
}

element_types! {
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    isize => "int",
    f32 => "float",
    f64 => "f64",
    bool => "bool",
    char => "char",
    &'static str => "str",
    TextBuffer => "string",
}

impl<T: ElementType> ElementType for Array<T> {
    fn name() -> Cow<'static, str> {
        Cow::Owned(Family::Array.mangle(&[T::name()]))
    }
}

impl<T: ElementType> ElementType for Optional<T> {
    fn name() -> Cow<'static, str> {
        Cow::Owned(Family::Optional.mangle(&[T::name()]))
    }
}

impl<T: ElementType, E: ElementType> ElementType for ResultOf<T, E> {
    fn name() -> Cow<'static, str> {
        Cow::Owned(Family::Result.mangle(&[T::name(), E::name()]))
    }
}

/// The generic container families.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    Array,
    Optional,
    Result,
}

impl Family {
    pub fn prefix(self) -> &'static str {
        match self {
            Family::Array => "vec",
            Family::Optional => "opt",
            Family::Result => "result",
        }
    }

    fn constructor_prefix(self) -> &'static str {
        match self {
            Family::Array => "newVec",
            Family::Optional => "newopt",
            Family::Result => "newresult",
        }
    }

    /// Operations every instantiation of this family provides.
    pub fn operations(self) -> &'static [&'static str] {
        match self {
            Family::Array => &["push", "pop", "at", "get", "grow", "len", "capacity"],
            Family::Optional => &["unwrap", "is_some"],
            Family::Result => &["is_ok", "is_err", "unwrap", "unwrap_err"],
        }
    }

    fn mangle(self, params: &[Cow<'static, str>]) -> String {
        let mut name = String::from(self.prefix());
        for param in params {
            name.push('_');
            name.push_str(param);
        }
        name
    }
}

/// One concrete instantiation of a container family.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instantiation {
    family: Family,
    type_name: String,
    params: Vec<Cow<'static, str>>,
}

impl Instantiation {
    fn new(family: Family, params: Vec<Cow<'static, str>>) -> Instantiation {
        Instantiation {
            family,
            type_name: family.mangle(&params),
            params,
        }
    }

    pub fn family(&self) -> Family {
        self.family
    }

    /// Name of the concrete type, e.g. `vec_i32`.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Names of the type parameters, e.g. `["i32"]`.
    pub fn params(&self) -> &[Cow<'static, str>] {
        &self.params
    }

    /// Name of the constructor function, e.g. `newVec_i32`.
    pub fn constructor(&self) -> String {
        let mut name = String::from(self.family.constructor_prefix());
        for param in &self.params {
            name.push('_');
            name.push_str(param);
        }
        name
    }

    pub fn operations(&self) -> &'static [&'static str] {
        self.family.operations()
    }

    /// Function names of every operation, e.g. `vec_i32_push`.
    pub fn symbols(&self) -> impl Iterator<Item=String> + '_ {
        self.operations()
            .iter()
            .map(move |op| format!("{}_{}", self.type_name, op))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
struct InstanceKey {
    family: Family,
    first: TypeId,
    second: Option<TypeId>,
}

/// Deduplicating set of instantiations, in first-request order.
#[derive(Default)]
pub struct Registry {
    entries: IndexMap<InstanceKey, Instantiation>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry {
            entries: IndexMap::new(),
        }
    }

    /// Instantiates `Array<T>`, and with it the `Optional<T>` that `get`
    /// returns.
    pub fn array<T: ElementType>(&mut self) -> &Instantiation {
        self.optional::<T>();
        self.instantiate(Family::Array, TypeId::of::<T>(), None, || vec![T::name()])
    }

    pub fn optional<T: ElementType>(&mut self) -> &Instantiation {
        self.instantiate(Family::Optional, TypeId::of::<T>(), None, || vec![T::name()])
    }

    pub fn result<T: ElementType, E: ElementType>(&mut self) -> &Instantiation {
        self.instantiate(Family::Result, TypeId::of::<T>(), Some(TypeId::of::<E>()), || vec![T::name(), E::name()])
    }

    fn instantiate(
        &mut self,
        family: Family,
        first: TypeId,
        second: Option<TypeId>,
        params: impl FnOnce() -> Vec<Cow<'static, str>>,
    ) -> &Instantiation {
        let key = InstanceKey { family, first, second };
        self.entries.entry(key).or_insert_with(|| {
            let instantiation = Instantiation::new(family, params());
            debug!(target: "claw::generic", "instantiate {}", instantiation.type_name());
            instantiation
        })
    }

    /// True if `Array<T>` has been instantiated.
    pub fn contains_array<T: ElementType>(&self) -> bool {
        self.contains(Family::Array, TypeId::of::<T>(), None)
    }

    pub fn contains_optional<T: ElementType>(&self) -> bool {
        self.contains(Family::Optional, TypeId::of::<T>(), None)
    }

    pub fn contains_result<T: ElementType, E: ElementType>(&self) -> bool {
        self.contains(Family::Result, TypeId::of::<T>(), Some(TypeId::of::<E>()))
    }

    fn contains(&self, family: Family, first: TypeId, second: Option<TypeId>) -> bool {
        self.entries.contains_key(&InstanceKey { family, first, second })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item=&Instantiation> {
        self.entries.values()
    }

    /// Every operation symbol of every instantiation.
    pub fn symbols(&self) -> impl Iterator<Item=String> + '_ {
        self.entries.values().flat_map(|instantiation| instantiation.symbols())
    }
}

#[cfg(test)]
mod generic_tests {
    use super::{ElementType, Family, Registry};
    use crate::{Array, Optional, ResultOf, TextBuffer};

    #[test]
    fn same_type_is_instantiated_once() {
        let mut registry = Registry::new();
        let first = registry.array::<i32>().clone();
        let second = registry.array::<i32>().clone();
        assert_eq!(first, second);
        assert_eq!(2, registry.len(), "vec_i32 and opt_i32");
    }

    #[test]
    fn array_brings_its_optional_along() {
        let mut registry = Registry::new();
        registry.optional::<u8>();
        registry.array::<u8>();
        let names: Vec<_> = registry.iter().map(|i| i.type_name().to_string()).collect();
        assert_eq!(vec!["opt_u8", "vec_u8"], names);
        assert!(registry.contains_array::<u8>());
        assert!(!registry.contains_array::<i8>());
    }

    #[test]
    fn names_follow_type_parameters() {
        let mut registry = Registry::new();
        let result = registry.result::<i64, TextBuffer>();
        assert_eq!("result_i64_string", result.type_name());
        assert_eq!("newresult_i64_string", result.constructor());
        assert_eq!(Family::Result, result.family());

        let nested = registry.array::<Array<isize>>();
        assert_eq!("vec_vec_int", nested.type_name());
        assert_eq!("newVec_vec_int", nested.constructor());
    }

    #[test]
    fn composite_element_names() {
        assert_eq!("opt_str", Optional::<&'static str>::name());
        assert_eq!("result_bool_char", ResultOf::<bool, char>::name());
    }

    #[test]
    fn symbols_cover_every_operation() {
        let mut registry = Registry::new();
        let symbols: Vec<_> = registry.array::<f32>().symbols().collect();
        assert_eq!(vec![
            "vec_float_push",
            "vec_float_pop",
            "vec_float_at",
            "vec_float_get",
            "vec_float_grow",
            "vec_float_len",
            "vec_float_capacity",
        ], symbols);
        assert_eq!(9, registry.symbols().count());
    }

    #[test]
    fn result_order_matters() {
        let mut registry = Registry::new();
        registry.result::<u8, u16>();
        registry.result::<u16, u8>();
        registry.result::<u8, u16>();
        assert_eq!(2, registry.len());
    }

    #[test]
    fn membership_per_family() {
        let mut registry = Registry::new();
        registry.array::<i32>();
        registry.result::<bool, TextBuffer>();

        assert!(registry.contains_optional::<i32>());
        assert!(!registry.contains_optional::<bool>());
        assert!(registry.contains_result::<bool, TextBuffer>());
        assert!(!registry.contains_result::<TextBuffer, bool>());
        assert!(!registry.contains_array::<bool>());
    }
}
