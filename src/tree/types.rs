//! Resolved types and the subtype query the checks rely on

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Root of every class hierarchy
pub const JAVA_LANG_OBJECT: &str = "java.lang.Object";

/// Fully qualified name of a resolved type (`javax.net.ssl.SSLSession`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeRef(String);

impl TypeRef {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self(qualified_name.into())
    }

    pub fn qualified_name(&self) -> &str {
        &self.0
    }

    /// Exact type test by qualified name
    pub fn is(&self, qualified_name: &str) -> bool {
        self.0 == qualified_name
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Subtype queries answered by the host's type system
pub trait TypeHierarchy: Sync {
    /// Whether `ty` is `target` or one of its subtypes
    fn is_subtype_of(&self, ty: &TypeRef, target: &str) -> bool;
}

/// Type hierarchy backed by a table of declared direct supertypes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeTable {
    supertypes: HashMap<String, Vec<String>>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `ty` with its direct superclass and interfaces
    pub fn declare<I, S>(&mut self, ty: impl Into<String>, supertypes: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supertypes
            .entry(ty.into())
            .or_default()
            .extend(supertypes.into_iter().map(Into::into));
        self
    }

    pub fn with<I, S>(mut self, ty: impl Into<String>, supertypes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.declare(ty, supertypes);
        self
    }

    pub fn len(&self) -> usize {
        self.supertypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.supertypes.is_empty()
    }
}

impl TypeHierarchy for TypeTable {
    fn is_subtype_of(&self, ty: &TypeRef, target: &str) -> bool {
        if ty.is(target) || target == JAVA_LANG_OBJECT {
            return true;
        }

        // Worklist over declared supertypes; the visited set guards against
        // malformed (cyclic) input tables
        let mut visited: HashSet<&str> = HashSet::new();
        let mut stack: Vec<&str> = vec![ty.qualified_name()];

        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            if current == target {
                return true;
            }
            if let Some(parents) = self.supertypes.get(current) {
                stack.extend(parents.iter().map(String::as_str));
            }
        }

        false
    }
}
