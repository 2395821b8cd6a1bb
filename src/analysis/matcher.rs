//! Method and functional-interface signature matching
//!
//! A [`MethodMatcher`] is built once and then only read, so a single
//! instance can be shared by every thread analyzing compilation units.

use crate::tree::{LambdaExpr, MethodDecl, Parameter, TypeHierarchy, TypeRef};

/// Predicate over a resolved type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeCriteria {
    /// Exact qualified-name match
    Is(String),
    /// The type itself or any subtype
    SubtypeOf(String),
}

impl TypeCriteria {
    pub fn is(qualified_name: impl Into<String>) -> Self {
        TypeCriteria::Is(qualified_name.into())
    }

    pub fn subtype_of(qualified_name: impl Into<String>) -> Self {
        TypeCriteria::SubtypeOf(qualified_name.into())
    }

    pub fn test(&self, ty: &TypeRef, types: &dyn TypeHierarchy) -> bool {
        match self {
            TypeCriteria::Is(name) => ty.is(name),
            TypeCriteria::SubtypeOf(name) => types.is_subtype_of(ty, name),
        }
    }

    /// Unresolved types never satisfy a criterion
    fn test_opt(&self, ty: Option<&TypeRef>, types: &dyn TypeHierarchy) -> bool {
        ty.is_some_and(|ty| self.test(ty, types))
    }
}

/// Shapes a [`MethodMatcher`] can be asked about
#[derive(Debug, Clone, Copy)]
pub enum SignatureCandidate<'a> {
    /// A declared method, matched on owner type, name and parameters
    Method(&'a MethodDecl),
    /// A lambda, matched on its inferred functional interface and parameters
    Function(&'a LambdaExpr),
}

/// Target signature: owning type, method name and ordered parameter types
#[derive(Debug, Clone)]
pub struct MethodMatcher {
    owner: TypeCriteria,
    name: Option<String>,
    params: Vec<TypeCriteria>,
}

impl MethodMatcher {
    pub fn new(owner: TypeCriteria) -> Self {
        Self {
            owner,
            name: None,
            params: Vec::new(),
        }
    }

    /// Method name required for declared methods (lambdas have none)
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn add_parameter(mut self, criteria: TypeCriteria) -> Self {
        self.params.push(criteria);
        self
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    pub fn matches(&self, candidate: SignatureCandidate<'_>, types: &dyn TypeHierarchy) -> bool {
        match candidate {
            SignatureCandidate::Method(method) => {
                self.owner.test(&method.owner, types)
                    && self.name.as_deref().map_or(true, |name| name == method.name)
                    && self.parameters_match(&method.params, types)
            }
            SignatureCandidate::Function(lambda) => {
                self.owner.test_opt(lambda.inferred_type.as_ref(), types)
                    && self.parameters_match(&lambda.params, types)
            }
        }
    }

    fn parameters_match(&self, params: &[Parameter], types: &dyn TypeHierarchy) -> bool {
        params.len() == self.params.len()
            && params
                .iter()
                .zip(&self.params)
                .all(|(param, criteria)| criteria.test_opt(param.ty.as_ref(), types))
    }
}
