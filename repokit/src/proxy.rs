//! Delegating repository proxy
//!
//! A [`Repository`] holds one model and answers calls by name. Calls that
//! match one of the repository's own override methods run locally, after the
//! model and its table name have been bound into the repository; every other
//! call is forwarded to the model untouched.
//!
//! Dispatch goes through [`MethodTable`]s rather than reflection: a model
//! registers the methods it exposes, a repository registers its overrides.
//!
//! # Example
//!
//! ```rust
//! use repokit::proxy::{Model, Repository};
//! use repokit::{ModelError, ModelResult, RepositoryResult};
//! use serde_json::{json, Value};
//!
//! struct Post {
//!     table: Option<String>,
//! }
//!
//! impl Model for Post {
//!     fn class_name(&self) -> &str {
//!         r"App\Models\Post"
//!     }
//!
//!     fn table(&self) -> Option<&str> {
//!         self.table.as_deref()
//!     }
//!
//!     fn set_table(&mut self, table: &str) {
//!         self.table = Some(table.to_string());
//!     }
//!
//!     fn call(&mut self, method: &str, _args: &[Value]) -> ModelResult<Value> {
//!         match method {
//!             "count" => Ok(json!(3)),
//!             _ => Err(ModelError::unknown_method(self.class_name(), method)),
//!         }
//!     }
//! }
//!
//! fn latest(repo: &mut Repository<Post>, _args: &[Value]) -> RepositoryResult<Value> {
//!     Ok(json!(format!("select * from {} order by id desc", repo.current_table().unwrap_or_default())))
//! }
//!
//! let mut repo = Repository::new(Post { table: None }).with_override("latest", latest);
//!
//! assert_eq!(repo.call("count", &[]).unwrap(), json!(3));
//! assert_eq!(
//!     repo.call("latest", &[]).unwrap(),
//!     json!("select * from posts order by id desc")
//! );
//! ```

use serde_json::Value;
use std::collections::HashMap;

use crate::error::{ModelError, ModelResult, RepositoryError, RepositoryResult};
use crate::scaffold::naming::NameHelpers;

/// A callable entry in a [`MethodTable`]
pub type Method<T, E> = fn(&mut T, &[Value]) -> Result<Value, E>;

/// Repository override method
pub type Override<M> = Method<Repository<M>, RepositoryError>;

/// Name-indexed table of methods callable on a `T`
pub struct MethodTable<T, E> {
    methods: HashMap<&'static str, Method<T, E>>,
}

impl<T, E> Default for MethodTable<T, E> {
    fn default() -> Self {
        Self {
            methods: HashMap::new(),
        }
    }
}

impl<T, E> MethodTable<T, E> {
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a method, builder style
    #[must_use]
    pub fn with(mut self, name: &'static str, method: Method<T, E>) -> Self {
        self.register(name, method);
        self
    }

    /// Register a method, replacing any previous one with the same name
    pub fn register(&mut self, name: &'static str, method: Method<T, E>) {
        self.methods.insert(name, method);
    }

    /// Whether `name` is registered
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Look up a method by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Method<T, E>> {
        self.methods.get(name).copied()
    }

    /// Registered method names, in no particular order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.methods.keys().copied()
    }

    /// Number of registered methods
    #[must_use]
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Whether the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl<T, E> MethodTable<T, E>
where
    E: From<ModelError>,
{
    /// Call `name` on `target`, failing with [`ModelError::UnknownMethod`]
    /// when it is not registered
    pub fn invoke(
        &self,
        owner: &str,
        target: &mut T,
        name: &str,
        args: &[Value],
    ) -> Result<Value, E> {
        let method = self
            .get(name)
            .ok_or_else(|| ModelError::unknown_method(owner, name))?;
        method(target, args)
    }
}

/// ORM model surface the repository relies on
///
/// Anything with a settable table name and a way to call methods by name
/// can sit behind a [`Repository`].
pub trait Model {
    /// Class name, optionally namespace qualified
    fn class_name(&self) -> &str;

    /// Explicitly configured table, if any
    fn table(&self) -> Option<&str>;

    /// Set the table the model queries
    fn set_table(&mut self, table: &str);

    /// Call a model method by name
    fn call(&mut self, method: &str, args: &[Value]) -> ModelResult<Value>;

    /// Table the model queries
    ///
    /// The explicit table when set, otherwise the `snake_case` plural of the
    /// class basename (`OrderItem` -> `order_items`).
    fn get_table(&self) -> String {
        self.table()
            .map_or_else(|| NameHelpers::table_name_for(self.class_name()), str::to_string)
    }
}

/// How a call on a [`Repository`] will be handled
pub enum Dispatch<M> {
    /// Run the repository's own method after binding the model
    Override(Override<M>),
    /// Hand the call to the wrapped model
    Forward,
}

/// Repository wrapping a single model
pub struct Repository<M> {
    model: Option<M>,
    current_table: Option<String>,
    overrides: MethodTable<Repository<M>, RepositoryError>,
}

impl<M: Model> Repository<M> {
    /// Wrap `model`
    pub fn new(model: M) -> Self {
        Self {
            model: Some(model),
            current_table: None,
            overrides: MethodTable::new(),
        }
    }

    /// A repository with no model yet; every call fails until one is set
    #[must_use]
    pub fn unbound() -> Self {
        Self {
            model: None,
            current_table: None,
            overrides: MethodTable::new(),
        }
    }

    /// Register an override method, builder style
    #[must_use]
    pub fn with_override(mut self, name: &'static str, method: Override<M>) -> Self {
        self.overrides.register(name, method);
        self
    }

    /// Replace the override table
    #[must_use]
    pub fn with_overrides(mut self, overrides: MethodTable<Self, RepositoryError>) -> Self {
        self.overrides = overrides;
        self
    }

    /// Install or replace the wrapped model
    pub fn set_model(&mut self, model: M) {
        self.model = Some(model);
        self.current_table = None;
    }

    /// Wrapped model, if any
    pub const fn model(&self) -> Option<&M> {
        self.model.as_ref()
    }

    /// Wrapped model, mutably
    pub fn model_mut(&mut self) -> Option<&mut M> {
        self.model.as_mut()
    }

    /// Table bound by the last override call
    pub fn current_table(&self) -> Option<&str> {
        self.current_table.as_deref()
    }

    /// Table the wrapped model queries
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NoModelBound`] if no model is set.
    pub fn get_table(&self) -> RepositoryResult<String> {
        self.model
            .as_ref()
            .map(Model::get_table)
            .ok_or(RepositoryError::NoModelBound)
    }

    /// Decide whether `method` runs locally or is forwarded
    pub fn resolve(&self, method: &str) -> Dispatch<M> {
        self.overrides
            .get(method)
            .map_or(Dispatch::Forward, Dispatch::Override)
    }

    /// Call `method` with `args`
    ///
    /// Overrides run after [`bind`](Self::bind); anything else goes to
    /// [`forward`](Self::forward).
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NoModelBound`] if no model is set, or
    /// whatever the override or model returns.
    pub fn call(&mut self, method: &str, args: &[Value]) -> RepositoryResult<Value> {
        match self.resolve(method) {
            Dispatch::Override(local) => {
                tracing::trace!(method, arity = args.len(), "repository override");
                self.bind()?;
                local(self, args)
            }
            Dispatch::Forward => self.forward(method, args),
        }
    }

    /// Forward a call to the wrapped model unchanged
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NoModelBound`] if no model is set, or the
    /// model's own error.
    pub fn forward(&mut self, method: &str, args: &[Value]) -> RepositoryResult<Value> {
        let model = self.model.as_mut().ok_or(RepositoryError::NoModelBound)?;
        tracing::trace!(method, arity = args.len(), model = model.class_name(), "forwarding to model");
        Ok(model.call(method, args)?)
    }

    /// Bind the wrapped model and its table into the repository
    ///
    /// Resolves the table (explicit or derived), pins it on the model and
    /// records it as the current table.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NoModelBound`] if no model is set.
    pub fn bind(&mut self) -> RepositoryResult<&str> {
        let model = self.model.as_mut().ok_or(RepositoryError::NoModelBound)?;
        let table = model.get_table();
        model.set_table(&table);
        Ok(self.current_table.insert(table).as_str())
    }
}
