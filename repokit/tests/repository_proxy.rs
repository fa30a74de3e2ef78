//! Integration tests for the delegating repository proxy

use repokit::proxy::{Dispatch, MethodTable, Model, Repository};
use repokit::{ModelError, ModelResult, RepositoryError, RepositoryResult};
use serde_json::{json, Value};

/// Minimal ORM-like model backed by a method table
struct OrderItem {
    table: Option<String>,
    rows: Vec<Value>,
}

impl OrderItem {
    fn new() -> Self {
        Self {
            table: None,
            rows: vec![json!({"id": 1, "sku": "A-1"}), json!({"id": 2, "sku": "B-2"})],
        }
    }

    fn methods() -> MethodTable<Self, ModelError> {
        MethodTable::<Self, ModelError>::new()
            .with("findAll", |item, _| Ok(Value::Array(item.rows.clone())))
            .with("find", |item, args| {
                let id = args.first().and_then(Value::as_i64).ok_or_else(|| {
                    ModelError::InvalidArguments {
                        method: "find".to_string(),
                        reason: "expected an integer id".to_string(),
                    }
                })?;
                Ok(item
                    .rows
                    .iter()
                    .find(|row| row["id"] == json!(id))
                    .cloned()
                    .unwrap_or(Value::Null))
            })
            .with("where", |item, args| {
                Ok(json!({ "table": item.get_table(), "args": args }))
            })
            .with("explode", |_, _| Err(ModelError::Query("deadlock".to_string())))
    }
}

impl Model for OrderItem {
    fn class_name(&self) -> &str {
        r"App\Models\OrderItem"
    }

    fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    fn set_table(&mut self, table: &str) {
        self.table = Some(table.to_string());
    }

    fn call(&mut self, method: &str, args: &[Value]) -> ModelResult<Value> {
        Self::methods().invoke(r"App\Models\OrderItem", self, method, args)
    }
}

fn table_report(repo: &mut Repository<OrderItem>, _args: &[Value]) -> RepositoryResult<Value> {
    Ok(json!({ "current_table": repo.current_table() }))
}

fn find_all(repo: &mut Repository<OrderItem>, args: &[Value]) -> RepositoryResult<Value> {
    let rows = repo.forward("findAll", args)?;
    Ok(json!({ "from": repo.current_table(), "rows": rows }))
}

#[test]
fn test_forwards_unknown_method_verbatim() {
    let mut repo = Repository::new(OrderItem::new());
    let mut model = OrderItem::new();

    let expected = model.call("findAll", &[]).unwrap();
    assert_eq!(repo.call("findAll", &[]).unwrap(), expected);
}

#[test]
fn test_forwards_arguments_of_any_arity() {
    let mut repo = Repository::new(OrderItem::new());

    assert_eq!(
        repo.call("find", &[json!(2)]).unwrap(),
        json!({"id": 2, "sku": "B-2"})
    );
    assert_eq!(
        repo.call("where", &[json!("sku"), json!("="), json!("A-1")]).unwrap(),
        json!({"table": "order_items", "args": ["sku", "=", "A-1"]})
    );
}

#[test]
fn test_forwarded_errors_pass_through_unchanged() {
    let mut repo = Repository::new(OrderItem::new());

    assert_eq!(
        repo.call("explode", &[]),
        Err(RepositoryError::Model(ModelError::Query("deadlock".to_string())))
    );
    assert_eq!(
        repo.call("find", &[json!("one")]),
        Err(RepositoryError::Model(ModelError::InvalidArguments {
            method: "find".to_string(),
            reason: "expected an integer id".to_string(),
        }))
    );
    assert_eq!(
        repo.call("truncate", &[]),
        Err(RepositoryError::Model(ModelError::unknown_method(
            r"App\Models\OrderItem",
            "truncate"
        )))
    );
}

#[test]
fn test_forwarding_does_not_bind_table() {
    let mut repo = Repository::new(OrderItem::new());

    repo.call("findAll", &[]).unwrap();
    assert_eq!(repo.current_table(), None);
    assert_eq!(repo.model().and_then(Model::table), None);
}

#[test]
fn test_override_binds_model_and_table_first() {
    let mut repo = Repository::new(OrderItem::new()).with_override("tableReport", table_report);

    assert_eq!(repo.current_table(), None);
    assert_eq!(
        repo.call("tableReport", &[]).unwrap(),
        json!({"current_table": "order_items"})
    );
    assert_eq!(repo.current_table(), Some("order_items"));
    assert_eq!(repo.model().and_then(Model::table), Some("order_items"));
}

#[test]
fn test_override_shadows_model_method() {
    let mut repo = Repository::new(OrderItem::new()).with_override("findAll", find_all);

    let result = repo.call("findAll", &[]).unwrap();
    assert_eq!(result["from"], json!("order_items"));
    assert_eq!(result["rows"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_explicit_table_wins_over_convention() {
    let mut model = OrderItem::new();
    model.set_table("legacy_order_lines");
    let mut repo = Repository::new(model).with_override("tableReport", table_report);

    assert_eq!(repo.get_table().unwrap(), "legacy_order_lines");
    assert_eq!(
        repo.call("tableReport", &[]).unwrap(),
        json!({"current_table": "legacy_order_lines"})
    );
}

#[test]
fn test_get_table_derives_from_class_name() {
    let repo = Repository::new(OrderItem::new());
    assert_eq!(repo.get_table().unwrap(), "order_items");
}

#[test]
fn test_resolve_reports_dispatch_decision() {
    let repo = Repository::new(OrderItem::new()).with_override("tableReport", table_report);

    assert!(matches!(repo.resolve("tableReport"), Dispatch::Override(_)));
    assert!(matches!(repo.resolve("findAll"), Dispatch::Forward));
}

#[test]
fn test_unbound_repository_fails_every_call() {
    let mut repo: Repository<OrderItem> =
        Repository::unbound().with_override("tableReport", table_report);

    assert_eq!(repo.call("findAll", &[]), Err(RepositoryError::NoModelBound));
    assert_eq!(repo.call("tableReport", &[]), Err(RepositoryError::NoModelBound));
    assert_eq!(repo.get_table(), Err(RepositoryError::NoModelBound));
    assert_eq!(repo.current_table(), None);
}

#[test]
fn test_setting_model_later_enables_calls() {
    let mut repo: Repository<OrderItem> = Repository::unbound();
    repo.set_model(OrderItem::new());

    assert!(repo.call("findAll", &[]).is_ok());
    assert_eq!(repo.get_table().unwrap(), "order_items");
}

#[test]
fn test_override_table_can_be_supplied_whole() {
    let overrides = MethodTable::<Repository<OrderItem>, RepositoryError>::new()
        .with("tableReport", table_report)
        .with("findAll", find_all);
    let mut repo = Repository::new(OrderItem::new()).with_overrides(overrides);

    assert!(matches!(repo.resolve("findAll"), Dispatch::Override(_)));
    assert_eq!(
        repo.call("tableReport", &[]).unwrap(),
        json!({"current_table": "order_items"})
    );
}
