//! Shape projection tests: path enumeration, resolution, and agreement with
//! the records the diff engine produces for typed data.

use anyhow::Result;
use chrono::{DateTime, Duration, TimeZone, Utc};
use recursive_diff::{diff, to_value_shaped, FileRef, ObjectShape, Path, Shape, Shaped, Value};
use serde::Serialize;
use std::collections::BTreeMap;

struct Foo;

impl Shaped for Foo {
    fn shape() -> Shape {
        ObjectShape::new::<Self>().field::<String>("foo").build()
    }
}

struct Bar;

impl Shaped for Bar {
    fn shape() -> Shape {
        ObjectShape::new::<Self>().field::<bool>("bar").build()
    }
}

struct Nested;

impl Shaped for Nested {
    fn shape() -> Shape {
        ObjectShape::new::<Self>().field::<Bar>("foo").build()
    }
}

struct Count;

impl Shaped for Count {
    fn shape() -> Shape {
        ObjectShape::new::<Self>().field::<u32>("bar").build()
    }
}

struct Listing;

impl Shaped for Listing {
    fn shape() -> Shape {
        ObjectShape::new::<Self>().field::<Vec<Count>>("foo").build()
    }
}

fn path(raw: &str) -> Option<Path> {
    Path::parse(raw).expect("valid path")
}

mod path_set_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_atomic() {
        assert!(Shape::of::<String>().path_strings().is_empty());
        assert!(Shape::of::<Option<u64>>().path_strings().is_empty());
    }

    #[test]
    fn test_flat_object() {
        assert_eq!(Shape::of::<Foo>().path_strings(), vec!["foo"]);
    }

    #[test]
    fn test_nested_object() {
        assert_eq!(Shape::of::<Nested>().path_strings(), vec!["foo", "foo.bar"]);
    }

    #[test]
    fn test_tuple_positions() {
        assert_eq!(
            Shape::of::<(String, Foo)>().path_strings(),
            vec!["0", "1", "1.foo"]
        );
    }

    #[test]
    fn test_array_of_atomics() {
        assert_eq!(Shape::of::<Vec<String>>().path_strings(), vec!["*"]);
    }

    #[test]
    fn test_array_of_objects() {
        assert_eq!(
            Shape::of::<Vec<Nested>>().path_strings(),
            vec!["*", "*.foo", "*.foo.bar"]
        );
    }

    #[test]
    fn test_object_holding_array() {
        assert_eq!(
            Shape::of::<Listing>().path_strings(),
            vec!["foo", "foo.*", "foo.*.bar"]
        );
    }

    #[test]
    fn test_map_of_objects() {
        assert_eq!(
            Shape::of::<BTreeMap<String, Foo>>().path_strings(),
            vec!["{key}", "{key}.foo"]
        );
    }

    #[test]
    fn test_optional_is_transparent() {
        assert_eq!(
            Shape::of::<Option<Vec<Option<Foo>>>>().path_strings(),
            vec!["*", "*.foo"]
        );
    }
}

mod resolve_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resolve_nested_leaf() {
        let shape = Shape::of::<Nested>();
        assert_eq!(shape.resolve(path("foo").as_ref()), Some(Shape::of::<Bar>()));
        assert_eq!(shape.resolve(path("foo.bar").as_ref()), Some(Shape::of::<bool>()));
    }

    #[test]
    fn test_resolve_through_array() {
        let shape = Shape::of::<Listing>();
        assert_eq!(
            shape.resolve(path("foo").as_ref()),
            Some(Shape::of::<Vec<Count>>())
        );
        assert_eq!(shape.resolve(path("foo.12").as_ref()), Some(Shape::of::<Count>()));
        assert_eq!(shape.resolve(path("foo.0.bar").as_ref()), Some(Shape::of::<u32>()));
    }

    #[test]
    fn test_resolve_tuple_position() {
        let shape = Shape::of::<(String, Foo)>();
        assert_eq!(shape.resolve(path("1.foo").as_ref()), Some(Shape::of::<String>()));
        assert!(!shape.accepts(path("2").as_ref()));
    }

    #[test]
    fn test_resolve_map_entry() {
        let shape = Shape::of::<BTreeMap<String, Foo>>();
        assert_eq!(shape.resolve(path("anything").as_ref()), Some(Shape::of::<Foo>()));
        assert_eq!(shape.resolve(path("7.foo").as_ref()), Some(Shape::of::<String>()));
    }

    #[test]
    fn test_unknown_paths_are_rejected() {
        let shape = Shape::of::<Listing>();
        assert!(!shape.accepts(path("bar").as_ref()));
        assert!(!shape.accepts(path("foo.bar").as_ref()));
        assert!(!shape.accepts(path("foo.0.bar.baz").as_ref()));
        assert!(shape.accepts(None));
    }
}

mod lock_step_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Serialize, Clone)]
    struct Customer {
        name: String,
        email: Option<String>,
    }

    impl Shaped for Customer {
        fn shape() -> Shape {
            ObjectShape::new::<Self>()
                .field::<String>("name")
                .field::<Option<String>>("email")
                .build()
        }
    }

    #[derive(Serialize, Clone)]
    struct Line {
        sku: String,
        qty: u32,
    }

    impl Shaped for Line {
        fn shape() -> Shape {
            ObjectShape::new::<Self>()
                .field::<String>("sku")
                .field::<u32>("qty")
                .build()
        }
    }

    #[derive(Serialize, Clone)]
    struct Order {
        id: u32,
        customer: Customer,
        lines: Vec<Line>,
        attributes: BTreeMap<String, String>,
        dimensions: (f64, f64),
        placed_at: DateTime<Utc>,
        receipt: Option<FileRef>,
    }

    impl Shaped for Order {
        fn shape() -> Shape {
            ObjectShape::new::<Self>()
                .field::<u32>("id")
                .field::<Customer>("customer")
                .field::<Vec<Line>>("lines")
                .field::<BTreeMap<String, String>>("attributes")
                .field::<(f64, f64)>("dimensions")
                .field::<DateTime<Utc>>("placed_at")
                .field::<Option<FileRef>>("receipt")
                .build()
        }
    }

    fn line(sku: &str, qty: u32) -> Line {
        Line {
            sku: sku.to_string(),
            qty,
        }
    }

    fn placed_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    fn receipt(name: &str) -> FileRef {
        FileRef {
            name: name.to_string(),
            size: 512,
            content_type: "application/pdf".to_string(),
            last_modified: placed_at(),
        }
    }

    fn order() -> Order {
        Order {
            id: 1,
            customer: Customer {
                name: "Ann".to_string(),
                email: Some("ann@example.com".to_string()),
            },
            lines: vec![line("x", 1), line("y", 2)],
            attributes: [("color", "red"), ("size", "m")]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            dimensions: (10.0, 20.0),
            placed_at: placed_at(),
            receipt: Some(receipt("receipt-1.pdf")),
        }
    }

    fn edited() -> Order {
        let mut order = order();
        order.customer.name = "Anne".to_string();
        order.customer.email = None;
        order.lines[0].qty = 4;
        order.lines.push(line("z", 1));
        order.attributes.remove("size");
        order.attributes.insert("gift".to_string(), "yes".to_string());
        order.dimensions.1 = 25.0;
        order.placed_at = placed_at() + Duration::microseconds(300);
        order.receipt = Some(receipt("receipt-2.pdf"));
        order
    }

    #[test]
    fn test_shape_admits_serialized_data() -> Result<()> {
        let shape = Shape::of::<Order>();
        assert!(shape.admits(&to_value_shaped(&order())?));
        assert!(shape.admits(&to_value_shaped(&edited())?));
        Ok(())
    }

    #[test]
    fn test_records_agree_with_shape() -> Result<()> {
        let shape = Shape::of::<Order>();
        let patterns = shape.paths();
        let before = to_value_shaped(&order())?;
        let after = to_value_shaped(&edited())?;

        let records = diff(&before, &after);
        assert!(!records.is_empty());

        for record in &records {
            let path = record.path.as_ref().expect("typed orders never change at root");
            assert!(shape.accepts(Some(path)), "not accepted: {}", path);
            assert!(
                patterns.iter().any(|pattern| pattern.matches(path)),
                "no pattern for {}",
                path
            );

            let resolved = shape.resolve(Some(path)).expect("accepted path resolves");
            if let Some(value) = record.before() {
                assert!(resolved.admits(value), "{} does not admit {}", resolved.id, value);
            }
            if let Some(value) = record.after() {
                assert!(resolved.admits(value), "{} does not admit {}", resolved.id, value);
            }
        }
        Ok(())
    }

    #[test]
    fn test_records_for_edited_order() -> Result<()> {
        let before = to_value_shaped(&order())?;
        let after = to_value_shaped(&edited())?;

        let lines: Vec<String> = diff(&before, &after)
            .iter()
            .map(|record| format!("{} {}", record.operation, record.path_string().unwrap_or_default()))
            .collect();

        assert_eq!(
            lines,
            vec![
                "update customer.name",
                "update customer.email",
                "update lines.0.qty",
                "add lines.2",
                "delete attributes.size",
                "add attributes.gift",
                "update dimensions.1",
                "update receipt",
            ]
        );
        Ok(())
    }

    #[test]
    fn test_dates_within_one_millisecond_are_unchanged() -> Result<()> {
        let before = to_value_shaped(&order())?;
        let mut later = order();
        later.placed_at = placed_at() + Duration::microseconds(300);
        let after = to_value_shaped(&later)?;

        assert!(matches!(after.get(&"placed_at".into()), Some(Value::Date(_))));
        assert!(diff(&before, &after).is_empty());
        Ok(())
    }

    #[test]
    fn test_files_are_compared_whole() -> Result<()> {
        let before = to_value_shaped(&order())?;
        let mut replaced = order();
        replaced.receipt = Some(receipt("receipt-2.pdf"));
        let after = to_value_shaped(&replaced)?;

        let records = diff(&before, &after);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].path_string().as_deref(), Some("receipt"));
        assert_eq!(
            records[0].after(),
            Some(&Value::File(receipt("receipt-2.pdf")))
        );
        Ok(())
    }
}
