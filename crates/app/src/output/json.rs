use std::io::Write;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::output::RenderError;

/// Serializes through a generic JSON tree so the whitelist matches schema
/// key names, then writes one newline-terminated value.
pub fn write_json<W, T>(writer: &mut W, value: &T, fields: &[String]) -> Result<(), RenderError>
where
    W: Write,
    T: Serialize + ?Sized,
{
    let tree = serde_json::to_value(value)?;
    let output = if fields.is_empty() {
        tree
    } else {
        project_fields(tree, fields)
    };
    serde_json::to_writer(&mut *writer, &output)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Keeps only `fields` on the outermost objects, in field order.
///
/// Arrays are projected element-wise; values kept under a field are left whole.
pub fn project_fields(value: Value, fields: &[String]) -> Value {
    match value {
        Value::Object(mut object) => {
            let mut projected = Map::new();
            for field in fields {
                if let Some(value) = object.remove(field) {
                    projected.insert(field.clone(), value);
                }
            }
            Value::Object(projected)
        }
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| project_fields(item, fields))
                .collect(),
        ),
        scalar => scalar,
    }
}

#[cfg(test)]
mod tests {
    use discussion_core::domain::{Discussion, User};
    use serde_json::json;

    use super::*;

    fn fields(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    fn sample() -> Discussion {
        Discussion {
            number: 123,
            title: "T".to_string(),
            body: Some("B".to_string()),
            author: Some(User {
                login: "u".to_string(),
                url: Some("https://github.com/u".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn single_discussion_keeps_requested_fields_in_order() {
        let mut out = Vec::new();
        write_json(&mut out, &sample(), &fields(&["number", "title", "author"])).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"number\":123,\"title\":\"T\",\"author\":{\"login\":\"u\",\"url\":\"https://github.com/u\"}}\n"
        );
    }

    #[test]
    fn array_elements_are_projected() {
        let value = json!([
            { "number": 1, "title": "a", "body": "x" },
            { "number": 2, "body": "y" }
        ]);
        let projected = project_fields(value, &fields(&["number", "title"]));
        assert_eq!(
            projected,
            json!([{ "number": 1, "title": "a" }, { "number": 2 }])
        );
    }

    #[test]
    fn nested_objects_are_not_projected() {
        let value = json!({ "author": { "login": "u", "number": 9 }, "number": 1 });
        let projected = project_fields(value, &fields(&["author"]));
        assert_eq!(projected, json!({ "author": { "login": "u", "number": 9 } }));
    }

    #[test]
    fn scalars_pass_through() {
        assert_eq!(project_fields(json!(5), &fields(&["a"])), json!(5));
        assert_eq!(project_fields(json!(null), &fields(&["a"])), json!(null));
    }

    #[test]
    fn empty_field_list_writes_full_value() {
        let discussion = sample();
        let mut out = Vec::new();
        write_json(&mut out, &discussion, &[]).unwrap();
        let written: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(written, serde_json::to_value(&discussion).unwrap());
        assert!(out.ends_with(b"\n"));
    }

    #[test]
    fn unknown_fields_are_dropped() {
        let projected = project_fields(json!({ "number": 1 }), &fields(&["nope", "number"]));
        assert_eq!(projected, json!({ "number": 1 }));
    }
}
