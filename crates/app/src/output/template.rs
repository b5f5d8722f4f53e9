use std::collections::HashMap;
use std::io::Write;

use gtmpl::{Context, Template, Value};
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::output::RenderError;

/// Runs a Go-style text template over the JSON tree of `value`, so
/// `{{.title}}` and `{{.author.login}}` address schema key names.
pub fn render<W, T>(writer: &mut W, source: &str, value: &T) -> Result<(), RenderError>
where
    W: Write,
    T: Serialize + ?Sized,
{
    let mut template = Template::default();
    template
        .parse(source)
        .map_err(|err| RenderError::Template(err.to_string()))?;
    let data = to_template_value(serde_json::to_value(value)?);
    let output = template
        .render(&Context::from(data))
        .map_err(|err| RenderError::Execute(err.to_string()))?;
    writer.write_all(output.as_bytes())?;
    Ok(())
}

fn to_template_value(value: JsonValue) -> Value {
    match value {
        JsonValue::Null => Value::Nil,
        JsonValue::Bool(flag) => Value::from(flag),
        JsonValue::Number(number) => {
            if let Some(int) = number.as_i64() {
                Value::from(int)
            } else if let Some(uint) = number.as_u64() {
                Value::from(uint)
            } else {
                Value::from(number.as_f64().unwrap_or_default())
            }
        }
        JsonValue::String(text) => Value::from(text),
        JsonValue::Array(items) => Value::Array(items.into_iter().map(to_template_value).collect()),
        JsonValue::Object(object) => Value::Object(
            object
                .into_iter()
                .map(|(key, value)| (key, to_template_value(value)))
                .collect::<HashMap<_, _>>(),
        ),
    }
}
