//! Fortune extraction from host plugin messages.
//!
//! Messages are JSON objects. Fortune text is looked up, in order, in:
//! `data` as a JSON-encoded string with a `fortune` field, `data` as a plain
//! string, `data.fortune`, and finally `message`. The text is trimmed and
//! upper-cased.
//!
//! A `data` string that parses to `null`, or whose `fortune` field is set
//! but is not a string, is revealed verbatim like unparseable text.

use serde_json::Value;

/// Fortune text carried by `message`, if any
pub fn fortune_from_message(message: &Value) -> Option<String> {
    if let Some(data) = message.get("data").filter(|d| is_truthy(d)) {
        match data {
            Value::String(raw) => match serde_json::from_str::<Value>(raw) {
                Ok(Value::Null) => return Some(normalize(raw)),
                Ok(parsed) => match parsed.get("fortune").filter(|f| is_truthy(f)) {
                    Some(Value::String(fortune)) => return Some(normalize(fortune)),
                    // A fortune that is not text is shown as the raw payload
                    Some(_) => return Some(normalize(raw)),
                    None => {}
                },
                Err(_) => return Some(normalize(raw)),
            },
            other => {
                if let Some(fortune) = truthy_str(other.get("fortune")) {
                    return Some(normalize(fortune));
                }
            }
        }
    }

    truthy_str(message.get("message")).map(normalize)
}

/// Parse one line of host input: a JSON message, or bare fortune text
pub fn fortune_from_line(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(line) {
        Ok(value @ Value::Object(_)) => fortune_from_message(&value),
        _ => Some(normalize(line)),
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_uppercase()
}

fn truthy_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}
