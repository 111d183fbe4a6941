use serde_json::{Number, Value};

/// The result of resolving a path in a [`Scope`](crate::Scope).
///
/// Carries the one convention shared by interpolation and conditions:
/// what a value prints as and whether it counts as true.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Binding<'a> {
    /// The path did not resolve.
    Absent,
    Value(&'a Value),
    /// The position of the current repeat instance.
    Index(usize),
    /// The element count of an array, bound through a `length` segment.
    Length(usize),
}

impl<'a> From<Option<&'a Value>> for Binding<'a> {
    fn from(value: Option<&'a Value>) -> Self {
        value.map_or(Binding::Absent, Binding::Value)
    }
}

impl<'a> Binding<'a> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Binding::Absent)
    }

    /// Absent, `null`, `false`, zero, NaN and the empty string are false.
    /// Everything else is true, empty arrays and objects included.
    pub fn is_truthy(&self) -> bool {
        match self {
            Binding::Absent => false,
            Binding::Index(n) | Binding::Length(n) => *n != 0,
            Binding::Value(value) => match value {
                Value::Null => false,
                Value::Bool(b) => *b,
                Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
                Value::String(s) => !s.is_empty(),
                Value::Array(_) | Value::Object(_) => true,
            },
        }
    }

    /// The bound sequence, if the binding is one.
    pub fn as_array(&self) -> Option<&'a Vec<Value>> {
        match self {
            Binding::Value(Value::Array(items)) => Some(items),
            _ => None,
        }
    }

    /// The text a placeholder bound to this value is replaced with.
    ///
    /// Absent and `null` print as nothing, whole numbers print without a
    /// fractional part and arrays print their elements comma separated.
    pub fn to_display_string(&self) -> String {
        match self {
            Binding::Absent => String::new(),
            Binding::Index(n) | Binding::Length(n) => n.to_string(),
            Binding::Value(value) => display_value(value),
        }
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => display_number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(display_value).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}

fn display_number(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}
