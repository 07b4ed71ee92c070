use std::{collections::BTreeMap, fmt};

/// Argument passed to a remote procedure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    /// Integer argument, narrowed to the wire type by the transport.
    Int(i64),
    /// Boolean argument.
    Bool(bool),
    /// String argument.
    Str(String),
}

impl Arg {
    /// Short name of the argument kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Arg::Int(_) => "int",
            Arg::Bool(_) => "bool",
            Arg::Str(_) => "string",
        }
    }
}

impl From<i64> for Arg {
    fn from(value: i64) -> Self {
        Arg::Int(value)
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Arg::Bool(value)
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Str(value.to_string())
    }
}

/// Decoded reply from a remote procedure.
///
/// Only the shapes the player protocol produces are represented; every
/// integer width collapses to `Int`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BusValue {
    /// Empty reply.
    #[default]
    Unit,
    /// Boolean value.
    Bool(bool),
    /// Any integer value.
    Int(i64),
    /// String or object path.
    Str(String),
    /// Ordered structure or array.
    Struct(Vec<BusValue>),
    /// String-keyed dictionary.
    Dict(BTreeMap<String, BusValue>),
}

impl BusValue {
    /// Returns the integer payload, if any.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            BusValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the string payload, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            BusValue::Str(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the fields of a structure, if any.
    pub fn fields(&self) -> Option<&[BusValue]> {
        match self {
            BusValue::Struct(fields) => Some(fields),
            _ => None,
        }
    }

    /// Consumes the value, returning the dictionary payload if any.
    pub fn into_dict(self) -> Option<BTreeMap<String, BusValue>> {
        match self {
            BusValue::Dict(entries) => Some(entries),
            _ => None,
        }
    }
}

impl fmt::Display for BusValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusValue::Unit => Ok(()),
            BusValue::Bool(value) => write!(f, "{value}"),
            BusValue::Int(value) => write!(f, "{value}"),
            BusValue::Str(value) => f.write_str(value),
            BusValue::Struct(fields) => {
                let rendered: Vec<String> = fields.iter().map(ToString::to_string).collect();
                write!(f, "({})", rendered.join(", "))
            }
            BusValue::Dict(entries) => {
                let rendered: Vec<String> = entries
                    .iter()
                    .map(|(key, value)| format!("{key}: {value}"))
                    .collect();
                write!(f, "{{{}}}", rendered.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_display_without_decoration() {
        assert_eq!(BusValue::Str("An Artist".to_string()).to_string(), "An Artist");
        assert_eq!(BusValue::Int(143).to_string(), "143");
        assert_eq!(BusValue::Bool(true).to_string(), "true");
        assert_eq!(BusValue::Unit.to_string(), "");
    }

    #[test]
    fn containers_display_their_members() {
        let value = BusValue::Struct(vec![BusValue::Int(0), BusValue::Int(1)]);
        assert_eq!(value.to_string(), "(0, 1)");

        let value = BusValue::Dict(BTreeMap::from([
            ("b".to_string(), BusValue::Int(2)),
            ("a".to_string(), BusValue::Str("x".to_string())),
        ]));
        assert_eq!(value.to_string(), "{a: x, b: 2}");
    }

    #[test]
    fn accessors_reject_other_shapes() {
        assert_eq!(BusValue::Int(5).as_str(), None);
        assert_eq!(BusValue::Str("5".to_string()).as_i64(), None);
        assert!(BusValue::Unit.fields().is_none());
        assert!(BusValue::Int(1).into_dict().is_none());
    }
}
