use std::collections::HashMap;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{instrument, trace};
use zbus::{
    Connection, Message, fdo,
    zvariant::{DynamicType, OwnedValue, Structure, Value},
};

use super::{Arg, BusClient, BusError, BusValue, ObjectPath};

/// [`BusClient`] backed by a zbus connection to the session bus.
pub struct DbusClient {
    connection: Connection,
}

impl DbusClient {
    /// Connects to the session bus.
    ///
    /// # Errors
    /// Returns error if no session bus is reachable
    pub async fn session() -> Result<Self, BusError> {
        let connection = Connection::session().await?;
        Ok(Self::new(connection))
    }

    /// Wraps an existing connection.
    pub fn new(connection: Connection) -> Self {
        Self { connection }
    }

    async fn call<B>(
        &self,
        service: &str,
        path: ObjectPath,
        interface: &str,
        method: &str,
        body: &B,
    ) -> Result<BusValue, BusError>
    where
        B: Serialize + DynamicType + Sync,
    {
        let reply = self
            .connection
            .call_method(Some(service), path.as_str(), Some(interface), method, body)
            .await?;

        decode_reply(method, &reply)
    }
}

#[async_trait]
impl BusClient for DbusClient {
    #[instrument(skip(self))]
    async fn list_names(&self) -> Result<Vec<String>, BusError> {
        let dbus_proxy = fdo::DBusProxy::new(&self.connection).await?;
        let names = dbus_proxy.list_names().await?;

        Ok(names.into_iter().map(|name| name.to_string()).collect())
    }

    #[instrument(skip(self, args), fields(args = args.len()))]
    async fn invoke(
        &self,
        service: &str,
        path: ObjectPath,
        interface: &str,
        method: &str,
        args: &[Arg],
    ) -> Result<BusValue, BusError> {
        trace!(?args, "Invoking remote method");

        match args {
            [] => self.call(service, path, interface, method, &()).await,
            [Arg::Int(value)] => {
                let value = to_wire_int(method, *value)?;
                self.call(service, path, interface, method, &(value,)).await
            }
            [Arg::Bool(value)] => {
                self.call(service, path, interface, method, &(*value,))
                    .await
            }
            [Arg::Str(value)] => {
                self.call(service, path, interface, method, &(value.as_str(),))
                    .await
            }
            [Arg::Str(text), Arg::Bool(flag)] => {
                self.call(service, path, interface, method, &(text.as_str(), *flag))
                    .await
            }
            other => Err(BusError::UnsupportedArguments {
                method: method.to_string(),
                signature: other.iter().map(Arg::kind).collect::<Vec<_>>().join(", "),
            }),
        }
    }
}

/// The player protocol carries every integer argument as a signed 32-bit value.
fn to_wire_int(method: &str, value: i64) -> Result<i32, BusError> {
    i32::try_from(value).map_err(|_| BusError::ArgumentOutOfRange {
        method: method.to_string(),
        value: value.to_string(),
        wire_type: "int32",
    })
}

fn decode_reply(method: &str, reply: &Message) -> Result<BusValue, BusError> {
    let body = reply.body();
    if body.signature().to_string().is_empty() {
        return Ok(BusValue::Unit);
    }

    let structure: Structure<'_> = body
        .deserialize()
        .map_err(|e| decode_failed(method, e))?;

    let mut fields = structure
        .fields()
        .iter()
        .map(|field| decode_value(method, field))
        .collect::<Result<Vec<_>, _>>()?;

    if fields.len() == 1 {
        Ok(fields.remove(0))
    } else {
        Ok(BusValue::Struct(fields))
    }
}

fn decode_value(method: &str, value: &Value<'_>) -> Result<BusValue, BusError> {
    let decoded = match value {
        Value::Bool(v) => BusValue::Bool(*v),
        Value::U8(v) => BusValue::Int(i64::from(*v)),
        Value::I16(v) => BusValue::Int(i64::from(*v)),
        Value::U16(v) => BusValue::Int(i64::from(*v)),
        Value::I32(v) => BusValue::Int(i64::from(*v)),
        Value::U32(v) => BusValue::Int(i64::from(*v)),
        Value::I64(v) => BusValue::Int(*v),
        Value::U64(v) => {
            BusValue::Int(i64::try_from(*v).map_err(|e| decode_failed(method, e))?)
        }
        Value::Str(v) => BusValue::Str(v.to_string()),
        Value::ObjectPath(v) => BusValue::Str(v.to_string()),
        Value::Value(inner) => decode_value(method, inner)?,
        Value::Array(items) => BusValue::Struct(
            items
                .iter()
                .map(|item| decode_value(method, item))
                .collect::<Result<_, _>>()?,
        ),
        Value::Structure(structure) => BusValue::Struct(
            structure
                .fields()
                .iter()
                .map(|field| decode_value(method, field))
                .collect::<Result<_, _>>()?,
        ),
        Value::Dict(_) => decode_dict(method, value)?,
        other => BusValue::Str(format!("{other:?}")),
    };

    Ok(decoded)
}

fn decode_dict(method: &str, value: &Value<'_>) -> Result<BusValue, BusError> {
    let owned = value
        .try_to_owned()
        .map_err(|e| decode_failed(method, e))?;
    let entries =
        HashMap::<String, OwnedValue>::try_from(owned).map_err(|e| decode_failed(method, e))?;

    entries
        .iter()
        .map(|(key, entry)| Ok((key.clone(), decode_value(method, entry)?)))
        .collect::<Result<_, BusError>>()
        .map(BusValue::Dict)
}

fn decode_failed(method: &str, error: impl std::fmt::Display) -> BusError {
    BusError::DecodeFailed {
        method: method.to_string(),
        details: error.to_string(),
    }
}
