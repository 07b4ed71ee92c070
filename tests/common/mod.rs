//! Recording stand-in for the session bus.
//!
//! Answers `list_names` from a fixed list, records every `invoke` in order
//! and replies from a per-method table. Calls addressed to the wrong
//! service or interface fail, the same way a real bus would reject them.

#![allow(dead_code, clippy::unwrap_used)]

use std::{
    collections::{BTreeMap, HashMap},
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use mpris_remote::{
    cli::{CliService, CommandResult},
    services::bus::{Arg, BusClient, BusError, BusValue, MPRIS_INTERFACE, ObjectPath},
};

/// One recorded remote call: object path, method and arguments.
pub type Call = (&'static str, String, Vec<Arg>);

pub struct FakeBus {
    names: Vec<String>,
    replies: Mutex<HashMap<String, BusValue>>,
    failing: Mutex<HashMap<String, String>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeBus {
    /// A bus with exactly one player, `org.mpris.<name>`, and no tracks.
    pub fn with_player(name: &str) -> Arc<Self> {
        Self::with_names(&[format!("org.mpris.{name}")])
    }

    /// A bus with the given registered names.
    pub fn with_names(names: &[String]) -> Arc<Self> {
        let replies = HashMap::from([
            ("GetLength".to_string(), BusValue::Int(0)),
            ("GetCurrentTrack".to_string(), BusValue::Int(0)),
            ("Identity".to_string(), BusValue::Str("Foo Player 1.0".to_string())),
        ]);

        Arc::new(Self {
            names: names.to_vec(),
            replies: Mutex::new(replies),
            failing: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Sets the reply returned for `method`.
    pub fn reply(&self, method: &str, value: BusValue) {
        self.replies.lock().unwrap().insert(method.to_string(), value);
    }

    /// Makes every call to `method` fail with `details`.
    pub fn fail(&self, method: &str, details: &str) {
        self.failing
            .lock()
            .unwrap()
            .insert(method.to_string(), details.to_string());
    }

    /// Every call recorded so far.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn expected_service(&self, service: &str) -> bool {
        self.names.iter().any(|name| name == service)
    }
}

#[async_trait]
impl BusClient for FakeBus {
    async fn list_names(&self) -> Result<Vec<String>, BusError> {
        Ok(self.names.clone())
    }

    async fn invoke(
        &self,
        service: &str,
        path: ObjectPath,
        interface: &str,
        method: &str,
        args: &[Arg],
    ) -> Result<BusValue, BusError> {
        if !self.expected_service(service) || interface != MPRIS_INTERFACE {
            return Err(BusError::MethodFailed {
                method: method.to_string(),
                details: format!("no {interface} at {service}"),
            });
        }

        self.calls
            .lock()
            .unwrap()
            .push((path.as_str(), method.to_string(), args.to_vec()));

        if let Some(details) = self.failing.lock().unwrap().get(method) {
            return Err(BusError::MethodFailed {
                method: method.to_string(),
                details: details.clone(),
            });
        }

        Ok(self
            .replies
            .lock()
            .unwrap()
            .get(method)
            .cloned()
            .unwrap_or_default())
    }
}

/// Expected call without arguments.
pub fn call(path: &'static str, method: &str) -> Call {
    (path, method.to_string(), Vec::new())
}

/// Expected call with arguments.
pub fn call_with(path: &'static str, method: &str, args: Vec<Arg>) -> Call {
    (path, method.to_string(), args)
}

/// The track-count call every session starts with.
pub fn startup_call() -> Call {
    call("/TrackList", "GetLength")
}

/// Runs one invocation against player `foo` on `bus`.
pub async fn run(bus: &Arc<FakeBus>, command: &str, args: &[&str]) -> CommandResult {
    let args: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
    let bus: Arc<dyn BusClient> = bus.clone();

    CliService::new(bus)
        .execute_command(Some("foo"), Some(command), &args)
        .await
}

/// `GetStatus` reply for the given flags.
pub fn status(flags: [i64; 4]) -> BusValue {
    BusValue::Struct(flags.into_iter().map(BusValue::Int).collect())
}

/// `GetMetadata` reply from key/value pairs.
pub fn metadata(entries: &[(&str, BusValue)]) -> BusValue {
    BusValue::Dict(
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect::<BTreeMap<_, _>>(),
    )
}
