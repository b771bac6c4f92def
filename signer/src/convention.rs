//! Transport-facing client convention.
//!
//! Wraps an application transport with the command layouts a stateful
//! off-chain application expects: nonce fetch, deposit and withdraw packing.
//! The transport itself (RPC, retries, async runtime) lives entirely behind
//! the [`Transport`] trait; this module only composes limb sequences and
//! reads the returned state blobs.

use serde_json::Value;
use thiserror::Error;

use codec::{Command, compose_withdraw_limbs, hex_to_biguint_be};

/// Errors surfaced while driving the transport convention.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The transport failed to deliver a request or response.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The queried state blob did not have the expected shape.
    #[error("unexpected state shape: {0}")]
    State(String),

    /// A command or withdraw layout precondition was violated.
    #[error(transparent)]
    Codec(#[from] codec::CodecError),
}

/// The remote application endpoint the client convention drives.
///
/// Implementations own delivery, retry and error mapping; the core never
/// retries internally. Both calls are synchronous from the caller's view —
/// an async transport blocks inside its implementation.
pub trait Transport {
    /// Submits a command limb sequence under a processing key, returning the
    /// committed result blob.
    fn send_transaction(&self, cmd: &[u64], processing_key: &str) -> Result<Value, ClientError>;

    /// Queries the application state visible to a processing key.
    fn query_state(&self, processing_key: &str) -> Result<Value, ClientError>;

    /// Queries the application's static configuration.
    fn query_config(&self) -> Result<Value, ClientError>;
}

/// Client convention for one player: holds the processing key and the
/// application's deposit and withdraw opcodes, and packs commands on demand.
pub struct PlayerConvention<T: Transport> {
    processing_key: String,
    transport: T,
    deposit_opcode: u8,
    withdraw_opcode: u8,
}

impl<T: Transport> PlayerConvention<T> {
    pub fn new(
        processing_key: impl Into<String>,
        transport: T,
        deposit_opcode: u8,
        withdraw_opcode: u8,
    ) -> Self {
        Self {
            processing_key: processing_key.into(),
            transport,
            deposit_opcode,
            withdraw_opcode,
        }
    }

    pub fn config(&self) -> Result<Value, ClientError> {
        self.transport.query_config()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches and unwraps the player state.
    ///
    /// The transport returns `{ "data": ... }` where `data` may be inline
    /// JSON or a JSON-encoded string; both shapes are accepted.
    pub fn state(&self) -> Result<Value, ClientError> {
        let response = self.transport.query_state(&self.processing_key)?;
        match response.get("data") {
            Some(Value::String(inner)) => serde_json::from_str(inner)
                .map_err(|e| ClientError::State(format!("data field is not JSON: {e}"))),
            Some(inner) => Ok(inner.clone()),
            None => Err(ClientError::State("missing data field".to_string())),
        }
    }

    /// Reads the player's current nonce from the state blob.
    ///
    /// Accepts both a JSON number and a decimal string, since backends
    /// disagree on how they render 64-bit counters.
    pub fn nonce(&self) -> Result<u64, ClientError> {
        let state = self.state()?;
        let nonce = state
            .get("player")
            .and_then(|p| p.get("nonce"))
            .ok_or_else(|| ClientError::State("missing player.nonce".to_string()))?;
        match nonce {
            Value::Number(n) => n
                .as_u64()
                .ok_or_else(|| ClientError::State(format!("nonce {n} is not a u64"))),
            Value::String(s) => s
                .parse()
                .map_err(|_| ClientError::State(format!("nonce {s:?} is not a u64"))),
            other => Err(ClientError::State(format!("nonce has type {other}"))),
        }
    }

    /// Submits a deposit command for a player id pair.
    pub fn deposit(&self, pid_1: u64, pid_2: u64, amount: u64) -> Result<Value, ClientError> {
        let nonce = self.nonce()?;
        let cmd = Command::new(nonce, self.deposit_opcode, vec![pid_1, pid_2, amount])?;
        self.transport
            .send_transaction(&cmd.encode(), &self.processing_key)
    }

    /// Submits a withdraw command for a hex destination address.
    ///
    /// The address packs into the 3-limb withdraw layout; the amount must
    /// fit 32 bits.
    pub fn withdraw_rewards(&self, address: &str, amount: u64) -> Result<Value, ClientError> {
        let nonce = self.nonce()?;
        let addr = hex_to_biguint_be(address)?;
        let limbs = compose_withdraw_limbs(&addr, amount)?;
        let cmd = Command::new(nonce, self.withdraw_opcode, limbs.to_vec())?;
        self.transport
            .send_transaction(&cmd.encode(), &self.processing_key)
    }
}
