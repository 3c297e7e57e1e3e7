//! Wire message types for the simplification service.
//!
//! Messages travel as newline-delimited JSON objects, one request and one
//! response per line. The geometry containers are the serde-derived library
//! types, so the wire schema and the in-memory form coincide.

use crate::polygon::PolygonWithHoles;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A request received from a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Request {
    /// Handshake: ask the service to identify itself.
    Identify,
    /// Settings pushed by the orchestrator for one client.
    Broadcast(BroadcastRequest),
    /// Simplify a batch of polygons.
    Simplify(SimplifyRequest),
}

/// Client-scoped settings delivered over the broadcast channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastRequest {
    /// Identity of the client the settings belong to.
    pub client: String,
    /// Key/value settings map.
    #[serde(default)]
    pub settings: BTreeMap<String, String>,
}

/// A batch simplification request with its tolerances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplifyRequest {
    /// An edge shorter than this is a candidate for removal.
    pub max_resolution: i64,
    /// Maximum allowed deviation of a removed vertex from the remaining line.
    pub max_deviation: i64,
    /// Reserved; accepted and stored but not consulted.
    pub max_area_deviation: i64,
    /// The polygons to simplify, in order.
    #[serde(default)]
    pub polygons: Vec<PolygonWithHoles>,
}

/// A response sent back to the client, tagged by status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response {
    /// Answer to an identify handshake.
    Identity {
        /// Human-readable service name.
        plugin_name: String,
        /// Version of this service.
        plugin_version: String,
        /// Version of the slot protocol the service fills.
        slot_version: String,
    },
    /// Successful simplification (or a broadcast acknowledgement, with an
    /// empty batch).
    Ok {
        /// One output polygon per input polygon, same order.
        #[serde(default)]
        polygons: Vec<PolygonWithHoles>,
    },
    /// The request failed; the batch was not partially processed.
    Error {
        /// Human-readable description of the failure.
        message: String,
    },
}
