//! Translation between wire requests and the simplification core.
//!
//! The adapter is stateless per request: each simplify request builds its
//! own engine from the request tolerances, runs the batch, and encodes the
//! result. The only retained state is the service metadata and the
//! read-mostly settings map filled by broadcast requests.

use crate::error::TrimError;
use crate::polygon::{simplify_batch, PolygonWithHoles};
use crate::service::wire::{Request, Response, SimplifyRequest};
use crate::simplify::Simplifier;
use log::{debug, warn};
use std::collections::BTreeMap;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Service name reported by the identify handshake.
pub const PLUGIN_NAME: &str = "polytrim";
/// Version of the slot protocol this service fills.
pub const SLOT_VERSION: &str = "0.1.0";

/// Largest coordinate magnitude accepted at the service boundary.
///
/// Keeps every intermediate product of the geometry primitives inside the
/// widened arithmetic they are specified for.
pub const MAX_COORDINATE: i64 = 1 << 31;

/// The request handler.
///
/// Holds no per-request state. Broadcast settings are stored keyed by
/// client identity; the host is single-threaded and sequential, so the map
/// needs no locking.
#[derive(Debug, Default)]
pub struct Service {
    settings: BTreeMap<String, BTreeMap<String, String>>,
}

impl Service {
    /// Creates a service with no stored settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles one request and produces its response.
    pub fn handle(&mut self, request: Request) -> Response {
        match request {
            Request::Identify => Response::Identity {
                plugin_name: PLUGIN_NAME.to_string(),
                plugin_version: env!("CARGO_PKG_VERSION").to_string(),
                slot_version: SLOT_VERSION.to_string(),
            },
            Request::Broadcast(broadcast) => {
                debug!(
                    "stored {} setting(s) for client {}",
                    broadcast.settings.len(),
                    broadcast.client
                );
                self.settings.insert(broadcast.client, broadcast.settings);
                Response::Ok {
                    polygons: Vec::new(),
                }
            }
            Request::Simplify(simplify) => self.handle_simplify(simplify),
        }
    }

    /// Returns the settings stored for a client, if any were broadcast.
    pub fn client_settings(&self, client: &str) -> Option<&BTreeMap<String, String>> {
        self.settings.get(client)
    }

    fn handle_simplify(&self, request: SimplifyRequest) -> Response {
        if let Err(error) = validate(&request) {
            warn!("rejected simplify request: {}", error);
            return Response::Error {
                message: error.to_string(),
            };
        }
        // The engine handles degenerate geometry locally and is not
        // expected to panic; if it ever does, answer with an opaque error
        // instead of tearing down the host.
        match catch_unwind(AssertUnwindSafe(|| run(&request))) {
            Ok(polygons) => Response::Ok { polygons },
            Err(_) => {
                warn!("simplify request panicked");
                Response::Error {
                    message: "internal error".to_string(),
                }
            }
        }
    }
}

fn run(request: &SimplifyRequest) -> Vec<PolygonWithHoles> {
    let simplifier = Simplifier::new(
        request.max_resolution,
        request.max_deviation,
        request.max_area_deviation,
    );
    simplify_batch(&simplifier, &request.polygons)
}

/// Rejects negative tolerances and out-of-range coordinates before any
/// ring is touched, so a failing batch is never partially processed.
fn validate(request: &SimplifyRequest) -> Result<(), TrimError> {
    for (name, value) in [
        ("max_resolution", request.max_resolution),
        ("max_deviation", request.max_deviation),
        ("max_area_deviation", request.max_area_deviation),
    ] {
        if value < 0 {
            return Err(TrimError::NegativeTolerance { name, value });
        }
    }
    for polygon in &request.polygons {
        for ring in std::iter::once(&polygon.outline).chain(&polygon.holes) {
            for point in ring {
                if point.x < -MAX_COORDINATE
                    || point.x > MAX_COORDINATE
                    || point.y < -MAX_COORDINATE
                    || point.y > MAX_COORDINATE
                {
                    return Err(TrimError::CoordinateOutOfRange {
                        x: point.x,
                        y: point.y,
                    });
                }
            }
        }
    }
    Ok(())
}
