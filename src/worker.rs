//! The dedicated routing thread and its request/response loop.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use log::{debug, error};

use merlion_core::loading::{TransitDataConfig, create_transit_network};
use merlion_core::model::{ExcludedModes, TransitNetwork};
use merlion_core::routing::plan_routes;

use crate::protocol::{CalculatePayload, CalculationResult, Request, Response};

/// Handle to the routing thread. The thread loads the network once at
/// startup and then serves requests in FIFO order, exactly one response
/// per request. Dropping the handle closes the request channel, which
/// stops the thread.
pub struct RouterWorker {
    requests: Option<Sender<Request>>,
    responses: Receiver<Response>,
    thread: Option<JoinHandle<()>>,
}

impl RouterWorker {
    /// Spawns the routing thread and starts loading the data files. If
    /// loading fails, the worker stays up and answers every request with
    /// a `GraphNotLoaded` result.
    pub fn spawn(config: TransitDataConfig) -> Self {
        Self::start(move || match create_transit_network(&config) {
            Ok(network) => Some(network),
            Err(e) => {
                error!("Failed to load transit data: {e}");
                None
            }
        })
    }

    /// Spawns the routing thread over an already-built network.
    pub fn spawn_with_network(network: TransitNetwork) -> Self {
        Self::start(move || Some(network))
    }

    fn start(load: impl FnOnce() -> Option<TransitNetwork> + Send + 'static) -> Self {
        let (request_tx, request_rx) = mpsc::channel::<Request>();
        let (response_tx, response_rx) = mpsc::channel::<Response>();
        let thread = thread::spawn(move || {
            let network = load();
            serve(network.as_ref(), &request_rx, &response_tx);
        });
        Self {
            requests: Some(request_tx),
            responses: response_rx,
            thread: Some(thread),
        }
    }

    /// Queues a request. Returns false when the worker has stopped.
    pub fn submit(&self, request: Request) -> bool {
        self.requests
            .as_ref()
            .is_some_and(|tx| tx.send(request).is_ok())
    }

    /// Blocks for the next response. Responses come back in submission
    /// order.
    pub fn next_response(&self) -> Option<Response> {
        self.responses.recv().ok()
    }

    /// Submits one request and waits for its response.
    pub fn calculate(&self, payload: CalculatePayload) -> Response {
        if !self.submit(Request::Calculate { payload }) {
            return Response::Error {
                error: "Router worker is not running".to_string(),
            };
        }
        self.next_response().unwrap_or_else(|| Response::Error {
            error: "Router worker stopped before responding".to_string(),
        })
    }

    /// JSON-in, JSON-out framing for hosts that speak the message port
    /// directly.
    pub fn process_message(&self, message: &str) -> String {
        let response = match serde_json::from_str::<Request>(message) {
            Ok(Request::Calculate { payload }) => self.calculate(payload),
            Err(e) => Response::Error {
                error: format!("Malformed request: {e}"),
            },
        };
        serde_json::to_string(&response)
            .unwrap_or_else(|e| format!(r#"{{"type":"ERROR","error":"{e}"}}"#))
    }
}

impl Drop for RouterWorker {
    fn drop(&mut self) {
        // Closing the request channel ends the serve loop
        self.requests.take();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

fn serve(
    network: Option<&TransitNetwork>,
    requests: &Receiver<Request>,
    responses: &Sender<Response>,
) {
    for request in requests {
        let response = handle_request(network, request);
        if responses.send(response).is_err() {
            // Host went away; nothing left to answer
            break;
        }
    }
}

fn handle_request(network: Option<&TransitNetwork>, request: Request) -> Response {
    match request {
        Request::Calculate { payload } => {
            let Some(network) = network else {
                return Response::routing_failure("GraphNotLoaded");
            };
            debug!(
                "Routing {:?} -> {:?} (sort {:?})",
                payload.start, payload.end, payload.sort_by
            );
            let excluded: ExcludedModes = payload.excluded_modes.iter().copied().collect();
            match plan_routes(
                network,
                &payload.start,
                &payload.end,
                excluded,
                payload.sort_by,
            ) {
                Ok(routes) => Response::Result {
                    result: CalculationResult::Routes { routes },
                },
                Err(e) => match e.kind() {
                    Some(kind) => Response::routing_failure(kind),
                    None => Response::Error {
                        error: e.to_string(),
                    },
                },
            }
        }
    }
}
