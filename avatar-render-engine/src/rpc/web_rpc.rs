use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use portfolio_content::records::{CATALOGUE, CategoryFilter};
use portfolio_content::render::{match_count, render_grid};
use portfolio_content::structured_data::structured_data;

use crate::engine::animation::clip_registry::ClipRegistry;
use crate::engine::animation::playback::PlaybackCommand;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// JSON-RPC 2.0 request structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

/// JSON-RPC error structure following specification.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

impl RpcError {
    fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }
}

/// Resource managing bidirectional RPC communication between the embedding
/// page and the viewer. Handles both request-response patterns and
/// notification broadcasting (animation list, playback state, load failure,
/// FPS).
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the page without expecting a response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }
}

/// Plugin establishing the postMessage RPC layer for page-embedded
/// deployment. The page's animation select, play/pause button and project
/// filter all arrive here.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (
                    process_incoming_messages,
                    handle_rpc_messages,
                    send_outgoing_messages,
                )
                    .chain(),
            );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::Arc;
    use std::sync::Mutex;

    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();

            // Validate RPC shape before queuing.
            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    if let Some(window) = window() {
        if let Err(error) =
            window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
        {
            error!("Failed to register message listener: {error:?}");
        }
    }

    // Ownership moves to JS so the callback outlives this system.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

/// Resource wrapping thread-safe message queue for WASM event handling.
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

/// Event representing an incoming RPC message from the embedding page.
#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    diagnostics: Res<DiagnosticsStore>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut playback_commands: EventWriter<PlaybackCommand>,
    registry: Res<ClipRegistry>,
) {
    for event in events.read() {
        match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => {
                if let Some(response) = handle_rpc_request(
                    &request,
                    &diagnostics,
                    &mut playback_commands,
                    &registry,
                ) {
                    rpc_interface.queue_response(response);
                }
            }
            Err(parse_error) => {
                warn!("Unparseable RPC message: {parse_error}");
            }
        }
    }
}

/// Handle an individual RPC request and generate a response based on method.
fn handle_rpc_request(
    request: &RpcRequest,
    diagnostics: &DiagnosticsStore,
    playback_commands: &mut EventWriter<PlaybackCommand>,
    registry: &ClipRegistry,
) -> Option<RpcResponse> {
    // Only requests with IDs get responses (notifications have no ID).
    let id = request.id.clone()?;

    let result = match request.method.as_str() {
        "select_animation" => {
            handle_select_animation(&request.params, playback_commands, registry)
        }
        "toggle_animation" => {
            playback_commands.write(PlaybackCommand::Toggle);
            Ok(serde_json::json!({ "success": true }))
        }
        "pause_animation" => {
            playback_commands.write(PlaybackCommand::Pause);
            Ok(serde_json::json!({ "success": true }))
        }
        "get_fps" => handle_get_fps(diagnostics),
        "filter_projects" => handle_filter_projects(&request.params),
        "get_structured_data" => Ok(structured_data(CATALOGUE)),
        _ => {
            warn!("Unknown RPC method: {}", request.method);
            return Some(create_error_response(
                id,
                -32601,
                "Method not found",
                Some(serde_json::json!({"method": request.method})),
            ));
        }
    };

    match result {
        Ok(result_value) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(result_value),
            error: None,
            id: Some(id),
        }),
        Err(error) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id: Some(id),
        }),
    }
}

/// Dispatch a clip selection. An out-of-range index is reported back but
/// deliberately not treated as an error; the state machine ignores it.
fn handle_select_animation(
    params: &serde_json::Value,
    playback_commands: &mut EventWriter<PlaybackCommand>,
    registry: &ClipRegistry,
) -> Result<serde_json::Value, RpcError> {
    #[derive(serde::Deserialize)]
    struct SelectAnimationParams {
        index: usize,
    }

    let select_params = serde_json::from_value::<SelectAnimationParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'index' parameter"))?;

    playback_commands.write(PlaybackCommand::Select(select_params.index));

    Ok(serde_json::json!({
        "success": true,
        "accepted": select_params.index < registry.clip_count(),
    }))
}

/// Render the project grid for a category filter string from the page's
/// filter select.
fn handle_filter_projects(params: &serde_json::Value) -> Result<serde_json::Value, RpcError> {
    #[derive(serde::Deserialize)]
    struct FilterProjectsParams {
        category: String,
    }

    let filter_params = serde_json::from_value::<FilterProjectsParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'category' parameter"))?;

    let filter = CategoryFilter::from_string(&filter_params.category).ok_or_else(|| {
        RpcError::invalid_params(&format!("Unknown category: {}", filter_params.category))
    })?;

    Ok(serde_json::json!({
        "html": render_grid(CATALOGUE, filter),
        "count": match_count(CATALOGUE, filter),
        "category": filter_params.category,
    }))
}

/// Handle FPS retrieval with diagnostic system integration.
fn handle_get_fps(diagnostics: &DiagnosticsStore) -> Result<serde_json::Value, RpcError> {
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps_diagnostic| fps_diagnostic.smoothed())
        .unwrap_or(0.0) as f32;

    Ok(serde_json::json!({
        "fps": fps
    }))
}

/// Create standardized error response with optional data payload.
fn create_error_response(
    id: serde_json::Value,
    code: i32,
    message: &str,
    data: Option<serde_json::Value>,
) -> RpcResponse {
    RpcResponse {
        jsonrpc: "2.0".to_string(),
        result: None,
        error: Some(RpcError {
            code,
            message: message.to_string(),
            data,
        }),
        id: Some(id),
    }
}

/// Send queued notifications and responses to the embedding page.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }

    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

#[cfg(target_arch = "wasm32")]
fn send_message_to_parent<T: Serialize>(message: &T) {
    let Ok(json) = serde_json::to_string(message) else {
        return;
    };
    let Some(window) = window() else {
        return;
    };
    let target = window.parent().ok().flatten().unwrap_or(window);
    if let Err(error) = target.post_message(&JsValue::from_str(&json), "*") {
        error!("postMessage failed: {error:?}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn send_message_to_parent<T: Serialize>(message: &T) {
    if let Ok(json) = serde_json::to_string(message) {
        debug!("RPC out: {json}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_parse_from_page_messages() {
        let raw = r#"{"jsonrpc":"2.0","method":"select_animation","params":{"index":2},"id":7}"#;
        let request: RpcRequest = serde_json::from_str(raw).expect("valid request");
        assert_eq!(request.method, "select_animation");
        assert_eq!(request.params["index"], 2);
        assert_eq!(request.id, Some(serde_json::json!(7)));
    }

    #[test]
    fn filter_projects_renders_grid_and_count() {
        let result = handle_filter_projects(&serde_json::json!({ "category": "threejs" }))
            .expect("known category");
        assert_eq!(result["count"], 2);
        assert!(result["html"].as_str().unwrap().contains("Virtual Classroom"));
    }

    #[test]
    fn filter_projects_rejects_unknown_categories() {
        let error = handle_filter_projects(&serde_json::json!({ "category": "vr" }))
            .expect_err("unknown category");
        assert_eq!(error.code, -32602);
    }

    #[test]
    fn filter_projects_rejects_missing_params() {
        let error = handle_filter_projects(&serde_json::json!({})).expect_err("missing params");
        assert_eq!(error.code, -32602);
    }
}
