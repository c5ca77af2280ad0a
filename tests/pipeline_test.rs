//! End-to-end pipeline tests against a scripted backend.
//!
//! The mock backend records every invocation so the tests can assert the
//! exact command names and parameter sets crossing the bridge.

use std::future::Future;
use std::path::PathBuf;
use std::sync::Mutex;

use serde_json::Value;

use image_studio::{
    CommandTable, OperationMode, ProcessingBackend, ProcessingDispatcher, Session, StudioError,
    StudioResult, codec,
};

/// 1x1 black pixel PNG, canonical standard base64.
const TINY_PNG_B64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8BQDwAEhQGAhKmMIQAAAABJRU5ErkJggg==";

struct MockBackend {
    reply: Option<String>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl MockBackend {
    fn replying(payload: &str) -> Self {
        Self {
            reply: Some(payload.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            reply: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

impl ProcessingBackend for MockBackend {
    fn invoke(
        &self,
        command: &str,
        args: Value,
    ) -> impl Future<Output = StudioResult<String>> + Send {
        self.calls
            .lock()
            .unwrap()
            .push((command.to_string(), args));
        let reply = self.reply.clone();
        async move { reply.ok_or_else(|| StudioError::backend("scripted failure")) }
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn temp_image(name: &str, bytes: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

fn session_with_image(name: &str, bytes: &[u8]) -> Session {
    let mut session = Session::new();
    session
        .source_mut()
        .select_from_picker(Some(temp_image(name, bytes)));
    session
}

#[tokio::test]
async fn test_all_seven_modes_invoke_contract_commands() {
    init_tracing();

    let expectations: [(OperationMode, &str, &[&str]); 7] = [
        (OperationMode::ImageEnhance, "image_enhance", &["amt"]),
        (
            OperationMode::ImageRestoration,
            "restore_image",
            &["brightness", "contrast"],
        ),
        (
            OperationMode::MorphologicalErosion,
            "morphological_erosion",
            &["k"],
        ),
        (
            OperationMode::MorphologicalDilation,
            "morphological_dilation",
            &["k"],
        ),
        (
            OperationMode::DenoisingGaussian,
            "denoising_image_gausian_blur",
            &["radius"],
        ),
        (
            OperationMode::DenoisingNlm,
            "denoising_image_nlm",
            &["window_size", "h"],
        ),
        (OperationMode::Segmentation, "segment_image", &["threshold"]),
    ];

    let dispatcher = ProcessingDispatcher::new(CommandTable::new());

    for (mode, command, params) in expectations {
        let mut session = session_with_image("image-studio-contract.png", b"pixels");
        session.modes_mut().arm(mode);
        let backend = MockBackend::replying("ok");

        dispatcher.dispatch(&mut session, &backend).await.unwrap();

        let calls = backend.calls();
        assert_eq!(calls.len(), 1, "{} must make exactly one call", mode.id());
        assert_eq!(calls[0].0, command);

        let args = calls[0].1.as_object().unwrap();
        assert!(args.contains_key("image_data_base64"));
        assert_eq!(args.len(), 1 + params.len(), "{} parameter count", command);
        for param in params {
            assert!(args.contains_key(*param), "{} missing {}", command, param);
        }
    }
}

#[tokio::test]
async fn test_erosion_sends_k_and_prefixes_result() {
    init_tracing();

    let bytes = codec::decode(TINY_PNG_B64).unwrap();
    let mut session = session_with_image("image-studio-erosion.png", &bytes);
    session.modes_mut().arm(OperationMode::MorphologicalErosion);
    session.controls_mut().set("k-erosion", "3");

    let backend = MockBackend::replying("RETURNED");
    let dispatcher = ProcessingDispatcher::new(CommandTable::new());
    dispatcher.dispatch(&mut session, &backend).await.unwrap();

    let calls = backend.calls();
    assert_eq!(calls[0].0, "morphological_erosion");
    let args = calls[0].1.as_object().unwrap();
    assert_eq!(args["k"], Value::from(3));
    assert_eq!(args["image_data_base64"], Value::from(TINY_PNG_B64));

    assert_eq!(
        session.display().src(),
        Some("data:image/png;base64,RETURNED")
    );
}

#[tokio::test]
async fn test_unparsable_amount_defaults_to_zero() {
    let mut session = session_with_image("image-studio-amt.png", b"pixels");
    session.modes_mut().arm(OperationMode::ImageEnhance);
    session.controls_mut().set("amt", "abc");

    let backend = MockBackend::replying("ok");
    let dispatcher = ProcessingDispatcher::new(CommandTable::new());
    dispatcher.dispatch(&mut session, &backend).await.unwrap();

    let calls = backend.calls();
    assert_eq!(calls[0].0, "image_enhance");
    assert_eq!(calls[0].1.as_object().unwrap()["amt"], Value::from(0));
}

#[tokio::test]
async fn test_absent_controls_default_to_zero() {
    let mut session = session_with_image("image-studio-defaults.png", b"pixels");
    session.modes_mut().arm(OperationMode::ImageRestoration);
    // No brightness or contrast control exists on the panel.

    let backend = MockBackend::replying("ok");
    let dispatcher = ProcessingDispatcher::new(CommandTable::new());
    dispatcher.dispatch(&mut session, &backend).await.unwrap();

    let args = backend.calls()[0].1.as_object().unwrap().clone();
    assert_eq!(args["brightness"], Value::from(0));
    assert_eq!(args["contrast"], Value::from(0));
}

#[tokio::test]
async fn test_no_source_image_makes_no_backend_call() {
    let mut session = Session::new();
    session.modes_mut().arm(OperationMode::ImageEnhance);

    let backend = MockBackend::replying("ok");
    let dispatcher = ProcessingDispatcher::new(CommandTable::new());
    let result = dispatcher.dispatch(&mut session, &backend).await;

    assert!(matches!(result, Err(StudioError::NoSourceImage)));
    assert!(backend.calls().is_empty());
    assert_eq!(session.display().src(), None);
}

#[tokio::test]
async fn test_no_armed_mode_is_an_explicit_error() {
    let mut session = session_with_image("image-studio-unarmed.png", b"pixels");

    let backend = MockBackend::replying("ok");
    let dispatcher = ProcessingDispatcher::new(CommandTable::new());
    let result = dispatcher.dispatch(&mut session, &backend).await;

    assert!(matches!(result, Err(StudioError::NoModeArmed)));
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_unreadable_source_fails_before_backend_call() {
    let mut session = Session::new();
    let missing = std::env::temp_dir().join("image-studio-does-not-exist.png");
    let _ = std::fs::remove_file(&missing);
    session.source_mut().select_from_picker(Some(missing));
    session.modes_mut().arm(OperationMode::Segmentation);

    let backend = MockBackend::replying("ok");
    let dispatcher = ProcessingDispatcher::new(CommandTable::new());
    let result = dispatcher.dispatch(&mut session, &backend).await;

    assert!(matches!(result, Err(StudioError::Encoding(_))));
    assert!(backend.calls().is_empty());
    assert_eq!(session.display().src(), None);
}

#[tokio::test]
async fn test_backend_failure_leaves_display_untouched() {
    let mut session = session_with_image("image-studio-failure.png", b"pixels");
    session.modes_mut().arm(OperationMode::DenoisingGaussian);

    // A prior result is on the surface.
    let dispatcher = ProcessingDispatcher::new(CommandTable::new());
    let ok_backend = MockBackend::replying("previous-result");
    dispatcher.dispatch(&mut session, &ok_backend).await.unwrap();

    let failing = MockBackend::failing();
    let result = dispatcher.dispatch(&mut session, &failing).await;

    assert!(matches!(result, Err(StudioError::Backend(_))));
    assert_eq!(session.display().src(), Some("previous-result"));
}

#[tokio::test]
async fn test_overlapping_trigger_is_rejected() {
    let mut session = session_with_image("image-studio-busy.png", b"pixels");
    session.modes_mut().arm(OperationMode::ImageEnhance);

    let in_flight = session.begin_dispatch().unwrap();
    let backend = MockBackend::replying("ok");
    let dispatcher = ProcessingDispatcher::new(CommandTable::new());
    let result = dispatcher.dispatch(&mut session, &backend).await;

    assert!(matches!(result, Err(StudioError::Busy)));
    assert!(backend.calls().is_empty());

    // Once the in-flight dispatch completes, a new trigger goes through.
    drop(in_flight);
    dispatcher.dispatch(&mut session, &backend).await.unwrap();
    assert_eq!(backend.calls().len(), 1);
}

#[tokio::test]
async fn test_payload_is_reencoded_every_dispatch() {
    let path = temp_image("image-studio-recompute.png", b"first bytes");
    let mut session = Session::new();
    session.source_mut().select_from_picker(Some(path.clone()));
    session.modes_mut().arm(OperationMode::ImageEnhance);

    let backend = MockBackend::replying("ok");
    let dispatcher = ProcessingDispatcher::new(CommandTable::new());
    dispatcher.dispatch(&mut session, &backend).await.unwrap();

    std::fs::write(&path, b"second bytes").unwrap();
    dispatcher.dispatch(&mut session, &backend).await.unwrap();

    let calls = backend.calls();
    let first = calls[0].1.as_object().unwrap()["image_data_base64"].clone();
    let second = calls[1].1.as_object().unwrap()["image_data_base64"].clone();
    assert_ne!(first, second);
    assert_eq!(
        codec::decode(second.as_str().unwrap()).unwrap(),
        b"second bytes"
    );
}

#[tokio::test]
async fn test_ready_to_display_result_used_as_is() {
    let mut session = session_with_image("image-studio-asis.png", b"pixels");
    session.modes_mut().arm(OperationMode::ImageEnhance);

    let backend = MockBackend::replying("data:image/png;base64,ALREADY");
    let dispatcher = ProcessingDispatcher::new(CommandTable::new());
    dispatcher.dispatch(&mut session, &backend).await.unwrap();

    assert_eq!(
        session.display().src(),
        Some("data:image/png;base64,ALREADY")
    );
}
