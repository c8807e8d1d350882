//! End-to-end tests of the launch pipeline against mocked ports.

use async_trait::async_trait;
use gameframe_core::{
    BuiltinProfiles, CommandOutput, CommandRunner, DIRECTIVE_KEYS, Environment, HardwareProber,
    IsolationInvocation, IsolationPort, JoinStrategy, LaunchError, LaunchEvent,
    LaunchEventEmitter, LaunchOptions, LaunchOutcome, LaunchService, ProbeCommand, ProbeError,
    ProfileResolver,
};
use mockall::mock;
use mockall::predicate::always;
use std::path::Path;
use std::sync::{Arc, Mutex};

mock! {
    pub Runner {}

    #[async_trait]
    impl CommandRunner for Runner {
        async fn run(&self, command: &ProbeCommand) -> Result<CommandOutput, ProbeError>;
    }
}

mock! {
    pub Isolation {}

    #[async_trait]
    impl IsolationPort for Isolation {
        fn is_available(&self, script: &Path) -> bool;
        async fn launch(&self, invocation: &IsolationInvocation) -> Result<(), LaunchError>;
    }
}

#[derive(Default)]
struct RecordingEmitter {
    events: Mutex<Vec<LaunchEvent>>,
}

impl LaunchEventEmitter for RecordingEmitter {
    fn emit(&self, event: LaunchEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Runner that answers like a machine with an NVIDIA card and working drivers.
fn nvidia_runner() -> MockRunner {
    let mut runner = MockRunner::new();
    runner.expect_run().returning(|command| match command.program.as_str() {
        "lspci" => Ok(CommandOutput::new(
            "01:00.0 VGA compatible controller: NVIDIA Corporation AD104 [GeForce RTX 4070]\n",
        )),
        "vulkaninfo" => Ok(CommandOutput::new("Vulkan Instance Version: 1.3.280\n")),
        "glxinfo" => Ok(CommandOutput::new(
            "OpenGL version string: 4.6.0 NVIDIA 550.54\n",
        )),
        _ => unreachable!("unexpected probe {command}"),
    });
    runner
}

fn failing_runner() -> MockRunner {
    let mut runner = MockRunner::new();
    runner.expect_run().returning(|command| {
        Err(ProbeError::Spawn {
            command: command.to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        })
    });
    runner
}

fn build(runner: MockRunner, isolation: MockIsolation, options: LaunchOptions) -> LaunchService {
    let probe = Arc::new(HardwareProber::new(Arc::new(runner)));
    let resolver = ProfileResolver::from_source(&BuiltinProfiles).unwrap();
    LaunchService::new(probe, resolver, Arc::new(isolation), options)
}

fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

#[tokio::test]
async fn known_profile_flows_into_child_environment() {
    let captured = Arc::new(Mutex::new(None));
    let sink = captured.clone();

    let mut isolation = MockIsolation::new();
    isolation.expect_is_available().with(always()).return_const(true);
    isolation.expect_launch().times(1).returning(move |invocation| {
        *sink.lock().unwrap() = Some(invocation.clone());
        Ok(())
    });

    let service = build(nvidia_runner(), isolation, LaunchOptions::default());
    let inherited = Environment::from_vars([("PATH", "/usr/bin"), ("HOME", "/home/player")]);

    let outcome = service
        .run(args(&["/home/player/games/supertuxkart.exe"]), &inherited)
        .await
        .unwrap();
    assert_eq!(outcome, LaunchOutcome::Completed);

    let invocation = captured.lock().unwrap().take().unwrap();
    let env = &invocation.environment;
    assert_eq!(env.len(), inherited.len() + DIRECTIVE_KEYS.len());
    assert_eq!(env.get("GAMEFRAME_GPU"), Some("nvidia"));
    assert_eq!(env.get("GAMEFRAME_VULKAN"), Some("true"));
    assert_eq!(env.get("GAMEFRAME_OPENGL"), Some("4.6.0 NVIDIA 550.54"));
    assert_eq!(env.get("GAMEFRAME_FPS_LIMIT"), Some("60"));
    assert_eq!(env.get("GAMEFRAME_VSYNC"), Some("1"));
    assert_eq!(env.get("GAMEFRAME_VKBASALT"), Some("1"));
    assert_eq!(env.get("GAMEFRAME_MANGOHUD"), Some("1"));
    assert_eq!(env.get("PATH"), Some("/usr/bin"));
}

#[tokio::test]
async fn unknown_app_exports_empty_profile_values() {
    let captured = Arc::new(Mutex::new(None));
    let sink = captured.clone();

    let mut isolation = MockIsolation::new();
    isolation.expect_is_available().return_const(true);
    isolation.expect_launch().returning(move |invocation| {
        *sink.lock().unwrap() = Some(invocation.clone());
        Ok(())
    });

    let service = build(failing_runner(), isolation, LaunchOptions::default());
    service
        .run(args(&["unknownapp.exe"]), &Environment::new())
        .await
        .unwrap();

    let invocation = captured.lock().unwrap().take().unwrap();
    let env = &invocation.environment;
    assert_eq!(env.len(), 7);
    assert_eq!(env.get("GAMEFRAME_GPU"), Some("unknown"));
    assert_eq!(env.get("GAMEFRAME_VULKAN"), Some("false"));
    assert_eq!(env.get("GAMEFRAME_OPENGL"), Some("unknown"));
    for key in [
        "GAMEFRAME_FPS_LIMIT",
        "GAMEFRAME_VSYNC",
        "GAMEFRAME_VKBASALT",
        "GAMEFRAME_MANGOHUD",
    ] {
        assert_eq!(env.get(key), Some(""), "{key}");
    }
}

#[tokio::test]
async fn usage_error_invokes_no_subprocess() {
    let mut runner = MockRunner::new();
    runner.expect_run().never();
    let mut isolation = MockIsolation::new();
    isolation.expect_is_available().never();
    isolation.expect_launch().never();

    let service = build(runner, isolation, LaunchOptions::default());
    let result = service.run(Vec::new(), &Environment::new()).await;

    assert!(matches!(result, Err(LaunchError::Usage)));
}

#[tokio::test]
async fn missing_isolation_script_never_launches() {
    let mut isolation = MockIsolation::new();
    isolation
        .expect_is_available()
        .withf(|script| script == Path::new("/nonexistent/gameframe_isolate.sh"))
        .return_const(false);
    isolation.expect_launch().never();

    let options = LaunchOptions::default().isolation_script("/nonexistent/gameframe_isolate.sh");
    let service = build(nvidia_runner(), isolation, options);
    let err = service
        .run(args(&["supertuxkart.exe"]), &Environment::new())
        .await
        .unwrap_err();

    assert!(matches!(err, LaunchError::MissingDependency { .. }));
    assert_eq!(
        err.to_string(),
        "Isolation script not found at /nonexistent/gameframe_isolate.sh"
    );
}

#[tokio::test]
async fn child_failure_is_surfaced() {
    let mut isolation = MockIsolation::new();
    isolation.expect_is_available().return_const(true);
    isolation.expect_launch().returning(|_| {
        Err(LaunchError::ChildFailed {
            status: "exit status: 3".to_string(),
        })
    });

    let service = build(nvidia_runner(), isolation, LaunchOptions::default());
    let err = service
        .run(args(&["supertuxkart.exe"]), &Environment::new())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("exit status: 3"));
}

#[tokio::test]
async fn spaced_arguments_are_quoted_at_the_isolation_boundary() {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let sink = captured.clone();

    let mut isolation = MockIsolation::new();
    isolation.expect_is_available().return_const(true);
    isolation.expect_launch().times(2).returning(move |invocation| {
        sink.lock().unwrap().push(invocation.command_line.clone());
        Ok(())
    });
    let isolation = Arc::new(isolation);

    let resolver = ProfileResolver::from_source(&BuiltinProfiles).unwrap();
    for join in [JoinStrategy::Quoted, JoinStrategy::Raw] {
        let probe = Arc::new(HardwareProber::new(Arc::new(failing_runner())));
        let service = LaunchService::new(
            probe,
            resolver.clone(),
            isolation.clone(),
            LaunchOptions::default().join(join),
        );
        service
            .run(args(&["wine", "C:\\Games\\My Game.exe"]), &Environment::new())
            .await
            .unwrap();
    }

    let lines = captured.lock().unwrap();
    assert_eq!(lines[0], "wine 'C:\\Games\\My Game.exe'");
    // The naive join cannot be told apart from ["wine", "C:\Games\My", "Game.exe"].
    assert_eq!(lines[1], "wine C:\\Games\\My Game.exe");
}

#[tokio::test]
async fn events_are_emitted_in_pipeline_order() {
    let mut isolation = MockIsolation::new();
    isolation.expect_is_available().return_const(true);
    isolation.expect_launch().never();

    let emitter = Arc::new(RecordingEmitter::default());
    let service = build(
        nvidia_runner(),
        isolation,
        LaunchOptions::default().dry_run(true),
    )
    .with_emitter(emitter.clone());

    let outcome = service
        .run(args(&["supertuxkart.exe"]), &Environment::new())
        .await
        .unwrap();
    assert_eq!(outcome, LaunchOutcome::DryRun);

    let events = emitter.events.lock().unwrap();
    assert_eq!(events.len(), 3);
    assert!(matches!(events[0], LaunchEvent::HardwareDetected(_)));
    assert!(matches!(
        &events[1],
        LaunchEvent::ProfileResolved { app, found: true } if app == "supertuxkart.exe"
    ));
    match &events[2] {
        LaunchEvent::DryRun { directives, invocation } => {
            assert_eq!(directives.len(), 7);
            assert_eq!(invocation.command_line, "supertuxkart.exe");
        }
        other => panic!("expected DryRun, got {other:?}"),
    }
}

#[test]
fn launch_runs_to_completion_without_an_async_test_harness() {
    let mut isolation = MockIsolation::new();
    isolation.expect_is_available().return_const(true);
    isolation
        .expect_launch()
        .times(1)
        .withf(|invocation| invocation.environment.get("GAMEFRAME_VSYNC") == Some("1"))
        .returning(|_| Ok(()));

    let service = build(nvidia_runner(), isolation, LaunchOptions::default());
    let outcome = tokio_test::block_on(
        service.run(args(&["supertuxkart.exe", "--windowed"]), &Environment::new()),
    )
    .unwrap();

    assert_eq!(outcome, LaunchOutcome::Completed);
}
