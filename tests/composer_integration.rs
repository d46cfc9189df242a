//! Integration tests for detection-to-composition wiring
//!
//! These tests inject the probe and runner capabilities so they run on
//! hosts without any image processor installed. The runner stands in for
//! the external tool: it writes the destination file the way a successful
//! pipeline would, which lets the tests verify the single-write contract.

use bgcompose::{
    detect_image_processor, CommandRunner, ComposeError, ComposerConfig, ImageComposer,
    ImageProcessor, Invocation, Result,
};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Runner that simulates a successful external pipeline by writing the
/// destination file (the last argument of every recipe)
#[derive(Clone, Default)]
struct PipelineSimulator {
    invocations: Arc<Mutex<Vec<Invocation>>>,
}

impl PipelineSimulator {
    fn invocation_count(&self) -> usize {
        self.invocations.lock().unwrap().len()
    }

    fn programs(&self) -> Vec<String> {
        self.invocations
            .lock()
            .unwrap()
            .iter()
            .map(|invocation| invocation.program.clone())
            .collect()
    }
}

impl CommandRunner for PipelineSimulator {
    fn run(&self, invocation: &Invocation) -> Result<()> {
        let destination = invocation
            .args
            .last()
            .map(PathBuf::from)
            .expect("composition recipes always end with the destination");
        std::fs::write(destination, b"composed")?;

        self.invocations.lock().unwrap().push(invocation.clone());
        Ok(())
    }
}

fn composer_for(
    processor: ImageProcessor,
    installed_binary: &'static str,
    runner: PipelineSimulator,
) -> ImageComposer {
    ImageComposer::with_capabilities(
        ComposerConfig::new(processor),
        Box::new(move |name: &str| name == installed_binary),
        Box::new(runner),
    )
}

#[test]
fn vips_composition_writes_destination_exactly_once() {
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("no-bg.png");

    let runner = PipelineSimulator::default();
    let composer = composer_for(ImageProcessor::Vips, "vips", runner.clone());

    composer
        .compose("color.jpg", "alpha.png", &destination)
        .unwrap();

    assert!(destination.exists());
    assert_eq!(runner.invocation_count(), 1);
    assert_eq!(runner.programs(), vec!["vips".to_string()]);
}

#[test]
fn magick_composition_writes_destination_exactly_once() {
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("no-bg.png");

    let runner = PipelineSimulator::default();
    let composer = composer_for(ImageProcessor::Magick, "convert", runner.clone());

    composer
        .compose("color.jpg", "alpha.png", &destination)
        .unwrap();

    assert!(destination.exists());
    assert_eq!(runner.invocation_count(), 1);
    assert_eq!(runner.programs(), vec!["convert".to_string()]);
}

#[test]
fn detected_processor_feeds_straight_into_composition() {
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("no-bg.png");

    // A host with only libvips installed.
    let probe = |name: &str| name == "vips";
    let detected = detect_image_processor(&probe);
    assert_eq!(detected, Some(ImageProcessor::Vips));

    let runner = PipelineSimulator::default();
    let composer = ImageComposer::with_capabilities(
        ComposerConfig {
            image_processor: detected,
        },
        Box::new(probe),
        Box::new(runner.clone()),
    );

    composer
        .compose("color.jpg", "alpha.png", &destination)
        .unwrap();

    assert!(destination.exists());
    assert_eq!(runner.programs(), vec!["vips".to_string()]);
}

#[test]
fn unconfigured_host_never_touches_destination() {
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("no-bg.png");

    // Detection on a bare host leaves the processor unset.
    let config = ComposerConfig {
        image_processor: detect_image_processor(&|_: &str| false),
    };
    let runner = PipelineSimulator::default();
    let composer =
        ImageComposer::with_capabilities(config, Box::new(|_: &str| false), Box::new(runner.clone()));

    let err = composer
        .compose("color.jpg", "alpha.png", &destination)
        .unwrap_err();

    assert!(matches!(err, ComposeError::NoProcessorConfigured));
    assert!(err.to_string().contains("configure an image processor"));
    assert!(!destination.exists());
    assert_eq!(runner.invocation_count(), 0);
}

#[test]
fn unrecognized_configuration_is_reported_with_its_value() {
    let runner = PipelineSimulator::default();
    let composer = ImageComposer::with_capabilities(
        ComposerConfig::new(ImageProcessor::from_configured_value("foo")),
        Box::new(|_: &str| false),
        Box::new(runner.clone()),
    );

    let err = composer
        .compose("color.jpg", "alpha.png", Path::new("no-bg.png"))
        .unwrap_err();

    assert!(err.to_string().contains("unsupported image processor: foo"));
    assert_eq!(runner.invocation_count(), 0);
}

#[test]
fn pipeline_failures_propagate_to_the_caller() {
    struct BrokenPipeline;

    impl CommandRunner for BrokenPipeline {
        fn run(&self, _invocation: &Invocation) -> Result<()> {
            Err(ComposeError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "vips: command not found",
            )))
        }
    }

    let composer = ImageComposer::with_capabilities(
        ComposerConfig::new(ImageProcessor::Vips),
        Box::new(|_: &str| false),
        Box::new(BrokenPipeline),
    );

    let err = composer
        .compose("color.jpg", "alpha.png", Path::new("no-bg.png"))
        .unwrap_err();

    match err {
        ComposeError::Io(inner) => assert_eq!(inner.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected Io error, got {other:?}"),
    }
}
