use std::num::NonZeroUsize;
use std::time::Duration;

use julia_sets::{
    CancelFlag, Colour, Complex, EngineConfig, JuliaParameters, JuliaRenderController,
    NeverCancel, RenderError, RenderOutcome, Window,
};
use tempfile::TempDir;

fn config(dir: &TempDir, threads: usize, wait_secs: u64) -> EngineConfig {
    EngineConfig::new(NonZeroUsize::new(threads).unwrap(), wait_secs, dir.path()).unwrap()
}

fn interior_only(width: usize, height: usize) -> JuliaParameters {
    // c = 0 keeps every orbit inside the unit disk bounded, so nothing escapes
    JuliaParameters::new(
        Complex::new(0.0, 0.0),
        20,
        1000.0,
        Window::new(-0.5, 0.5, -0.5, 0.5, width, height).unwrap(),
        vec![Colour::BLUE, Colour::WHITE, Colour::RED],
        Colour::new(10, 20, 30),
    )
    .unwrap()
}

#[test]
fn interior_only_render_is_uniform_interior_colour() {
    let dir = TempDir::new().unwrap();
    let mut controller = JuliaRenderController::from_config(&config(&dir, 3, 30)).unwrap();

    let image = controller
        .render(&interior_only(21, 13), "100", &NeverCancel)
        .unwrap();

    let decoded = image::open(dir.path().join("100.png")).unwrap().to_rgb8();
    assert_eq!(decoded.dimensions(), (21, 13));
    assert!(decoded.pixels().all(|px| px.0 == [10, 20, 30]));
    assert_eq!(image.file_name(), "100.png");
}

#[test]
fn renders_are_identical_across_thread_counts() {
    let single_dir = TempDir::new().unwrap();
    let many_dir = TempDir::new().unwrap();
    let params = JuliaParameters::with_defaults(Complex::new(-0.4, 0.6));

    let single = JuliaRenderController::from_config(&config(&single_dir, 1, 60))
        .unwrap()
        .render(&params, "1", &NeverCancel)
        .unwrap();
    let many = JuliaRenderController::from_config(&config(&many_dir, 8, 60))
        .unwrap()
        .render(&params, "1", &NeverCancel)
        .unwrap();

    assert_eq!(single.bytes(), many.bytes());
}

#[test]
fn second_request_reuses_the_first_image() {
    let dir = TempDir::new().unwrap();
    let mut controller = JuliaRenderController::from_config(&config(&dir, 2, 30)).unwrap();
    let params = interior_only(8, 8);

    let first = controller
        .render_or_reuse(&params, &[] as &[&str], "7", &NeverCancel)
        .unwrap();
    let second = controller
        .render_or_reuse(&params, &["7"], "8", &NeverCancel)
        .unwrap();

    assert!(matches!(first, RenderOutcome::Rendered(_)));
    assert_eq!(second, RenderOutcome::Reused("7.png".to_string()));
    assert!(!dir.path().join("8.png").exists());
    assert_eq!(controller.find_existing(&["8", "7"]).unwrap(), "7.png");
}

#[test]
fn cancelled_render_leaves_no_file() {
    let dir = TempDir::new().unwrap();
    let mut controller = JuliaRenderController::from_config(&config(&dir, 1, 30)).unwrap();
    let cancel = CancelFlag::new();
    cancel.cancel();

    let result = controller.render(&interior_only(64, 64), "3", &cancel);

    assert!(matches!(result, Err(RenderError::Interrupted { .. })));
    assert!(!dir.path().join("3.png").exists());
}

#[test]
fn timeout_reports_dimensions() {
    let dir = TempDir::new().unwrap();
    let filler = julia_sets::MatrixFiller::new(NonZeroUsize::new(1).unwrap(), Duration::ZERO).unwrap();
    let mut controller = JuliaRenderController::new(
        filler,
        julia_sets::ImageFolder::new(dir.path()),
        julia_sets::presenters::file::png::PngFilePresenter::new(),
    );

    let err = controller
        .render(&interior_only(30, 20), "4", &NeverCancel)
        .unwrap_err();

    assert!(matches!(err, RenderError::Timeout { rows: 20, cols: 30, .. }));
    assert!(err.to_string().contains("20x30"));
}
