use super::mocks::{cmd, quad_list, MockDevice, MockGui, MockInput, MockLoader};
use crate::config::OverlayConfig;
use crate::foundation::time::FrameTime;
use crate::frame::BridgeError;
use crate::gui::{DrawData, GuiInput, TextureId};
use crate::native::BackendLoader;
use crate::overlay::{Overlay, OverlayState};

fn overlay(gui: MockGui, loader: MockLoader) -> Overlay<MockGui, MockLoader> {
    crate::foundation::logging::try_init_for_tests();
    Overlay::new(OverlayConfig::default(), gui, loader)
}

fn one_quad() -> DrawData {
    DrawData {
        cmd_lists: vec![quad_list(0, vec![cmd(6, 0, [0.0, 0.0, 50.0, 50.0], TextureId::NULL)])],
        display_size: [1280.0, 720.0],
    }
}

#[test]
fn test_draws_last() {
    let overlay = overlay(MockGui::default(), MockLoader::default());
    assert_eq!(overlay.draw_order(), i32::MAX);
    assert_eq!(overlay.state(), OverlayState::Created);
}

#[test]
fn test_setup_deferred_to_first_draw() {
    let mut device = MockDevice::default();
    let mut host = MockInput::default();
    let mut overlay = overlay(MockGui::with_draw_data(one_quad()), MockLoader::default());

    overlay.initialize();
    assert_eq!(overlay.state(), OverlayState::PendingInit);
    assert!(overlay.bridge().is_none());
    assert!(device.textures.is_empty());

    // Not running yet: no frame is opened
    assert!(matches!(overlay.pre_draw(FrameTime::default(), &mut host, &device), Ok(None)));

    let mut ui_calls = 0;
    let drawn = overlay.draw(&mut device, |_| ui_calls += 1);
    assert!(matches!(drawn, Ok(0)));
    assert_eq!(ui_calls, 0);
    assert_eq!(overlay.state(), OverlayState::Running);
    assert_eq!(device.textures.len(), 1);
    assert!(device.draws.is_empty());
}

#[test]
fn test_running_frame_builds_ui_and_draws() {
    let mut device = MockDevice::default();
    let mut host = MockInput::default();
    let mut overlay = overlay(MockGui::with_draw_data(one_quad()), MockLoader::default());
    overlay.initialize();
    assert!(overlay.draw(&mut device, |_| {}).is_ok());

    let capture = overlay.pre_draw(FrameTime::new(0.02, 1.0), &mut host, &device);
    assert!(matches!(capture, Ok(Some(_))));

    let drawn = overlay.draw(&mut device, |gui| gui.add_input_character('z'));
    assert!(matches!(drawn, Ok(1)));
    assert_eq!(device.draws.len(), 1);

    let gui = overlay.bridge().map(|bridge| bridge.gui());
    assert_eq!(gui.map(MockGui::characters), Some(vec!['z']));
    assert_eq!(gui.map(|gui| gui.frames_rendered), Some(1));
}

#[test]
fn test_load_failure_disables_overlay() {
    let mut device = MockDevice::default();
    let mut host = MockInput::default();
    let loader = MockLoader {
        fail: true,
        ..MockLoader::default()
    };
    let mut overlay = overlay(MockGui::with_draw_data(one_quad()), loader);

    overlay.initialize();
    overlay.initialize();

    assert_eq!(overlay.state(), OverlayState::Disabled);
    assert_eq!(overlay.loader().load_calls, 1);
    assert!(matches!(overlay.pre_draw(FrameTime::default(), &mut host, &device), Ok(None)));
    assert!(matches!(overlay.draw(&mut device, |_| {}), Ok(0)));
    assert!(!overlay.handle_text_input('a'));
    assert!(overlay.bridge().is_none());
    assert!(device.textures.is_empty());
    assert_eq!(host.capture_calls, 0);
}

#[test]
fn test_setup_failure_disables_overlay() {
    let mut device = MockDevice::default();
    device.fail_texture_creation = true;
    let mut overlay = overlay(MockGui::default(), MockLoader::default());
    overlay.initialize();

    let result = overlay.draw(&mut device, |_| {});

    assert!(matches!(result, Err(BridgeError::Device(_))));
    assert_eq!(overlay.state(), OverlayState::Disabled);
    assert!(matches!(overlay.draw(&mut device, |_| {}), Ok(0)));
}

#[test]
fn test_text_input_forwarded_while_running() {
    let mut device = MockDevice::default();
    let mut overlay = overlay(MockGui::default(), MockLoader::default());
    overlay.initialize();
    assert!(!overlay.handle_text_input('q'));

    assert!(overlay.draw(&mut device, |_| {}).is_ok());

    assert!(overlay.handle_text_input('q'));
    assert!(!overlay.handle_text_input('\t'));
}

#[test]
fn test_dispose_unloads_backend_once() {
    let mut device = MockDevice::default();
    let mut overlay = overlay(MockGui::default(), MockLoader::default());
    overlay.initialize();
    assert!(overlay.draw(&mut device, |_| {}).is_ok());

    overlay.dispose(&mut device);
    overlay.dispose(&mut device);

    assert_eq!(overlay.state(), OverlayState::ShutDown);
    assert_eq!(overlay.loader().unload_calls, 1);
    assert!(!overlay.loader().is_loaded());
    assert!(device.textures.is_empty());
}
