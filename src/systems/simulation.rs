//! Simulation state
//!
//! Owns the active camera, the scene and the view settings, and advances
//! them one frame at a time:
//! - Input snapshot → camera movement and zoom
//! - Actions → draw toggles, camera switching, object selection
//! - Camera + scene → draw calls on a canvas

use wire4d_core::{Scene, SHAPE_CATALOG};
use wire4d_input::InputSnapshot;
use wire4d_math::{Vec3, Vec4};
use wire4d_render::{
    Camera, CameraBody, Canvas, DrawFlags, OrthographicCamera, Perspective4DCamera,
    PerspectiveCamera, ViewSettings,
};

use crate::config::{AppConfig, CameraConfig, CameraKind, InputConfig, RenderingConfig};
use crate::input::InputAction;

/// The camera currently looking at the scene
#[derive(Clone, Debug)]
pub enum ActiveCamera {
    Orthographic(OrthographicCamera),
    Perspective(PerspectiveCamera),
    Perspective4D(Perspective4DCamera),
}

impl ActiveCamera {
    /// Camera of the given kind at the configured starting pose
    pub fn from_config(kind: CameraKind, camera: &CameraConfig, input: &InputConfig) -> Self {
        let body = CameraBody::new(Vec3::from(camera.start_position), Vec3::from(camera.start_rotation))
            .with_move_speed(input.move_speed)
            .with_rot_speed(input.rot_speed);
        match kind {
            CameraKind::Orthographic => ActiveCamera::Orthographic(OrthographicCamera::from_body(body)),
            CameraKind::Perspective => ActiveCamera::Perspective(PerspectiveCamera::from_body(body)),
            CameraKind::Perspective4d => {
                ActiveCamera::Perspective4D(Perspective4DCamera::from_body(lift_body(body, camera)))
            }
        }
    }

    pub fn kind(&self) -> CameraKind {
        match self {
            ActiveCamera::Orthographic(_) => CameraKind::Orthographic,
            ActiveCamera::Perspective(_) => CameraKind::Perspective,
            ActiveCamera::Perspective4D(_) => CameraKind::Perspective4d,
        }
    }

    /// Switch to the next camera, keeping the pose
    ///
    /// Perspective → Orthographic → Perspective4D → Perspective. Entering 4D
    /// places the camera at the configured u with pitch on angle 0 and yaw on
    /// angle 2; leaving it drops u and the two u-plane angles.
    pub fn cycle(self, config: &CameraConfig) -> Self {
        match self {
            ActiveCamera::Perspective(cam) => {
                ActiveCamera::Orthographic(OrthographicCamera::from_body(cam.into_body()))
            }
            ActiveCamera::Orthographic(cam) => {
                ActiveCamera::Perspective4D(Perspective4DCamera::from_body(lift_body(cam.into_body(), config)))
            }
            ActiveCamera::Perspective4D(cam) => {
                ActiveCamera::Perspective(PerspectiveCamera::from_body(flatten_body(cam.into_body())))
            }
        }
    }

    /// Apply one frame of input
    pub fn update(&mut self, input: &InputSnapshot) {
        match self {
            ActiveCamera::Orthographic(cam) => cam.update(input),
            ActiveCamera::Perspective(cam) => cam.update(input),
            ActiveCamera::Perspective4D(cam) => cam.update(input),
        }
    }

    /// Draw gizmos and the scene in the camera's dimension
    pub fn render(&self, scene: &Scene, view: &ViewSettings, canvas: &mut impl Canvas) {
        match self {
            ActiveCamera::Orthographic(cam) => cam.render(scene.spatial_objects(), view, canvas),
            ActiveCamera::Perspective(cam) => cam.render(scene.spatial_objects(), view, canvas),
            ActiveCamera::Perspective4D(cam) => cam.render(scene.hyper_objects(), view, canvas),
        }
    }

    /// Position with u = 0 for the 3D cameras
    pub fn position(&self) -> Vec4 {
        match self {
            ActiveCamera::Orthographic(cam) => cam.position().extend(0.0),
            ActiveCamera::Perspective(cam) => cam.position().extend(0.0),
            ActiveCamera::Perspective4D(cam) => cam.position(),
        }
    }

    /// Rotation angles, the fourth is 0 for the 3D cameras
    pub fn rotation(&self) -> Vec4 {
        match self {
            ActiveCamera::Orthographic(cam) => cam.rotation().extend(0.0),
            ActiveCamera::Perspective(cam) => cam.rotation().extend(0.0),
            ActiveCamera::Perspective4D(cam) => cam.rotation(),
        }
    }
}

/// 3D pose (pitch, yaw, roll) to 4D angles; roll has no 4D counterpart
fn lift_body(body: CameraBody<3>, config: &CameraConfig) -> CameraBody<4> {
    let r = body.rotation;
    CameraBody::new(
        body.position.extend(config.start_u),
        Vec4::new([r[0], 0.0, r[1], config.start_u_rotation]),
    )
    .with_move_speed(body.move_speed)
    .with_rot_speed(body.rot_speed)
}

fn flatten_body(body: CameraBody<4>) -> CameraBody<3> {
    let r = body.rotation;
    CameraBody::new(body.position.xyz(), Vec3::new([r[0], r[2], 0.0]))
        .with_move_speed(body.move_speed)
        .with_rot_speed(body.rot_speed)
}

fn draw_flags(config: &RenderingConfig) -> DrawFlags {
    let mut flags = DrawFlags::empty();
    flags.set(DrawFlags::POINTS, config.draw_points);
    flags.set(DrawFlags::LINES, config.draw_lines);
    flags.set(DrawFlags::POLYGONS, config.draw_polygons);
    flags.set(DrawFlags::CROP, config.crop);
    flags
}

/// Camera, scene and view settings advanced once per frame
pub struct SimulationState {
    camera: ActiveCamera,
    scene: Scene,
    view: ViewSettings,
    camera_config: CameraConfig,
    input_config: InputConfig,
    /// Index into [`SHAPE_CATALOG`] of the last selected object
    object_index: usize,
    frame: u64,
    log_camera_every: u32,
}

impl SimulationState {
    /// Build the starting state around an already loaded scene
    pub fn new(config: &AppConfig, scene: Scene) -> Self {
        let camera = ActiveCamera::from_config(config.camera.kind, &config.camera, &config.input);
        let object_index = SHAPE_CATALOG
            .iter()
            .position(|name| *name == config.scene.object)
            .unwrap_or(0);

        Self {
            camera,
            scene,
            view: ViewSettings {
                flags: draw_flags(&config.rendering),
                zoom: config.input.zoom,
            },
            camera_config: config.camera.clone(),
            input_config: config.input.clone(),
            object_index,
            frame: 0,
            log_camera_every: config.debug.log_camera_every,
        }
    }

    pub fn camera(&self) -> &ActiveCamera {
        &self.camera
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn view(&self) -> &ViewSettings {
        &self.view
    }

    /// Advance one frame
    pub fn update(&mut self, input: &InputSnapshot) {
        self.view.zoom = input.zoom;
        self.camera.update(input);
        self.frame += 1;

        if self.log_camera_every > 0 && self.frame % self.log_camera_every as u64 == 0 {
            log::debug!(
                "Frame {}: camera at {} rotation {}",
                self.frame,
                self.camera.position(),
                self.camera.rotation()
            );
        }
    }

    /// Draw the current frame
    pub fn render(&self, canvas: &mut impl Canvas) {
        self.camera.render(&self.scene, &self.view, canvas);
    }

    /// Apply a one-shot action
    ///
    /// Returns false for actions that belong to the window (cursor, exit,
    /// fullscreen, rotate mode).
    pub fn apply(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::TogglePoints => self.toggle(DrawFlags::POINTS, "Points"),
            InputAction::ToggleLines => self.toggle(DrawFlags::LINES, "Lines"),
            InputAction::TogglePolygons => self.toggle(DrawFlags::POLYGONS, "Polygons"),
            InputAction::ToggleCrop => self.toggle(DrawFlags::CROP, "Crop"),
            InputAction::CycleCamera => self.cycle_camera(),
            InputAction::NextObject => self.next_object(),
            InputAction::ResetCamera => self.reset_camera(),
            InputAction::ToggleCursor
            | InputAction::Exit
            | InputAction::ToggleRotate
            | InputAction::ToggleFullscreen => return false,
        }
        true
    }

    fn toggle(&mut self, flag: DrawFlags, name: &str) {
        self.view.flags.toggle(flag);
        log::info!(
            "{}: {}",
            name,
            if self.view.flags.contains(flag) { "ON" } else { "OFF" }
        );
    }

    /// Switch to the next camera, keeping the pose
    pub fn cycle_camera(&mut self) {
        let camera = std::mem::replace(
            &mut self.camera,
            ActiveCamera::Perspective(PerspectiveCamera::new(Vec3::zero(), Vec3::zero())),
        );
        self.camera = camera.cycle(&self.camera_config);
        log::info!("Switched to {:?} camera at {}", self.camera.kind(), self.camera.position());
    }

    /// Put the current camera back at its starting pose
    pub fn reset_camera(&mut self) {
        self.camera = ActiveCamera::from_config(self.camera.kind(), &self.camera_config, &self.input_config);
        log::info!("Camera reset to starting position");
    }

    /// Replace the scene with the next object selector entry
    pub fn next_object(&mut self) {
        self.object_index = (self.object_index + 1) % SHAPE_CATALOG.len();
        let name = SHAPE_CATALOG[self.object_index];
        if let Err(e) = self.scene.select(name) {
            log::warn!("Failed to select '{}': {}", name, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wire4d_input::HeldKeys;
    use wire4d_render::RecordingCanvas;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec4, b: Vec4) -> bool {
        (0..4).all(|i| approx_eq(a[i], b[i]))
    }

    fn cube_state(config: &AppConfig) -> SimulationState {
        let mut scene = Scene::new("test");
        scene.select("Cube").unwrap();
        SimulationState::new(config, scene)
    }

    fn gizmo_point_count(state: &SimulationState) -> usize {
        let mut canvas = RecordingCanvas::new();
        state.camera().render(&Scene::new("empty"), state.view(), &mut canvas);
        canvas.points().count()
    }

    #[test]
    fn test_starts_from_config() {
        let state = cube_state(&AppConfig::default());
        assert_eq!(state.camera().kind(), CameraKind::Perspective);
        assert_eq!(state.camera().position(), Vec4::new([5.0, 5.0, 5.0, 0.0]));
        assert_eq!(state.view().zoom, 500.0);
        assert_eq!(state.view().flags, DrawFlags::all());
    }

    #[test]
    fn test_flags_from_config() {
        let mut config = AppConfig::default();
        config.rendering.draw_points = false;
        config.rendering.crop = false;
        let state = cube_state(&config);
        assert_eq!(state.view().flags, DrawFlags::LINES | DrawFlags::POLYGONS);
    }

    #[test]
    fn test_cycle_order() {
        let mut state = cube_state(&AppConfig::default());
        state.cycle_camera();
        assert_eq!(state.camera().kind(), CameraKind::Orthographic);
        state.cycle_camera();
        assert_eq!(state.camera().kind(), CameraKind::Perspective4d);
        state.cycle_camera();
        assert_eq!(state.camera().kind(), CameraKind::Perspective);
    }

    #[test]
    fn test_cycle_keeps_pose() {
        let config = AppConfig::default();
        let mut state = cube_state(&config);
        state.cycle_camera();
        assert_eq!(state.camera().position(), Vec4::new([5.0, 5.0, 5.0, 0.0]));

        state.cycle_camera();
        let r = config.camera.start_rotation;
        assert_eq!(state.camera().position(), Vec4::new([5.0, 5.0, 5.0, -5.0]));
        assert!(vec_approx_eq(state.camera().rotation(), Vec4::new([r[0], 0.0, r[1], 0.0])));

        state.cycle_camera();
        assert_eq!(state.camera().position(), Vec4::new([5.0, 5.0, 5.0, 0.0]));
        assert!(vec_approx_eq(state.camera().rotation(), Vec4::new([r[0], r[1], 0.0, 0.0])));
    }

    #[test]
    fn test_update_moves_camera_and_zoom() {
        let mut state = cube_state(&AppConfig::default());
        let mut input = InputSnapshot::with_keys(HeldKeys::UP);
        input.zoom = 200.0;
        state.update(&input);
        assert!(approx_eq(state.camera().position().y(), 5.1));
        assert_eq!(state.view().zoom, 200.0);
    }

    #[test]
    fn test_toggle_actions() {
        let mut state = cube_state(&AppConfig::default());
        assert!(state.apply(InputAction::TogglePoints));
        assert!(!state.view().flags.contains(DrawFlags::POINTS));
        assert!(state.apply(InputAction::ToggleCrop));
        assert!(!state.view().flags.contains(DrawFlags::CROP));
        assert!(state.apply(InputAction::TogglePoints));
        assert!(state.view().flags.contains(DrawFlags::POINTS));
    }

    #[test]
    fn test_window_actions_not_handled() {
        let mut state = cube_state(&AppConfig::default());
        assert!(!state.apply(InputAction::Exit));
        assert!(!state.apply(InputAction::ToggleRotate));
        assert_eq!(state.view().flags, DrawFlags::all());
    }

    #[test]
    fn test_reset_keeps_camera_kind() {
        let mut state = cube_state(&AppConfig::default());
        state.apply(InputAction::CycleCamera);
        state.update(&InputSnapshot::with_keys(HeldKeys::UP | HeldKeys::FORWARD));
        state.apply(InputAction::ResetCamera);
        assert_eq!(state.camera().kind(), CameraKind::Orthographic);
        assert_eq!(state.camera().position(), Vec4::new([5.0, 5.0, 5.0, 0.0]));
    }

    #[test]
    fn test_next_object_walks_catalog() {
        let mut config = AppConfig::default();
        config.scene.object = "Sphere".to_string();
        let mut state = cube_state(&config);

        state.apply(InputAction::NextObject);
        assert_eq!(state.scene().len(), 1);
        assert!(state.scene().iter().all(|o| matches!(o, wire4d_core::SceneObject::Hyper(_))));

        // Wraps around to the first entry
        state.apply(InputAction::NextObject);
        assert!(state.scene().iter().all(|o| matches!(o, wire4d_core::SceneObject::Spatial(_))));
    }

    #[test]
    fn test_render_cube() {
        let state = cube_state(&AppConfig::default());
        let mut canvas = RecordingCanvas::new();
        state.render(&mut canvas);
        assert_eq!(canvas.points().count(), gizmo_point_count(&state) + 8);
        assert_eq!(canvas.polygons().count(), 6);
    }

    #[test]
    fn test_render_in_4d() {
        let mut config = AppConfig::default();
        config.camera.kind = CameraKind::Perspective4d;
        let state = cube_state(&config);
        let mut canvas = RecordingCanvas::new();
        state.render(&mut canvas);
        // The cube sits at u = 0, in front of the camera at u = -5
        assert_eq!(canvas.points().count(), gizmo_point_count(&state) + 8);
    }
}
