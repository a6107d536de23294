//! Module providing the `Scene` trait and all scene implementations.
//!
//! Every demo is a scene. The [`SceneManager`] owns the active one and the [`Demo`] selector
//! creates them by name or hot key.

use std::{fmt, str::FromStr, sync::Arc};

use sdl2::{keyboard::Keycode, video::Window};

use crate::{
    input::{KeyboardState, UpdateContext},
    settings::Settings,
};

pub mod camera;
pub mod texture;
pub mod triangle;

/// Background colour shared by all demos.
pub const CLEAR_COLOR: [f32; 4] = [0.2, 0.3, 0.3, 1.0];

pub enum SceneSwitch {
    None,
    Replace(Box<dyn Scene>),
    Quit,
}

/// The Scene trait defines the common interface for all demo scenes.
pub trait Scene {
    /// The demo this scene belongs to.
    fn demo(&self) -> Demo;

    /// Handles an event.
    fn handle_event(&mut self, _event: &sdl2::event::Event) {}

    /// Updates the scene state. By default the mouse is released and [`switch_on_keys`] decides
    /// what comes next.
    fn update(
        &mut self,
        gl: &Arc<glow::Context>,
        ctx: &UpdateContext,
        sdl: &sdl2::Sdl,
    ) -> SceneSwitch {
        sdl.mouse().set_relative_mouse_mode(false);
        switch_on_keys(self.demo(), gl, ctx)
    }

    /// Renders the scene.
    fn render(&mut self, gl: &Arc<glow::Context>);
}

/// Quits if Escape went down this frame, or opens the demo whose hot key did.
///
/// A demo that fails to open is logged and the current one keeps running.
pub fn switch_on_keys(current: Demo, gl: &Arc<glow::Context>, ctx: &UpdateContext) -> SceneSwitch {
    if ctx.keyboard.pressed.contains(&Keycode::Escape) {
        return SceneSwitch::Quit;
    }
    let Some(next) = Demo::requested(ctx.keyboard, current) else {
        return SceneSwitch::None;
    };

    log::info!("Opening the {next} demo");
    match next.create(gl, ctx.settings, ctx.window_size) {
        Ok(scene) => SceneSwitch::Replace(scene),
        Err(e) => {
            log::error!("Cannot open the {next} demo: {e}");
            SceneSwitch::None
        }
    }
}

/// Manages the active scene.
pub struct SceneManager {
    scene: Box<dyn Scene>,
    title: String,
}

impl SceneManager {
    /// Creates a new SceneManager with the initial scene. The window title becomes
    /// `"<title> - <demo>"` and follows every replacement.
    pub fn new(initial_scene: Box<dyn Scene>, window: &mut Window, title: &str) -> Self {
        let manager = Self {
            scene: initial_scene,
            title: title.to_string(),
        };
        manager.update_title(window);
        manager
    }

    fn update_title(&self, window: &mut Window) {
        let title = format!("{} - {}", self.title, self.scene.demo());
        if let Err(e) = window.set_title(&title) {
            log::warn!("Cannot set the window title: {e}");
        }
    }

    /// Handles an event by passing it to the current scene.
    pub fn handle_event(&mut self, event: &sdl2::event::Event) {
        self.scene.handle_event(event);
    }

    /// Updates the current scene and applies the switch it asks for. Returns `false` when the
    /// application should quit.
    pub fn update(
        &mut self,
        gl: &Arc<glow::Context>,
        ctx: &UpdateContext,
        window: &mut Window,
        sdl: &sdl2::Sdl,
    ) -> bool {
        match self.scene.update(gl, ctx, sdl) {
            SceneSwitch::None => {}
            SceneSwitch::Replace(new_scene) => {
                // The old scene's GL objects are freed here.
                self.scene = new_scene;
                self.update_title(window);
            }
            SceneSwitch::Quit => return false,
        }
        true
    }

    /// Renders the current scene.
    pub fn render(&mut self, gl: &Arc<glow::Context>) {
        self.scene.render(gl);
    }
}

/// The available demos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Demo {
    Triangle,
    Texture,
    #[default]
    Camera,
}

impl Demo {
    pub const ALL: [Demo; 3] = [Demo::Triangle, Demo::Texture, Demo::Camera];

    pub fn name(self) -> &'static str {
        match self {
            Demo::Triangle => "triangle",
            Demo::Texture => "texture",
            Demo::Camera => "camera",
        }
    }

    /// The key that switches to this demo at runtime.
    pub fn hotkey(self) -> Keycode {
        match self {
            Demo::Triangle => Keycode::Num1,
            Demo::Texture => Keycode::Num2,
            Demo::Camera => Keycode::Num3,
        }
    }

    /// The first other demo, in [`Demo::ALL`] order, whose hot key went down this frame.
    pub fn requested(keyboard: &KeyboardState, current: Demo) -> Option<Demo> {
        Demo::ALL
            .into_iter()
            .find(|demo| *demo != current && keyboard.pressed.contains(&demo.hotkey()))
    }

    /// Creates the demo's scene for a window of the given size.
    pub fn create(
        self,
        gl: &Arc<glow::Context>,
        settings: &Settings,
        size: (u32, u32),
    ) -> Result<Box<dyn Scene>, String> {
        Ok(match self {
            Demo::Triangle => Box::new(triangle::TriangleScene::new(gl)?),
            Demo::Texture => Box::new(texture::TextureScene::new(gl, settings)?),
            Demo::Camera => Box::new(camera::CameraScene::new(gl, settings, size)?),
        })
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Demo {
    type Err = String;

    /// Accepts the demo name or its chapter number (`2`, `3`, `6`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "triangle" | "2" => Ok(Demo::Triangle),
            "texture" | "3" => Ok(Demo::Texture),
            "camera" | "6" => Ok(Demo::Camera),
            _ => Err(format!(
                "Unknown demo '{s}', expected one of: triangle, texture, camera"
            )),
        }
    }
}
