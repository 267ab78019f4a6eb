//! Gameplay screen: a player object steered by the direction keys.

use log::{debug, info};
use raylib::prelude::*;

use crate::components::object::Object;
use crate::platform::desktop::Desktop;
use crate::resources::scene::{ObjectId, Scene};
use crate::screens::{Screen, Transition};
use crate::systems::render;

/// Distance the player moves per step per held direction key.
pub const PLAYER_SPEED: f32 = 10.0;
/// Peak rotation of the player wobble, in degrees.
const WOBBLE_DEGREES: f32 = 15.0;
const BACKGROUND: Color = Color {
    r: 50,
    g: 50,
    b: 50,
    a: 255,
};
const CAPTION: &str = "testing!\nthis is a test...";
const CAPTION_POS: (f32, f32) = (100.0, 100.0);
const SHADOW_OFFSET: f32 = 2.0;

#[derive(Default)]
pub struct GameScreen {
    scene: Scene,
    player: Option<ObjectId>,
    steps: u64,
}

impl GameScreen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Screen<Desktop> for GameScreen {
    fn name(&self) -> &str {
        "game"
    }

    fn enter(&mut self, ctx: &mut Desktop) {
        let (w, h) = ctx.render_size();
        let sprite = ctx.assets.sprite("smile");
        self.player = Some(self.scene.spawn(Object::new(sprite).at(w * 0.5, h * 0.5)));
        self.steps = 0;
        info!("Game screen ready ({} object(s))", self.scene.len());
    }

    fn exit(&mut self, _ctx: &mut Desktop) {
        self.player = None;
        let released = self.scene.clear();
        let stats = self.scene.stats();
        debug!(
            "Game screen released {} object(s) ({} spawned, {} despawned)",
            released, stats.spawned, stats.despawned
        );
    }

    fn step(&mut self, ctx: &mut Desktop) -> Transition<Desktop> {
        self.steps += 1;
        self.scene.begin_step();

        let (dx, dy) = ctx.input.direction();
        let t = (self.steps * ctx.config.step_ms()) as f32 * 0.01;
        if let Some(player) = self.player.and_then(|id| self.scene.get_mut(id)) {
            player.motion.move_by(dx * PLAYER_SPEED, dy * PLAYER_SPEED);
            player.sprite.angle = t.sin() * WOBBLE_DEGREES;
        }

        if ctx.input.accept.just_pressed {
            ctx.play_sound("pick");
        }
        Transition::Stay
    }

    fn render(&mut self, ctx: &mut Desktop, fraction: f32) {
        let scene = &self.scene;
        let player = self.player.and_then(|id| scene.get(id));

        ctx.draw_frame(BACKGROUND, |d, assets| {
            let font = assets.font("basic");
            for object in scene.iter() {
                render::draw_object(d, &assets.textures, object, fraction);
            }
            if let Some(player) = player {
                let pos = player.motion.interpolated(fraction);
                let (w, h) = player.sprite.scaled_size();
                render::draw_text(
                    d,
                    &assets.textures,
                    font,
                    "hi!",
                    pos.x - w * 0.5,
                    pos.y - h * 0.5 - 20.0,
                    Color::WHITE,
                );
            }
            let (x, y) = CAPTION_POS;
            render::draw_text(
                d,
                &assets.textures,
                font,
                CAPTION,
                x + SHADOW_OFFSET,
                y + SHADOW_OFFSET,
                Color::BLACK,
            );
            render::draw_text(d, &assets.textures, font, CAPTION, x, y, Color::WHITE);
        });
    }
}
