//! Title card: a drifting logo and a blinking prompt. The accept key starts
//! the game.

use log::info;
use raylib::prelude::*;

use crate::components::object::Object;
use crate::platform::desktop::Desktop;
use crate::resources::glyphfont::GlyphFont;
use crate::resources::keymap::key_name;
use crate::screens::game::GameScreen;
use crate::screens::{Screen, Transition};
use crate::systems::render;

const LOGO_SPEED: f32 = 2.0;
const LOGO_MARGIN: f32 = 64.0;
/// Steps per half blink period of the prompt.
const BLINK_STEPS: u64 = 30;
const BACKGROUND: Color = Color {
    r: 20,
    g: 20,
    b: 40,
    a: 255,
};

#[derive(Default)]
pub struct TitleScreen {
    logo: Option<Object>,
    direction: f32,
    steps: u64,
}

impl TitleScreen {
    pub fn new() -> Self {
        Self {
            direction: 1.0,
            ..Default::default()
        }
    }
}

impl Screen<Desktop> for TitleScreen {
    fn name(&self) -> &str {
        "title"
    }

    fn enter(&mut self, ctx: &mut Desktop) {
        let (w, h) = ctx.render_size();
        self.logo = Some(Object::new(ctx.assets.sprite("another")).at(w * 0.5, h * 0.4));
        self.steps = 0;
        info!("Title screen ready");
    }

    fn exit(&mut self, _ctx: &mut Desktop) {
        self.logo = None;
    }

    fn step(&mut self, ctx: &mut Desktop) -> Transition<Desktop> {
        self.steps += 1;

        let (w, _) = ctx.render_size();
        if let Some(logo) = self.logo.as_mut() {
            logo.motion.begin_step();
            logo.motion.move_by(LOGO_SPEED * self.direction, 0.0);
            let x = logo.motion.position().x;
            if x > w - LOGO_MARGIN || x < LOGO_MARGIN {
                self.direction = -self.direction;
            }
        }

        if ctx.input.accept.just_pressed {
            ctx.play_sound("pick");
            return Transition::Switch(Box::new(GameScreen::new()));
        }
        Transition::Stay
    }

    fn render(&mut self, ctx: &mut Desktop, fraction: f32) {
        let (w, h) = ctx.render_size();
        let title = "aberredshell";
        let prompt = format!(
            "press {} to start",
            key_name(ctx.config.keys.accept).unwrap_or("accept")
        );
        let show_prompt = (self.steps / BLINK_STEPS) % 2 == 0;
        let logo = self.logo.as_ref();

        ctx.draw_frame(BACKGROUND, |d, assets| {
            if let Some(logo) = logo {
                render::draw_object(d, &assets.textures, logo, fraction);
            }
            let font = assets.font("basic");
            let (tw, _) = GlyphFont::measure(title);
            render::draw_text(
                d,
                &assets.textures,
                font,
                title,
                (w - tw) * 0.5,
                h * 0.6,
                Color::WHITE,
            );
            if show_prompt {
                let (pw, _) = GlyphFont::measure(&prompt);
                render::draw_text(
                    d,
                    &assets.textures,
                    font,
                    &prompt,
                    (w - pw) * 0.5,
                    h * 0.75,
                    Color::YELLOW,
                );
            }
        });
    }
}
