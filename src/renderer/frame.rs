//! Frame composition: entities, buttons and HUD text

use glam::Vec2;

use super::{SpriteId, Surface, TextAlign, TextStyle, WHITE};
use crate::controls::{ControlLayout, Zone};
use crate::sim::{GamePhase, GameState, PlayerFrame};

/// Draw one frame of `state`. `pressed` is a [`Zone::bit`] mask.
pub fn render(state: &GameState, layout: &ControlLayout, pressed: u8, surface: &mut dyn Surface) {
    surface.clear(WHITE);

    let pose = state.player.pose();
    let sprite = match pose.frame {
        PlayerFrame::Walk(i) => SpriteId::PlayerWalk(i),
        PlayerFrame::Jump => SpriteId::PlayerJump,
    };
    surface.draw_sprite(sprite, state.player.bounds(), pose.mirrored);

    for obstacle in &state.obstacles {
        surface.draw_sprite(
            SpriteId::Meteorite(obstacle.variant()),
            obstacle.bounds(),
            false,
        );
    }

    // Buttons only while playing
    if state.phase == GamePhase::Running {
        for zone in Zone::ALL {
            let sprite = SpriteId::Button {
                zone,
                pressed: pressed & zone.bit() != 0,
            };
            surface.draw_sprite(sprite, layout.rect(zone), false);
        }
    }

    draw_hud(state, surface);
    surface.present();
}

fn draw_hud(state: &GameState, surface: &mut dyn Surface) {
    let w = state.viewport.width();
    let h = state.viewport.height();
    let center_x = w / 2.0;
    let center_y = h / 2.0;

    match state.phase {
        GamePhase::Running => {
            surface.draw_text(
                &format!("{}s", state.elapsed_secs),
                Vec2::new(center_x - 50.0, 70.0),
                TextStyle::new(70.0, TextAlign::Left),
            );
            surface.draw_text(
                &format!("Score: {}", state.score),
                Vec2::new(w - 20.0, 70.0),
                TextStyle::new(50.0, TextAlign::Right),
            );
        }

        GamePhase::Paused => {
            surface.draw_text(
                "Game Over",
                Vec2::new(center_x, center_y),
                TextStyle::new(100.0, TextAlign::Center),
            );
        }

        GamePhase::ScoreDisplay => {
            let grade = state.grade();
            let lines = [
                (format!("Final score: {}", state.score), -180.0, 80.0),
                (format!("Grade: {}", grade.as_str()), -80.0, 100.0),
                (grade.flavor_text().to_string(), 20.0, 50.0),
                (format!("Survived: {}s", state.elapsed_secs), 110.0, 60.0),
                ("Tap to restart".to_string(), 180.0, 40.0),
            ];
            for (text, dy, size) in lines {
                surface.draw_text(
                    &text,
                    Vec2::new(center_x, center_y + dy),
                    TextStyle::new(size, TextAlign::Center),
                );
            }
        }
    }
}
